use serde::{Deserialize, Serialize};

use crate::models::color::Color;

/// The host toolkit's configuration category, carried alongside every
/// emitted directive so the controller routes it to the right style
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolkitCategory {
    Core,
    Plots,
    Nodes,
}

impl ToolkitCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolkitCategory::Core => "core",
            ToolkitCategory::Plots => "plots",
            ToolkitCategory::Nodes => "nodes",
        }
    }
}

/// Common surface of the three color-group variants. Slot sets are fixed
/// at definition time; iteration follows declaration order.
pub trait ColorGroup {
    fn toolkit_prefix(&self) -> &'static str;
    fn category(&self) -> ToolkitCategory;
    fn slot_names(&self) -> &'static [&'static str];
    /// `(slot name, optional color)` pairs in declaration order.
    fn slots(&self) -> Vec<(&'static str, Option<&Color>)>;
    /// The color currently set for `name`, if the slot exists and is set.
    fn get_slot(&self, name: &str) -> Option<&Color>;
    /// Sets or clears a slot by name. Returns false for an unknown slot.
    fn set_slot(&mut self, name: &str, color: Option<Color>) -> bool;
    /// Sets every slot to `color`.
    fn fill(&mut self, color: Color);
    /// Number of slots currently holding a color.
    fn set_count(&self) -> usize {
        self.slots().iter().filter(|(_, c)| c.is_some()).count()
    }
}

/// Declares a color-group struct from a single slot table, deriving the
/// serde model, the enumerable slot list, and name-based access from it.
macro_rules! color_group {
    (
        $(#[$meta:meta])*
        $name:ident {
            prefix: $prefix:literal,
            category: $category:ident,
            slots: [ $($slot:ident),+ $(,)? ]
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
        pub struct $name {
            $( #[serde(default)] pub $slot: Option<Color>, )+
        }

        impl $name {
            pub const TOOLKIT_PREFIX: &'static str = $prefix;
            pub const CATEGORY: ToolkitCategory = ToolkitCategory::$category;
            pub const SLOTS: &'static [&'static str] = &[ $( stringify!($slot) ),+ ];
        }

        impl ColorGroup for $name {
            fn toolkit_prefix(&self) -> &'static str {
                Self::TOOLKIT_PREFIX
            }

            fn category(&self) -> ToolkitCategory {
                Self::CATEGORY
            }

            fn slot_names(&self) -> &'static [&'static str] {
                Self::SLOTS
            }

            fn slots(&self) -> Vec<(&'static str, Option<&Color>)> {
                vec![ $( (stringify!($slot), self.$slot.as_ref()) ),+ ]
            }

            fn get_slot(&self, name: &str) -> Option<&Color> {
                match name {
                    $( stringify!($slot) => self.$slot.as_ref(), )+
                    _ => None,
                }
            }

            fn set_slot(&mut self, name: &str, color: Option<Color>) -> bool {
                match name {
                    $( stringify!($slot) => {
                        self.$slot = color;
                        true
                    } )+
                    _ => false,
                }
            }

            fn fill(&mut self, color: Color) {
                $( self.$slot = Some(color); )+
            }
        }
    };
}

color_group! {
    /// Colors for the toolkit's core widget styling.
    CoreColors {
        prefix: "mvThemeCol_",
        category: Core,
        slots: [
            border,
            border_shadow,
            button,
            button_active,
            button_hovered,
            check_mark,
            child_bg,
            docking_empty_bg,
            docking_preview,
            drag_drop_target,
            frame_bg,
            frame_bg_active,
            frame_bg_hovered,
            header,
            header_active,
            header_hovered,
            menu_bar_bg,
            modal_window_dim_bg,
            nav_highlight,
            nav_windowing_dim_bg,
            nav_windowing_highlight,
            plot_histogram,
            plot_histogram_hovered,
            plot_lines,
            plot_lines_hovered,
            popup_bg,
            resize_grip,
            resize_grip_active,
            resize_grip_hovered,
            scrollbar_bg,
            scrollbar_grab,
            scrollbar_grab_active,
            scrollbar_grab_hovered,
            separator,
            separator_active,
            separator_hovered,
            slider_grab,
            slider_grab_active,
            tab,
            tab_active,
            tab_hovered,
            tab_unfocused,
            tab_unfocused_active,
            table_border_light,
            table_border_strong,
            table_header_bg,
            table_row_bg,
            table_row_bg_alt,
            text,
            text_disabled,
            text_selected_bg,
            title_bg,
            title_bg_active,
            title_bg_collapsed,
            window_bg,
        ]
    }
}

color_group! {
    /// Colors for the plotting subsystem.
    PlotColors {
        prefix: "mvPlotCol_",
        category: Plots,
        slots: [
            axis_bg,
            axis_bg_active,
            axis_bg_hovered,
            axis_grid,
            axis_text,
            crosshairs,
            error_bar,
            fill,
            frame_bg,
            inlay_text,
            legend_bg,
            legend_border,
            legend_text,
            line,
            marker_fill,
            marker_outline,
            plot_bg,
            plot_border,
            selection,
            title_text,
        ]
    }
}

color_group! {
    /// Colors for the node-editor subsystem.
    NodeColors {
        prefix: "mvNodeCol_",
        category: Nodes,
        slots: [
            box_selector,
            box_selector_outline,
            grid_background,
            grid_line,
            link,
            link_hovered,
            link_selected,
            node_background,
            node_background_hovered,
            node_background_selected,
            node_outline,
            pin,
            pin_hovered,
            title_bar,
            title_bar_hovered,
            title_bar_selected,
        ]
    }
}
