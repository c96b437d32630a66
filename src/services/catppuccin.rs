//! Builtin Catppuccin palettes and procedural theme generation. The
//! slot mapping mirrors the shipped catppuccin theme files: core and
//! plot slots draw from across the palette, node styling is kept flat
//! on Crust, and one ten-color qualitative colormap is appended.

use std::fmt;
use std::str::FromStr;

use crate::core::errors::{Error, Result};
use crate::models::color::Color;
use crate::models::groups::{ColorGroup, NodeColors};
use crate::models::palette::Palette;
use crate::models::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavour {
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl Flavour {
    pub const ALL: [Flavour; 4] = [
        Flavour::Latte,
        Flavour::Frappe,
        Flavour::Macchiato,
        Flavour::Mocha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Flavour::Latte => "latte",
            Flavour::Frappe => "frappe",
            Flavour::Macchiato => "macchiato",
            Flavour::Mocha => "mocha",
        }
    }
}

impl fmt::Display for Flavour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Flavour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Flavour> {
        match s {
            "latte" => Ok(Flavour::Latte),
            "frappe" => Ok(Flavour::Frappe),
            "macchiato" => Ok(Flavour::Macchiato),
            "mocha" => Ok(Flavour::Mocha),
            other => Err(Error::UnknownFlavour(other.to_string())),
        }
    }
}

// The 26 standard entries per flavour, upstream hex values.
const LATTE: &[(&str, u32)] = &[
    ("Rosewater", 0xdc8a78),
    ("Flamingo", 0xdd7878),
    ("Pink", 0xea76cb),
    ("Mauve", 0x8839ef),
    ("Red", 0xd20f39),
    ("Maroon", 0xe64553),
    ("Peach", 0xfe640b),
    ("Yellow", 0xdf8e1d),
    ("Green", 0x40a02b),
    ("Teal", 0x179299),
    ("Sky", 0x04a5e5),
    ("Sapphire", 0x209fb5),
    ("Blue", 0x1e66f5),
    ("Lavender", 0x7287fd),
    ("Text", 0x4c4f69),
    ("Subtext_1", 0x5c5f77),
    ("Subtext_0", 0x6c6f85),
    ("Overlay_2", 0x7c7f93),
    ("Overlay_1", 0x8c8fa1),
    ("Overlay_0", 0x9ca0b0),
    ("Surface_2", 0xacb0be),
    ("Surface_1", 0xbcc0cc),
    ("Surface_0", 0xccd0da),
    ("Base", 0xeff1f5),
    ("Mantle", 0xe6e9ef),
    ("Crust", 0xdce0e8),
];

const FRAPPE: &[(&str, u32)] = &[
    ("Rosewater", 0xf2d5cf),
    ("Flamingo", 0xeebebe),
    ("Pink", 0xf4b8e4),
    ("Mauve", 0xca9ee6),
    ("Red", 0xe78284),
    ("Maroon", 0xea999c),
    ("Peach", 0xef9f76),
    ("Yellow", 0xe5c890),
    ("Green", 0xa6d189),
    ("Teal", 0x81c8be),
    ("Sky", 0x99d1db),
    ("Sapphire", 0x85c1dc),
    ("Blue", 0x8caaee),
    ("Lavender", 0xbabbf1),
    ("Text", 0xc6d0f5),
    ("Subtext_1", 0xb5bfe2),
    ("Subtext_0", 0xa5adce),
    ("Overlay_2", 0x949cbb),
    ("Overlay_1", 0x838ba7),
    ("Overlay_0", 0x737994),
    ("Surface_2", 0x626880),
    ("Surface_1", 0x51576d),
    ("Surface_0", 0x414559),
    ("Base", 0x303446),
    ("Mantle", 0x292c3c),
    ("Crust", 0x232634),
];

const MACCHIATO: &[(&str, u32)] = &[
    ("Rosewater", 0xf4dbd6),
    ("Flamingo", 0xf0c6c6),
    ("Pink", 0xf5bde6),
    ("Mauve", 0xc6a0f6),
    ("Red", 0xed8796),
    ("Maroon", 0xee99a0),
    ("Peach", 0xf5a97f),
    ("Yellow", 0xeed49f),
    ("Green", 0xa6da95),
    ("Teal", 0x8bd5ca),
    ("Sky", 0x91d7e3),
    ("Sapphire", 0x7dc4e4),
    ("Blue", 0x8aadf4),
    ("Lavender", 0xb7bdf8),
    ("Text", 0xcad3f5),
    ("Subtext_1", 0xb8c0e0),
    ("Subtext_0", 0xa5adcb),
    ("Overlay_2", 0x939ab7),
    ("Overlay_1", 0x8087a2),
    ("Overlay_0", 0x6e738d),
    ("Surface_2", 0x5b6078),
    ("Surface_1", 0x494d64),
    ("Surface_0", 0x363a4f),
    ("Base", 0x24273a),
    ("Mantle", 0x1e2030),
    ("Crust", 0x181926),
];

const MOCHA: &[(&str, u32)] = &[
    ("Rosewater", 0xf5e0dc),
    ("Flamingo", 0xf2cdcd),
    ("Pink", 0xf5c2e7),
    ("Mauve", 0xcba6f7),
    ("Red", 0xf38ba8),
    ("Maroon", 0xeba0ac),
    ("Peach", 0xfab387),
    ("Yellow", 0xf9e2af),
    ("Green", 0xa6e3a1),
    ("Teal", 0x94e2d5),
    ("Sky", 0x89dceb),
    ("Sapphire", 0x74c7ec),
    ("Blue", 0x89b4fa),
    ("Lavender", 0xb4befe),
    ("Text", 0xcdd6f4),
    ("Subtext_1", 0xbac2de),
    ("Subtext_0", 0xa6adc8),
    ("Overlay_2", 0x9399b2),
    ("Overlay_1", 0x7f849c),
    ("Overlay_0", 0x6c7086),
    ("Surface_2", 0x585b70),
    ("Surface_1", 0x45475a),
    ("Surface_0", 0x313244),
    ("Base", 0x1e1e2e),
    ("Mantle", 0x181825),
    ("Crust", 0x11111b),
];

// Slot -> palette name for the core group.
const CORE_MAP: &[(&str, &str)] = &[
    ("border", "Crust"),
    ("border_shadow", "Mantle"),
    ("button", "Surface_0"),
    ("button_active", "Surface_2"),
    ("button_hovered", "Surface_1"),
    ("check_mark", "Subtext_0"),
    ("child_bg", "Overlay_0"),
    ("docking_empty_bg", "Crust"),
    ("docking_preview", "Rosewater"),
    ("drag_drop_target", "Yellow"),
    ("frame_bg", "Surface_0"),
    ("frame_bg_active", "Surface_2"),
    ("frame_bg_hovered", "Surface_1"),
    ("header", "Surface_0"),
    ("header_active", "Surface_2"),
    ("header_hovered", "Surface_1"),
    ("menu_bar_bg", "Overlay_1"),
    ("modal_window_dim_bg", "Surface_0"),
    ("nav_highlight", "Sky"),
    ("nav_windowing_dim_bg", "Surface_2"),
    ("nav_windowing_highlight", "Sky"),
    ("plot_histogram", "Crust"),
    ("plot_histogram_hovered", "Crust"),
    ("plot_lines", "Peach"),
    ("plot_lines_hovered", "Mauve"),
    ("popup_bg", "Overlay_0"),
    ("resize_grip", "Lavender"),
    ("resize_grip_active", "Sapphire"),
    ("resize_grip_hovered", "Sapphire"),
    ("scrollbar_bg", "Overlay_0"),
    ("scrollbar_grab", "Lavender"),
    ("scrollbar_grab_active", "Blue"),
    ("scrollbar_grab_hovered", "Blue"),
    ("separator", "Subtext_0"),
    ("separator_active", "Subtext_1"),
    ("separator_hovered", "Subtext_1"),
    ("slider_grab", "Overlay_0"),
    ("slider_grab_active", "Overlay_1"),
    ("tab", "Surface_0"),
    ("tab_active", "Surface_2"),
    ("tab_hovered", "Overlay_0"),
    ("tab_unfocused", "Surface_0"),
    ("tab_unfocused_active", "Surface_2"),
    ("table_border_light", "Overlay_0"),
    ("table_border_strong", "Text"),
    ("table_header_bg", "Mantle"),
    ("table_row_bg", "Surface_0"),
    ("table_row_bg_alt", "Surface_1"),
    ("text", "Text"),
    ("text_disabled", "Subtext_0"),
    ("text_selected_bg", "Crust"),
    ("title_bg", "Surface_0"),
    ("title_bg_active", "Surface_2"),
    ("title_bg_collapsed", "Surface_1"),
    ("window_bg", "Base"),
];

// Plot slots; `fill` and `line` stay unset so the toolkit auto-colors
// per series.
const PLOT_MAP: &[(&str, Option<&str>)] = &[
    ("axis_bg", Some("Surface_0")),
    ("axis_bg_active", Some("Surface_1")),
    ("axis_bg_hovered", Some("Surface_2")),
    ("axis_grid", Some("Overlay_0")),
    ("axis_text", Some("Subtext_1")),
    ("crosshairs", Some("Rosewater")),
    ("error_bar", Some("Flamingo")),
    ("fill", None),
    ("frame_bg", Some("Surface_0")),
    ("inlay_text", Some("Rosewater")),
    ("legend_bg", Some("Crust")),
    ("legend_border", Some("Crust")),
    ("legend_text", Some("Text")),
    ("line", None),
    ("marker_fill", Some("Crust")),
    ("marker_outline", Some("Crust")),
    ("plot_bg", Some("Crust")),
    ("plot_border", Some("Crust")),
    ("selection", Some("Rosewater")),
    ("title_text", Some("Text")),
];

const COLORMAP: &[&str] = &[
    "Mauve", "Red", "Maroon", "Peach", "Yellow", "Green", "Teal", "Sky", "Sapphire", "Blue",
];

pub fn palette(flavour: Flavour) -> Palette {
    let table = match flavour {
        Flavour::Latte => LATTE,
        Flavour::Frappe => FRAPPE,
        Flavour::Macchiato => MACCHIATO,
        Flavour::Mocha => MOCHA,
    };
    Palette {
        colors: table
            .iter()
            .map(|(_, hex)| Color::from_hex_rgb(*hex))
            .collect(),
        names: table.iter().map(|(name, _)| name.to_string()).collect(),
    }
}

fn pick(palette: &Palette, name: &str) -> Result<Color> {
    palette
        .lookup(name)
        .copied()
        .ok_or_else(|| Error::MalformedPalette(format!("missing color `{name}`")))
}

/// Generates the flavour's full theme from its palette: blank canvas,
/// then the slot mapping, then the qualitative colormap.
pub fn theme(flavour: Flavour) -> Result<Theme> {
    let palette = palette(flavour);
    let mut theme = Theme::blank();
    let component = &mut theme.components[0];

    if let Some(core) = component.core_colors.as_mut() {
        for (slot, name) in CORE_MAP {
            core.set_slot(slot, Some(pick(&palette, name)?));
        }
    }
    if let Some(plot) = component.plot_colors.as_mut() {
        for (slot, entry) in PLOT_MAP {
            let color = match entry {
                Some(name) => Some(pick(&palette, name)?),
                None => None,
            };
            plot.set_slot(slot, color);
        }
    }
    if let Some(node) = component.node_colors.as_mut() {
        let crust = pick(&palette, "Crust")?;
        for slot in NodeColors::SLOTS {
            node.set_slot(slot, Some(crust));
        }
    }

    let colormap = COLORMAP
        .iter()
        .map(|name| pick(&palette, name))
        .collect::<Result<Vec<Color>>>()?;
    theme.colormaps.push(colormap);
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::{CoreColors, PlotColors};

    #[test]
    fn every_flavour_palette_is_complete() {
        for flavour in Flavour::ALL {
            let palette = palette(flavour);
            palette.validate().unwrap();
            assert_eq!(palette.len(), 26, "{flavour}");
            assert!(palette.lookup("Crust").is_some());
        }
    }

    #[test]
    fn flavour_names_round_trip() {
        for flavour in Flavour::ALL {
            assert_eq!(flavour.name().parse::<Flavour>().unwrap(), flavour);
        }
        assert!(matches!(
            "espresso".parse::<Flavour>(),
            Err(Error::UnknownFlavour(_))
        ));
    }

    #[test]
    fn generated_theme_covers_expected_slots() {
        let theme = theme(Flavour::Mocha).unwrap();
        assert_eq!(theme.components.len(), 1);
        assert_eq!(theme.colormaps.len(), 1);
        assert_eq!(theme.colormaps[0].len(), 10);

        let component = &theme.components[0];
        let core = component.core_colors.as_ref().unwrap();
        assert_eq!(core.set_count(), CoreColors::SLOTS.len());
        let plot = component.plot_colors.as_ref().unwrap();
        assert_eq!(plot.set_count(), PlotColors::SLOTS.len() - 2);
        assert_eq!(plot.fill, None);
        assert_eq!(plot.line, None);
        let node = component.node_colors.as_ref().unwrap();
        assert_eq!(node.set_count(), NodeColors::SLOTS.len());

        // window_bg carries the flavour's Base color.
        let base = Color::from_hex_rgb(0x1e1e2e);
        assert_eq!(core.window_bg, Some(base));
    }
}
