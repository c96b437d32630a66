use serde::{Deserialize, Serialize};

use crate::models::color::Color;
use crate::models::groups::{ColorGroup, CoreColors, NodeColors, PlotColors};

/// Wildcard target selector: apply to every widget kind.
pub const APPLY_TO_ALL: i32 = 0;

fn default_target() -> i32 {
    APPLY_TO_ALL
}

/// One themed scope: at most one instance of each color-group variant,
/// plus the widget-kind selector the styling applies to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeComponent {
    #[serde(default)]
    pub core_colors: Option<CoreColors>,
    #[serde(default)]
    pub plot_colors: Option<PlotColors>,
    #[serde(default)]
    pub node_colors: Option<NodeColors>,
    #[serde(default = "default_target")]
    pub component: i32,
}

impl ThemeComponent {
    /// Present color groups in fixed emission order (core, plot, node).
    pub fn groups(&self) -> Vec<&dyn ColorGroup> {
        let mut groups: Vec<&dyn ColorGroup> = Vec::new();
        if let Some(group) = &self.core_colors {
            groups.push(group);
        }
        if let Some(group) = &self.plot_colors {
            groups.push(group);
        }
        if let Some(group) = &self.node_colors {
            groups.push(group);
        }
        groups
    }
}

/// A full theme: ordered components plus ordered colormaps. Owns its
/// contents by value, no sharing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub components: Vec<ThemeComponent>,
    #[serde(default)]
    pub colormaps: Vec<Vec<Color>>,
}

impl Theme {
    /// A canvas theme: one component with every slot of all three
    /// variants set to fully-transparent black, ready to be populated
    /// from a palette.
    pub fn blank() -> Theme {
        let mut core_colors = CoreColors::default();
        core_colors.fill(Color::TRANSPARENT);
        let mut plot_colors = PlotColors::default();
        plot_colors.fill(Color::TRANSPARENT);
        let mut node_colors = NodeColors::default();
        node_colors.fill(Color::TRANSPARENT);
        Theme {
            components: vec![ThemeComponent {
                core_colors: Some(core_colors),
                plot_colors: Some(plot_colors),
                node_colors: Some(node_colors),
                component: APPLY_TO_ALL,
            }],
            colormaps: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_theme_sets_every_slot_transparent() {
        let theme = Theme::blank();
        assert_eq!(theme.components.len(), 1);
        assert!(theme.colormaps.is_empty());
        let component = &theme.components[0];
        assert_eq!(component.component, APPLY_TO_ALL);
        let groups = component.groups();
        assert_eq!(groups.len(), 3);
        for group in groups {
            for (name, color) in group.slots() {
                assert_eq!(color, Some(&Color::TRANSPARENT), "slot {name}");
            }
        }
    }

    #[test]
    fn absent_groups_are_skipped() {
        let component = ThemeComponent::default();
        assert!(component.groups().is_empty());
    }
}
