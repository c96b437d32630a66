//! Conversion layer between the theme data model and toolkit-native
//! color configuration. The core never touches a concrete GUI library:
//! everything is expressed as directives against a [`ToolkitRegistry`]
//! and replayed through the [`ToolkitSink`] trait.
//!
//! Emission policy: a slot whose resolved constant the registry does not
//! recognize is skipped with a `warn!` diagnostic and emission continues;
//! already-emitted directives are unaffected. Callers that want a hard
//! failure use [`resolve_slot`].

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::core::errors::{Error, Result};
use crate::models::color::Color;
use crate::models::groups::{ColorGroup, CoreColors, NodeColors, PlotColors, ToolkitCategory};
use crate::models::theme::Theme;
use crate::services::naming::toolkit_name;

/// The host toolkit's numeric constant for a themeable color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToolkitId(pub u32);

/// One toolkit-native color assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorDirective {
    pub id: ToolkitId,
    pub value: [u8; 4],
    pub category: ToolkitCategory,
}

/// Directives for one theme component, tagged with its target selector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComponentConfig {
    pub target: i32,
    pub directives: Vec<ColorDirective>,
}

/// The toolkit-native rendition of a whole theme. Replaying it in order
/// reproduces the theme's styling exactly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeConfig {
    pub components: Vec<ComponentConfig>,
    pub colormaps: Vec<Vec<[u8; 4]>>,
}

impl ThemeConfig {
    pub fn directive_count(&self) -> usize {
        self.components.iter().map(|c| c.directives.len()).sum()
    }

    /// Replays every directive, then every colormap, in order.
    pub fn apply_to(&self, sink: &mut dyn ToolkitSink) {
        for component in &self.components {
            for directive in &component.directives {
                sink.apply_color(directive.id, directive.value, directive.category);
            }
        }
        for colormap in &self.colormaps {
            sink.register_colormap(colormap);
        }
    }
}

/// Boundary to the host toolkit. The external controller implements this
/// against the real GUI library; tests implement it in memory.
pub trait ToolkitSink {
    fn apply_color(&mut self, id: ToolkitId, value: [u8; 4], category: ToolkitCategory);
    fn register_colormap(&mut self, colors: &[[u8; 4]]);
}

/// Table of toolkit constants the host recognizes, keyed by full
/// constant name (`mvThemeCol_Text`, ...).
#[derive(Debug, Clone, Default)]
pub struct ToolkitRegistry {
    ids: HashMap<String, ToolkitId>,
}

impl ToolkitRegistry {
    pub fn new() -> ToolkitRegistry {
        ToolkitRegistry::default()
    }

    pub fn register(&mut self, constant: impl Into<String>, id: ToolkitId) {
        self.ids.insert(constant.into(), id);
    }

    pub fn resolve(&self, constant: &str) -> Option<ToolkitId> {
        self.ids.get(constant).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Registry covering every slot of the three variants, ids assigned
    /// in declaration order per category the way the host toolkit
    /// numbers its constants.
    pub fn builtin() -> &'static ToolkitRegistry {
        static BUILTIN: OnceLock<ToolkitRegistry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = ToolkitRegistry::new();
            let tables: [(&str, &[&str]); 3] = [
                (CoreColors::TOOLKIT_PREFIX, CoreColors::SLOTS),
                (PlotColors::TOOLKIT_PREFIX, PlotColors::SLOTS),
                (NodeColors::TOOLKIT_PREFIX, NodeColors::SLOTS),
            ];
            for (prefix, slots) in tables {
                for (index, slot) in slots.iter().enumerate() {
                    let constant = format!("{prefix}{}", toolkit_name(slot));
                    registry.register(constant, ToolkitId(index as u32));
                }
            }
            registry
        })
    }
}

/// Full constant name for a slot: variant prefix plus the toolkit-cased
/// slot name.
pub fn constant_name(group: &dyn ColorGroup, slot: &str) -> String {
    format!("{}{}", group.toolkit_prefix(), toolkit_name(slot))
}

/// Strict resolution, for callers that prefer a hard failure over the
/// skip-and-warn emission policy.
pub fn resolve_slot(
    registry: &ToolkitRegistry,
    group: &dyn ColorGroup,
    slot: &str,
) -> Result<ToolkitId> {
    let constant = constant_name(group, slot);
    registry
        .resolve(&constant)
        .ok_or(Error::UnknownToolkitIdentifier(constant))
}

/// Directives for every set slot of one group, in declaration order.
pub fn emit_group(group: &dyn ColorGroup, registry: &ToolkitRegistry) -> Vec<ColorDirective> {
    let mut directives = Vec::new();
    for (slot, color) in group.slots() {
        let Some(color) = color else { continue };
        let constant = constant_name(group, slot);
        match registry.resolve(&constant) {
            Some(id) => directives.push(ColorDirective {
                id,
                value: color.to_toolkit(),
                category: group.category(),
            }),
            None => warn!(%constant, slot, "toolkit does not recognize identifier, skipping slot"),
        }
    }
    directives
}

impl Theme {
    /// Assembles the toolkit-native configuration: per-component
    /// directives for every present color group, plus resolved
    /// colormaps, in document order.
    pub fn emit(&self, registry: &ToolkitRegistry) -> ThemeConfig {
        let mut config = ThemeConfig::default();
        for component in &self.components {
            let mut directives = Vec::new();
            for group in component.groups() {
                directives.extend(emit_group(group, registry));
            }
            config.components.push(ComponentConfig {
                target: component.component,
                directives,
            });
        }
        for colormap in &self.colormaps {
            config
                .colormaps
                .push(colormap.iter().map(Color::to_toolkit).collect());
        }
        config
    }
}
