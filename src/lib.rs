pub mod core;
pub mod models;
pub mod services;

pub use crate::core::errors::{Error, Result};
pub use crate::models::color::Color;
pub use crate::models::groups::{ColorGroup, CoreColors, NodeColors, PlotColors, ToolkitCategory};
pub use crate::models::palette::Palette;
pub use crate::models::theme::{Theme, ThemeComponent, APPLY_TO_ALL};
pub use crate::services::codec::{decode_palette, decode_theme, encode_palette, encode_theme};
pub use crate::services::naming::{internal_name, toolkit_name};
