pub mod color;
pub mod groups;
pub mod palette;
pub mod theme;
