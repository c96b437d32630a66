pub mod catppuccin;
pub mod codec;
pub mod naming;
pub mod store;
pub mod toolkit;
