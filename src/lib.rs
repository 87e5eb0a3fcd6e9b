pub mod config;
pub mod data;
pub mod debounce;
pub mod enhance;
pub mod loader;
pub mod logging;
pub mod tui;
