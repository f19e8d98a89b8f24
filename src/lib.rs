pub mod commands;
pub mod paths;
pub mod setup;
pub mod shared;
pub mod tui;
