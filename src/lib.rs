pub mod config;
pub mod core;
pub mod gui;
pub mod logging;
