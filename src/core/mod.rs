// src/core/mod.rs

pub mod config_loader;
pub mod desktop_config;
pub mod paths;
pub mod terminal;
