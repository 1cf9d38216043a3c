pub mod commands;
pub mod config;
pub mod data_provider;
pub mod export;
pub mod fixtures;
pub mod formatting;
pub mod layout_constants;
pub mod lookup;
pub mod sheet;
pub mod tui;
pub mod types;
