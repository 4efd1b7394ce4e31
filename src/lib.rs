// reviewbud library crate.
// Everything the binary and the integration tests share.

pub mod app;
pub mod business;
pub mod clipboard;
pub mod config;
pub mod effects;
pub mod error;
pub mod generation;
pub mod navigator;
pub mod state;
pub mod ui;
