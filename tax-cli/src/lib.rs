//! Command-line front end: settings, logging and terminal rendering.

pub mod commands;
pub mod config;
pub mod logging;
