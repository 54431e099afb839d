//! CLI interface for portmapper
//!
//! This crate provides the command-line interface for the jack-registration
//! tool, including argument parsing and help text.

pub mod args;

pub use args::{Cli, Commands};
