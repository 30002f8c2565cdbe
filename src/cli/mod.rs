//! CLI module for kaizen - command-line flags and parsing.

pub mod commands;

pub use commands::Cli;
