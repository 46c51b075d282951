//! CLI module for toolshed - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for browsing, searching and
//! opening registered tools.

pub mod commands;

pub use commands::Cli;
