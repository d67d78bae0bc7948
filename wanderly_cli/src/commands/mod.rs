//! CLI subcommand implementations.

pub mod airports;
pub mod deals;
