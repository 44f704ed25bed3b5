//! CLI support for the `quarry` binary.

pub mod args;
pub mod commands;
pub mod context;
pub mod driver;
pub mod output;
pub mod page;
