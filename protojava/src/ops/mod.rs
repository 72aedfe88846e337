//! Operations behind the CLI commands.
//!
//! Each operation collects data into a report; commands decide how to render it.

pub mod check;
pub mod generate;
