//! Command-line front end for the careerpath engine.
//!
//! Loads a JSON dataset into the in-memory store, runs one engine operation
//! and prints the result.

mod app;
pub mod cli;

pub use app::run;
