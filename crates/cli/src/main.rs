//! Command-line interface for the `careerpath` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its work to [`careerpath::run`].

fn main() -> anyhow::Result<()> {
    careerpath::run()
}
