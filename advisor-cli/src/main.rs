//! Binary crate for the `weather-advisor` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive city prompt
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod output;
mod selftest;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    cmd.run().await
}
