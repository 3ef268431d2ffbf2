use clap::Parser;

mod calibration;
mod cli;
mod config;
mod error;
mod pipeline;
mod report;
mod verify;
mod writer;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    pipeline::run(&cli)
}
