//! CLI module for the invest ledger

pub mod serve;

use clap::{Parser, Subcommand};

/// Invest Ledger - investor and payout tracking API
#[derive(Parser)]
#[command(name = "invest-ledger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
