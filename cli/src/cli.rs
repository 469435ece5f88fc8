use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vcp",
    about = "Scan price series for volatility contraction patterns and monitor entry signals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a JSON candle file for the pattern.
    Analyze {
        /// Path to a JSON array of OHLCV bars.
        #[arg(long)]
        data: PathBuf,
    },

    /// Run the analyzer, then watch the series until an entry signal fires.
    Watch {
        /// Path to a JSON array of OHLCV bars.
        #[arg(long)]
        data: PathBuf,

        /// Display symbol for the instrument.
        #[arg(long, default_value = "DEMO")]
        symbol: String,

        /// Check cadence in minutes.
        #[arg(long, default_value_t = 1)]
        interval_min: u64,

        /// Minimum strategy confidence (0-100) before a signal fires.
        #[arg(long, default_value_t = 75.0)]
        min_confidence: f64,
    },
}
