use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roascalc")]
#[command(about = "Return on ad spend calculator with ratings, benchmarks and insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate ROAS and related metrics for a campaign
    Calculate {
        /// Total ad spend (currency symbols and separators are ignored)
        #[arg(long = "ad-spend", visible_alias = "spend")]
        ad_spend: String,

        /// Revenue attributed to the ads
        #[arg(long)]
        revenue: String,

        /// Gross profit margin in percent
        #[arg(long = "margin", visible_alias = "profit-margin")]
        margin: Option<String>,

        /// Number of conversions, used for cost per acquisition
        #[arg(long)]
        conversions: Option<String>,

        /// Industry key for benchmark comparison (see `roascalc benchmarks`)
        #[arg(long)]
        industry: Option<String>,

        /// ISO currency code (see `roascalc currencies`)
        #[arg(long, env = "ROASCALC_CURRENCY")]
        currency: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plain output (no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// List industry benchmark ROAS values
    Benchmarks,

    /// List supported currency codes
    Currencies,

    /// Initialize a .roascalc.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
