//! CLI command implementations for roascalc.
//!
//! Available commands:
//! - **calculate**: Compute ROAS, rating, benchmark, insights and actions
//! - **benchmarks**: List industry benchmark values
//! - **currencies**: List supported currency codes
//! - **init**: Initialize a new roascalc configuration file

pub mod calculate;
pub mod init;
pub mod listing;

pub use calculate::{handle_calculate, render_report, run_calculation, CalculateConfig};
pub use init::init_config;
pub use listing::{render_benchmarks, render_currencies};
