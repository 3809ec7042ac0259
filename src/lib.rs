// Export modules for library usage
pub mod actions;
pub mod benchmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod insights;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod rating;
pub mod report;

// Re-export commonly used types
pub use crate::core::{FormValues, Industry, MetricsRecord, RawInputs};

pub use crate::errors::{InputField, InvalidInputError};

pub use crate::metrics::{break_even_roas, compute_metrics};

pub use crate::rating::{classify_rating, RatingScore, RatingTier};

pub use crate::benchmark::{
    compare_to_benchmark, compare_to_benchmark_key, BenchmarkComparison, BenchmarkVerdict,
};

pub use crate::insights::{generate_insights, Insight, InsightSeverity};

pub use crate::actions::{generate_action_items, ActionItem};

pub use crate::report::{analyze, build_report, BreakEvenStatus, RoasReport};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
