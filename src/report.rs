//! Full ROAS analysis for one submission.
//!
//! Inputs flow through [`compute_metrics`] once; the rating, benchmark,
//! insight and action stages each read the same metrics record
//! independently.

use crate::actions::{generate_action_items, ActionItem};
use crate::benchmark::{compare_to_benchmark, BenchmarkComparison};
use crate::core::{MetricsRecord, RawInputs};
use crate::errors::InvalidInputError;
use crate::insights::{generate_insights, Insight};
use crate::metrics::compute_metrics;
use crate::rating::{classify_rating, RatingScore};
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

/// Whether the campaign clears its break-even ROAS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakEvenStatus {
    Above,
    Below,
    /// No profit margin supplied, so break-even is not meaningful.
    Unknown,
}

impl BreakEvenStatus {
    pub fn from_metrics(metrics: &MetricsRecord) -> Self {
        if !metrics.has_profit_margin() {
            BreakEvenStatus::Unknown
        } else if metrics.roas > metrics.break_even_roas {
            BreakEvenStatus::Above
        } else {
            BreakEvenStatus::Below
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            BreakEvenStatus::Above => "Above break-even",
            BreakEvenStatus::Below => "Below break-even",
            BreakEvenStatus::Unknown => "Add profit margin to calculate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoasReport {
    pub metrics: MetricsRecord,
    pub rating: RatingScore,
    pub break_even: BreakEvenStatus,
    pub benchmark: BenchmarkComparison,
    pub insights: Vec<Insight>,
    pub actions: Vec<ActionItem>,
}

/// Validate inputs and derive every part of the report.
pub fn analyze(inputs: &RawInputs) -> Result<RoasReport, InvalidInputError> {
    let _span = debug_span!("analyze", industry = inputs.industry.key()).entered();

    let metrics = compute_metrics(inputs)?;
    debug!(
        roas = metrics.roas,
        break_even = metrics.break_even_roas,
        "Computed metrics"
    );

    let report = build_report(metrics);
    debug!(
        tier = report.rating.tier.label(),
        insights = report.insights.len(),
        actions = report.actions.len(),
        "Built report"
    );

    Ok(report)
}

/// Derive the report from an already validated metrics record.
pub fn build_report(metrics: MetricsRecord) -> RoasReport {
    RoasReport {
        rating: classify_rating(metrics.roas),
        break_even: BreakEvenStatus::from_metrics(&metrics),
        benchmark: compare_to_benchmark(metrics.roas, metrics.industry),
        insights: generate_insights(&metrics),
        actions: generate_action_items(&metrics),
        metrics,
    }
}
