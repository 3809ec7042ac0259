//! Core data model shared by every stage of the ROAS pipeline.

pub mod currency;
pub mod industry;
pub mod input;

pub use currency::{currency_symbol, lookup_symbol, CURRENCY_CODES, DEFAULT_SYMBOL};
pub use industry::Industry;
pub use input::FormValues;

use serde::{Deserialize, Serialize};

/// Numbers submitted for one calculation.
///
/// A zero `profit_margin_percent` or `conversions` means the field was left
/// empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    pub ad_spend: f64,
    pub revenue: f64,
    pub profit_margin_percent: f64,
    pub conversions: u32,
    pub industry: Industry,
    pub currency_symbol: String,
}

impl RawInputs {
    pub fn new(ad_spend: f64, revenue: f64) -> Self {
        Self {
            ad_spend,
            revenue,
            profit_margin_percent: 0.0,
            conversions: 0,
            industry: Industry::General,
            currency_symbol: DEFAULT_SYMBOL.to_string(),
        }
    }

    pub fn with_profit_margin(mut self, percent: f64) -> Self {
        self.profit_margin_percent = percent;
        self
    }

    pub fn with_conversions(mut self, conversions: u32) -> Self {
        self.conversions = conversions;
        self
    }

    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = industry;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }
}

/// Derived metrics for one calculation.
///
/// `profit` and `cpa` are `None` when their inputs were not supplied, which
/// is different from a computed value of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub roas: f64,
    pub revenue: f64,
    pub ad_spend: f64,
    pub profit: Option<f64>,
    pub cpa: Option<f64>,
    pub conversions: u32,
    pub break_even_roas: f64,
    pub profit_margin_percent: f64,
    pub industry: Industry,
    pub currency_symbol: String,
}

impl MetricsRecord {
    pub fn has_profit_margin(&self) -> bool {
        self.profit_margin_percent > 0.0
    }

    pub fn has_conversions(&self) -> bool {
        self.conversions > 0
    }
}
