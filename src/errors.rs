//! Error types for the ROAS pipeline.
//!
//! Only metric computation can fail. Every later stage (rating, benchmark,
//! insights, actions) is total over a valid [`crate::MetricsRecord`].

use thiserror::Error;

/// Which input field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    AdSpend,
    Revenue,
    ProfitMargin,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AdSpend => write!(f, "ad spend"),
            Self::Revenue => write!(f, "revenue"),
            Self::ProfitMargin => write!(f, "profit margin"),
        }
    }
}

/// Raised when submitted inputs cannot produce a metrics record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInputError {
    #[error("ad spend must be greater than zero (got {0})")]
    NonPositiveAdSpend(f64),

    #[error("revenue cannot be negative (got {0})")]
    NegativeRevenue(f64),

    #[error("{field} must be a finite number (got {value})")]
    NonFinite { field: InputField, value: f64 },
}

impl InvalidInputError {
    /// The field the user needs to correct.
    pub fn field(&self) -> InputField {
        match self {
            Self::NonPositiveAdSpend(_) => InputField::AdSpend,
            Self::NegativeRevenue(_) => InputField::Revenue,
            Self::NonFinite { field, .. } => *field,
        }
    }

    /// Message suitable for showing next to the form.
    pub fn user_message(&self) -> &'static str {
        "Please enter valid numbers for Ad Spend and Revenue."
    }
}
