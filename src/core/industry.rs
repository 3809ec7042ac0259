//! Industry catalogue with average ROAS benchmarks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Advertiser industry used for benchmark comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    #[default]
    General,
    Ecommerce,
    Saas,
    Finance,
    RealEstate,
    Automotive,
    Education,
    Healthcare,
    Travel,
    Retail,
    B2b,
}

impl Industry {
    /// Every industry in catalogue order.
    pub const ALL: [Industry; 11] = [
        Industry::General,
        Industry::Ecommerce,
        Industry::Saas,
        Industry::Finance,
        Industry::RealEstate,
        Industry::Automotive,
        Industry::Education,
        Industry::Healthcare,
        Industry::Travel,
        Industry::Retail,
        Industry::B2b,
    ];

    /// Strict lookup by form key. Keys are matched case-insensitively.
    pub fn lookup(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "ecommerce" => Some(Self::Ecommerce),
            "saas" => Some(Self::Saas),
            "finance" => Some(Self::Finance),
            "realestate" => Some(Self::RealEstate),
            "automotive" => Some(Self::Automotive),
            "education" => Some(Self::Education),
            "healthcare" => Some(Self::Healthcare),
            "travel" => Some(Self::Travel),
            "retail" => Some(Self::Retail),
            "b2b" => Some(Self::B2b),
            _ => None,
        }
    }

    /// Total lookup: unknown or empty keys resolve to [`Industry::General`].
    pub fn from_key(key: &str) -> Self {
        Self::lookup(key).unwrap_or_default()
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Ecommerce => "ecommerce",
            Self::Saas => "saas",
            Self::Finance => "finance",
            Self::RealEstate => "realestate",
            Self::Automotive => "automotive",
            Self::Education => "education",
            Self::Healthcare => "healthcare",
            Self::Travel => "travel",
            Self::Retail => "retail",
            Self::B2b => "b2b",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Ecommerce => "E-commerce",
            Self::Saas => "SaaS",
            Self::Finance => "Finance & Insurance",
            Self::RealEstate => "Real Estate",
            Self::Automotive => "Automotive",
            Self::Education => "Education",
            Self::Healthcare => "Healthcare",
            Self::Travel => "Travel & Hospitality",
            Self::Retail => "Retail",
            Self::B2b => "B2B Services",
        }
    }

    /// Average ROAS observed for the industry.
    pub fn benchmark_roas(&self) -> f64 {
        match self {
            Self::General => 4.0,
            Self::Ecommerce => 4.5,
            Self::Saas => 5.0,
            Self::Finance => 3.5,
            Self::RealEstate => 5.5,
            Self::Automotive => 3.0,
            Self::Education => 4.0,
            Self::Healthcare => 3.5,
            Self::Travel => 4.0,
            Self::Retail => 4.5,
            Self::B2b => 5.0,
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
