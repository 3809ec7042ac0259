/// Rating classification for a ROAS value
///
/// Each tier covers one unit of ROAS and maps onto a 20-point band of the
/// 0-100 rating bar. Excellent is unbounded above; its bar fills up at 8.0.
use serde::{Deserialize, Serialize};

/// Discrete performance tier, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingTier {
    /// ROAS below 1.0 (including negative values)
    Poor,
    /// ROAS in [1.0, 2.0)
    Fair,
    /// ROAS in [2.0, 3.0)
    Good,
    /// ROAS in [3.0, 4.0)
    Great,
    /// ROAS of 4.0 and above
    Excellent,
}

impl RatingTier {
    /// Classify a ROAS value. Total over every `f64`; NaN lands in Poor.
    pub fn from_roas(roas: f64) -> Self {
        if roas >= 4.0 {
            RatingTier::Excellent
        } else if roas >= 3.0 {
            RatingTier::Great
        } else if roas >= 2.0 {
            RatingTier::Good
        } else if roas >= 1.0 {
            RatingTier::Fair
        } else {
            RatingTier::Poor
        }
    }

    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            RatingTier::Poor => "Poor",
            RatingTier::Fair => "Fair",
            RatingTier::Good => "Good",
            RatingTier::Great => "Great",
            RatingTier::Excellent => "Excellent",
        }
    }

    /// Get badge text shown next to the score
    pub fn badge(&self) -> &'static str {
        match self {
            RatingTier::Poor => "Needs Improvement",
            other => other.label(),
        }
    }

    /// Lower bound of the tier's band on the rating bar
    fn band_floor(&self) -> f64 {
        match self {
            RatingTier::Poor => 0.0,
            RatingTier::Fair => 20.0,
            RatingTier::Good => 40.0,
            RatingTier::Great => 60.0,
            RatingTier::Excellent => 80.0,
        }
    }
}

/// Tier plus the fill percentage for the rating bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingScore {
    pub tier: RatingTier,
    /// Bar fill in [0, 100]
    pub percentage: f64,
}

/// Classify a ROAS value into a tier and bar percentage
pub fn classify_rating(roas: f64) -> RatingScore {
    let tier = RatingTier::from_roas(roas);
    let within_band = match tier {
        RatingTier::Poor => roas * 20.0,
        RatingTier::Fair => (roas - 1.0) * 20.0,
        RatingTier::Good => (roas - 2.0) * 20.0,
        RatingTier::Great => (roas - 3.0) * 20.0,
        RatingTier::Excellent => ((roas - 4.0) / 4.0 * 20.0).min(20.0),
    };

    RatingScore {
        tier,
        percentage: clamp_percentage(tier.band_floor() + within_band),
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
