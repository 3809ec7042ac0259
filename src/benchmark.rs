//! Comparison of a ROAS value against the industry average.

use crate::core::Industry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BenchmarkVerdict {
    Above,
    Equal,
    Below,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkComparison {
    pub industry: Industry,
    pub industry_name: String,
    pub your_roas: f64,
    pub industry_roas: f64,
    /// Signed difference relative to the benchmark, in percent.
    pub difference_percent: f64,
    pub verdict: BenchmarkVerdict,
}

impl BenchmarkComparison {
    /// Magnitude of the difference, as shown in "N% above/below" notes.
    pub fn abs_difference_percent(&self) -> f64 {
        self.difference_percent.abs()
    }

    /// One-line summary of the comparison for display.
    pub fn note(&self) -> String {
        match self.verdict {
            BenchmarkVerdict::Above => format!(
                "Great job! You're performing {:.1}% above the {} industry average.",
                self.abs_difference_percent(),
                self.industry_name
            ),
            BenchmarkVerdict::Equal => format!(
                "You're performing at the {} industry average.",
                self.industry_name
            ),
            BenchmarkVerdict::Below => format!(
                "You're performing {:.1}% below the {} industry average. There's room for improvement.",
                self.abs_difference_percent(),
                self.industry_name
            ),
        }
    }
}

/// Compare `roas` with the benchmark for `industry`.
///
/// Equality is exact. Two floats rarely compare equal, so `Equal` is mostly
/// reached when the ROAS was entered to match the benchmark precisely.
pub fn compare_to_benchmark(roas: f64, industry: Industry) -> BenchmarkComparison {
    let industry_roas = industry.benchmark_roas();
    let difference_percent = (roas - industry_roas) / industry_roas * 100.0;

    let verdict = if roas > industry_roas {
        BenchmarkVerdict::Above
    } else if roas == industry_roas {
        BenchmarkVerdict::Equal
    } else {
        BenchmarkVerdict::Below
    };

    BenchmarkComparison {
        industry,
        industry_name: industry.display_name().to_string(),
        your_roas: roas,
        industry_roas,
        difference_percent,
        verdict,
    }
}

/// Compare against an industry given by form key; unknown keys use `general`.
pub fn compare_to_benchmark_key(roas: f64, industry_key: &str) -> BenchmarkComparison {
    compare_to_benchmark(roas, Industry::from_key(industry_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_benchmark() {
        let cmp = compare_to_benchmark(5.0, Industry::General);

        assert_eq!(cmp.verdict, BenchmarkVerdict::Above);
        assert_eq!(cmp.industry_roas, 4.0);
        assert!((cmp.difference_percent - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_below_benchmark_has_negative_difference() {
        let cmp = compare_to_benchmark(2.75, Industry::RealEstate);

        assert_eq!(cmp.verdict, BenchmarkVerdict::Below);
        assert!((cmp.difference_percent - -50.0).abs() < 1e-9);
        assert!((cmp.abs_difference_percent() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_exact_equality() {
        let cmp = compare_to_benchmark(3.5, Industry::Finance);

        assert_eq!(cmp.verdict, BenchmarkVerdict::Equal);
        assert_eq!(cmp.difference_percent, 0.0);
    }

    #[test]
    fn test_near_equality_is_not_equal() {
        let cmp = compare_to_benchmark(4.0 + 1e-12, Industry::General);
        assert_eq!(cmp.verdict, BenchmarkVerdict::Above);
    }

    #[test]
    fn test_notes() {
        assert_eq!(
            compare_to_benchmark(5.0, Industry::General).note(),
            "Great job! You're performing 25.0% above the General industry average."
        );
        assert_eq!(
            compare_to_benchmark(4.5, Industry::Retail).note(),
            "You're performing at the Retail industry average."
        );
        assert_eq!(
            compare_to_benchmark(2.75, Industry::RealEstate).note(),
            "You're performing 50.0% below the Real Estate industry average. There's room for improvement."
        );
    }

    #[test]
    fn test_unknown_key_uses_general() {
        let cmp = compare_to_benchmark_key(4.0, "space-tourism");

        assert_eq!(cmp.industry, Industry::General);
        assert_eq!(cmp.industry_name, "General");
        assert_eq!(cmp.industry_roas, 4.0);
        assert_eq!(cmp.verdict, BenchmarkVerdict::Equal);
    }

    #[test]
    fn test_known_key() {
        let cmp = compare_to_benchmark_key(3.0, "automotive");

        assert_eq!(cmp.industry, Industry::Automotive);
        assert_eq!(cmp.industry_name, "Automotive");
        assert_eq!(cmp.verdict, BenchmarkVerdict::Equal);
    }
}
