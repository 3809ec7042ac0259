//! Derived metrics from raw ad spend and revenue figures.

use crate::core::{MetricsRecord, RawInputs};
use crate::errors::{InputField, InvalidInputError};

/// Break-even ROAS reported when no profit margin was supplied.
pub const NO_MARGIN_BREAK_EVEN: f64 = 1.0;

/// Compute the metrics record for one submission.
///
/// Values are left unrounded; formatting to two decimals is up to the caller.
pub fn compute_metrics(inputs: &RawInputs) -> Result<MetricsRecord, InvalidInputError> {
    validate(inputs)?;

    let margin = inputs.profit_margin_percent;
    let roas = inputs.revenue / inputs.ad_spend;

    let profit = (margin > 0.0).then(|| inputs.revenue * (margin / 100.0) - inputs.ad_spend);
    let cpa = (inputs.conversions > 0).then(|| inputs.ad_spend / f64::from(inputs.conversions));
    let break_even = break_even_roas(margin);

    // Finite inputs can still overflow, e.g. a subnormal margin or ad spend.
    ensure_finite(InputField::AdSpend, roas)?;
    ensure_finite(InputField::ProfitMargin, break_even)?;
    if let Some(profit) = profit {
        ensure_finite(InputField::Revenue, profit)?;
    }
    if let Some(cpa) = cpa {
        ensure_finite(InputField::AdSpend, cpa)?;
    }

    Ok(MetricsRecord {
        roas,
        revenue: inputs.revenue,
        ad_spend: inputs.ad_spend,
        profit,
        cpa,
        conversions: inputs.conversions,
        break_even_roas: break_even,
        profit_margin_percent: margin,
        industry: inputs.industry,
        currency_symbol: inputs.currency_symbol.clone(),
    })
}

/// ROAS at which gross profit exactly covers ad spend.
pub fn break_even_roas(profit_margin_percent: f64) -> f64 {
    if profit_margin_percent > 0.0 {
        100.0 / profit_margin_percent
    } else {
        NO_MARGIN_BREAK_EVEN
    }
}

fn validate(inputs: &RawInputs) -> Result<(), InvalidInputError> {
    ensure_finite(InputField::AdSpend, inputs.ad_spend)?;
    if inputs.ad_spend <= 0.0 {
        return Err(InvalidInputError::NonPositiveAdSpend(inputs.ad_spend));
    }

    ensure_finite(InputField::Revenue, inputs.revenue)?;
    if inputs.revenue < 0.0 {
        return Err(InvalidInputError::NegativeRevenue(inputs.revenue));
    }

    ensure_finite(InputField::ProfitMargin, inputs.profit_margin_percent)
}

fn ensure_finite(field: InputField, value: f64) -> Result<(), InvalidInputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Industry;

    #[test]
    fn test_basic_roas_without_optional_fields() {
        let metrics = compute_metrics(&RawInputs::new(1000.0, 5000.0)).unwrap();

        assert_eq!(metrics.roas, 5.0);
        assert_eq!(metrics.profit, None);
        assert_eq!(metrics.cpa, None);
        assert_eq!(metrics.break_even_roas, NO_MARGIN_BREAK_EVEN);
    }

    #[test]
    fn test_margin_and_conversions_produce_profit_and_cpa() {
        let inputs = RawInputs::new(1000.0, 1500.0)
            .with_profit_margin(20.0)
            .with_conversions(50);

        let metrics = compute_metrics(&inputs).unwrap();

        assert_eq!(metrics.roas, 1.5);
        assert!((metrics.profit.unwrap() - -700.0).abs() < 1e-9);
        assert_eq!(metrics.cpa, Some(20.0));
        assert_eq!(metrics.break_even_roas, 5.0);
    }

    #[test]
    fn test_zero_profit_is_present_not_absent() {
        let inputs = RawInputs::new(500.0, 1000.0).with_profit_margin(50.0);

        let metrics = compute_metrics(&inputs).unwrap();

        assert_eq!(metrics.profit, Some(0.0));
    }

    #[test]
    fn test_zero_revenue_is_valid() {
        let metrics = compute_metrics(&RawInputs::new(250.0, 0.0)).unwrap();
        assert_eq!(metrics.roas, 0.0);
    }

    #[test]
    fn test_negative_margin_treated_as_absent() {
        let inputs = RawInputs::new(100.0, 300.0).with_profit_margin(-10.0);

        let metrics = compute_metrics(&inputs).unwrap();

        assert_eq!(metrics.profit, None);
        assert_eq!(metrics.break_even_roas, 1.0);
    }

    #[test]
    fn test_rejects_non_positive_ad_spend() {
        assert_eq!(
            compute_metrics(&RawInputs::new(0.0, 100.0)),
            Err(InvalidInputError::NonPositiveAdSpend(0.0))
        );
        assert_eq!(
            compute_metrics(&RawInputs::new(-5.0, 100.0)),
            Err(InvalidInputError::NonPositiveAdSpend(-5.0))
        );
    }

    #[test]
    fn test_rejects_negative_revenue() {
        assert_eq!(
            compute_metrics(&RawInputs::new(100.0, -1.0)),
            Err(InvalidInputError::NegativeRevenue(-1.0))
        );
    }

    #[test]
    fn test_rejects_non_finite_values() {
        let err = compute_metrics(&RawInputs::new(f64::NAN, 100.0)).unwrap_err();
        assert_eq!(err.field(), InputField::AdSpend);

        let err = compute_metrics(&RawInputs::new(100.0, f64::INFINITY)).unwrap_err();
        assert_eq!(err.field(), InputField::Revenue);

        let inputs = RawInputs::new(100.0, 100.0).with_profit_margin(f64::NAN);
        let err = compute_metrics(&inputs).unwrap_err();
        assert_eq!(err.field(), InputField::ProfitMargin);
    }

    #[test]
    fn test_rejects_overflowing_derived_values() {
        let inputs = RawInputs::new(100.0, 100.0).with_profit_margin(1e-320);
        let err = compute_metrics(&inputs).unwrap_err();
        assert_eq!(err.field(), InputField::ProfitMargin);
        assert!(matches!(err, InvalidInputError::NonFinite { value, .. } if value.is_infinite()));

        let err = compute_metrics(&RawInputs::new(1e-320, 1e300)).unwrap_err();
        assert_eq!(err.field(), InputField::AdSpend);

        let inputs = RawInputs::new(1.0, f64::MAX).with_profit_margin(300.0);
        let err = compute_metrics(&inputs).unwrap_err();
        assert_eq!(err.field(), InputField::Revenue);
    }

    #[test]
    fn test_echoes_context_fields() {
        let inputs = RawInputs::new(10.0, 20.0)
            .with_industry(Industry::Saas)
            .with_currency_symbol("€");

        let metrics = compute_metrics(&inputs).unwrap();

        assert_eq!(metrics.industry, Industry::Saas);
        assert_eq!(metrics.currency_symbol, "€");
        assert_eq!(metrics.ad_spend, 10.0);
        assert_eq!(metrics.revenue, 20.0);
    }
}
