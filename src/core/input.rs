//! Lenient conversion of submitted form values into numbers.
//!
//! Calculator forms are forgiving: currency symbols and thousands separators
//! are stripped from amounts, trailing junk after a number is ignored, and
//! anything unparseable counts as zero. Validation of the resulting numbers
//! happens later in [`crate::metrics::compute_metrics`].

use super::{currency_symbol, Industry, RawInputs};
use serde::{Deserialize, Serialize};

/// Form values exactly as a user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub ad_spend: String,
    pub revenue: String,
    #[serde(default)]
    pub profit_margin: Option<String>,
    #[serde(default)]
    pub conversions: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl RawInputs {
    /// Build inputs from form values, treating blank or unparseable fields as zero.
    pub fn from_form(form: &FormValues) -> Self {
        let ad_spend = parse_float_prefix(&sanitize_amount(&form.ad_spend)).unwrap_or(0.0);
        let revenue = parse_float_prefix(&sanitize_amount(&form.revenue)).unwrap_or(0.0);
        let margin = form
            .profit_margin
            .as_deref()
            .and_then(parse_float_prefix)
            .unwrap_or(0.0);
        let conversions = form
            .conversions
            .as_deref()
            .map(parse_count_prefix)
            .unwrap_or(0);
        let industry = form
            .industry
            .as_deref()
            .map(Industry::from_key)
            .unwrap_or_default();
        let symbol = currency_symbol(form.currency.as_deref().unwrap_or("USD"));

        RawInputs::new(ad_spend, revenue)
            .with_profit_margin(margin)
            .with_conversions(conversions)
            .with_industry(industry)
            .with_currency_symbol(symbol)
    }
}

/// Strip everything but digits, the decimal point and a leading minus sign.
///
/// Only the first `.` survives as the decimal point; later ones are dropped,
/// so `"1.2.3"` becomes `"1.23"`. A `-` that appears before the first digit
/// is kept so that negative amounts still reach validation, e.g. `"-$50"`
/// becomes `"-50"`.
pub fn sanitize_amount(raw: &str) -> String {
    let negative = raw
        .chars()
        .take_while(|c| !c.is_ascii_digit() && *c != '.')
        .any(|c| c == '-');
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let unsigned = match kept.split_once('.') {
        Some((whole, rest)) if rest.contains('.') => {
            format!("{}.{}", whole, rest.replace('.', ""))
        }
        _ => kept,
    };

    if negative {
        format!("-{unsigned}")
    } else {
        unsigned
    }
}

/// Parse the longest numeric prefix of `raw` as a float.
///
/// Leading whitespace and an optional sign are accepted, followed by digits
/// with an optional fraction and exponent. Returns `None` when no digits lead
/// the string.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse the leading integer of `raw` as a conversion count.
///
/// Fractions are truncated, negative or missing counts become zero, and
/// counts beyond `u32::MAX` saturate.
pub fn parse_count_prefix(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }

    digits[..end]
        .parse::<u64>()
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
        .unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_amount_strips_symbols_and_separators() {
        assert_eq!(sanitize_amount("$1,234.50"), "1234.50");
        assert_eq!(sanitize_amount("  750 "), "750");
    }

    #[test]
    fn test_sanitize_amount_keeps_leading_minus() {
        assert_eq!(sanitize_amount("-20"), "-20");
        assert_eq!(sanitize_amount("-$1,000"), "-1000");
        assert_eq!(sanitize_amount("$-5.50"), "-5.50");
        assert_eq!(sanitize_amount("1-2"), "12");
    }

    #[test]
    fn test_from_form_negative_amounts_stay_negative() {
        let form = FormValues {
            ad_spend: "-5".into(),
            revenue: "-$1".into(),
            ..Default::default()
        };

        let inputs = RawInputs::from_form(&form);

        assert_eq!(inputs.ad_spend, -5.0);
        assert_eq!(inputs.revenue, -1.0);
    }

    #[test]
    fn test_sanitize_amount_keeps_first_decimal_point() {
        assert_eq!(sanitize_amount("1.2.3"), "1.23");
        assert_eq!(sanitize_amount("$1,2.3.4"), "12.34");
        assert_eq!(sanitize_amount("..5"), ".5");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("20"), Some(20.0));
        assert_eq!(parse_float_prefix("12.5%"), Some(12.5));
        assert_eq!(parse_float_prefix("  -3.25abc"), Some(-3.25));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
    }

    #[test]
    fn test_parse_float_prefix_rejects_non_numbers() {
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    #[test]
    fn test_parse_count_prefix() {
        assert_eq!(parse_count_prefix("50"), 50);
        assert_eq!(parse_count_prefix("12.7"), 12);
        assert_eq!(parse_count_prefix(" 8 sales"), 8);
        assert_eq!(parse_count_prefix("-5"), 0);
        assert_eq!(parse_count_prefix("many"), 0);
        assert_eq!(parse_count_prefix("99999999999"), u32::MAX);
    }

    #[test]
    fn test_from_form_applies_lenient_rules() {
        let form = FormValues {
            ad_spend: "$1,000".into(),
            revenue: "4,500.00".into(),
            profit_margin: Some("25%".into()),
            conversions: Some("30".into()),
            industry: Some("retail".into()),
            currency: Some("eur".into()),
        };

        let inputs = RawInputs::from_form(&form);

        assert_eq!(inputs.ad_spend, 1000.0);
        assert_eq!(inputs.revenue, 4500.0);
        assert_eq!(inputs.profit_margin_percent, 25.0);
        assert_eq!(inputs.conversions, 30);
        assert_eq!(inputs.industry, Industry::Retail);
        assert_eq!(inputs.currency_symbol, "€");
    }

    #[test]
    fn test_from_form_defaults_missing_fields() {
        let form = FormValues {
            ad_spend: "100".into(),
            revenue: "".into(),
            ..Default::default()
        };

        let inputs = RawInputs::from_form(&form);

        assert_eq!(inputs.revenue, 0.0);
        assert_eq!(inputs.profit_margin_percent, 0.0);
        assert_eq!(inputs.conversions, 0);
        assert_eq!(inputs.industry, Industry::General);
        assert_eq!(inputs.currency_symbol, "$");
    }
}
