//! Qualitative insights derived from a metrics record.
//!
//! Rules run in a fixed order and each matching rule appends one insight, so
//! the output order is the rule order. The performance rule always fires.

use crate::core::MetricsRecord;
use serde::{Deserialize, Serialize};

/// Revenue-to-spend multiple above which campaigns count as highly efficient.
pub const HIGH_EFFICIENCY_MULTIPLE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub severity: InsightSeverity,
}

impl Insight {
    fn new(
        icon: &str,
        title: &str,
        description: impl Into<String>,
        severity: InsightSeverity,
    ) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.into(),
            severity,
        }
    }
}

type InsightRule = fn(&MetricsRecord) -> Option<Insight>;

const RULES: [InsightRule; 4] = [
    performance_insight,
    profitability_insight,
    efficiency_insight,
    scale_insight,
];

pub fn generate_insights(metrics: &MetricsRecord) -> Vec<Insight> {
    RULES.iter().filter_map(|rule| rule(metrics)).collect()
}

fn performance_insight(metrics: &MetricsRecord) -> Option<Insight> {
    let roas = metrics.roas;
    let insight = if roas >= 4.0 {
        Insight::new(
            "🎉",
            "Excellent Performance",
            format!(
                "Your ROAS of {roas:.2} is outstanding! Your campaigns are highly profitable and efficient."
            ),
            InsightSeverity::Success,
        )
    } else if roas >= 2.0 {
        Insight::new(
            "👍",
            "Good Performance",
            format!(
                "Your ROAS of {roas:.2} is solid. There's room for optimization to increase returns."
            ),
            InsightSeverity::Success,
        )
    } else if roas >= 1.0 {
        Insight::new(
            "⚠️",
            "Breaking Even",
            format!(
                "Your ROAS of {roas:.2} means you're close to break-even. Focus on improving conversion rates and reducing costs."
            ),
            InsightSeverity::Warning,
        )
    } else {
        Insight::new(
            "❌",
            "Losing Money",
            format!(
                "Your ROAS of {roas:.2} indicates you're spending more than you're earning. Immediate optimization is needed."
            ),
            InsightSeverity::Danger,
        )
    };
    Some(insight)
}

fn profitability_insight(metrics: &MetricsRecord) -> Option<Insight> {
    if !metrics.has_profit_margin() {
        return None;
    }
    let profit = metrics.profit?;

    if metrics.roas > metrics.break_even_roas {
        let return_percent = profit / metrics.ad_spend * 100.0;
        Some(Insight::new(
            "💰",
            "Profitable Campaign",
            format!(
                "After considering your {}% profit margin, you're making a {:.1}% return on your ad investment.",
                metrics.profit_margin_percent, return_percent
            ),
            InsightSeverity::Success,
        ))
    } else {
        Some(Insight::new(
            "📉",
            "Below Profit Threshold",
            format!(
                "Your current ROAS ({:.2}) is below your break-even ROAS ({:.2}). You're not yet profitable after costs.",
                metrics.roas, metrics.break_even_roas
            ),
            InsightSeverity::Danger,
        ))
    }
}

fn efficiency_insight(metrics: &MetricsRecord) -> Option<Insight> {
    (metrics.revenue > metrics.ad_spend * HIGH_EFFICIENCY_MULTIPLE).then(|| {
        Insight::new(
            "🚀",
            "Highly Efficient Campaigns",
            "Your campaigns are generating 5x or more revenue than spend. Consider scaling up your budget to maximize returns.",
            InsightSeverity::Success,
        )
    })
}

// ROAS below 3.0 gets no scale insight, and exactly 10.0 falls between the
// two ranges.
fn scale_insight(metrics: &MetricsRecord) -> Option<Insight> {
    let roas = metrics.roas;
    if (3.0..10.0).contains(&roas) {
        Some(Insight::new(
            "📈",
            "Scale Opportunity",
            "Your ROAS is strong. Consider gradually increasing your ad spend by 20-30% to capture more revenue while maintaining efficiency.",
            InsightSeverity::Success,
        ))
    } else if roas > 10.0 {
        Some(Insight::new(
            "🎯",
            "Untapped Potential",
            "Your extremely high ROAS suggests you may be under-spending. There could be significant opportunity to scale and capture more market share.",
            InsightSeverity::Success,
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInputs;
    use crate::metrics::compute_metrics;

    fn metrics_for(ad_spend: f64, revenue: f64, margin: f64) -> MetricsRecord {
        let inputs = RawInputs::new(ad_spend, revenue).with_profit_margin(margin);
        compute_metrics(&inputs).unwrap()
    }

    fn titles(insights: &[Insight]) -> Vec<&str> {
        insights.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_performance_buckets() {
        assert_eq!(
            generate_insights(&metrics_for(100.0, 400.0, 0.0))[0].title,
            "Excellent Performance"
        );
        assert_eq!(
            generate_insights(&metrics_for(100.0, 250.0, 0.0))[0].title,
            "Good Performance"
        );
        assert_eq!(
            generate_insights(&metrics_for(100.0, 100.0, 0.0))[0].severity,
            InsightSeverity::Warning
        );
        assert_eq!(
            generate_insights(&metrics_for(100.0, 50.0, 0.0))[0].severity,
            InsightSeverity::Danger
        );
    }

    #[test]
    fn test_performance_description_uses_two_decimals() {
        let insights = generate_insights(&metrics_for(300.0, 100.0, 0.0));
        assert!(insights[0].description.starts_with("Your ROAS of 0.33 "));
    }

    #[test]
    fn test_profitable_campaign_reports_return_on_spend() {
        // roas 5, margin 40%: profit = 5000 * 0.4 - 1000 = 1000 -> 100.0%
        let insights = generate_insights(&metrics_for(1000.0, 5000.0, 40.0));
        let profit = &insights[1];

        assert_eq!(profit.title, "Profitable Campaign");
        assert_eq!(
            profit.description,
            "After considering your 40% profit margin, you're making a 100.0% return on your ad investment."
        );
    }

    #[test]
    fn test_below_profit_threshold() {
        let insights = generate_insights(&metrics_for(1000.0, 1500.0, 20.0));

        assert_eq!(titles(&insights), vec!["Breaking Even", "Below Profit Threshold"]);
        assert_eq!(
            insights[1].description,
            "Your current ROAS (1.50) is below your break-even ROAS (5.00). You're not yet profitable after costs."
        );
    }

    #[test]
    fn test_roas_equal_to_break_even_is_below_threshold() {
        let insights = generate_insights(&metrics_for(100.0, 500.0, 20.0));
        assert_eq!(insights[1].title, "Below Profit Threshold");
    }

    #[test]
    fn test_full_rule_order() {
        // roas 6: performance, no margin, efficient, scale
        let insights = generate_insights(&metrics_for(100.0, 600.0, 0.0));
        assert_eq!(
            titles(&insights),
            vec![
                "Excellent Performance",
                "Highly Efficient Campaigns",
                "Scale Opportunity"
            ]
        );
    }

    #[test]
    fn test_efficiency_requires_strictly_more_than_five_times() {
        let insights = generate_insights(&metrics_for(100.0, 500.0, 0.0));
        assert!(!titles(&insights).contains(&"Highly Efficient Campaigns"));
    }

    #[test]
    fn test_scale_rule_gaps() {
        let low = generate_insights(&metrics_for(100.0, 299.0, 0.0));
        assert_eq!(titles(&low), vec!["Good Performance"]);

        let exactly_ten = generate_insights(&metrics_for(100.0, 1000.0, 0.0));
        assert_eq!(
            titles(&exactly_ten),
            vec!["Excellent Performance", "Highly Efficient Campaigns"]
        );

        let above_ten = generate_insights(&metrics_for(100.0, 1100.0, 0.0));
        assert_eq!(above_ten.last().unwrap().title, "Untapped Potential");
    }
}
