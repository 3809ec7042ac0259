//! Recommended next steps for a campaign.

use crate::core::MetricsRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl ActionItem {
    fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Build the ordered action list: one ROAS-dependent group, the tracking
/// reminder, then prompts for any optional inputs that were left empty.
pub fn generate_action_items(metrics: &MetricsRecord) -> Vec<ActionItem> {
    let mut actions = roas_group(metrics.roas);

    actions.push(ActionItem::new(
        "📊",
        "Track & Measure",
        "Continuously monitor your ROAS. Set up automated reports and alerts for significant changes in performance.",
    ));

    if !metrics.has_profit_margin() {
        actions.push(ActionItem::new(
            "💡",
            "Calculate True Profitability",
            "Add your profit margin in the advanced options to understand your true return after costs.",
        ));
    }

    if !metrics.has_conversions() {
        actions.push(ActionItem::new(
            "🎯",
            "Track Conversions",
            "Add conversion tracking in the advanced options to calculate your Cost Per Acquisition (CPA).",
        ));
    }

    actions
}

fn roas_group(roas: f64) -> Vec<ActionItem> {
    if roas < 2.0 {
        vec![
            ActionItem::new(
                "🎯",
                "Improve Targeting",
                "Review your audience targeting. Focus on high-intent audiences and exclude underperforming segments.",
            ),
            ActionItem::new(
                "✍️",
                "Optimize Ad Creative",
                "Test new ad copy and visuals. A/B test different messaging to improve click-through and conversion rates.",
            ),
            ActionItem::new(
                "💰",
                "Review Bidding Strategy",
                "Adjust your bidding strategy. Consider switching to target ROAS or value-based bidding.",
            ),
        ]
    } else if roas < 4.0 {
        vec![
            ActionItem::new(
                "🔄",
                "Optimize Conversion Funnel",
                "Analyze your landing pages and checkout process. Remove friction points to increase conversion rates.",
            ),
            ActionItem::new(
                "📱",
                "Expand to High-Performing Channels",
                "Identify your best-performing ad channels and consider allocating more budget to them.",
            ),
        ]
    } else {
        vec![
            ActionItem::new(
                "📈",
                "Scale Winning Campaigns",
                "Your campaigns are performing well. Gradually increase budget on top performers to maximize returns.",
            ),
            ActionItem::new(
                "🧪",
                "Test New Audiences",
                "Experiment with lookalike audiences or new demographics to expand your reach while maintaining efficiency.",
            ),
        ]
    }
}
