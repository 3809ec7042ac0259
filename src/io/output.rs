use crate::benchmark::BenchmarkVerdict;
use crate::core::MetricsRecord;
use crate::formatting::{format_currency, FormattingConfig, TerminalStyle};
use crate::report::{BreakEvenStatus, RoasReport};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" | "md" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &RoasReport) -> anyhow::Result<()>;
}

/// Headline sentence under the ROAS value.
pub fn score_description(metrics: &MetricsRecord) -> String {
    let symbol = &metrics.currency_symbol;
    format!(
        "You're earning {symbol}{:.2} for every {symbol}1 spent on ads",
        metrics.roas
    )
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_benchmark(report)?;
        self.write_insights(report)?;
        self.write_actions(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# ROAS Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**ROAS {:.2}** ({}, {:.0}%)",
            report.metrics.roas,
            report.rating.tier.badge(),
            report.rating.percentage
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", score_description(&report.metrics))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let symbol = m.currency_symbol.as_str();

        writeln!(self.writer, "## Key Metrics")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Total Revenue | {} |", format_currency(m.revenue, symbol))?;
        writeln!(self.writer, "| Total Ad Spend | {} |", format_currency(m.ad_spend, symbol))?;
        if let Some(profit) = m.profit {
            writeln!(self.writer, "| Estimated Profit | {} |", format_currency(profit, symbol))?;
        }
        if let Some(cpa) = m.cpa {
            writeln!(self.writer, "| Cost Per Acquisition | {} |", format_currency(cpa, symbol))?;
        }
        writeln!(
            self.writer,
            "| Break-even ROAS | {:.2} ({}) |",
            m.break_even_roas,
            report.break_even.note()
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_benchmark(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        let b = &report.benchmark;
        writeln!(self.writer, "## Industry Benchmark")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Your ROAS **{:.1}** vs {} average **{:.1}**",
            b.your_roas, b.industry_name, b.industry_roas
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", b.note())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_insights(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Insights")?;
        writeln!(self.writer)?;
        for insight in &report.insights {
            writeln!(
                self.writer,
                "- {} **{}**: {}",
                insight.icon, insight.title, insight.description
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_actions(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Action Items")?;
        writeln!(self.writer)?;
        for (i, action) in report.actions.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. {} **{}**: {}",
                i + 1,
                action.icon,
                action.title,
                action.description
            )?;
        }
        Ok(())
    }
}

const BAR_WIDTH: usize = 20;

pub struct TerminalWriter<W: Write> {
    writer: W,
    style: TerminalStyle,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            style: TerminalStyle::new(config),
        }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        self.print_score(report)?;
        self.print_metrics(report)?;
        self.print_benchmark(report)?;
        self.print_insights(report)?;
        self.print_actions(report)?;
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_score(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.style.header("ROAS Calculator Results"))?;
        writeln!(self.writer, "{}", self.style.header("======================="))?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "  Your ROAS: {}  [{}]",
            self.style.bold(&format!("{:.2}", report.metrics.roas)),
            report.rating.tier.badge()
        )?;
        writeln!(self.writer, "  {}", score_description(&report.metrics))?;

        let filled = ((report.rating.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        writeln!(
            self.writer,
            "  Rating: [{}{}] {:.0}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            report.rating.percentage
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_metrics(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        let m = &report.metrics;
        let symbol = m.currency_symbol.as_str();

        writeln!(self.writer, "{} Key Metrics:", self.style.icon("📊"))?;
        writeln!(self.writer, "  Total revenue:    {}", format_currency(m.revenue, symbol))?;
        writeln!(self.writer, "  Total ad spend:   {}", format_currency(m.ad_spend, symbol))?;
        if let Some(profit) = m.profit {
            let text = format_currency(profit, symbol);
            let painted = if profit < 0.0 {
                self.style.danger(&text)
            } else {
                self.style.success(&text)
            };
            writeln!(self.writer, "  Estimated profit: {painted}")?;
        }
        if let Some(cpa) = m.cpa {
            writeln!(self.writer, "  Cost per acq.:    {}", format_currency(cpa, symbol))?;
        }

        let note = report.break_even.note();
        let note = match report.break_even {
            BreakEvenStatus::Above => self.style.success(note),
            BreakEvenStatus::Below => self.style.danger(note),
            BreakEvenStatus::Unknown => self.style.dim(note),
        };
        writeln!(
            self.writer,
            "  Break-even ROAS:  {:.2} ({note})",
            m.break_even_roas
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_benchmark(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        let b = &report.benchmark;
        writeln!(self.writer, "{} Industry Benchmark:", self.style.icon("🎯"))?;
        writeln!(
            self.writer,
            "  Your ROAS {:.1} | {} average {:.1}",
            b.your_roas, b.industry_name, b.industry_roas
        )?;
        let note = b.note();
        let note = match b.verdict {
            BenchmarkVerdict::Above => self.style.success(&note),
            BenchmarkVerdict::Equal => self.style.dim(&note),
            BenchmarkVerdict::Below => self.style.warning(&note),
        };
        writeln!(self.writer, "  {note}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_insights(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{} Insights:", self.style.icon("💡"))?;
        for insight in &report.insights {
            writeln!(
                self.writer,
                "  {} {}",
                self.style.icon(&insight.icon),
                self.style.severity(&insight.title, insight.severity)
            )?;
            writeln!(self.writer, "     {}", insight.description)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_actions(&mut self, report: &RoasReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{} Action Items:", self.style.icon("📈"))?;
        for (i, action) in report.actions.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} {}",
                i + 1,
                self.style.icon(&action.icon),
                self.style.bold(&action.title)
            )?;
            writeln!(self.writer, "     {}", self.style.dim(&action.description))?;
        }
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RawInputs;
    use crate::report::analyze;

    fn render(format: OutputFormat, report: &RoasReport) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = create_writer(format, Box::new(&mut buffer), FormattingConfig::plain());
            writer.write_report(report).unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    fn sample_report() -> RoasReport {
        let inputs = RawInputs::new(1000.0, 1500.0)
            .with_profit_margin(20.0)
            .with_conversions(50);
        analyze(&inputs).unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::parse("html"), None);
    }

    #[test]
    fn test_score_description() {
        let report = sample_report();
        assert_eq!(
            score_description(&report.metrics),
            "You're earning $1.50 for every $1 spent on ads"
        );
    }

    #[test]
    fn test_json_round_trips_report() {
        let report = sample_report();
        let output = render(OutputFormat::Json, &report);

        let parsed: RoasReport = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_terminal_plain_output() {
        let output = render(OutputFormat::Terminal, &sample_report());

        assert!(output.contains("Your ROAS: 1.50  [Fair]"));
        assert!(output.contains("Rating: [######--------------] 30%"));
        assert!(output.contains("Estimated profit: $-700.00"));
        assert!(output.contains("Cost per acq.:    $20.00"));
        assert!(output.contains("Break-even ROAS:  5.00 (Below break-even)"));
        assert!(output.contains("[WARN] Breaking Even"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_terminal_hides_absent_metrics() {
        let report = analyze(&RawInputs::new(1000.0, 5000.0)).unwrap();
        let output = render(OutputFormat::Terminal, &report);

        assert!(!output.contains("Estimated profit"));
        assert!(!output.contains("Cost per acq."));
        assert!(output.contains("Add profit margin to calculate"));
    }

    #[test]
    fn test_markdown_sections() {
        let output = render(OutputFormat::Markdown, &sample_report());

        assert!(output.starts_with("# ROAS Report"));
        assert!(output.contains("| Estimated Profit | $-700.00 |"));
        assert!(output.contains("## Insights"));
        assert!(output.contains("- 📉 **Below Profit Threshold**"));
        assert!(output.contains("1. 🎯 **Improve Targeting**"));
    }
}
