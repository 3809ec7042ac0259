use crate::core::{FormValues, Industry, RawInputs};
use crate::formatting::{configure_output, ColorMode, FormattingConfig};
use crate::io::{self, create_writer, OutputFormat};
use crate::report::{analyze, RoasReport};
use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct CalculateConfig {
    pub form: FormValues,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let report = run_calculation(&config.form)?;

    let mut formatting = config.formatting;
    if config.output.is_some() {
        formatting.color = ColorMode::Never;
    }
    configure_output(&formatting);
    let rendered = render_report(&report, config.format, formatting)?;

    match &config.output {
        Some(path) => {
            io::write_file(path, &rendered)?;
            info!("Wrote {:?} report to {}", config.format, path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Parse the form and run the full analysis.
pub fn run_calculation(form: &FormValues) -> Result<RoasReport> {
    let inputs = RawInputs::from_form(form);
    if let Some(key) = form.industry.as_deref() {
        if !key.trim().is_empty() && Industry::lookup(key).is_none() {
            warn!("Unknown industry '{}', comparing against general", key);
        }
    }

    analyze(&inputs).map_err(|e| anyhow!("{} ({})", e.user_message(), e))
}

/// Render a report in the requested format.
pub fn render_report(
    report: &RoasReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = create_writer(format, Box::new(&mut buffer), formatting);
        writer.write_report(report)?;
    }
    Ok(String::from_utf8(buffer)?)
}
