use anyhow::Result;
use clap::Parser;
use roascalc::cli::{Cli, Commands};
use roascalc::commands::{self, CalculateConfig};
use roascalc::config::{load_config, RoasConfig};
use roascalc::core::FormValues;
use roascalc::formatting::FormattingConfig;
use roascalc::io::OutputFormat;
use roascalc::logging::init_logging;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Calculate {
            ad_spend,
            revenue,
            margin,
            conversions,
            industry,
            currency,
            format,
            output,
            plain,
        } => {
            let config = load_config();
            let form = FormValues {
                ad_spend,
                revenue,
                profit_margin: margin,
                conversions,
                industry,
                currency,
            };
            commands::handle_calculate(build_calculate_config(
                form, format, output, plain, &config,
            ))
        }
        Commands::Benchmarks => {
            print!("{}", commands::render_benchmarks());
            Ok(())
        }
        Commands::Currencies => {
            print!("{}", commands::render_currencies());
            Ok(())
        }
        Commands::Init { force } => commands::init_config(force),
    }
}

// CLI flags win over the config file, which wins over built-in defaults
fn build_calculate_config(
    mut form: FormValues,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    plain: bool,
    config: &RoasConfig,
) -> CalculateConfig {
    form.industry = form
        .industry
        .or_else(|| Some(config.industry().key().to_string()));
    form.currency = form
        .currency
        .or_else(|| Some(config.currency_code().to_string()));

    CalculateConfig {
        form,
        format: format.unwrap_or_else(|| config.output_format()),
        output,
        formatting: create_formatting_config(plain || config.plain()),
    }
}

fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
