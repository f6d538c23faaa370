// Command-line presentation layer
// Loads the datasets once, then answers a single command: list countries,
// look up a currency code, or convert a salary.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ppp_shared::models::ConversionRequest;

use crate::config::EngineSettings;
use crate::data::loaded_data::LoadedData;
use crate::services::ConversionService;

/// PPP salary converter
#[derive(Parser, Debug)]
#[command(name = "ppp-engine")]
#[command(about = "Convert a salary between countries using purchasing power parity")]
#[command(version)]
pub struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// PPP factor dataset (UN data XML), overrides the settings file
    #[arg(long, global = true)]
    pub ppp_data: Option<PathBuf>,

    /// Currency code dataset (CSV), overrides the settings file
    #[arg(long, global = true)]
    pub currency_data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the countries a salary can be converted between
    Countries,
    /// Show the currency code of a country
    Currency {
        /// Country name, matched case-insensitively
        country: String,
    },
    /// Convert a salary from one country to another
    Convert(ConvertArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source country, as listed by `countries`
    #[arg(long = "from")]
    pub source: String,

    /// Target country, as listed by `countries`
    #[arg(long = "to")]
    pub target: String,

    /// Salary in the source country's local currency
    #[arg(long, allow_negative_numbers = true)]
    pub salary: f64,

    /// Print the response as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<EngineSettings> {
        let mut settings = match &self.config {
            Some(path) => EngineSettings::from_json_file(path)?,
            None => EngineSettings::default(),
        };
        if let Some(path) = &self.ppp_data {
            settings.ppp_data_path = path.clone();
        }
        if let Some(path) = &self.currency_data {
            settings.currency_data_path = path.clone();
        }
        Ok(settings)
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let settings = cli.settings()?;
    let data = LoadedData::load(&settings).with_context(|| {
        format!(
            "Failed to load datasets '{}' and '{}'",
            settings.ppp_data_path.display(),
            settings.currency_data_path.display()
        )
    })?;
    let service = ConversionService::new(Arc::new(data));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_command(cli.command, &service, &mut out)
}

/// Answers one command against loaded data, writing the result to `out`.
pub fn run_command<W: Write>(command: Commands, service: &ConversionService, out: &mut W) -> Result<()> {
    match command {
        Commands::Countries => {
            for (country, factor) in service.list_factors() {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    country,
                    service.currency_code(country),
                    factor.year,
                    factor.value
                )?;
            }
        }
        Commands::Currency { country } => {
            writeln!(out, "{}", service.currency_code(&country))?;
        }
        Commands::Convert(args) => {
            let request = ConversionRequest::new(args.source, args.target, args.salary);
            let response = service.handle_convert(request)?;
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
            } else if response.success {
                writeln!(out, "{}", response.message)?;
            } else {
                anyhow::bail!(response.message);
            }
        }
    }

    Ok(())
}
