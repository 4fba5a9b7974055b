use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use tax_cli::config::AppConfig;
use tax_cli::input::{normalize_code, parse_amount};
use tax_cli::logging;
use tax_cli::render::{
    AllocationView, CalculationReport, CountyList, JurisdictionList, LocalView, ProgramView,
};
use tax_core::calculations::{estimate_local_taxes, program_breakdown};
use tax_core::{AllocationEngine, HouseholdInputs, ReferenceData};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Household tax allocation estimator.
///
/// Estimates federal and state/local taxes for one household and shows how
/// each bucket is spread across government spending categories.
#[derive(Debug, Parser)]
#[command(name = "tax-allocation", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log filter; overrides the config file. `RUST_LOG` overrides both.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate taxes and allocate them across spending categories.
    Calculate(CalculateArgs),

    /// List every jurisdiction with its tax rates.
    Jurisdictions,

    /// List the counties with local data for a jurisdiction.
    Counties {
        /// Two-letter jurisdiction code, e.g. `CA`.
        #[arg(short, long)]
        jurisdiction: String,
    },
}

#[derive(Debug, Args)]
struct CalculateArgs {
    /// Annual household income. Accepts `75,000`.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    income: Decimal,

    /// Assessed property value.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    property_value: Decimal,

    /// Annual taxable spending.
    #[arg(long, value_parser = parse_amount, allow_hyphen_values = true)]
    spending: Decimal,

    /// Two-letter jurisdiction code. Defaults to the configured jurisdiction.
    #[arg(short, long)]
    jurisdiction: Option<String>,

    /// County name for a local tax estimate, e.g. "Los Angeles County".
    #[arg(long)]
    county: Option<String>,

    /// Spending category to break down into subprograms.
    #[arg(long)]
    program: Option<String>,

    /// Print the result as JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

// ─── commands ────────────────────────────────────────────────────────────────

fn calculate(
    data: &ReferenceData,
    args: &CalculateArgs,
) -> Result<()> {
    let code = args
        .jurisdiction
        .as_deref()
        .map(normalize_code)
        .unwrap_or_else(|| data.default_jurisdiction().code.clone());
    let inputs = HouseholdInputs::new(args.income, args.property_value, args.spending);

    let engine = AllocationEngine::new(data);
    let result = engine
        .calculate(&inputs, &code)
        .context("Cannot calculate allocations")?;
    let profile = data.resolve(&code);
    info!(
        jurisdiction = %profile.code,
        total = %result.total_tax,
        "calculated tax allocation"
    );

    let county = args.county.as_deref().and_then(|name| {
        let county = data.county(&profile.code, name);
        if county.is_none() {
            warn!(county = name, jurisdiction = %profile.code, "no local data for county");
        }
        county
    });
    let local = county.map(|c| estimate_local_taxes(c, inputs.property_value, inputs.annual_income));

    let program = args.program.as_deref().and_then(|name| {
        let breakdown = program_breakdown(data, &result, name);
        if breakdown.is_none() {
            warn!(category = name, "no program breakdown for category");
        }
        breakdown
    });

    if args.json {
        let report = CalculationReport {
            jurisdiction_name: &profile.display_name,
            allocation: &result,
            local: local.as_ref(),
            program: program.as_ref(),
        };
        println!("{}", report.to_json().context("Cannot serialize result")?);
        return Ok(());
    }

    println!(
        "{}",
        AllocationView {
            result: &result,
            jurisdiction: profile,
        }
    );
    if let (Some(estimate), Some(county)) = (&local, county) {
        println!("\n{}", LocalView { estimate, county });
    }
    if let Some(breakdown) = &program {
        println!("\n{}", ProgramView(breakdown));
    }
    Ok(())
}

fn counties(
    data: &ReferenceData,
    code: &str,
) -> Result<()> {
    let code = normalize_code(code);
    let jurisdiction = data
        .jurisdiction(&code)
        .with_context(|| format!("Unknown jurisdiction code: {code}"))?;

    println!(
        "{}",
        CountyList {
            jurisdiction,
            counties: data.counties(&code),
        }
    );
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path);
    }
    logging::init_logging(&config.log_level, config.log_file.as_deref())?;
    debug!(?config, "configuration loaded");

    let data = config
        .reference_loader()
        .load()
        .context("Failed to load reference data")?;

    match &cli.command {
        Command::Calculate(args) => calculate(&data, args),
        Command::Jurisdictions => {
            println!("{}", JurisdictionList(data.jurisdictions()));
            Ok(())
        }
        Command::Counties { jurisdiction } => counties(&data, jurisdiction),
    }
}
