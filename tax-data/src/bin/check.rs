use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tax_core::Bucket;
use tax_data::ReferenceDataLoader;

/// Validate reference data CSV files for the tax allocation engine.
///
/// Each file is optional; tables without a file fall back to the built-in
/// data, and the assembled set is validated as a whole.
#[derive(Parser, Debug)]
#[command(name = "tax-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Jurisdictions CSV (code,name,income_tax_rate,sales_tax_rate,property_tax_rate)
    #[arg(short, long)]
    jurisdictions: Option<PathBuf>,

    /// Category weights CSV (bucket,category,share,color)
    #[arg(short = 'w', long)]
    category_weights: Option<PathBuf>,

    /// Federal brackets CSV (min_income,max_income,base_tax,rate)
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Jurisdiction code used when a lookup misses
    #[arg(short, long)]
    default_jurisdiction: Option<String>,
}

impl From<Args> for ReferenceDataLoader {
    fn from(args: Args) -> Self {
        ReferenceDataLoader {
            jurisdictions: args.jurisdictions,
            category_weights: args.category_weights,
            brackets: args.brackets,
            default_jurisdiction: args.default_jurisdiction,
        }
    }
}

fn main() -> Result<()> {
    let loader = ReferenceDataLoader::from(Args::parse());

    let data = loader.load().context("Reference data failed validation")?;

    println!("Reference data is valid.");
    println!("  jurisdictions:        {}", data.jurisdictions().len());
    println!(
        "  default jurisdiction: {} ({})",
        data.default_jurisdiction().code,
        data.default_jurisdiction().display_name
    );
    println!("  federal categories:   {}", data.weights(Bucket::Federal).len());
    println!(
        "  state/local categories: {}",
        data.weights(Bucket::StateLocal).len()
    );
    println!("  federal brackets:     {}", data.brackets().len());

    Ok(())
}
