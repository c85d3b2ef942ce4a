//! Gazetteer - Country Statistics from Flat Data Files
//!
//! Loads country data files, reports density extremes and continent
//! populations, and filters catalogues by population density.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gazetteer_catalogue::CountryCatalogue;
use gazetteer_storage::{data_line, read_catalogue, write_catalogue, write_listing};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "gazetteer",
    about = "Country statistics from flat data files",
    version
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every country in a data file
    Show {
        /// Path to the country data file
        data_file: PathBuf,
    },

    /// Report density extremes and the most populous continent
    Report {
        /// Path to the country data file
        data_file: PathBuf,
    },

    /// Keep countries with density inside a half-open range and write them out
    Filter {
        /// Path to the country data file
        data_file: PathBuf,

        /// Lower density bound (inclusive)
        low: f64,

        /// Upper density bound (exclusive)
        high: f64,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write human-readable display lines instead of data records
        #[arg(long)]
        listing: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Show { data_file } => {
            let catalogue = read_catalogue(&data_file)?;
            print!("{catalogue}");
        }

        Commands::Report { data_file } => {
            let catalogue = read_catalogue(&data_file)?;
            report(&catalogue)?;
        }

        Commands::Filter {
            data_file,
            low,
            high,
            output,
            listing,
        } => {
            let catalogue = read_catalogue(&data_file)?;
            let filtered = catalogue.filter_by_density(low, high)?;
            info!(
                kept = filtered.len(),
                total = catalogue.len(),
                "Filtered catalogue by density"
            );

            match output {
                Some(path) if listing => write_listing(&path, &filtered)?,
                Some(path) => write_catalogue(&path, &filtered)?,
                None if listing => print!("{filtered}"),
                None => {
                    for country in &filtered {
                        println!("{}", data_line(country));
                    }
                }
            }
        }
    }

    Ok(())
}

/// Print density extremes and the most populous continent
fn report(catalogue: &CountryCatalogue) -> anyhow::Result<()> {
    println!("Least dense: {}", catalogue.least_dense()?);
    println!("Most dense: {}", catalogue.most_dense()?);
    println!(
        "Most populous continent: {}",
        catalogue.most_populous_continent()?
    );
    Ok(())
}
