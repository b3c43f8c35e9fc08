//! # holiday CLI entry point
//!
//! Thin front end over the `holiday-engine` crate: every date comes from
//! the library, the binary only parses arguments and formats output.

use anyhow::Context;
use clap::{Parser, Subcommand};
use holiday_engine::{resolve, us_federal_holidays};

/// Resolve free-text holiday rules to concrete calendar dates.
///
/// Rules use one of two grammars: "3rd Monday in January" (optionally with
/// a signed day offset, "4th Thu in Nov -1") or "July 4th" (optionally
/// "July 4th Observance" to shift weekend dates to the nearest weekday).
#[derive(Parser)]
#[command(name = "holiday", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one rule for one year.
    Resolve {
        /// Rule text, e.g. "3rd Monday in January" or "July 4th Observance".
        config: String,
        /// Target year, 1970 through 2200.
        year: i32,
        /// Emit a JSON object instead of a bare date.
        #[arg(long)]
        json: bool,
    },
    /// Print the US federal holiday calendar for a year.
    Federal {
        /// Target year, 1970 through 2200.
        year: i32,
        /// Emit a JSON array instead of a date-description listing.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { config, year, json } => {
            let date = resolve(&config, year)
                .with_context(|| format!("cannot resolve {config:?} for {year}"))?;
            if json {
                println!(
                    "{}",
                    serde_json::json!({ "config": config, "year": year, "date": date })
                );
            } else {
                println!("{date}");
            }
        }
        Commands::Federal { year, json } => {
            let mut calendar = Vec::new();
            for holiday in us_federal_holidays() {
                let date = holiday.date_for_year(year).with_context(|| {
                    format!("cannot resolve {:?} for {year}", holiday.description())
                })?;
                calendar.push((holiday, date));
            }
            // Observance can pull New Year's Day into the prior December;
            // print strictly by resolved date.
            calendar.sort_by_key(|&(_, date)| date);
            if json {
                let entries: Vec<_> = calendar
                    .iter()
                    .map(|(holiday, date)| {
                        serde_json::json!({
                            "description": holiday.description(),
                            "config": holiday.config(),
                            "date": date,
                        })
                    })
                    .collect();
                println!("{}", serde_json::Value::Array(entries));
            } else {
                for (holiday, date) in calendar {
                    println!("{date}  {}", holiday.description());
                }
            }
        }
    }

    Ok(())
}
