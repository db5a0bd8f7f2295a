use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use durphrase::config;
use durphrase::input::{parse_seconds, Input};
use durphrase::logging::{init_logger, level_from_str};
use durphrase::{breakdown_with, format_duration_with, FormatOptions, TimeUnit};
use log::debug;

#[derive(Parser)]
#[command(name = "durphrase")]
#[command(about = "Turn a number of seconds into a readable phrase", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format one or more durations
    Format {
        /// Seconds ("3662") or a span ("1h 1m 2s")
        #[arg(required = true, allow_hyphen_values = true)]
        values: Vec<String>,
        /// Print the unit breakdown as JSON
        #[arg(long)]
        json: bool,
        /// Keep only the N largest units
        #[arg(short, long)]
        max_units: Option<usize>,
    },
    /// Time elapsed since an RFC 3339 timestamp
    Since {
        /// e.g. 2024-05-01T09:30:00Z
        timestamp: String,
        /// Keep only the N largest units
        #[arg(short, long)]
        max_units: Option<usize>,
    },
    /// List the units and their size in seconds
    Units,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;
    init_logger(level_from_str(&config.log_level));
    debug!("loaded config: {:?}", config);

    match cli.command {
        Commands::Format {
            values,
            json,
            max_units,
        } => {
            let options = FormatOptions {
                max_units: max_units.or(config.max_units),
            };
            for value in &values {
                let seconds = parse_seconds(value)?;
                debug!("'{}' parsed as {}s", value, seconds);
                if json {
                    let breakdown = breakdown_with(seconds, &options)?;
                    println!("{}", serde_json::to_string_pretty(&breakdown)?);
                } else {
                    println!("{}", format_duration_with(seconds, &options)?);
                }
            }
        }
        Commands::Since {
            timestamp,
            max_units,
        } => {
            let options = FormatOptions {
                max_units: max_units.or(config.max_units),
            };
            let seconds = Input::Since(timestamp).resolve(Utc::now())?;
            println!("{}", format_duration_with(seconds, &options)?);
        }
        Commands::Units => {
            for unit in TimeUnit::ALL {
                println!("{:<8}{}", unit, unit.seconds());
            }
        }
    }

    Ok(())
}
