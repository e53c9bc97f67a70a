use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "power-climate")]
#[command(about = "Fetch and normalize NASA POWER daily point climate data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file overriding the built-in settings (TOML, JSON or YAML)"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download one raw response file per configured location
    Fetch {
        #[arg(short, long, help = "Directory for raw response files")]
        output_dir: Option<PathBuf>,
    },

    /// Clean raw response files and write the consolidated table
    Normalize {
        #[arg(short, long, help = "Directory containing raw response files")]
        input_dir: Option<PathBuf>,

        #[arg(short, long, help = "Directory for cleaned and consolidated files")]
        output_dir: Option<PathBuf>,

        #[arg(short, long, help = "Region name used in the consolidated file name")]
        region: Option<String>,
    },

    /// Fetch, then normalize what was fetched
    Pipeline,

    /// Average a location's cleaned values for the day of year of a date
    Lookup {
        #[arg(short, long, help = "Location name, e.g. 'Lima Metropolitana'")]
        location: String,

        #[arg(short, long, help = "Calendar date (YYYY-MM-DD)")]
        date: NaiveDate,

        #[arg(long, help = "Directory containing cleaned files")]
        data_dir: Option<PathBuf>,
    },
}
