use crate::analyzers::DoyLookup;
use crate::cli::args::{Cli, Commands};
use crate::config::{FetchSettings, NormalizeSettings, Settings};
use crate::error::Result;
use crate::fetcher::{FetchReport, Fetcher};
use crate::processors::{NormalizeReport, Normalizer};
use crate::utils::logging::init_logging;
use crate::utils::progress::ProgressReporter;

pub async fn run(cli: Cli) -> Result<()> {
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;
    let mut settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Fetch { output_dir } => {
            if let Some(dir) = output_dir {
                settings.fetch.output_dir = dir;
            }
            run_fetch(settings.fetch).await?;
        }

        Commands::Normalize {
            input_dir,
            output_dir,
            region,
        } => {
            if let Some(dir) = input_dir {
                settings.normalize.input_dir = dir;
            }
            if let Some(dir) = output_dir {
                settings.normalize.output_dir = dir;
            }
            if let Some(region) = region {
                settings.normalize.region = region;
            }
            run_normalize(settings.normalize)?;
        }

        Commands::Pipeline => {
            settings.normalize.input_dir = settings.fetch.output_dir.clone();
            run_fetch(settings.fetch).await?;
            run_normalize(settings.normalize)?;
        }

        Commands::Lookup {
            location,
            date,
            data_dir,
        } => {
            let data_dir = data_dir.unwrap_or(settings.normalize.output_dir);
            let result = DoyLookup::new(&data_dir).lookup(&location, date)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

/// Run the fetch stage with console progress and a closing summary
pub async fn run_fetch(settings: FetchSettings) -> Result<FetchReport> {
    println!("Fetching {} locations...", settings.locations.len());
    println!("Output directory: {}", settings.output_dir.display());
    println!(
        "Window: {} to {}",
        settings.window.start_date, settings.window.end_date
    );

    let progress = ProgressReporter::new(settings.locations.len() as u64, "Fetching", false);
    let fetcher = Fetcher::from_settings(settings)?;
    let report = fetcher.run(Some(&progress)).await?;
    progress.finish_with_message("Fetch finished");

    println!("\n{}", report.summary());
    Ok(report)
}

/// Run the normalize stage with console progress and a closing summary
pub fn run_normalize(settings: NormalizeSettings) -> Result<NormalizeReport> {
    println!("Input directory: {}", settings.input_dir.display());
    println!("Output directory: {}", settings.output_dir.display());

    let normalizer = Normalizer::new(settings);
    let total = normalizer.discover_files().map(|f| f.len()).unwrap_or(0);

    let progress = ProgressReporter::new(total as u64, "Cleaning", false);
    let report = normalizer.run(Some(&progress))?;
    progress.finish_with_message("Cleaning finished");

    println!("\n{}", report.summary());
    Ok(report)
}
