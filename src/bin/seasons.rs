use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sky_almanac::almanac::season_report;
use sky_almanac::config::{AlmanacSettings, load_settings};
use sky_almanac::frames::PrecessionModel;

/// Equinox and solstice instants of a year, in UTC.
#[derive(Parser, Debug)]
#[command(author, version, about = "Equinoxes and solstices (UTC)")]
struct Cli {
    /// Calendar year
    #[arg(long, allow_hyphen_values = true)]
    year: i32,

    /// Precession model (defaults to the settings file, then IAU1976)
    #[arg(long)]
    precession: Option<PrecessionModel>,

    /// Convergence threshold in seconds (defaults to the settings file, then 0.1)
    #[arg(long)]
    precision: Option<f64>,

    /// Settings file (TOML or YAML mapping)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log debug diagnostics
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    sky_almanac::init_logging(cli.verbose);

    let settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => AlmanacSettings::default(),
    };
    let model = match cli.precession {
        Some(model) => model,
        None => settings.precession_model()?,
    };
    let mut search = settings.season_settings();
    if let Some(precision) = cli.precision {
        anyhow::ensure!(precision > 0.0, "--precision must be positive, got {precision}");
        search.precision_seconds = precision;
    }

    let events = season_report(cli.year, model, &search)
        .with_context(|| format!("searching equinoxes and solstices of {}", cli.year))?;

    for event in events {
        let flag = if event.converged { "" } else { " (not converged)" };
        println!(
            "{:<18} {} UTC{flag}",
            event.season.name(),
            event.time.format("%Y-%m-%d %H:%M:%S")
        );
    }
    Ok(())
}
