use std::path::PathBuf;

use anyhow::Context;
use chrono::{NaiveDate, TimeDelta};
use clap::{Parser, ValueEnum};
use sky_almanac::almanac::{Body, CulminationSearch, day_report};
use sky_almanac::config::{AlmanacSettings, find_observer, load_observers, load_settings};
use sky_almanac::events::{Observer, TwilightKind};
use sky_almanac::export::{write_events_csv, write_events_json, writer_for_path};
use sky_almanac::frames::PrecessionModel;

/// Rise, set, twilight, and culmination tables of the Sun or Moon for an observer.
#[derive(Parser, Debug)]
#[command(author, version, about = "Daily Sun and Moon almanac (rise/set, twilight, culmination)")]
struct Cli {
    /// Observer name from the catalog given by --observers (case-insensitive)
    #[arg(long, requires = "observers")]
    observer: Option<String>,

    /// Observer catalog: YAML list, TOML file, or directory of TOML files
    #[arg(long)]
    observers: Option<PathBuf>,

    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, conflicts_with = "observer")]
    lat: Option<f64>,

    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, conflicts_with = "observer")]
    lon: Option<f64>,

    /// Local time minus UTC in hours
    #[arg(long, allow_hyphen_values = true, default_value_t = 0.0)]
    utc_offset: f64,

    /// First local date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// Number of consecutive days
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Body: `sun` (reduced Kepler Earth), `sun-fast`, or `moon`
    #[arg(long, default_value = "sun")]
    body: Body,

    /// Precession model (defaults to the settings file, then IAU1976)
    #[arg(long)]
    precession: Option<PrecessionModel>,

    /// Twilight kind: civil, nautical, or astronomical
    #[arg(long)]
    twilight: Option<TwilightKind>,

    /// Settings file (TOML or YAML mapping)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Log debug diagnostics
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Format {
    Csv,
    Json,
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
    let twilight = match cli.twilight {
        Some(kind) => kind,
        None => settings.twilight_kind()?,
    };
    let culmination = CulminationSearch {
        precision_hours: settings.golden_precision_hours,
        max_steps: settings.golden_max_steps,
    };

    let (name, observer) = resolve_observer(&cli)?;

    let mut rows = Vec::new();
    for offset in 0..cli.days {
        let date = cli
            .date
            .checked_add_signed(TimeDelta::days(i64::from(offset)))
            .ok_or_else(|| anyhow::anyhow!("date range overflows the calendar"))?;
        let report = day_report(date, observer, model, cli.body, twilight, culmination)
            .with_context(|| format!("computing {} events for {date}", cli.body))?;
        rows.extend(report.rows(&name));
    }

    let writer = writer_for_path(&cli.output)
        .with_context(|| format!("opening {}", cli.output.display()))?;
    match cli.format {
        Format::Csv => write_events_csv(writer, &rows)?,
        Format::Json => write_events_json(writer, &rows)?,
    }
    Ok(())
}

fn resolve_observer(cli: &Cli) -> anyhow::Result<(String, Observer)> {
    if let Some(name) = &cli.observer {
        let path = cli
            .observers
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("--observer requires --observers"))?;
        let observers = load_observers(path)
            .with_context(|| format!("loading observers from {}", path.display()))?;
        let config = find_observer(&observers, name)?;
        return Ok((config.name.clone(), config.observer()));
    }
    match (cli.lat, cli.lon) {
        (Some(lat), Some(lon)) => Ok((
            format!("{lat:.4},{lon:.4}"),
            Observer::from_degrees(lat, lon, cli.utc_offset),
        )),
        _ => Err(anyhow::anyhow!(
            "either --observer with --observers, or both --lat and --lon, are required"
        )),
    }
}
