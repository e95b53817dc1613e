//! Configuration models and loaders for Sky Almanac.

use std::fs::File;
use std::path::{Path, PathBuf};

use almanac_events::{Observer, SeasonSettings, TwilightKind};
use almanac_frames::{FrameError, PrecessionModel};
use serde::Deserialize;
use thiserror::Error;

/// Observing site parsed from an observer catalog.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ObserverConfig {
    pub name: String,
    pub latitude_deg: f64,
    /// East positive.
    pub longitude_deg: f64,
    pub utc_offset_hours: f64,
}

impl ObserverConfig {
    pub fn observer(&self) -> Observer {
        Observer::from_degrees(self.latitude_deg, self.longitude_deg, self.utc_offset_hours)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidObserver {
            name: self.name.clone(),
            reason,
        };
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(invalid(format!("latitude {} out of range", self.latitude_deg)));
        }
        if !(-180.0..=360.0).contains(&self.longitude_deg) {
            return Err(invalid(format!("longitude {} out of range", self.longitude_deg)));
        }
        if !(-14.0..=14.0).contains(&self.utc_offset_hours) {
            return Err(invalid(format!("UTC offset {} h out of range", self.utc_offset_hours)));
        }
        Ok(())
    }
}

/// Model choices and search tolerances.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlmanacSettings {
    pub precession: String,
    pub twilight: String,
    pub golden_precision_hours: f64,
    pub golden_max_steps: usize,
    pub equinox_precision_seconds: f64,
    pub equinox_max_iterations: usize,
}

impl Default for AlmanacSettings {
    fn default() -> Self {
        Self {
            precession: "IAU1976".to_string(),
            twilight: "civil".to_string(),
            golden_precision_hours: 1e-6,
            golden_max_steps: 50,
            equinox_precision_seconds: 0.1,
            equinox_max_iterations: 50,
        }
    }
}

impl AlmanacSettings {
    pub fn precession_model(&self) -> Result<PrecessionModel, ConfigError> {
        Ok(self.precession.parse::<PrecessionModel>()?)
    }

    pub fn twilight_kind(&self) -> Result<TwilightKind, ConfigError> {
        self.twilight
            .parse::<TwilightKind>()
            .map_err(ConfigError::Invalid)
    }

    pub fn season_settings(&self) -> SeasonSettings {
        SeasonSettings {
            precision_seconds: self.equinox_precision_seconds,
            max_iterations: self.equinox_max_iterations,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.precession_model()?;
        self.twilight_kind()?;
        if !(self.golden_precision_hours > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "golden_precision_hours must be positive, got {}",
                self.golden_precision_hours
            )));
        }
        if !(self.equinox_precision_seconds > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "equinox_precision_seconds must be positive, got {}",
                self.equinox_precision_seconds
            )));
        }
        if self.golden_max_steps == 0 || self.equinox_max_iterations == 0 {
            return Err(ConfigError::Invalid(
                "iteration budgets must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Model(#[from] FrameError),
    #[error("invalid settings: {0}")]
    Invalid(String),
    #[error("observer `{name}`: {reason}")]
    InvalidObserver { name: String, reason: String },
    #[error("observer `{0}` not found")]
    MissingObserver(String),
}

/// Load observer records from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_observers<P: AsRef<Path>>(path: P) -> Result<Vec<ObserverConfig>, ConfigError> {
    let observers: Vec<ObserverConfig> = load_records(path)?;
    for observer in &observers {
        observer.validate()?;
    }
    Ok(observers)
}

/// Load a single settings record. A YAML file holds a mapping, not a list.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<AlmanacSettings, ConfigError> {
    let path = path.as_ref();
    let settings: AlmanacSettings = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    settings.validate()?;
    Ok(settings)
}

/// Find an observer by name, ignoring ASCII case.
pub fn find_observer<'a>(
    observers: &'a [ObserverConfig],
    name: &str,
) -> Result<&'a ObserverConfig, ConfigError> {
    observers
        .iter()
        .find(|o| o.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ConfigError::MissingObserver(name.to_string()))
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    entries
        .iter()
        .map(|path| -> Result<T, ConfigError> {
            Ok(toml::from_str(&std::fs::read_to_string(path)?)?)
        })
        .collect()
}
