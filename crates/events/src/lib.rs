//! Time-based astronomical events derived from apparent positions.
//!
//! Every search takes a position function `Fn(JT) -> Result<Vector, EphemerisError>` that
//! returns the apparent geocentric equatorial vector of the body. Building it from a
//! [`PositionEphemeris`](almanac_ephemeris::PositionEphemeris) session anchored at
//! [`LocalDay::anchor_jt`] is the usual route.

pub mod culmination;
pub mod observer;
pub mod riseset;
pub mod seasons;
pub mod twilight;

use almanac_core::time::TimeError;
use almanac_ephemeris::EphemerisError;
use almanac_search::SearchError;
use thiserror::Error;

pub use culmination::{Culmination, CulminationPoint, find_culmination};
pub use observer::{LocalDay, ObjectType, Observer};
pub use riseset::{RiseSetResult, find_rise_set};
pub use seasons::{Season, SeasonEvent, SeasonSettings, find_equinox_solstice, find_equinox_solstice_year};
pub use twilight::{TwilightKind, TwilightResult, find_twilight};

/// Errors surfaced by event searches.
#[derive(Debug, Error)]
pub enum EventError {
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error(transparent)]
    Time(#[from] TimeError),
}
