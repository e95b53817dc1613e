//! Sky Almanac: apparent positions of the Sun and planets and the daily events derived from
//! them.
//!
//! The computation lives in the workspace crates re-exported below; this crate adds the
//! daily-report facade shared by the command-line tools.

pub mod almanac;

pub use almanac_config as config;
pub use almanac_core as core;
pub use almanac_ephemeris as ephemeris;
pub use almanac_events as events;
pub use almanac_export as export;
pub use almanac_frames as frames;
pub use almanac_search as search;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the process logger. `RUST_LOG` overrides the level chosen here.
pub fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
