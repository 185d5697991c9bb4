//! Logging initialization
//!
//! The library only emits `tracing` events; binaries pick a profile here.
//! `RUST_LOG` overrides the profile's default filter.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

/// Logging profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Warnings only, human-readable
    Quiet,
    /// Debug output showing each resolver fallback
    Verbose,
    /// JSON structured output at info level
    Json,
}

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let default_filter = match profile {
            Profile::Quiet => "tardis=warn",
            Profile::Verbose => "tardis=debug",
            Profile::Json => "tardis=info",
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let result = match profile {
            Profile::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        // Another subscriber may already be installed, e.g. by a test harness.
        if let Err(e) = result {
            eprintln!("tardis: logging not initialised: {}", e);
        }
    });
}
