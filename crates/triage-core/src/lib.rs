//! Shared foundation for the ticket triage dashboard.
//!
//! Holds the backend wire types, the error taxonomy, configuration loading
//! and the logging bootstrap used by the web crate and its binaries.

#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use types::{CategoryCount, ReviewStatus, Stats, Ticket, TicketList};

/// Initialize the logging system.
///
/// Installs a `tracing` subscriber with an [`EnvFilter`] seeded from
/// `RUST_LOG` when set, falling back to the configured level. The output
/// format (json or text) follows the configuration.
///
/// [`EnvFilter`]: tracing_subscriber::EnvFilter
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(logging: &config::LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| Error::Configuration {
        message: e.to_string(),
    })
}
