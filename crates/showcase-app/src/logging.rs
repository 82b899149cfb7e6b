//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::LoggingError;

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `default_level`.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_level).map_err(|source| LoggingError::InvalidFilter {
        filter: default_level.to_string(),
        source,
    })
}

/// Installs the global fmt subscriber.
pub fn init(default_level: &str) -> Result<(), LoggingError> {
    let filter = env_filter(default_level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_default_level() {
        // Only meaningful when RUST_LOG does not override the default.
        if std::env::var_os("RUST_LOG").is_none() {
            let err = env_filter("showcase=loudest").unwrap_err();
            assert!(matches!(err, LoggingError::InvalidFilter { .. }));
        }
    }

    #[test]
    fn test_accepts_plain_level() {
        assert!(env_filter("debug").is_ok());
    }
}
