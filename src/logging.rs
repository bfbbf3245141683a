// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup for the binary.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. The filter is read from `FRONTKIT_LOG` using the
//! usual `EnvFilter` directive syntax (`frontkit=debug`, `warn`, ...).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const ENV_LOG_FILTER: &str = "FRONTKIT_LOG";

/// Filter used when `FRONTKIT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "frontkit=info";

/// Builds the filter from `FRONTKIT_LOG`, falling back to
/// [`DEFAULT_LOG_FILTER`].
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a formatting subscriber writing to stderr.
///
/// Returns `false` if a global subscriber was already set.
pub fn init() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _ = init();
        assert!(!init());
    }
}
