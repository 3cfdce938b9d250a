//! Logging setup for the command-line binary.
//!
//! The library only emits `tracing` events and `log` records; installing a
//! subscriber is left to the binary. `log` records are bridged into the
//! subscriber by tracing-subscriber's `tracing-log` integration.
//!
//! Filter resolution:
//!
//! - `ESGSCORE_LOG` when set (any `EnvFilter` directive string)
//! - otherwise the `-v` count: warn, info, debug, trace

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV_VAR: &str = "ESGSCORE_LOG";

/// Default directive for a verbosity count.
pub fn verbosity_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "esgscore=info,warn",
        2 => "esgscore=debug,info",
        _ => "trace",
    }
}

/// Build the filter from the environment, falling back to the verbosity.
pub fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_directive(verbosity)))
}

/// Install the global subscriber writing to stderr. Calling it twice is
/// harmless; the second call is ignored.
pub fn init_tracing(verbosity: u8) {
    let result = tracing_subscriber::registry()
        .with(build_filter(verbosity))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbosity >= 2),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(2), "esgscore=debug,info");
        assert_eq!(verbosity_directive(9), "trace");
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_tracing(0);
        init_tracing(1);
    }
}
