pub use tracing::{debug, error, info, warn, trace, instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

const DEFAULT_FILTER: &str = "info";

/// Installs the global subscriber. Panics if one is already set.
pub fn init() {
    if let Err(e) = try_init() {
        panic!("failed to install tracing subscriber: {}", e);
    }
}

/// Installs the global subscriber, reporting an error if one is already set.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. When debug
/// output is enabled, span close events (with per-frame stage timings)
/// are printed too.
pub fn try_init() -> Result<(), TryInitError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let span_events = if env_filter.to_string().contains("debug") {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = try_init();
        assert!(try_init().is_err());
    }
}
