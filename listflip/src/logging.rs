//! Diagnostic tracing for listflip.
//!
//! Results go to stdout; diagnostics go to stderr so printed answers stay
//! machine-comparable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose { "listflip=debug" } else { "warn" }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over `--verbose`. Output: stderr, compact, no timestamps.
///
/// # Example
/// ```bash
/// RUST_LOG=listflip=trace listflip check boolean_list_test 0 "[False, False]"
/// ```
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(verbose)
                .compact(),
        )
        .try_init();
}
