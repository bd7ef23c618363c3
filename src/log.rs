// src/log.rs
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over `verbose`.
/// Safe to call more than once (tests, embedding); later calls are ignored.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "congress_trades=debug"
    } else {
        "congress_trades=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
