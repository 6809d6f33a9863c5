use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "phrase_notifier=info";

/// `RUST_LOG` takes precedence over the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!("Successfully setup tracing subscriber.");
}
