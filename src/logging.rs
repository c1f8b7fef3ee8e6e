use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "finexp=info";

/// Installs the global fmt subscriber. `RUST_LOG` replaces the filter
/// entirely; without it only `finexp*` targets log, at `info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}

fn filter_from(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
