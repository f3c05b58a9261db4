use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber, honouring `RUST_LOG` when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("finances=info"));

        // A subscriber installed by the host application takes precedence.
        let _ = fmt().with_env_filter(filter).try_init();
    });
}
