use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and default to `info` for this crate with
/// Serenity's gateway chatter reduced to warnings.
pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,serenity=warn,tracing::span=warn")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
