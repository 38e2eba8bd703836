use crate::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
pub fn configure_logging(config: &AppConfig) {
    use tracing_subscriber::prelude::*;

    // RUST_LOG wins over the configured level.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    // A second init (tests, hot reload) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn configure_logging(config: &AppConfig) {
    let level = config
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);
    let _ = dioxus::logger::init(level);
}
