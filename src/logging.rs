//! Logging initialisation.
//!
//! Built on `tracing-subscriber`. `RUST_LOG`, when set, takes precedence over
//! the levels in [`LogConfig`].

use std::{io, sync::Once};

use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::{LogConfig, LogFormat};

static LOGGING_INIT: Once = Once::new();

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(log_config: &LogConfig) {
    LOGGING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(create_format_layer(log_config.format).with_filter(EnvFilter::from_default_env()))
                .init();
            return;
        }

        let targets = Targets::new()
            .with_default(log_config.global)
            .with_target(
                crate::lexer::LOG_TARGET,
                log_config.level_for(crate::lexer::LOG_TARGET),
            );

        tracing_subscriber::registry()
            .with(create_format_layer(log_config.format).with_filter(targets))
            .init();
    });
}

/// Create formatter layer based on format
fn create_format_layer<S>(format: LogFormat) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
    }
}
