//! Tracing subscriber setup.

use super::tracer;
use crate::domain::Result;
use crate::infrastructure::TRACE_FILE_NAME;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name stamped on every exported span.
pub const SERVICE_NAME: &str = "zcontact";

/// Filter used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// Pipeline: `EnvFilter` (from `config.trace_level`, default `"info"`) →
/// `tracing-opentelemetry` → file exporter writing
/// `<data dir>/zcontact-otlp.json`.
///
/// Calling it again after a subscriber is installed is a no-op.
///
/// # Errors
///
/// Returns [`crate::ContactError::Io`] when the data directory cannot be
/// created. Tracing stays disabled in that case; the plugin works without it.
pub fn init_tracing(config: &Config) -> Result<()> {
    init_tracing_in(config, &crate::infrastructure::get_data_dir())
}

/// [`init_tracing`] with the trace file placed in `data_dir`.
///
/// # Errors
///
/// Returns [`crate::ContactError::Io`] when `data_dir` cannot be created.
pub fn init_tracing_in(config: &Config, data_dir: &Path) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);

    std::fs::create_dir_all(data_dir)?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();

    tracing::debug!(level, "tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContactError;

    #[test]
    fn unusable_data_dir_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let data_dir = file.path().join("zcontact");

        let result = init_tracing_in(&Config::default(), &data_dir);

        assert!(matches!(result, Err(ContactError::Io(_))));
    }
}
