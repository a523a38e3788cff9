//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans recorded with `tracing` are exported in OTLP JSON format to a local
//! file for offline analysis; the plugin sandbox has no collector to send them
//! to.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → zcontact-otlp.json
//! ```
//!
//! - **Location**: `~/.local/share/zellij/zcontact/zcontact-otlp.json`
//! - **Rotation**: at 5 MB, keeping 3 numbered backups
//! - **Level**: `trace_level` plugin option, default `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use zcontact::observability::init_tracing;
//! use zcontact::Config;
//!
//! let config = Config::default();
//! if init_tracing(&config).is_ok() {
//!     tracing::debug!("plugin initialized");
//! }
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{RotatingWriter, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, init_tracing_in, DEFAULT_TRACE_LEVEL, SERVICE_NAME};
