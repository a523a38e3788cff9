//! Storage locations inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, which points to the cwd of
//! the last focused terminal, or the folder Zellij was started in. Started from
//! a home directory terminal, the paths below resolve under
//! `~/.local/share/zellij/zcontact`.

use std::path::PathBuf;

/// File name of the OTLP trace export.
pub const TRACE_FILE_NAME: &str = "zcontact-otlp.json";

/// Returns the plugin data directory.
///
/// ```
/// use zcontact::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zcontact"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zcontact")
}
