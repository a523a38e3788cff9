//! Filesystem locations in the Zellij plugin sandbox.

pub mod paths;

pub use paths::{get_data_dir, TRACE_FILE_NAME};
