// src/paths.rs
use std::path::{Path, PathBuf};

/// Directory containing this library crate.
pub fn lib_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// The checkout root two levels above the library: the directory that
/// carries the debug output directory and the status-mail config files.
pub fn install_root() -> PathBuf {
    let root = lib_root();
    root.parent()
        .and_then(Path::parent)
        .unwrap_or_else(|| Path::new("/"))
        .to_path_buf()
}

/// Directory for debug output, beside the install root.
///
/// The path is computed only; it is never created or checked for existence.
pub fn debug_dir() -> PathBuf {
    install_root().join("exptrack_debug")
}
