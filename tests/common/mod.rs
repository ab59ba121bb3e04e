//! Shared helpers for integration tests.

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

/// Path to a compiled binary of this crate.
///
/// Binaries are built into target/debug by `cargo test`.
pub fn binary_path(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("target");
    path.push("debug");
    path.push(name);
    path
}

/// Helper to create a temporary file with content
pub fn create_temp_file(content: &str, extension: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
