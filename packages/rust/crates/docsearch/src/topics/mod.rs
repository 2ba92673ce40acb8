//! Topic discovery.
//!
//! Walks the search roots for `*.yaml` topic files, either streaming
//! them for search or collecting a deduplicated inventory.

pub mod inventory;
pub mod locator;

/// File suffix identifying topic documents.
pub const TOPIC_EXTENSION: &str = ".yaml";

/// Topic name of a file name, suffix stripped.
#[must_use]
pub fn topic_name(file_name: &str) -> &str {
    file_name.strip_suffix(TOPIC_EXTENSION).unwrap_or(file_name)
}

/// File name backing the topic `name`.
#[must_use]
pub fn topic_file_name(name: &str) -> String {
    format!("{name}{TOPIC_EXTENSION}")
}
