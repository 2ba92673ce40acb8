//! Shared fixtures for docsearch integration tests.
//!
//! Mirrors the environment a user would set: `DOCSEARCH_PATH` pointing at
//! the fixture roots, color overrides explicitly off.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use docsearch::config::{COLORED_VAR, MCOLORED_VAR, PATH_VAR};
use docsearch::{Docsearch, EnvSnapshot, SearchConfig, SearchOptions};

/// Directory holding the static topic fixtures.
pub fn testdata_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
}

/// Environment snapshot for `roots` with both color overrides set to `0`.
pub fn env_for(roots: &[PathBuf]) -> EnvSnapshot {
    let joined = roots
        .iter()
        .map(|root| root.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(":");
    EnvSnapshot::from_vars([
        (PATH_VAR.to_string(), joined),
        (COLORED_VAR.to_string(), "0".to_string()),
        (MCOLORED_VAR.to_string(), "0".to_string()),
    ])
}

/// Run the engine over `roots` and capture its output.
pub fn run_with_roots(roots: &[PathBuf], options: SearchOptions) -> String {
    let config = SearchConfig::from_sources(options, env_for(roots)).unwrap();
    let mut out = Vec::new();
    Docsearch::new(config).execute(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Run the engine over the fixture directory.
pub fn run(options: SearchOptions) -> String {
    run_with_roots(&[testdata_root()], options)
}

/// Options restricted to `topic`.
pub fn topic(name: &str) -> SearchOptions {
    SearchOptions {
        topic: Some(name.to_string()),
        ..SearchOptions::default()
    }
}

/// Options searching for `term` in every topic.
pub fn search(term: &str) -> SearchOptions {
    SearchOptions {
        search: Some(term.to_string()),
        ..SearchOptions::default()
    }
}

/// Copy a fixture topic into `dir`.
pub fn copy_fixture(name: &str, dir: &Path) {
    fs::create_dir_all(dir).unwrap();
    fs::copy(testdata_root().join(name), dir.join(name)).unwrap();
}
