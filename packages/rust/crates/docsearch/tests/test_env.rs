//! Tests for the `--env` report.

mod common;

use common::{run, testdata_root};
use docsearch::SearchOptions;

fn env_mode() -> SearchOptions {
    SearchOptions {
        env: true,
        ..SearchOptions::default()
    }
}

/// Test the report mentions each variable and its resolved value.
#[test]
fn test_show_env() {
    let out = run(env_mode());
    assert!(!out.is_empty());

    let root = testdata_root().display().to_string();
    let expected = [
        "DOCSEARCH_MCOLORED",
        "DOCSEARCH_COLORED",
        "DOCSEARCH_PATH",
        "color mode disabled",
        root.as_str(),
    ];
    for fragment in expected {
        assert!(out.contains(fragment), "missing {fragment:?} in {out:?}");
    }
}

/// Test colored output turns the report keys into info messages.
#[test]
fn test_show_env_colored() {
    let out = run(SearchOptions {
        colored: true,
        ..env_mode()
    });
    assert!(out.contains("\x1b[34;1m[*]\x1b[0m DOCSEARCH_COLORED\ncolor mode enabled\n"));
    assert!(out.contains("\x1b[34;1m[*]\x1b[0m DOCSEARCH_MCOLORED\ncolor mode disabled\n"));
}
