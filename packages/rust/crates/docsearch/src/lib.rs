//! Docsearch - lookup over directories of YAML topic documents.
//!
//! A topic is one `<name>.yaml` file holding categorized entries
//! (`links`, `cheats`, `glossary`). Each entry carries a `description`
//! and a list of `data` lines. The engine walks the configured roots,
//! filters topics and entries, and prints the survivors as text blocks
//! or JSON lines.
//!
//! # Architecture
//!
//! ```text
//! docsearch/src/
//! ├── lib.rs              # Module declarations and exports
//! ├── error.rs            # ConfigError, TopicError
//! ├── config.rs           # SearchConfig resolved from env + CLI
//! ├── topics/             # Topic discovery
//! │   ├── mod.rs
//! │   ├── locator.rs      # Recursive walk yielding TopicFile
//! │   └── inventory.rs    # Sorted, deduplicated topic listing
//! ├── document.rs         # Category, Entry, TopicDocument parsing
//! ├── search.rs           # Category + substring filtering pipeline
//! ├── render.rs           # Text / colored / JSON formatting
//! ├── report.rs           # DOCSEARCH_* environment report
//! └── engine.rs           # Mode dispatch
//! ```
//!
//! # Topic format
//!
//! ```yaml
//! cheats:
//!   - description: list files sorted by modification time
//!     data:
//!       - ls -lt
//! links:
//!   - description: Rust language home page
//!     data:
//!       - https://www.rust-lang.org/
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod render;
pub mod report;
pub mod search;
pub mod topics;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{CategoryFlags, EnvSnapshot, SearchConfig, SearchOptions};
pub use document::{Category, Entry, Section, TopicDocument};
pub use engine::Docsearch;
pub use error::{ConfigError, TopicError};
pub use render::{EntryFormatter, Message};
pub use search::{SearchFilter, search_topic};
pub use topics::{
    TOPIC_EXTENSION,
    inventory::gather_inventory,
    locator::{TopicFile, TopicLocator},
};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
