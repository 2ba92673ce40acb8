//! Topic Locator - Streams topic files found under the search roots.
//!
//! Each root is walked recursively with `walkdir`, in root order.
//! Directory listings are sorted by file name so repeated runs visit
//! files in the same order. `.git` directories are never entered.
//!
//! # Example
//!
//! ```ignore
//! use docsearch::TopicLocator;
//!
//! let roots = vec![PathBuf::from("/srv/docs")];
//! for topic in TopicLocator::new(&roots).with_topic(Some("git")).topics() {
//!     println!("{}", topic.path().display());
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use super::{TOPIC_EXTENSION, topic_file_name, topic_name};

/// Version-control metadata directory skipped during the walk.
const VCS_DIR: &str = ".git";

/// A topic file: the directory holding it and its file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TopicFile {
    /// Containing directory.
    pub dir: PathBuf,
    /// File name including the `.yaml` suffix.
    pub file_name: String,
}

impl TopicFile {
    /// Full path of the topic file.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Topic name, the file name without its suffix.
    #[must_use]
    pub fn name(&self) -> &str {
        topic_name(&self.file_name)
    }
}

/// Lazily locates topic files across an ordered list of roots.
#[derive(Debug, Clone)]
pub struct TopicLocator<'a> {
    roots: &'a [PathBuf],
    topic_file: Option<String>,
}

impl<'a> TopicLocator<'a> {
    /// Locate every topic file under `roots`.
    #[must_use]
    pub fn new(roots: &'a [PathBuf]) -> Self {
        Self {
            roots,
            topic_file: None,
        }
    }

    /// Restrict the walk to files named `<topic>.yaml`.
    #[must_use]
    pub fn with_topic(mut self, topic: Option<&str>) -> Self {
        self.topic_file = topic.map(topic_file_name);
        self
    }

    /// Iterate over matching topic files.
    ///
    /// Nothing is read up front: directories are listed as the iterator
    /// advances. Unreadable directories and missing roots are logged and
    /// skipped.
    pub fn topics(&self) -> impl Iterator<Item = TopicFile> + '_ {
        self.roots
            .iter()
            .flat_map(|root| walk_root(root))
            .filter_map(move |entry| self.select(&entry))
    }

    fn select(&self, entry: &DirEntry) -> Option<TopicFile> {
        if entry.depth() == 0 || entry.file_type().is_dir() {
            return None;
        }

        let file_name = entry.file_name().to_str()?;
        let selected = match &self.topic_file {
            Some(wanted) => file_name == wanted,
            None => file_name.ends_with(TOPIC_EXTENSION),
        };
        if !selected {
            return None;
        }

        Some(TopicFile {
            dir: entry.path().parent()?.to_path_buf(),
            file_name: file_name.to_string(),
        })
    }
}

fn walk_root(root: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_vcs_dir(entry))
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping unreadable path");
                None
            }
        })
}

fn is_vcs_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == VCS_DIR
}
