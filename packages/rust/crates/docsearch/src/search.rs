//! Entry filtering.
//!
//! Loads a topic file, narrows it to the requested category and keeps
//! the entries whose description contains the search term.

use crate::config::SearchConfig;
use crate::document::{Entry, TopicDocument};
use crate::error::TopicError;
use crate::topics::locator::TopicFile;

/// Case-sensitive substring filter on entry descriptions.
///
/// An empty term matches every entry.
#[derive(Debug, Clone, Copy)]
pub struct SearchFilter<'a> {
    term: &'a str,
}

impl<'a> SearchFilter<'a> {
    /// Filter on `term`.
    #[must_use]
    pub fn new(term: &'a str) -> Self {
        Self { term }
    }

    /// Whether `entry` passes the filter.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        self.term.is_empty() || entry.description.contains(self.term)
    }
}

/// Entries of `topic` that pass the category and substring filters.
///
/// # Errors
///
/// Any [`TopicError`] raised while reading or parsing the file.
pub fn search_topic(topic: &TopicFile, config: &SearchConfig) -> Result<Vec<Entry>, TopicError> {
    let document = TopicDocument::load(&topic.path())?;
    let filter = SearchFilter::new(&config.search);

    Ok(document
        .sections(config.categories)
        .into_iter()
        .flat_map(|section| section.entries)
        .filter(|entry| filter.matches(entry))
        .collect())
}
