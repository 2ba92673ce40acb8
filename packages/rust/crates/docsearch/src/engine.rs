//! Docsearch engine - dispatches a resolved configuration to one mode.
//!
//! Modes are checked in order, first match wins:
//!
//! 1. `inventory` - sorted unique topic names
//! 2. `env` - `DOCSEARCH_*` report
//! 3. `pwd` with a topic or search term - topic file paths
//! 4. topic or search term - matching entries
//!
//! With none of these, nothing is printed.
//!
//! Failures tied to a single topic file (unreadable, invalid YAML, empty)
//! are written to the output on their own line and the run continues
//! with the next file.

use std::io::{self, Write};

use crate::config::SearchConfig;
use crate::error::TopicError;
use crate::render::EntryFormatter;
use crate::report::write_env_report;
use crate::search::search_topic;
use crate::topics::inventory::gather_inventory;
use crate::topics::locator::{TopicFile, TopicLocator};
use crate::topics::topic_name;

/// Topic search engine bound to one configuration.
#[derive(Debug, Clone)]
pub struct Docsearch {
    config: SearchConfig,
}

impl Docsearch {
    /// Create an engine for `config`.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run the selected mode, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Only write failures on `out` are returned; per-topic failures are
    /// reported inline.
    pub fn execute<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = &self.config;
        let has_target = config.topic.is_some() || config.search_term().is_some();

        if config.inventory {
            self.show_inventory(out)
        } else if config.env {
            write_env_report(out, config)
        } else if config.pwd && has_target {
            self.show_paths(out)
        } else if has_target {
            self.show_topics(out)
        } else {
            tracing::debug!("No topic or search term given, nothing to do");
            Ok(())
        }
    }

    fn locator(&self) -> TopicLocator<'_> {
        TopicLocator::new(&self.config.roots).with_topic(self.config.topic.as_deref())
    }

    fn show_inventory<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for file_name in gather_inventory(&self.config.roots) {
            writeln!(out, "{}", topic_name(&file_name))?;
        }
        Ok(())
    }

    /// Paths of topic files. With a search term, only files holding at
    /// least one matching entry are listed.
    fn show_paths<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for topic in self.locator().topics() {
            if self.config.search_term().is_some() {
                match search_topic(&topic, &self.config) {
                    Ok(entries) if entries.is_empty() => continue,
                    Ok(_) => {}
                    Err(err) => {
                        report_topic_error(out, &topic, &err)?;
                        continue;
                    }
                }
            }
            writeln!(out, "{}", topic.path().display())?;
        }
        Ok(())
    }

    fn show_topics<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let formatter = EntryFormatter::new(&self.config);

        for topic in self.locator().topics() {
            let path = topic.path();
            tracing::debug!(path = %path.display(), "Searching topic");
            let entries = match search_topic(&topic, &self.config) {
                Ok(entries) => entries,
                Err(err) => {
                    report_topic_error(out, &topic, &err)?;
                    continue;
                }
            };

            for entry in &entries {
                match formatter.format(topic.name(), entry) {
                    Ok(block) => out.write_all(block.as_bytes())?,
                    Err(err) => report_topic_error(out, &topic, &err)?,
                }
            }
        }
        Ok(())
    }
}

fn report_topic_error<W: Write>(
    out: &mut W,
    topic: &TopicFile,
    err: &TopicError,
) -> io::Result<()> {
    let path = topic.path();
    tracing::debug!(path = %path.display(), error = %err, "Topic skipped");
    writeln!(out, "{err}")
}
