//! Output formatting.
//!
//! Colors are plain ANSI SGR sequences (`ESC[<code>m ... ESC[0m`); the
//! exact bytes are part of the output format, so no terminal detection
//! is done here.

use crate::config::SearchConfig;
use crate::document::Entry;
use crate::error::TopicError;

/// Bold ANSI color codes, without the leading `ESC[`.
pub mod ansi {
    /// Bold red, used for matched terms.
    pub const RED: &str = "31;1m";
    /// Bold blue, used for informational prefixes.
    pub const BLUE: &str = "34;1m";
    /// Bold yellow, used for topic tags.
    pub const YELLOW: &str = "33;1m";
    /// Reset sequence.
    pub const RESET: &str = "\x1b[0m";
}

/// Status lines and highlighting helpers.
#[derive(Debug, Clone, Copy)]
pub struct Message;

impl Message {
    /// `state` wrapped in `color`, followed by `message`.
    #[must_use]
    pub fn custom(state: &str, message: &str, color: &str) -> String {
        format!("\x1b[{color}{state}{} {message}", ansi::RESET)
    }

    /// `[*] message`, blue prefix when colored.
    #[must_use]
    pub fn info(message: &str, colored: bool) -> String {
        let state = "[*]";
        if colored {
            Self::custom(state, message, ansi::BLUE)
        } else {
            format!("{state} {message}")
        }
    }

    /// Wrap every occurrence of `term` in `message` in red.
    #[must_use]
    pub fn matched(message: &str, term: &str) -> String {
        if term.is_empty() {
            return message.to_string();
        }
        let highlighted = format!("\x1b[{}{term}{}", ansi::RED, ansi::RESET);
        message.replace(term, &highlighted)
    }
}

/// Formats entries according to the output flags of a [`SearchConfig`].
#[derive(Debug, Clone, Copy)]
pub struct EntryFormatter<'a> {
    colored: bool,
    matched: bool,
    json: bool,
    search: &'a str,
}

impl<'a> EntryFormatter<'a> {
    /// Formatter for `config`'s output mode.
    #[must_use]
    pub fn new(config: &'a SearchConfig) -> Self {
        Self {
            colored: config.colored,
            matched: config.matched,
            json: config.json,
            search: &config.search,
        }
    }

    /// Header line `[<topic>] <description>`, colored and highlighted as
    /// configured. The tag and the description are highlighted separately,
    /// before any color wrapping, so a term never lands inside an escape
    /// sequence.
    #[must_use]
    pub fn header(&self, topic: &str, entry: &Entry) -> String {
        let tag = self.highlight(&format!("[{topic}]"));
        let description = self.highlight(&entry.description);

        if self.colored {
            Message::custom(&tag, &description, ansi::YELLOW)
        } else {
            format!("{tag} {description}")
        }
    }

    fn highlight(&self, text: &str) -> String {
        if self.matched {
            Message::matched(text, self.search)
        } else {
            text.to_string()
        }
    }

    /// Complete output for one entry, trailing newline included.
    ///
    /// JSON mode yields one compact object per line. Text mode yields the
    /// header, one `- ` line per data item, and a blank separator line.
    ///
    /// # Errors
    ///
    /// [`TopicError::Encode`] if the entry cannot be represented as JSON.
    pub fn format(&self, topic: &str, entry: &Entry) -> Result<String, TopicError> {
        if self.json {
            return Ok(format!("{}\n", entry.to_json()?));
        }

        let mut block = self.header(topic, entry);
        block.push('\n');
        for line in &entry.data {
            block.push_str("- ");
            block.push_str(line);
            block.push('\n');
        }
        block.push('\n');
        Ok(block)
    }
}
