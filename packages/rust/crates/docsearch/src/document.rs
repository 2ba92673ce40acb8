//! Topic documents.
//!
//! A topic file is a YAML mapping of category name to a list of entries:
//!
//! ```yaml
//! glossary:
//!   - description: "YAML stands for YAML Ain't Markup Language"
//!     data:
//!       - a human-readable data serialization format
//!     source: https://yaml.org/   # extra fields only show up in JSON output
//! ```
//!
//! Key order is preserved, so categories and entries come out in the
//! order they were written.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::config::CategoryFlags;
use crate::error::TopicError;

const DESCRIPTION_KEY: &str = "description";
const DATA_KEY: &str = "data";

/// Known entry categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Link collections
    Links,
    /// Cheat sheets
    Cheats,
    /// Glossary terms
    Glossary,
}

impl Category {
    /// Key used for this category in topic files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Links => "links",
            Self::Cheats => "cheats",
            Self::Glossary => "glossary",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single entry with both `description` and `data`.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Entry description, searched by the substring filter.
    pub description: String,
    /// Detail lines, in file order.
    pub data: Vec<String>,
    raw: Mapping,
}

impl Entry {
    /// Build an entry from a YAML value.
    ///
    /// Returns `None` unless the value is a mapping with both a scalar
    /// `description` and a `data` field.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = value.as_mapping()?;
        let description = scalar_text(raw.get(DESCRIPTION_KEY)?)?;
        let data = data_lines(raw.get(DATA_KEY)?);
        Some(Self {
            description,
            data,
            raw: raw.clone(),
        })
    }

    /// Encode the entry mapping as stored, extra fields included, as a
    /// single JSON line.
    ///
    /// # Errors
    ///
    /// Fails if the mapping holds keys JSON cannot represent.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.raw)
    }
}

/// Entries of one category, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Category key as written in the file.
    pub name: String,
    /// Complete entries; incomplete ones are already dropped.
    pub entries: Vec<Entry>,
}

impl Section {
    fn from_value(name: String, value: &Value) -> Self {
        let entries = match value {
            Value::Sequence(items) => items.iter().filter_map(Entry::from_value).collect(),
            _ => {
                tracing::debug!(category = %name, "Category is not a list, skipping");
                Vec::new()
            }
        };
        Self { name, entries }
    }
}

/// A parsed topic file.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicDocument {
    categories: Mapping,
}

impl TopicDocument {
    /// Read and parse a topic file.
    ///
    /// The whole file is read before parsing, so the handle is closed
    /// even when parsing fails.
    ///
    /// # Errors
    ///
    /// See [`TopicDocument::parse`]; additionally [`TopicError::Read`].
    pub fn load(path: &Path) -> Result<Self, TopicError> {
        let content = fs::read_to_string(path).map_err(|source| TopicError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse topic file content.
    ///
    /// # Errors
    ///
    /// - [`TopicError::NoData`] for empty documents, `null` or empty collections
    /// - [`TopicError::Parse`] for invalid YAML
    /// - [`TopicError::NotAMapping`] if the top level is not a mapping
    pub fn parse(content: &str) -> Result<Self, TopicError> {
        if is_blank_document(content) {
            return Err(TopicError::NoData);
        }

        match serde_yaml::from_str::<Value>(content)? {
            Value::Mapping(categories) if categories.is_empty() => Err(TopicError::NoData),
            Value::Mapping(categories) => Ok(Self { categories }),
            Value::Null => Err(TopicError::NoData),
            Value::Sequence(items) if items.is_empty() => Err(TopicError::NoData),
            Value::String(text) if text.is_empty() => Err(TopicError::NoData),
            _ => Err(TopicError::NotAMapping),
        }
    }

    /// Sections left after applying the category restriction.
    ///
    /// The first requested category (links, cheats, glossary) present in
    /// the document is returned alone. If none is present, every category
    /// of the document is returned.
    #[must_use]
    pub fn sections(&self, flags: CategoryFlags) -> Vec<Section> {
        let restricted = flags.precedence().find_map(|category| {
            self.categories
                .get(category.as_str())
                .map(|value| (category, value))
        });

        match restricted {
            Some((category, value)) => vec![Section::from_value(category.to_string(), value)],
            None => self
                .categories
                .iter()
                .map(|(key, value)| {
                    Section::from_value(scalar_text(key).unwrap_or_default(), value)
                })
                .collect(),
        }
    }
}

/// `true` when the content holds no YAML node: only blank lines, comments
/// and document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Text of a scalar value. Collections and `null` have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// Detail lines of a `data` field. A lone scalar counts as one line.
fn data_lines(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| scalar_text(item).unwrap_or_else(|| inline_text(item)))
            .collect(),
        Value::Null => Vec::new(),
        other => scalar_text(other).into_iter().collect(),
    }
}

/// Nested collections inside `data` are shown as inline JSON.
fn inline_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = r#"
links:
  - description: Rust language home page
    data:
      - https://www.rust-lang.org/
  - description: link without data
cheats:
  - description: list files sorted by modification time
    data:
      - ls -lt
    shell: bash
glossary:
  - data:
      - entry without description
  - description: YAML
    data: a human-readable data serialization format
"#;

    fn flags(links: bool, cheats: bool, glossary: bool) -> CategoryFlags {
        CategoryFlags {
            links,
            cheats,
            glossary,
        }
    }

    #[test]
    fn test_parse_empty_documents_report_no_data() {
        for content in ["", "   \n", "# nothing here\n", "---\n", "{}", "[]", "~"] {
            let err = TopicDocument::parse(content).unwrap_err();
            assert!(matches!(err, TopicError::NoData), "content: {content:?}");
            assert_eq!(err.to_string(), "No data received from YAML file.");
        }
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = TopicDocument::parse("cheats: [unterminated").unwrap_err();
        assert!(matches!(err, TopicError::Parse(_)));
    }

    #[test]
    fn test_parse_non_mapping() {
        let err = TopicDocument::parse("- just\n- a list\n").unwrap_err();
        assert!(matches!(err, TopicError::NotAMapping));
    }

    #[test]
    fn test_sections_without_restriction_keep_file_order() {
        let doc = TopicDocument::parse(MIXED).unwrap();
        let names: Vec<String> = doc
            .sections(CategoryFlags::default())
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["links", "cheats", "glossary"]);
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let doc = TopicDocument::parse(MIXED).unwrap();
        let sections = doc.sections(CategoryFlags::default());

        assert_eq!(sections[0].entries.len(), 1);
        assert_eq!(sections[0].entries[0].description, "Rust language home page");
        assert_eq!(sections[2].entries.len(), 1);
        assert_eq!(
            sections[2].entries[0].data,
            vec!["a human-readable data serialization format"]
        );
    }

    #[test]
    fn test_restriction_precedence_links_first() {
        let doc = TopicDocument::parse(MIXED).unwrap();

        let sections = doc.sections(flags(true, true, true));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "links");

        let sections = doc.sections(flags(false, true, true));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "cheats");

        let sections = doc.sections(flags(false, false, true));
        assert_eq!(sections[0].name, "glossary");
    }

    #[test]
    fn test_restriction_on_absent_category_falls_back_to_all() {
        let doc = TopicDocument::parse(
            "cheats:\n  - description: d\n    data: [x]\nglossary:\n  - description: g\n    data: [y]\n",
        )
        .unwrap();
        let sections = doc.sections(flags(true, false, false));
        assert_eq!(sections.len(), 2);

        // A later flag whose key is present wins over the fallback.
        let sections = doc.sections(flags(true, false, true));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name, "glossary");
    }

    #[test]
    fn test_entry_json_keeps_extra_fields() {
        let doc = TopicDocument::parse(MIXED).unwrap();
        let sections = doc.sections(flags(false, true, false));
        let json = sections[0].entries[0].to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["shell"], "bash");
        assert_eq!(parsed["data"][0], "ls -lt");
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_scalar_descriptions_and_data() {
        let value: Value =
            serde_yaml::from_str("description: 42\ndata: [true, 1.5, [a, b]]\n").unwrap();
        let entry = Entry::from_value(&value).unwrap();
        assert_eq!(entry.description, "42");
        assert_eq!(entry.data, vec!["true", "1.5", r#"["a","b"]"#]);
    }

    #[test]
    fn test_restricted_section_is_named_by_category_key() {
        let doc = TopicDocument::parse(MIXED).unwrap();
        for (requested, category) in [
            (flags(true, false, false), Category::Links),
            (flags(false, true, false), Category::Cheats),
            (flags(false, false, true), Category::Glossary),
        ] {
            let sections = doc.sections(requested);
            assert_eq!(sections[0].name, category.as_str());
            assert_eq!(sections[0].name, category.to_string());
        }
    }
}
