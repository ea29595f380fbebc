//! Front matter parsing for markdown documents
//!
//! Handles the small subset of YAML that archive documents actually use:
//!
//! ```markdown
//! ---
//! title: "Example"
//! category: notes
//! tags:
//!   - a
//!   - b
//! ---
//!
//! Content here
//! ```
//!
//! Only flat `key: value` scalars and the `tags` list are understood. Nested
//! mappings and multi-line strings are not.

use std::collections::HashMap;

const FRONT_MATTER_OPEN: &str = "---\n";
const FRONT_MATTER_CLOSE: &str = "\n---\n";
const TAGS_KEY: &str = "tags";

/// Metadata parsed from a document's front matter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Scalar value for `key`, if the block set it
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Scalar value for `key`, treating `""` as absent
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.tags.is_empty()
    }
}

/// Extract the raw front matter block, without its delimiter lines
///
/// The document must start with a `---` line, and the block runs until the
/// next line that is exactly `---` and is followed by a newline.
pub fn front_matter_block(text: &str) -> Option<&str> {
    let rest = text.strip_prefix(FRONT_MATTER_OPEN)?;
    let end = rest.find(FRONT_MATTER_CLOSE)?;
    Some(&rest[..end])
}

/// Parse a document's leading front matter
///
/// Documents without a block yield an empty [`FrontMatter`].
pub fn parse_front_matter(text: &str) -> FrontMatter {
    let mut meta = FrontMatter::default();
    let Some(block) = front_matter_block(text) else {
        return meta;
    };

    let mut current_key: Option<String> = None;

    for line in block.split('\n') {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(item) = line.trim_start().strip_prefix("- ") {
            if current_key.as_deref() == Some(TAGS_KEY) {
                meta.tags.push(unquote(item.trim()).to_string());
            }
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        current_key = Some(key.to_string());

        if key == TAGS_KEY {
            meta.tags.extend(parse_inline_tags(value));
            continue;
        }

        meta.fields.insert(key.to_string(), unquote(value).to_string());
    }

    meta
}

/// Strip one layer of surrounding double quotes
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

/// `tags: [a, b]` and `tags: a, b` on the key line itself
fn parse_inline_tags(value: &str) -> Vec<String> {
    let list = value
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(value);

    list.split(',')
        .map(|item| unquote(item.trim()).trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
