//! YAML frontmatter extraction for palette files.

use std::collections::HashMap;

use crate::error::{PalError, Result};

/// Result of extracting frontmatter from a palette file.
#[derive(Debug)]
pub struct Frontmatter {
    /// Parsed frontmatter key-value pairs
    pub values: HashMap<String, serde_yaml::Value>,
    /// Byte offset where content after frontmatter begins
    pub content_start: usize,
}

impl Frontmatter {
    /// Look up a string-valued frontmatter key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }
}

/// Extract optional YAML frontmatter from the beginning of a document.
///
/// Frontmatter sits between `---` markers at the top of the file. A file
/// without a leading `---` has no frontmatter; the whole source is body.
pub fn extract_frontmatter(source: &str) -> Result<Option<Frontmatter>> {
    let trimmed = source.trim_start();
    let leading = source.len() - trimmed.len();

    if !trimmed.starts_with("---") {
        return Ok(None);
    }

    let first_line_end = trimmed.find('\n').map(|i| i + 1).unwrap_or(trimmed.len());
    let yaml_section = &trimmed[first_line_end..];

    let closing = find_closing_delimiter(yaml_section).ok_or_else(|| PalError::Parse {
        message: "Unclosed frontmatter: missing closing ---".to_string(),
        help: Some("Add --- after the YAML content".to_string()),
    })?;

    let yaml_content = &yaml_section[..closing];
    let parsed: serde_yaml::Value =
        serde_yaml::from_str(yaml_content).map_err(|e| PalError::Parse {
            message: format!("Invalid YAML in frontmatter: {}", e),
            help: None,
        })?;

    let values = match parsed {
        serde_yaml::Value::Mapping(map) => {
            let mut result = HashMap::new();
            for (key, value) in map {
                if let Some(key_str) = key.as_str() {
                    result.insert(key_str.to_string(), value);
                }
            }
            result
        }
        serde_yaml::Value::Null => HashMap::new(),
        _ => {
            return Err(PalError::Parse {
                message: "Frontmatter must be a YAML mapping".to_string(),
                help: Some("Use key: value format".to_string()),
            });
        }
    };

    // Content starts after the closing --- line
    let after_closing = &yaml_section[closing..];
    let closing_line_end = after_closing
        .find('\n')
        .map(|i| i + 1)
        .unwrap_or(after_closing.len());
    let content_start = leading + first_line_end + closing + closing_line_end;

    Ok(Some(Frontmatter {
        values,
        content_start,
    }))
}

/// Find the byte offset of the closing `---` line, which must sit at the
/// start of a line.
fn find_closing_delimiter(s: &str) -> Option<usize> {
    let mut offset = 0;
    for line in s.lines() {
        if line.trim() == "---" {
            return Some(offset);
        }
        offset += line.len() + 1;
    }
    None
}
