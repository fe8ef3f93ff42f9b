//! Palette file parser.
//!
//! Parses `.palette` files: optional YAML frontmatter (recognized key:
//! `name`) followed by one colour per line. Body lines are either a bare
//! hex colour or a labelled `$name: #RRGGBB` entry; labels are accepted for
//! readability and discarded, since palette order is what the scoring and
//! export layers consume. `//` comments and blank lines are ignored.

use std::path::Path;

use crate::error::{PalError, Result};
use crate::types::{Colour, Palette};

use super::frontmatter::extract_frontmatter;

/// Parse palette source text.
///
/// `fallback_name` is used when the frontmatter does not carry a `name`
/// key (callers pass the file stem).
pub fn parse_palette_str(source: &str, fallback_name: &str) -> Result<Palette> {
    let (name, body_start) = match extract_frontmatter(source)? {
        Some(fm) => (
            fm.get_str("name").unwrap_or(fallback_name).to_string(),
            fm.content_start,
        ),
        None => (fallback_name.to_string(), 0),
    };

    let mut palette = Palette::new(name);
    let body = &source[body_start..];

    // Line numbers are relative to the whole file, not the body
    let body_line_offset = source[..body_start].lines().count();

    for (index, line) in body.lines().enumerate() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }

        let value = strip_label(trimmed);
        let colour = Colour::from_hex(value).map_err(|_| PalError::Parse {
            message: format!(
                "line {}: malformed colour: {}",
                body_line_offset + index + 1,
                value
            ),
            help: Some("Use the #RRGGBB format: six hex digits, no alpha".to_string()),
        })?;

        palette.push(colour);
    }

    Ok(palette)
}

/// Parse a palette file from disk, naming it from frontmatter or file stem.
pub fn parse_palette_file(path: &Path) -> Result<Palette> {
    let source = std::fs::read_to_string(path).map_err(|e| PalError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("palette");

    parse_palette_str(&source, stem)
}

/// Drop a leading `$label:` from a body line, if present.
fn strip_label(line: &str) -> &str {
    if !line.starts_with('$') {
        return line;
    }
    match line.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bare_hex_lines() {
        let palette = parse_palette_str("#FF0000\n#00FF00\n#0000FF\n", "fallback").unwrap();

        assert_eq!(palette.name, "fallback");
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.get(0), Some(Colour::new(255, 0, 0)));
        assert_eq!(palette.get(2), Some(Colour::new(0, 0, 255)));
    }

    #[test]
    fn test_frontmatter_name() {
        let source = "---\nname: Brand\n---\n#2563EB\n#16A34A\n";
        let palette = parse_palette_str(source, "fallback").unwrap();

        assert_eq!(palette.name, "Brand");
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_labelled_entries() {
        let source = "$primary: #2563EB\n$accent: #F59E0B\n";
        let palette = parse_palette_str(source, "p").unwrap();

        assert_eq!(palette.get(0), Some(Colour::new(0x25, 0x63, 0xeb)));
        assert_eq!(palette.get(1), Some(Colour::new(0xf5, 0x9e, 0x0b)));
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let source = "// header comment\n\n#FF0000\n\n// trailing\n#00FF00\n";
        let palette = parse_palette_str(source, "p").unwrap();
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let source = "#DC2626\n#16A34A\n#2563EB\n";
        let palette = parse_palette_str(source, "p").unwrap();
        let hexes: Vec<String> = palette.iter().map(|c| c.to_string()).collect();
        assert_eq!(hexes, vec!["#DC2626", "#16A34A", "#2563EB"]);
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let source = "---\nname: Broken\n---\n#FF0000\n#ZZZZZZ\n";
        let err = parse_palette_str(source, "p").unwrap_err();

        match err {
            PalError::Parse { message, .. } => {
                assert!(message.contains("line 5"), "message was: {}", message);
                assert!(message.contains("#ZZZZZZ"));
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_shorthand_rejected_in_body() {
        assert!(parse_palette_str("#abc\n", "p").is_err());
    }

    #[test]
    fn test_empty_body_is_empty_palette() {
        let palette = parse_palette_str("---\nname: Empty\n---\n", "p").unwrap();
        assert_eq!(palette.name, "Empty");
        assert!(palette.is_empty());
    }
}
