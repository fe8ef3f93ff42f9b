//! Parser for pal palette files.
//!
//! A `.palette` file has optional YAML frontmatter between `---` markers
//! and a body listing one colour per line:
//!
//! ```text
//! ---
//! name: Brand
//! ---
//! // primaries
//! $primary: #2563EB
//! #16A34A
//! ```
//!
//! Labels and comments are for humans; the parsed result is an ordered
//! [`Palette`](crate::types::Palette).

mod frontmatter;
pub mod palette;

pub use frontmatter::{extract_frontmatter, Frontmatter};
pub use palette::{parse_palette_file, parse_palette_str};
