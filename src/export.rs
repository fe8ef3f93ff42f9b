//! JSON export artifact.
//!
//! The export document is a compatibility surface: field names, the
//! 1-based colour ids, the uppercase hex strings, and the two-decimal
//! ratio strings are all part of the format.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::error::{PalError, Result};
use crate::score::pairwise_report;
use crate::types::{Colour, Palette};

/// The exported palette document.
#[derive(Debug, Serialize)]
pub struct PaletteExport {
    pub name: String,
    /// ISO-8601 timestamp
    pub created: String,
    pub colors: Vec<ColourEntry>,
    #[serde(rename = "contrastPairs")]
    pub contrast_pairs: Vec<PairEntry>,
}

/// One palette colour, with a 1-based id.
#[derive(Debug, Serialize)]
pub struct ColourEntry {
    pub id: usize,
    pub hex: String,
    pub rgb: Colour,
}

/// One scored colour pair.
#[derive(Debug, Serialize)]
pub struct PairEntry {
    pub color1: String,
    pub color2: String,
    /// Ratio fixed to two decimals, e.g. "4.54"
    #[serde(rename = "contrastRatio")]
    pub contrast_ratio: String,
    #[serde(rename = "wcagAA")]
    pub wcag_aa: bool,
    #[serde(rename = "wcagAAA")]
    pub wcag_aaa: bool,
}

/// Build the export document for a palette.
///
/// `created` is supplied by the caller (the CLI passes `Utc::now()`), so
/// the builder itself stays deterministic.
pub fn build_export(palette: &Palette, created: DateTime<Utc>) -> PaletteExport {
    let colors = palette
        .iter()
        .enumerate()
        .map(|(index, colour)| ColourEntry {
            id: index + 1,
            hex: colour.to_string(),
            rgb: colour,
        })
        .collect();

    let contrast_pairs = pairwise_report(palette)
        .into_iter()
        .map(|pair| PairEntry {
            color1: pair.first.to_string(),
            color2: pair.second.to_string(),
            contrast_ratio: format!("{:.2}", pair.ratio),
            wcag_aa: pair.grade.normal_aa,
            wcag_aaa: pair.grade.normal_aaa,
        })
        .collect();

    PaletteExport {
        name: palette.name.clone(),
        created: created.to_rfc3339_opts(SecondsFormat::Millis, true),
        colors,
        contrast_pairs,
    }
}

/// Serialize an export document to pretty-printed JSON.
pub fn to_json_string(export: &PaletteExport) -> Result<String> {
    serde_json::to_string_pretty(export).map_err(|e| PalError::Parse {
        message: format!("Failed to serialize export: {}", e),
        help: None,
    })
}

/// Write an export document to a file.
pub fn write_export(export: &PaletteExport, path: &Path) -> Result<()> {
    let json = to_json_string(export)?;
    std::fs::write(path, json + "\n").map_err(|e| PalError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
