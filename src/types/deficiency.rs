//! Colour-vision deficiency classes.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{PalError, Result};

/// A class of colour vision to simulate.
///
/// `Normal` is the identity; the dichromatic classes and achromatopsia are
/// approximated with fixed linear channel-mixing matrices (see `crate::sim`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum VisionDeficiency {
    /// Unaffected colour vision (no transform).
    #[default]
    Normal,
    /// Red-blind.
    Protanopia,
    /// Green-blind.
    Deuteranopia,
    /// Blue-blind.
    Tritanopia,
    /// Total colour blindness (greyscale).
    Achromatopsia,
}

impl VisionDeficiency {
    /// Every deficiency class, `Normal` first.
    pub const ALL: [Self; 5] = [
        Self::Normal,
        Self::Protanopia,
        Self::Deuteranopia,
        Self::Tritanopia,
        Self::Achromatopsia,
    ];

    /// Whether simulation under this class is the identity.
    pub fn is_identity(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Lowercase name, as used on the CLI and in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Protanopia => "protanopia",
            Self::Deuteranopia => "deuteranopia",
            Self::Tritanopia => "tritanopia",
            Self::Achromatopsia => "achromatopsia",
        }
    }
}

impl fmt::Display for VisionDeficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VisionDeficiency {
    type Err = PalError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "protanopia" => Ok(Self::Protanopia),
            "deuteranopia" => Ok(Self::Deuteranopia),
            "tritanopia" => Ok(Self::Tritanopia),
            "achromatopsia" => Ok(Self::Achromatopsia),
            _ => Err(PalError::Parse {
                message: format!("Unknown vision deficiency: {}", s),
                help: Some(
                    "Valid values: normal, protanopia, deuteranopia, tritanopia, achromatopsia"
                        .to_string(),
                ),
            }),
        }
    }
}
