//! Core domain types for pal.
//!
//! This module contains the fundamental types used throughout the tool:
//! - `Colour` - sRGB colour values parsed from hex strings
//! - `Palette` - Ordered colour sequences
//! - `VisionDeficiency` - Colour-vision classes for simulation

mod colour;
mod deficiency;
mod palette;

pub use colour::Colour;
pub use deficiency::VisionDeficiency;
pub use palette::Palette;
