//! Error type of the crate.

use thiserror::Error;

/// Errors returned by the few fallible operations of the crate.
///
/// Color math itself is total; only gradient rasterization and hex
/// parsing can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A gradient frame with a zero side, or too many pixels to be
    /// addressed.
    #[error("invalid gradient dimensions {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A gradient needs at least one color.
    #[error("a gradient needs at least one color")]
    NoColors,

    /// The string is not a `#RGB`, `#RRGGBB` or `#RRGGBBAA` color.
    #[error("not a hex color “{0}”")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, Error>;
