//! Error types for the resolution pipeline.

use colorspeak_core::ColorError;
use thiserror::Error;

/// Errors produced by lexicon loading and description resolution.
///
/// "No color mentioned" is not an error: `ColorResolver::resolve` returns
/// `Ok(None)` for that expected outcome.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// An exact-hex name lookup found no entry in the requested language.
    #[error("no {lang} name for color {hex}")]
    UnnamedColor { hex: String, lang: String },

    /// A resource file existed but could not be read or parsed.
    ///
    /// A *missing* resource file is not an error; it degrades to an empty
    /// dictionary.
    #[error("resource error: {0}")]
    Resource(String),

    /// A color operation failed, e.g. a malformed hex value in a
    /// dictionary.
    #[error(transparent)]
    Color(#[from] ColorError),
}
