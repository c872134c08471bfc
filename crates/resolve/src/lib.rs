//! Natural-language color resolution.
//!
//! This crate turns free-text descriptions like "dark dusty rose" into
//! concrete colors. Per-language JSON dictionaries name colors and
//! color-bearing objects; a lexical matcher finds those names in the
//! text, the candidates are fused by a similarity-weighted circular
//! average, and descriptor keywords (dark, vivid, warm, translucent)
//! nudge the result along the saturation, brightness, opacity, and
//! temperature axes.
//!
//! [`ColorResolver`] is the entry point; [`Lexicon`] and
//! [`LexicalMatcher`] are exposed for callers that bring their own
//! dictionaries.

#![deny(unsafe_code)]

mod descriptors;
mod error;
mod lexicon;
mod matcher;
mod resolver;
mod similarity;

pub use descriptors::DescriptorBuckets;
pub use error::ResolveError;
pub use lexicon::{normalize_lang, Lexicon};
pub use matcher::{normalize, LexicalMatcher, MatchHit};
pub use resolver::ColorResolver;
pub use similarity::{similarity, MatchStrategy};
