//! The fuzzy description-to-color resolution pipeline.
//!
//! `ColorResolver` owns the per-language lexicon cache and the perceptual
//! distance oracle. Resolution matches dictionary names in the text,
//! weights each candidate by string similarity against the whole
//! description, fuses them with a circular-mean average in HLS space,
//! applies descriptor adjustments, and optionally snaps back to the
//! nearest original candidate.

use crate::error::ResolveError;
use crate::lexicon::{normalize_lang, Lexicon};
use crate::similarity::{similarity, MatchStrategy};
use colorspeak_core::{average_colors, nearest, ColorDistance, DeltaE2000, HlsColor, RgbColor};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Title-cases a description for use as the resolved color's name.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolves free-text color descriptions against per-language lexicons.
///
/// Lexicons are built at most once per language: first builds serialize
/// behind the cache's write lock, while hits take only the read lock, so
/// steady-state lookups never contend.
pub struct ColorResolver<D: ColorDistance = DeltaE2000> {
    resource_dir: Option<PathBuf>,
    cache: RwLock<HashMap<String, Arc<Lexicon>>>,
    oracle: D,
}

impl ColorResolver<DeltaE2000> {
    /// A resolver over the embedded resources with the CIEDE2000 oracle.
    pub fn new() -> ColorResolver<DeltaE2000> {
        ColorResolver {
            resource_dir: None,
            cache: RwLock::new(HashMap::new()),
            oracle: DeltaE2000,
        }
    }

    /// A resolver loading per-language resources from `dir` before falling
    /// back to the embedded defaults.
    pub fn with_resource_dir(dir: impl Into<PathBuf>) -> ColorResolver<DeltaE2000> {
        ColorResolver {
            resource_dir: Some(dir.into()),
            cache: RwLock::new(HashMap::new()),
            oracle: DeltaE2000,
        }
    }
}

impl Default for ColorResolver<DeltaE2000> {
    fn default() -> Self {
        ColorResolver::new()
    }
}

impl<D: ColorDistance> ColorResolver<D> {
    /// A resolver with a caller-supplied distance oracle.
    pub fn with_oracle(oracle: D) -> ColorResolver<D> {
        ColorResolver {
            resource_dir: None,
            cache: RwLock::new(HashMap::new()),
            oracle,
        }
    }

    /// The lexicon for a language, built on first use and cached for the
    /// resolver's lifetime.
    pub fn lexicon(&self, lang: &str) -> Result<Arc<Lexicon>, ResolveError> {
        let key = normalize_lang(lang);
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(lexicon) = cache.get(&key) {
                return Ok(Arc::clone(lexicon));
            }
        }
        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        // Another thread may have built it between the two locks.
        if let Some(lexicon) = cache.get(&key) {
            return Ok(Arc::clone(lexicon));
        }
        let lexicon = Arc::new(Lexicon::load(&key, self.resource_dir.as_deref())?);
        cache.insert(key, Arc::clone(&lexicon));
        Ok(lexicon)
    }

    /// Resolves a free-text description to a color.
    ///
    /// Returns `Ok(None)` when the text mentions no known color or object
    /// term — a color is never fabricated from nothing. With
    /// `snap_to_known`, the fused color is replaced by the original
    /// candidate perceptually closest to it, guaranteeing a
    /// previously-named color at the cost of the blend.
    pub fn resolve(
        &self,
        description: &str,
        lang: &str,
        strategy: MatchStrategy,
        snap_to_known: bool,
    ) -> Result<Option<RgbColor>, ResolveError> {
        let lowered = description.to_lowercase();
        let text = lowered.trim();
        let lexicon = self.lexicon(lang)?;

        let mut candidates: Vec<HlsColor> = Vec::new();
        let mut originals: Vec<RgbColor> = Vec::new();
        let mut weights: Vec<f64> = Vec::new();
        let hits = lexicon
            .color_matcher
            .find_matches(text)
            .into_iter()
            .chain(lexicon.object_matcher.find_matches(text));
        for hit in hits {
            weights.push(similarity(&hit.name, text, strategy));
            candidates.push(HlsColor::from_hex(&hit.hex)?.with_name(hit.name.clone()));
            originals.push(RgbColor::from_hex(&hit.hex)?.with_name(hit.name));
        }

        let Some(base) = average_colors(&candidates, Some(&weights)) else {
            return Ok(None);
        };

        let fused = lexicon.descriptors.adjust(&base, text);
        let mut result = if snap_to_known {
            match nearest(&fused, &originals, &self.oracle) {
                Some(best) => best.clone(),
                None => fused,
            }
        } else {
            fused
        };

        result.name = Some(title_case(description));
        result.description = Some(description.to_string());
        Ok(Some(result))
    }

    /// The localized name of an exact color value.
    ///
    /// Fails with `ResolveError::UnnamedColor` when the language's
    /// dictionary has no entry for the color's hex form.
    pub fn lookup_name(&self, color: &RgbColor, lang: &str) -> Result<String, ResolveError> {
        let lexicon = self.lexicon(lang)?;
        let hex = color.to_hex();
        lexicon
            .name_of(&hex)
            .map(String::from)
            .ok_or_else(|| ResolveError::UnnamedColor {
                hex,
                lang: normalize_lang(lang),
            })
    }
}
