//! Per-language resource dictionaries.
//!
//! Each language contributes three JSON files under `<dir>/<lang>/`:
//! `colors.json` and `object_colors.json` (hex → name maps) and
//! `color_descriptors.json` (descriptor keyword buckets). Missing files
//! degrade to empty dictionaries; unreadable or malformed files are
//! errors. English ships embedded in the crate as the fallback when no
//! resource directory provides it.

use crate::descriptors::DescriptorBuckets;
use crate::error::ResolveError;
use crate::matcher::LexicalMatcher;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::Path;

const EN_COLORS: &str = include_str!("../resources/en/colors.json");
const EN_OBJECT_COLORS: &str = include_str!("../resources/en/object_colors.json");
const EN_DESCRIPTORS: &str = include_str!("../resources/en/color_descriptors.json");

/// Reduces a language tag to its lowercase base subtag (`"en-US"` → `"en"`).
pub fn normalize_lang(lang: &str) -> String {
    lang.split(['-', '_'])
        .next()
        .unwrap_or(lang)
        .to_lowercase()
}

/// Canonical dictionary key form: uppercase hex with a leading `#`.
fn canon_hex(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    format!("#{}", digits.to_uppercase())
}

/// The loaded vocabulary of one language: both name dictionaries, their
/// matchers, and the descriptor buckets.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    /// hex → color name.
    pub colors: HashMap<String, String>,
    /// hex → object name (things with a characteristic color).
    pub objects: HashMap<String, String>,
    pub descriptors: DescriptorBuckets,
    pub color_matcher: LexicalMatcher,
    pub object_matcher: LexicalMatcher,
}

/// Loads one resource file: directory copy first, embedded fallback next,
/// empty default last.
fn load_resource<T: DeserializeOwned + Default>(
    resource_dir: Option<&Path>,
    lang: &str,
    file: &str,
    embedded: Option<&str>,
) -> Result<T, ResolveError> {
    if let Some(dir) = resource_dir {
        let path = dir.join(lang).join(file);
        if path.is_file() {
            let text = std::fs::read_to_string(&path)
                .map_err(|e| ResolveError::Resource(format!("{}: {e}", path.display())))?;
            return serde_json::from_str(&text)
                .map_err(|e| ResolveError::Resource(format!("{}: {e}", path.display())));
        }
    }
    match embedded {
        Some(text) => serde_json::from_str(text)
            .map_err(|e| ResolveError::Resource(format!("embedded {lang}/{file}: {e}"))),
        None => Ok(T::default()),
    }
}

impl Lexicon {
    /// Loads the lexicon for a language, normalizing the language tag and
    /// building both matchers.
    ///
    /// `resource_dir` overrides the embedded English resources; languages
    /// with no resources anywhere load as empty lexicons, never an error.
    pub fn load(lang: &str, resource_dir: Option<&Path>) -> Result<Lexicon, ResolveError> {
        let lang = normalize_lang(lang);
        let english = lang == "en";

        let raw_colors: HashMap<String, String> = load_resource(
            resource_dir,
            &lang,
            "colors.json",
            english.then_some(EN_COLORS),
        )?;
        let raw_objects: HashMap<String, String> = load_resource(
            resource_dir,
            &lang,
            "object_colors.json",
            english.then_some(EN_OBJECT_COLORS),
        )?;
        let descriptors: DescriptorBuckets = load_resource(
            resource_dir,
            &lang,
            "color_descriptors.json",
            english.then_some(EN_DESCRIPTORS),
        )?;

        let colors: HashMap<String, String> = raw_colors
            .into_iter()
            .map(|(hex, name)| (canon_hex(&hex), name))
            .collect();
        let objects: HashMap<String, String> = raw_objects
            .into_iter()
            .map(|(hex, name)| (canon_hex(&hex), name))
            .collect();

        let color_matcher =
            LexicalMatcher::new(colors.iter().map(|(h, n)| (h.as_str(), n.as_str())));
        let object_matcher =
            LexicalMatcher::new(objects.iter().map(|(h, n)| (h.as_str(), n.as_str())));

        Ok(Lexicon {
            colors,
            objects,
            descriptors,
            color_matcher,
            object_matcher,
        })
    }

    /// Localized name for an exact hex value, if the language has one.
    pub fn name_of(&self, hex: &str) -> Option<&str> {
        self.colors.get(&canon_hex(hex)).map(String::as_str)
    }
}
