//! String similarity strategies for candidate weighting.
//!
//! Similarity is a fusion weight, not a threshold: a low score shrinks a
//! candidate's influence on the blended color, it never discards it.

use serde::{Deserialize, Serialize};

/// The string-similarity strategy used to weight lexical candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// 1.0 on exact equality, 0.0 otherwise.
    Exact,
    /// Normalized Levenshtein edit distance.
    Levenshtein,
    /// Normalized Damerau-Levenshtein edit distance (transpositions count
    /// as one edit). The default.
    #[default]
    DamerauLevenshtein,
    /// Jaro-Winkler, favoring shared prefixes.
    JaroWinkler,
}

/// Similarity between two strings in [0, 1] under the given strategy.
pub fn similarity(a: &str, b: &str, strategy: MatchStrategy) -> f64 {
    let score = match strategy {
        MatchStrategy::Exact => {
            if a == b {
                1.0
            } else {
                0.0
            }
        }
        MatchStrategy::Levenshtein => strsim::normalized_levenshtein(a, b),
        MatchStrategy::DamerauLevenshtein => strsim::normalized_damerau_levenshtein(a, b),
        MatchStrategy::JaroWinkler => strsim::jaro_winkler(a, b),
    };
    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        for strategy in [
            MatchStrategy::Exact,
            MatchStrategy::Levenshtein,
            MatchStrategy::DamerauLevenshtein,
            MatchStrategy::JaroWinkler,
        ] {
            assert!((similarity("rose", "rose", strategy) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn exact_strategy_is_all_or_nothing() {
        assert_eq!(similarity("rose", "rosé", MatchStrategy::Exact), 0.0);
    }

    #[test]
    fn edit_distance_strategies_degrade_gracefully() {
        let s = similarity("rose", "dark dusty rose", MatchStrategy::DamerauLevenshtein);
        assert!(s > 0.0 && s < 1.0, "score = {s}");
    }

    #[test]
    fn default_strategy_is_damerau_levenshtein() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::DamerauLevenshtein);
    }

    #[test]
    fn strategy_serializes_as_kebab_case() {
        let json = serde_json::to_string(&MatchStrategy::JaroWinkler).unwrap();
        assert_eq!(json, "\"jaro-winkler\"");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scores_stay_in_unit_interval(a in ".{0,20}", b in ".{0,20}") {
                for strategy in [
                    MatchStrategy::Exact,
                    MatchStrategy::Levenshtein,
                    MatchStrategy::DamerauLevenshtein,
                    MatchStrategy::JaroWinkler,
                ] {
                    let s = similarity(&a, &b, strategy);
                    prop_assert!((0.0..=1.0).contains(&s), "{strategy:?}: {s}");
                }
            }
        }
    }
}
