//! Multi-pattern substring matching over name dictionaries.

/// Normalizes a dictionary name or description for matching: lowercase,
/// separator punctuation to spaces, edge punctuation and whitespace
/// trimmed.
pub fn normalize(term: &str) -> String {
    term.to_lowercase()
        .replace(['-', '_'], " ")
        .trim_matches([' ', ',', '.', '!', '\n', ':', ';'])
        .to_string()
}

/// One dictionary entry found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchHit {
    /// The normalized dictionary name that matched.
    pub name: String,
    /// The hex color the dictionary binds the name to.
    pub hex: String,
}

/// Finds every dictionary name occurring anywhere in a text.
///
/// Patterns are normalized dictionary names; each occurrence of each
/// pattern yields one hit, so several distinct names matching the same
/// span all report, with no deduplication. An empty dictionary matches
/// nothing.
#[derive(Debug, Clone, Default)]
pub struct LexicalMatcher {
    patterns: Vec<(String, String)>,
}

impl LexicalMatcher {
    /// Builds a matcher from (hex, name) dictionary entries. Names are
    /// normalized; entries normalizing to the empty string are dropped.
    pub fn new<'a, I>(entries: I) -> LexicalMatcher
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let patterns = entries
            .into_iter()
            .filter_map(|(hex, name)| {
                let name = normalize(name);
                (!name.is_empty()).then(|| (name, hex.to_string()))
            })
            .collect();
        LexicalMatcher { patterns }
    }

    /// Returns a hit for every occurrence of every pattern in `text`,
    /// overlapping occurrences included.
    pub fn find_matches(&self, text: &str) -> Vec<MatchHit> {
        let mut hits = Vec::new();
        for (name, hex) in &self.patterns {
            // Advance by one character past each match start so
            // self-overlapping occurrences all report.
            let step = name.chars().next().map_or(1, char::len_utf8);
            let mut from = 0;
            while let Some(pos) = text[from..].find(name.as_str()) {
                hits.push(MatchHit {
                    name: name.clone(),
                    hex: hex.clone(),
                });
                from += pos + step;
            }
        }
        hits
    }

    /// Number of patterns in the matcher.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
