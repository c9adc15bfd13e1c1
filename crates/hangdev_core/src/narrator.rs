//! Last words for each eliminated stake.

use std::collections::HashMap;
use tracing::instrument;

const DEFAULT_QUOTES: [(&str, &str); 9] = [
    ("HTML", "I always felt... empty inside. Like a div without content."),
    ("CSS", "Guess specificity wins again."),
    ("JavaScript", "Maybe I should've used triple equals..."),
    ("React", "No more hooks... only regrets."),
    ("TypeScript", "Turns out types can't save you either."),
    ("Node.js", "Server crashed... permanently."),
    ("Python", "IndentationError: Developer lost."),
    ("Ruby", "Even elegance can't escape fate."),
    ("Assembly", "01000011 01111001 01100001... 🪦"),
];

/// Curated farewell lines keyed by stakes label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarratorMap {
    quotes: HashMap<String, String>,
}

impl NarratorMap {
    /// Builds a narrator from `(label, line)` pairs.
    pub fn new<I, K, V>(quotes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            quotes: quotes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Lines for the built-in ladder.
    pub fn builtin() -> Self {
        Self::new(DEFAULT_QUOTES)
    }

    /// Farewell for `label`: the curated line on an exact, case-sensitive
    /// match, otherwise `"Farewell, {label}"`.
    #[instrument(skip(self))]
    pub fn farewell(&self, label: &str) -> String {
        self.quotes
            .get(label)
            .cloned()
            .unwrap_or_else(|| format!("Farewell, {label}"))
    }
}

impl Default for NarratorMap {
    fn default() -> Self {
        Self::builtin()
    }
}
