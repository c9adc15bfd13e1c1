//! Corpus of candidate words and uniform random selection.

use crate::word::{Word, WordError};
use derive_more::{Display, Error};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Words shipped with the game.
pub const DEFAULT_WORDS: &[&str] = &[
    "about", "account", "across", "addition", "adjustment", "advertisement", "agreement",
    "algorithm", "array", "async", "attribute", "binary", "boolean", "branch", "browser",
    "buffer", "bundle", "cache", "callback", "class", "closure", "commit", "compiler",
    "component", "console", "constant", "cookie", "cursor", "database", "debug", "deploy",
    "element", "event", "exception", "function", "garbage", "generic", "hash", "heap",
    "iterator", "kernel", "keyword", "lambda", "library", "linker", "memory", "merge",
    "method", "module", "mutex", "network", "object", "operator", "package", "parser",
    "pointer", "promise", "protocol", "queue", "recursion", "refactor", "register",
    "render", "request", "runtime", "schema", "server", "socket", "stack", "string",
    "syntax", "thread", "token", "trait", "variable", "vector", "widget",
];

/// Corpus misconfiguration. Raised once at startup, never mid-session.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum WordBankError {
    /// The corpus has no words to draw from.
    #[display("Word bank is empty")]
    EmptyWordBank,
    /// A corpus entry is not a valid word.
    #[display("Word bank entry {} is invalid: {}", index, source)]
    InvalidCorpusWord {
        /// Position of the entry in the corpus.
        index: usize,
        /// Why it was rejected.
        source: WordError,
    },
}

/// Immutable, nonempty set of candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<Word>,
}

impl WordBank {
    /// Builds a bank, validating every entry.
    ///
    /// # Errors
    ///
    /// [`WordBankError::EmptyWordBank`] if `words` yields nothing,
    /// [`WordBankError::InvalidCorpusWord`] on the first malformed entry.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Result<Self, WordBankError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                Word::new(raw).map_err(|source| WordBankError::InvalidCorpusWord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if words.is_empty() {
            return Err(WordBankError::EmptyWordBank);
        }

        info!(count = words.len(), "Word bank loaded");
        Ok(Self { words })
    }

    /// The built-in corpus.
    pub fn builtin() -> Self {
        Self {
            words: DEFAULT_WORDS
                .iter()
                .filter_map(|raw| Word::new(*raw).ok())
                .collect(),
        }
    }

    /// Draws one word uniformly at random.
    #[instrument(skip(self, rng))]
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        let index = rng.random_range(0..self.words.len());
        debug!(index, "Picked word");
        self.words[index].clone()
    }

    /// All words in corpus order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects an empty corpus.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}
