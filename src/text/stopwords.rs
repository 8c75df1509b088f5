// Stopword sets — tokens excluded from the vocabulary.
//
// A set is built once, from the bundled English list or a caller-supplied
// resource, and never mutated afterwards: vocabulary and IDF computation
// treat it as a read-only collaborator.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// An immutable set of tokens to keep out of the vocabulary.
///
/// Matching is exact, so entries should be lowercase — the same form
/// `text::tokenize` produces.
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// The empty set: nothing is filtered.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Build from any collection of words.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// The bundled English list from the `stop-words` crate.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// Parse a stopword list resource: tokens separated by tabs, newlines,
    /// or other whitespace, each trimmed. Blank lines and blank fields are
    /// skipped. The caller reads the resource; this takes its contents.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
