// Error taxonomy for the embedding pipeline and the word-vector store.
//
// Every failure surfaces directly to the caller; there is no fallback
// embedding. Callers that pre-validate captions against the store can
// treat these as user-input rejections.

use thiserror::Error;

/// Errors from the embedding pipeline.
#[derive(Debug, Clone, Error)]
pub enum EmbedError {
    /// The caption tokenized to zero words (empty or punctuation-only
    /// input), so there is nothing to average.
    #[error("caption contains no words after tokenization")]
    EmptyCaption,

    /// A caption word has no entry in the word-vector store. The lookup
    /// happens for every token, so even a word whose IDF weight would be
    /// zero needs a vector.
    #[error("no word vector for {0:?}")]
    MissingWord(String),

    /// The caption corpus is empty, so document frequencies are undefined.
    #[error("caption corpus is empty")]
    EmptyCorpus,

    /// The accumulated vector has an exactly-zero component mean, which
    /// the final mean-scaling transform cannot divide by. A single-caption
    /// corpus always ends up here: every IDF weight is zero, so the
    /// weighted sum is the zero vector.
    #[error("embedding has zero component mean")]
    ZeroMean,
}

/// Errors from constructing a word-vector store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The word2vec header line is missing or is not `<count> <dim>`.
    #[error("malformed word2vec header: {0:?}")]
    Header(String),

    /// A vector's length disagrees with the store dimension.
    #[error("vector for {word:?} has {found} components, expected {expected}")]
    Dimension {
        word: String,
        expected: usize,
        found: usize,
    },

    /// A vector component failed to parse as a float.
    #[error("bad component {value:?} in vector for {word:?}")]
    Value { word: String, value: String },

    /// The header's vector count disagrees with the rows present.
    #[error("header declares {declared} vectors, found {found}")]
    Count { declared: usize, found: usize },
}
