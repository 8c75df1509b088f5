// The embedding composer: weighted sum of word vectors, averaged over the
// caption, then mean-centered.
//
// Every caption word must exist in the vector store, even words whose IDF
// weight is 0.0 (stopwords, words outside the corpus vocabulary). A missing
// word is an error, not a silent skip; the weight only decides how much the
// vector contributes once found.

use tracing::debug;

use crate::corpus::idf::{compute_idf_top_k, IdfWeights};
use crate::error::EmbedError;
use crate::text::stopwords::Stopwords;
use crate::text::tokenize::tokenize;
use crate::vectors::traits::WordVectorStore;

/// Embeds captions against a word-vector store.
///
/// `embed` recomputes IDF weights from the corpus on every call. When many
/// captions share one corpus, compute the weights once with [`idf_weights`]
/// and reuse them through [`embed_with_weights`].
///
/// [`idf_weights`]: CaptionEmbedder::idf_weights
/// [`embed_with_weights`]: CaptionEmbedder::embed_with_weights
pub struct CaptionEmbedder<S: WordVectorStore> {
    vectors: S,
    stopwords: Stopwords,
    /// Cap the IDF vocabulary to the k most frequent terms. `None` keeps
    /// every term; terms cut by the cap embed with weight 0.0.
    pub top_k: Option<usize>,
}

impl<S: WordVectorStore> CaptionEmbedder<S> {
    pub fn new(vectors: S, stopwords: Stopwords) -> Self {
        Self {
            vectors,
            stopwords,
            top_k: None,
        }
    }

    /// IDF weights for a caption corpus, reusable across many captions.
    pub fn idf_weights(&self, all_captions: &[String]) -> Result<IdfWeights, EmbedError> {
        let documents: Vec<Vec<String>> =
            all_captions.iter().map(|caption| tokenize(caption)).collect();
        compute_idf_top_k(&documents, &self.stopwords, self.top_k)
    }

    /// Embed one caption against the corpus it belongs to.
    pub fn embed(&self, caption: &str, all_captions: &[String]) -> Result<Vec<f64>, EmbedError> {
        let words = tokenize(caption);
        if words.is_empty() {
            return Err(EmbedError::EmptyCaption);
        }
        let weights = self.idf_weights(all_captions)?;
        self.compose(&words, &weights)
    }

    /// Embed one caption against precomputed corpus weights.
    pub fn embed_with_weights(
        &self,
        caption: &str,
        weights: &IdfWeights,
    ) -> Result<Vec<f64>, EmbedError> {
        let words = tokenize(caption);
        if words.is_empty() {
            return Err(EmbedError::EmptyCaption);
        }
        self.compose(&words, weights)
    }

    fn compose(&self, words: &[String], weights: &IdfWeights) -> Result<Vec<f64>, EmbedError> {
        let dim = self.vectors.dim();
        let mut sum = vec![0.0_f64; dim];
        for word in words {
            let vector = self
                .vectors
                .vector(word)
                .ok_or_else(|| EmbedError::MissingWord(word.clone()))?;
            let weight = weights.weight(word).unwrap_or(0.0);
            for (acc, &component) in sum.iter_mut().zip(vector) {
                *acc += component as f64 * weight;
            }
        }

        // Average over caption length, repeats included.
        let count = words.len() as f64;
        for value in sum.iter_mut() {
            *value /= count;
        }

        let embedding = mean_center(&sum)?;
        debug!(words = words.len(), dim, "embedded caption");
        Ok(embedding)
    }
}

/// Center a vector on its own mean: `v / mean(v) - 1`.
///
/// The result always sums to zero. A vector whose mean is exactly 0.0
/// cannot be centered this way and is rejected, as is an empty vector.
pub fn mean_center(vector: &[f64]) -> Result<Vec<f64>, EmbedError> {
    if vector.is_empty() {
        return Err(EmbedError::ZeroMean);
    }
    let mean = vector.iter().sum::<f64>() / vector.len() as f64;
    if mean == 0.0 {
        return Err(EmbedError::ZeroMean);
    }
    Ok(vector.iter().map(|value| value / mean - 1.0).collect())
}
