// Inverse document frequency over a tokenized caption corpus.
//
// idf[i] = log10(N / doc_freq(vocab[i])), where doc_freq counts the
// documents containing the term at least once. Terms always come from the
// corpus itself, so doc_freq >= 1 and the ratio is well defined; the one
// degenerate input is the empty corpus, which is rejected.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EmbedError;
use crate::text::stopwords::Stopwords;

use super::vocab::build_vocabulary;

/// The sorted vocabulary of a corpus paired with one IDF value per term.
///
/// `vocabulary` and `idf` share one order and one length. This pair is
/// what a caller memoizes when the caption list is fixed across many
/// embedding requests; it serializes so it can also be persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdfWeights {
    /// Unique non-stopword corpus terms, lexicographically ascending.
    pub vocabulary: Vec<String>,
    /// log10(N / doc_freq) per vocabulary term, same order.
    pub idf: Vec<f64>,
}

impl IdfWeights {
    /// The IDF of one term, or None when the term is outside the
    /// vocabulary (a stopword, or simply absent from the corpus).
    pub fn weight(&self, token: &str) -> Option<f64> {
        self.vocabulary
            .binary_search_by(|term| term.as_str().cmp(token))
            .ok()
            .map(|i| self.idf[i])
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

/// Compute IDF weights over the full vocabulary of a tokenized corpus.
///
/// Fails with `EmptyCorpus` when there are no documents at all. A
/// single-document corpus is valid and puts every term at 0.0 (its
/// doc_freq equals N), which collapses IDF weighting to uniform.
pub fn compute_idf(
    documents: &[Vec<String>],
    stopwords: &Stopwords,
) -> Result<IdfWeights, EmbedError> {
    compute_idf_top_k(documents, stopwords, None)
}

/// Same as [`compute_idf`], but over a vocabulary truncated to the top-k
/// most frequent terms. `None` keeps every term, and IDF callers normally
/// want that: restricting the vocabulary silently zeroes the weight of
/// everything outside it.
pub fn compute_idf_top_k(
    documents: &[Vec<String>],
    stopwords: &Stopwords,
    top_k: Option<usize>,
) -> Result<IdfWeights, EmbedError> {
    if documents.is_empty() {
        return Err(EmbedError::EmptyCorpus);
    }

    let vocabulary = build_vocabulary(documents, stopwords, top_k);

    // Presence per document; within-document repeats collapse to one.
    let mut doc_freq: HashMap<&str, usize> = HashMap::new();
    for document in documents {
        let unique: HashSet<&str> = document.iter().map(String::as_str).collect();
        for token in unique {
            *doc_freq.entry(token).or_insert(0) += 1;
        }
    }

    let n = documents.len() as f64;
    let idf: Vec<f64> = vocabulary
        .iter()
        .map(|term| {
            let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            (n / df).log10()
        })
        .collect();

    debug!(
        documents = documents.len(),
        vocabulary = vocabulary.len(),
        "computed idf weights"
    );

    Ok(IdfWeights { vocabulary, idf })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&str]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.split_whitespace().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn equal_document_frequencies_share_one_idf() {
        // Each of a, b, c appears in exactly 2 of 3 documents.
        let weights = compute_idf(&docs(&["a b", "a c", "b c"]), &Stopwords::none()).unwrap();
        assert_eq!(weights.vocabulary, vec!["a", "b", "c"]);

        let expected = (3.0_f64 / 2.0).log10();
        for (term, idf) in weights.vocabulary.iter().zip(&weights.idf) {
            assert!(
                (idf - expected).abs() < 1e-12,
                "idf for {term} should be {expected}, got {idf}"
            );
        }
    }

    #[test]
    fn single_document_corpus_zeroes_every_idf() {
        let weights = compute_idf(&docs(&["a b c"]), &Stopwords::none()).unwrap();
        assert_eq!(weights.len(), 3);
        assert!(weights.idf.iter().all(|&idf| idf == 0.0));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let result = compute_idf(&[], &Stopwords::none());
        assert!(matches!(result, Err(EmbedError::EmptyCorpus)));
    }

    #[test]
    fn within_document_repeats_do_not_raise_doc_freq() {
        // a occurs three times but in one document only: df = 1, N = 2.
        let weights = compute_idf(&docs(&["a a a", "b"]), &Stopwords::none()).unwrap();
        let idf_a = weights.weight("a").unwrap();
        assert!(
            (idf_a - 2.0_f64.log10()).abs() < 1e-12,
            "expected log10(2), got {idf_a}"
        );
    }

    #[test]
    fn stopwords_never_enter_the_vocabulary() {
        let stop = Stopwords::from_words(["a"]);
        let weights = compute_idf(&docs(&["a b", "a c"]), &stop).unwrap();
        assert_eq!(weights.vocabulary, vec!["b", "c"]);
        assert!(weights.weight("a").is_none());
    }

    #[test]
    fn weight_lookup_misses_outside_the_vocabulary() {
        let weights = compute_idf(&docs(&["a b", "b c"]), &Stopwords::none()).unwrap();
        assert!(weights.weight("b").is_some());
        assert!(weights.weight("zebra").is_none());
    }

    #[test]
    fn vocabulary_and_idf_stay_aligned() {
        let weights = compute_idf(&docs(&["d a c b", "c d"]), &Stopwords::none()).unwrap();
        assert_eq!(weights.vocabulary.len(), weights.idf.len());
        let mut sorted = weights.vocabulary.clone();
        sorted.sort();
        assert_eq!(weights.vocabulary, sorted, "vocabulary must stay sorted");
    }

    #[test]
    fn top_k_restriction_shrinks_the_vocabulary() {
        let weights =
            compute_idf_top_k(&docs(&["a a b", "a c"]), &Stopwords::none(), Some(1)).unwrap();
        assert_eq!(weights.vocabulary, vec!["a"]);
        assert!(weights.weight("b").is_none());
    }
}
