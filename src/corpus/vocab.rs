// Vocabulary construction from tokenized captions.
//
// Within-document multiplicity feeds the global frequency counts used for
// top-k ranking, but document frequency (and therefore IDF) only ever
// sees presence or absence. Stopwords are dropped per document, before
// counts are merged.

use std::collections::HashMap;

use crate::text::stopwords::Stopwords;

/// Token counts for one document, stopwords excluded.
fn filtered_counts(document: &[String], stopwords: &Stopwords) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in document {
        if stopwords.contains(token) {
            continue;
        }
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Build the sorted vocabulary of a tokenized corpus.
///
/// With `top_k = None` the vocabulary is every non-stopword token that
/// appears anywhere in the corpus. With `top_k = Some(k)` only the k most
/// frequent tokens survive (global counts, repeats included); equal counts
/// break by token, ascending, so selection is deterministic. `Some(0)`
/// selects nothing. The result is always sorted lexicographically
/// ascending.
pub fn build_vocabulary(
    documents: &[Vec<String>],
    stopwords: &Stopwords,
    top_k: Option<usize>,
) -> Vec<String> {
    let mut global: HashMap<String, usize> = HashMap::new();
    for document in documents {
        for (token, count) in filtered_counts(document, stopwords) {
            *global.entry(token).or_insert(0) += count;
        }
    }

    let mut vocabulary: Vec<String> = match top_k {
        Some(k) => {
            let mut ranked: Vec<(String, usize)> = global.into_iter().collect();
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            ranked.truncate(k);
            ranked.into_iter().map(|(token, _)| token).collect()
        }
        None => global.into_keys().collect(),
    };

    vocabulary.sort();
    vocabulary
}
