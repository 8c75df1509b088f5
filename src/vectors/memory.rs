// In-memory word-vector store, with a parser for the word2vec text format.
//
// The word2vec text layout (the format GloVe vectors are distributed in
// after conversion) is a header line "<count> <dim>" followed by one line
// per word: the word, then dim float components, whitespace separated.
// Parsing is strict: any malformed header, short row, bad component, or
// count mismatch is an error.

use std::collections::HashMap;

use tracing::debug;

use crate::error::StoreError;

use super::traits::WordVectorStore;

/// A `HashMap`-backed word-vector store.
#[derive(Debug, Clone)]
pub struct WordVectorMap {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl WordVectorMap {
    /// Build from (word, vector) pairs, enforcing one dimension across
    /// the store.
    pub fn from_pairs<I, W>(dim: usize, pairs: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (W, Vec<f32>)>,
        W: Into<String>,
    {
        let mut vectors = HashMap::new();
        for (word, vector) in pairs {
            let word = word.into();
            if vector.len() != dim {
                return Err(StoreError::Dimension {
                    word,
                    expected: dim,
                    found: vector.len(),
                });
            }
            vectors.insert(word, vector);
        }
        Ok(Self { vectors, dim })
    }

    /// Parse word2vec text contents into a store. The caller reads the
    /// resource; this takes its contents.
    pub fn from_word2vec_text(text: &str) -> Result<Self, StoreError> {
        let mut lines = text.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| StoreError::Header(String::new()))?;
        let (declared, dim) = parse_header(header)?;

        let mut vectors: HashMap<String, Vec<f32>> = HashMap::with_capacity(declared);
        let mut rows = 0usize;
        for line in lines {
            let mut fields = line.split_whitespace();
            let word = match fields.next() {
                Some(word) => word,
                None => continue,
            };

            let mut vector = Vec::with_capacity(dim);
            for value in fields {
                let component: f32 = value.parse().map_err(|_| StoreError::Value {
                    word: word.to_string(),
                    value: value.to_string(),
                })?;
                vector.push(component);
            }
            if vector.len() != dim {
                return Err(StoreError::Dimension {
                    word: word.to_string(),
                    expected: dim,
                    found: vector.len(),
                });
            }

            vectors.insert(word.to_string(), vector);
            rows += 1;
        }

        if rows != declared {
            return Err(StoreError::Count {
                declared,
                found: rows,
            });
        }

        debug!(words = vectors.len(), dim, "parsed word2vec text");
        Ok(Self { vectors, dim })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl WordVectorStore for WordVectorMap {
    fn vector(&self, word: &str) -> Option<&[f32]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

fn parse_header(header: &str) -> Result<(usize, usize), StoreError> {
    let mut fields = header.split_whitespace();
    let declared = fields.next().and_then(|f| f.parse::<usize>().ok());
    let dim = fields.next().and_then(|f| f.parse::<usize>().ok());
    match (declared, dim, fields.next()) {
        (Some(declared), Some(dim), None) => Ok((declared, dim)),
        _ => Err(StoreError::Header(header.to_string())),
    }
}
