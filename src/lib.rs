// Sepia: caption embeddings from IDF-weighted word vectors
//
// This is the library root. Each module corresponds to one stage of the
// embedding pipeline: text cleaning, corpus statistics, the word-vector
// store, and the composer that ties them together.

pub mod corpus;
pub mod embed;
pub mod error;
pub mod text;
pub mod vectors;
