// Corpus statistics — vocabulary construction and inverse document
// frequency over tokenized captions.

pub mod vocab;
pub mod idf;
