// Text cleaning — punctuation stripping, tokenization, stopword sets.

pub mod tokenize;
pub mod stopwords;
