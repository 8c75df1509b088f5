// Caption embedding: compose a caption's word vectors into a single
// mean-centered vector, weighted by corpus IDF.

pub mod composer;
