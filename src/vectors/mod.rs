// Pre-trained word vectors — the store capability and its in-memory form.
//
// The store is an external collaborator: the caller loads it once and
// injects it wherever embeddings are computed. Lookups distinguish
// "absent" from "present with a zero vector".

pub mod traits;
pub mod memory;

/// Dimension of the GloVe 6B-50d vectors this pipeline is built around.
/// Stores of any other uniform dimension work as well; this is the
/// pairing the caption pipeline ships with.
pub const GLOVE_DIM: usize = 50;
