// Word-vector store trait — the swap-ready lookup abstraction.
//
// Pre-trained vectors can live anywhere, an in-memory map being only the
// bundled case. The embedding pipeline needs a read-only lookup with a
// fixed dimension and an explicit not-found signal, nothing more.

/// Read-only lookup from a lowercase token to its pre-trained vector.
pub trait WordVectorStore {
    /// The vector for `word`, or None when the store has no entry.
    /// None is the not-found signal; it is never conflated with a stored
    /// zero vector.
    fn vector(&self, word: &str) -> Option<&[f32]>;

    /// The dimension every vector in this store has.
    fn dim(&self) -> usize;
}

/// A loaded store can be shared read-only: a borrow of a store is itself
/// a store.
impl<S: WordVectorStore + ?Sized> WordVectorStore for &S {
    fn vector(&self, word: &str) -> Option<&[f32]> {
        (**self).vector(word)
    }

    fn dim(&self) -> usize {
        (**self).dim()
    }
}
