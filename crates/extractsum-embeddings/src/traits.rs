//! The lookup seam between word vectors and their consumers.

/// Read-only token to vector lookup with a fixed dimensionality.
pub trait WordEmbeddings: Send + Sync {
    /// D, shared by every vector.
    fn dimensions(&self) -> usize;

    /// The vector of an exact (lowercase) token; `None` when out of vocabulary.
    fn vector(&self, token: &str) -> Option<&[f32]>;

    fn contains(&self, token: &str) -> bool {
        self.vector(token).is_some()
    }

    /// Mean vector of the in-vocabulary tokens, and how many there were.
    ///
    /// The zero vector of length D when no token is in vocabulary.
    fn average<'t>(&self, tokens: impl IntoIterator<Item = &'t str>) -> (Vec<f64>, usize)
    where
        Self: Sized,
    {
        let mut sum = vec![0.0f64; self.dimensions()];
        let mut found = 0usize;
        for token in tokens {
            if let Some(v) = self.vector(token) {
                for (acc, x) in sum.iter_mut().zip(v) {
                    *acc += f64::from(*x);
                }
                found += 1;
            }
        }
        if found > 0 {
            let n = found as f64;
            sum.iter_mut().for_each(|x| *x /= n);
        }
        (sum, found)
    }
}
