//! The key/value leaf type stored by [`AssocArray`](crate::AssocArray).

use std::fmt;

/// A single key/value binding.
///
/// The key is fixed at construction; only the value can be replaced,
/// and only through [`value_mut`](Pair::value_mut), which the owning
/// container uses when an existing key is overwritten.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Create a binding from a key and a value.
    ///
    /// No validation happens here; rejecting absent keys is the
    /// container's job.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The key. Immutable for the pair's whole lifetime.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The current value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value. The key stays untouchable.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consume the pair, yielding its parts.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}
