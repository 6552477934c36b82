//! The associative array: a growable, ordered sequence of pairs
//! searched linearly.

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::ArrayError;
use crate::pair::Pair;

/// A key/value container backed by a single growable sequence of
/// [`Pair`]s, searched linearly.
///
/// Entries occupy the contiguous live range `[0, len)`, each with a
/// unique key. Keys compare by value equality (`Eq`). Every lookup is
/// an unconditional O(len) scan; there is no hashing and no ordering
/// beyond the enumeration contract below.
///
/// # Enumeration contract
///
/// Insertion order is preserved until a removal occurs. [`remove`]
/// compacts by moving the final live pair into the vacated slot
/// (swap-with-last), so one removal can reorder the tail entry. Client
/// serialization relies on this being deterministic, so the policy is
/// part of the public contract.
///
/// # Growth
///
/// Capacity starts at [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) and
/// doubles from the current live count (`max(1, len) * 2`) whenever an
/// insert finds the container full. It never shrinks. The budget is
/// tracked explicitly so the policy is observable through
/// [`capacity`](Self::capacity) regardless of how `Vec` amortizes its
/// own allocation.
///
/// [`remove`]: Self::remove
#[derive(Debug)]
pub struct AssocArray<K, V> {
    /// Live pairs, contiguous from index 0.
    pairs: Vec<Pair<K, V>>,
    /// Logical slot budget. `pairs.len() <= capacity` always holds.
    capacity: usize,
}

impl<K, V> AssocArray<K, V> {
    /// Slot budget of a freshly created container.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create an empty container with the default capacity.
    pub fn new() -> Self {
        Self {
            pairs: Vec::with_capacity(Self::DEFAULT_CAPACITY),
            capacity: Self::DEFAULT_CAPACITY,
        }
    }

    /// Number of live key/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the container holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Current slot budget. Grows by doubling, never shrinks.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the live pairs in current slot order.
    ///
    /// The traversal bound is captured when the iterator is created
    /// (snapshot iteration). Each call yields an independent iterator;
    /// obtaining a new one restarts from the first slot. The shared
    /// borrow keeps the container immutable for the iterator's
    /// lifetime, so the stale-snapshot hazard of mutating mid-walk
    /// cannot arise in safe code.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            pairs: &self.pairs,
            index: 0,
            snapshot: self.pairs.len(),
        }
    }

    /// Double the slot budget from the current live count and move the
    /// pairs into a fresh backing allocation. Relative order is
    /// preserved; no data is lost.
    fn grow(&mut self) {
        self.capacity = self.pairs.len().max(1) * 2;
        let mut slots = Vec::with_capacity(self.capacity);
        slots.append(&mut self.pairs);
        self.pairs = slots;
    }
}

impl<K: Eq, V> AssocArray<K, V> {
    /// Bind `key` to `value`. Future `get(key)` calls return `value`.
    ///
    /// `None` is the absent-key sentinel and fails with
    /// [`ArrayError::NullKey`] without mutating anything. A `K` passes
    /// through as `Some` via `Into<Option<K>>`, so ordinary callers
    /// just hand over the key.
    ///
    /// Overwriting an existing key replaces the value in place; the
    /// pair keeps its slot and `len` is unchanged. A new key is
    /// appended at index `len`, growing the container first when it is
    /// full.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), ArrayError> {
        let Some(key) = key.into() else {
            return Err(ArrayError::NullKey);
        };
        if let Ok(index) = self.find(&key) {
            *self.pairs[index].value_mut() = value;
            return Ok(());
        }
        if self.pairs.len() == self.capacity {
            self.grow();
        }
        self.pairs.push(Pair::new(key, value));
        Ok(())
    }

    /// The value bound to `key`, or [`ArrayError::KeyNotFound`].
    pub fn get<Q>(&self, key: &Q) -> Result<&V, ArrayError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.find(key)?;
        Ok(self.pairs[index].value())
    }

    /// Mutable access to the value bound to `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V, ArrayError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.find(key)?;
        Ok(self.pairs[index].value_mut())
    }

    /// Whether a live pair matches `key`. Never fails; an absent key
    /// can never be stored, so it can never match.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.find(key).is_ok()
    }

    /// Delete the binding for `key`; a no-op (not an error) if absent.
    ///
    /// Compaction is swap-with-last: the pair at the final live index
    /// moves into the vacated slot and `len` decrements. O(1), at the
    /// cost of disturbing insertion order for that one entry. See the
    /// type-level enumeration contract.
    pub fn remove<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        if let Ok(index) = self.find(key) {
            self.pairs.swap_remove(index);
        }
    }

    /// Index of the first live pair matching `key`.
    ///
    /// Unconditional linear scan over `[0, len)`; this governs the
    /// complexity of every lookup-shaped operation.
    fn find<Q>(&self, key: &Q) -> Result<usize, ArrayError>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.pairs
            .iter()
            .position(|pair| pair.key().borrow() == key)
            .ok_or(ArrayError::KeyNotFound)
    }
}

impl<K, V> Default for AssocArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq, V: Clone> Clone for AssocArray<K, V> {
    /// Copy every live pair, in current slot order, into a freshly
    /// constructed container with disjoint storage. Capacity is
    /// re-derived by the growth policy rather than copied.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        for (key, value) in self {
            // A live key cannot be the absent sentinel, so this set
            // cannot fail; the discard is deliberate.
            let _ = copy.set(key.clone(), value.clone());
        }
        copy
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssocArray<K, V> {
    /// Renders `{key0:value0, key1:value1}`, or `{}` when empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pair) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{pair}")?;
        }
        write!(f, "}}")
    }
}

impl<'a, K, V> IntoIterator for &'a AssocArray<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Snapshot iterator over the live pairs of an [`AssocArray`].
///
/// Walks slots `0..snapshot` where `snapshot` is the live count at
/// creation time. Created by [`AssocArray::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K, V> {
    pairs: &'a [Pair<K, V>],
    index: usize,
    snapshot: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.snapshot {
            return None;
        }
        let pair = &self.pairs[self.index];
        self.index += 1;
        Some((pair.key(), pair.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.snapshot - self.index;
        (remaining, Some(remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
