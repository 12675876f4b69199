use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::RingResult,
    hasher::{KeyHasher, StdKeyHasher},
    iter::{Entries, Traverse},
    node::{KeyedNode, Link},
};

/// Consistent hash ring over an unbalanced binary search tree.
///
/// Each value sits at the position given by its key. A lookup lands on the
/// first value at or after the looked up key, wrapping past the biggest key
/// back to the smallest one.
///
/// Values whose keys collide are the same position: the later one is
/// dropped on [`HashRing::add`] and can never be retrieved.
pub struct HashRing<V, H: KeyHasher<V> = StdKeyHasher> {
    root: Link<V, H::Key>,
    hasher: H,
}

impl<V> HashRing<V, StdKeyHasher>
where
    StdKeyHasher: KeyHasher<V>,
{
    pub fn new() -> Self {
        Self::with_hasher(StdKeyHasher::new())
    }

    /// Ring holding `value` as its only member.
    pub fn with_value(value: V) -> RingResult<Self> {
        Self::with_value_and_hasher(value, StdKeyHasher::new())
    }
}

impl<V> Default for HashRing<V, StdKeyHasher>
where
    StdKeyHasher: KeyHasher<V>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, H: KeyHasher<V>> HashRing<V, H> {
    pub fn with_hasher(hasher: H) -> Self {
        Self { root: None, hasher }
    }

    pub fn with_value_and_hasher(value: V, hasher: H) -> RingResult<Self> {
        let root = KeyedNode::new(value, &hasher)?;
        Ok(Self {
            root: Some(Box::new(root)),
            hasher,
        })
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn root(&self) -> Option<&KeyedNode<V, H::Key>> {
        self.root.as_deref()
    }

    /// Adds `value` at its key. Returns `false` when the key is taken, in
    /// which case `value` is dropped and the ring is unchanged.
    pub fn add(&mut self, value: V) -> RingResult<bool> {
        let key = self.hasher.key_of(&value)?;

        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(key.clone(), value),
            None => {
                self.root = Some(Box::new(KeyedNode::with_key(key.clone(), value)));
                true
            }
        };

        if inserted {
            debug!(?key, "value added to ring");
        } else {
            debug!(?key, "key already on ring, value dropped");
        }

        Ok(inserted)
    }

    /// Adds every value, stopping at the first one without a key.
    /// Returns how many were actually inserted.
    pub fn try_extend<I>(&mut self, values: I) -> RingResult<usize>
    where
        I: IntoIterator<Item = V>,
    {
        let mut inserted = 0;
        for value in values {
            if self.add(value)? {
                inserted += 1;
            }
        }
        Ok(inserted)
    }

    /// Removes the value stored at the key of `value`. Absent values are
    /// ignored.
    pub fn remove<Q>(&mut self, value: &Q) -> RingResult<Option<V>>
    where
        Q: ?Sized,
        H: KeyHasher<Q, Key = <H as KeyHasher<V>>::Key>,
    {
        if self.root.is_none() {
            return Ok(None);
        }

        let key = <H as KeyHasher<Q>>::key_of(&self.hasher, value)?;
        let removed = KeyedNode::remove_from_link(&mut self.root, &key);

        if removed.is_some() {
            debug!(?key, empty = self.root.is_none(), "value removed from ring");
        } else {
            trace!(?key, "remove ignored, key not on ring");
        }

        Ok(removed)
    }

    pub fn contains<Q>(&self, value: &Q) -> RingResult<bool>
    where
        Q: ?Sized,
        H: KeyHasher<Q, Key = <H as KeyHasher<V>>::Key>,
    {
        let Some(root) = self.root.as_deref() else {
            return Ok(false);
        };

        let key = <H as KeyHasher<Q>>::key_of(&self.hasher, value)?;
        Ok(root.contains(&key))
    }

    /// Owner of `value`: the stored value with the same key, or else the one
    /// with the smallest key above it, or else (every key is below) the one
    /// with the smallest key overall. `None` only when the ring is empty.
    pub fn find_best_match<Q>(&self, value: &Q) -> RingResult<Option<&V>>
    where
        Q: ?Sized,
        H: KeyHasher<Q, Key = <H as KeyHasher<V>>::Key>,
    {
        if self.root.is_none() {
            return Ok(None);
        }

        let key = <H as KeyHasher<Q>>::key_of(&self.hasher, value)?;
        Ok(self.find_best_match_key(&key))
    }

    /// [`Self::find_best_match`] for an already derived key.
    pub fn find_best_match_key(&self, target: &H::Key) -> Option<&V> {
        let root = self.root.as_deref()?;

        let mut candidate: Option<&KeyedNode<V, H::Key>> = None;
        let mut current = Some(root);

        while let Some(node) = current {
            if node.key() == target {
                trace!(key = ?target, "exact match on ring");
                return Some(node.value());
            }

            if node.key() > target {
                // Todo lo que queda por visitar es menor que este nodo
                candidate = Some(node);
                current = node.left();
            } else {
                current = node.right();
            }
        }

        match candidate {
            Some(node) => {
                trace!(key = ?target, owner = ?node.key(), "successor match on ring");
                Some(node.value())
            }
            None => {
                trace!(key = ?target, "no key above target, wrapping to minimum");
                Some(root.minimum_value())
            }
        }
    }

    /// Values in increasing key order.
    pub fn iter(&self) -> Traverse<'_, V, H::Key> {
        Traverse::new(self.root.as_deref())
    }

    pub fn entries(&self) -> Entries<'_, V, H::Key> {
        Entries::new(self.root.as_deref())
    }

    /// Walks the whole ring, O(n). No counter is kept.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Same members and same tree shape. Rings with equal members built in
    /// different insertion orders can differ here while being `==`.
    pub fn structurally_eq<H2>(&self, other: &HashRing<V, H2>) -> bool
    where
        V: PartialEq,
        H2: KeyHasher<V, Key = H::Key>,
    {
        match (self.root(), other.root()) {
            (None, None) => true,
            (Some(a), Some(b)) => a.same_shape(b),
            _ => false,
        }
    }
}

/// Unlinks the tree node by node; the default drop would recurse once per
/// level and a sorted insertion order makes the tree as deep as it is long.
impl<V, H: KeyHasher<V>> Drop for HashRing<V, H> {
    fn drop(&mut self) {
        let mut pending: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children().into_iter().flatten());
        }
    }
}

/// Member equality: same keys holding the same values.
impl<V: PartialEq, H: KeyHasher<V>> PartialEq for HashRing<V, H> {
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

impl<V: Clone, H: KeyHasher<V> + Clone> Clone for HashRing<V, H> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            hasher: self.hasher.clone(),
        }
    }
}

impl<V: fmt::Debug, H: KeyHasher<V> + fmt::Debug> fmt::Debug for HashRing<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRing")
            .field("root", &self.root)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<V: fmt::Display, H: KeyHasher<V>> fmt::Display for HashRing<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(root, f),
            None => f.write_str("None"),
        }
    }
}

impl<'a, V, H: KeyHasher<V>> IntoIterator for &'a HashRing<V, H> {
    type Item = &'a V;
    type IntoIter = Traverse<'a, V, H::Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
