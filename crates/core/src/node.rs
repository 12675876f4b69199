use std::{cmp::Ordering, fmt, mem};

use crate::{
    error::RingResult,
    hasher::KeyHasher,
    iter::{Entries, Traverse},
};

pub type Link<V, K> = Option<Box<KeyedNode<V, K>>>;

/// A search-tree node: a value and the key derived from it.
///
/// Every key in `left` is smaller than `key` and every key in `right` is
/// bigger. Keys are unique; the tree is not balanced.
pub struct KeyedNode<V, K> {
    value: V,
    key: K,
    left: Link<V, K>,
    right: Link<V, K>,
}

impl<V, K: Ord> KeyedNode<V, K> {
    /// Builds a childless node, hashing `value` once.
    pub fn new<H>(value: V, hasher: &H) -> RingResult<Self>
    where
        H: KeyHasher<V, Key = K>,
    {
        let key = hasher.key_of(&value)?;
        Ok(Self::with_key(key, value))
    }

    #[inline]
    pub fn with_key(key: K, value: V) -> Self {
        Self {
            value,
            key,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Inserts below this node. Returns `false` (and drops `value`) when the
    /// key is already stored.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut current = self;

        loop {
            let slot = match key.cmp(&current.key) {
                Ordering::Equal => return false,
                Ordering::Greater => &mut current.right,
                Ordering::Less => &mut current.left,
            };

            match slot {
                Some(child) => current = &mut **child,
                None => {
                    *slot = Some(Box::new(Self::with_key(key, value)));
                    return true;
                }
            }
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        let mut current = self;

        loop {
            let next = match key.cmp(&current.key) {
                Ordering::Equal => return true,
                Ordering::Greater => current.right(),
                Ordering::Less => current.left(),
            };

            match next {
                Some(child) => current = child,
                None => return false,
            }
        }
    }

    /// Leftmost node of this subtree.
    pub fn minimum(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current
    }

    pub fn minimum_value(&self) -> &V {
        &self.minimum().value
    }

    pub fn maximum_value(&self) -> &V {
        let mut current = self;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        &current.value
    }

    /// Next value in key order, looking only below this node.
    ///
    /// Nodes do not know their parent, so when `right` is empty the
    /// successor (if any) is an ancestor and this returns `None`.
    pub fn in_order_successor_value(&self) -> Option<&V> {
        self.right.as_deref().map(Self::minimum_value)
    }

    /// Mirror of [`Self::in_order_successor_value`] on the left subtree.
    pub fn in_order_predecessor_value(&self) -> Option<&V> {
        self.left.as_deref().map(Self::maximum_value)
    }

    /// Removes `key` from this subtree.
    ///
    /// Returns the subtree that must take this node's place in its parent
    /// (itself, one of its children, or nothing) and the removed value.
    /// A missing key leaves the subtree untouched.
    pub fn remove(self: Box<Self>, key: &K) -> (Link<V, K>, Option<V>) {
        let mut link = Some(self);
        let removed = Self::remove_from_link(&mut link, key);
        (link, removed)
    }

    /// Removes `key` from the subtree hanging off `link`, splicing the tree
    /// in place. Walks down with a cursor, so depth costs no stack.
    pub fn remove_from_link(link: &mut Link<V, K>, key: &K) -> Option<V> {
        let mut cursor = link;

        loop {
            let ordering = key.cmp(&cursor.as_ref()?.key);
            cursor = match ordering {
                Ordering::Equal => break,
                Ordering::Less => &mut cursor.as_mut()?.left,
                Ordering::Greater => &mut cursor.as_mut()?.right,
            };
        }

        let node = cursor.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // El sucesor ocupa este nodo; left no se toca
            let successor = *Self::detach_minimum(&mut node.right)?;
            node.key = successor.key;
            return Some(mem::replace(&mut node.value, successor.value));
        }

        let mut target = cursor.take()?;
        *cursor = target.left.take().or(target.right.take());
        Some(target.value)
    }

    /// Unlinks the leftmost node below `link`, moving its right subtree up
    /// into its place.
    fn detach_minimum(link: &mut Link<V, K>) -> Option<Box<Self>> {
        let mut cursor = link;
        while cursor.as_ref()?.left.is_some() {
            cursor = &mut cursor.as_mut()?.left;
        }

        let mut minimum = cursor.take()?;
        *cursor = minimum.right.take();
        Some(minimum)
    }

    /// Hands both children over, leaving this node a leaf.
    pub(crate) fn take_children(&mut self) -> [Link<V, K>; 2] {
        [self.left.take(), self.right.take()]
    }

    /// Lazy in-order walk over the values of this subtree.
    pub fn traverse(&self) -> Traverse<'_, V, K> {
        Traverse::new(Some(self))
    }

    /// Same order as [`Self::traverse`], yielding `(key, value)` pairs.
    pub fn entries(&self) -> Entries<'_, V, K> {
        Entries::new(Some(self))
    }

    /// Node count of this subtree. O(n).
    pub fn count(&self) -> usize {
        self.traverse().count()
    }

    /// Same keys, values and shape.
    pub fn same_shape(&self, other: &Self) -> bool
    where
        V: PartialEq,
    {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.key != b.key || a.value != b.value {
                return false;
            }

            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(a), Some(b)) => pending.push((a, b)),
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<V: Clone, K: Clone> KeyedNode<V, K> {
    /// Copies this node's value and key, taking its already copied children
    /// off the top of `built` (right on top of left).
    fn copy_onto(&self, built: &mut Vec<Box<Self>>) -> Self {
        let right = self.right.as_ref().and_then(|_| built.pop());
        let left = self.left.as_ref().and_then(|_| built.pop());
        Self {
            value: self.value.clone(),
            key: self.key.clone(),
            left,
            right,
        }
    }
}

impl<V: Clone, K: Clone> Clone for KeyedNode<V, K> {
    fn clone(&self) -> Self {
        // Padres antes que hijos y derecha antes que izquierda: al revés es post-orden
        let mut order = Vec::new();
        let mut pending: Vec<&Self> = self.left.as_deref().into_iter().collect();
        pending.extend(self.right.as_deref());
        while let Some(node) = pending.pop() {
            order.push(node);
            pending.extend(node.left.as_deref());
            pending.extend(node.right.as_deref());
        }

        let mut built = Vec::with_capacity(order.len());
        for node in order.into_iter().rev() {
            let copy = node.copy_onto(&mut built);
            built.push(Box::new(copy));
        }
        self.copy_onto(&mut built)
    }
}

/// Prints the in-order `(key, value)` pairs.
impl<V: fmt::Debug, K: Ord + fmt::Debug> fmt::Debug for KeyedNode<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

enum Piece<'a, V, K> {
    Link(Option<&'a KeyedNode<V, K>>),
    Text(&'static str),
}

impl<V: fmt::Display, K: Ord> fmt::Display for KeyedNode<V, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Link(Some(self))];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Link(None) => f.write_str("None")?,
                Piece::Link(Some(node)) => {
                    write!(f, "Node(value={}, right=", node.value)?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Link(node.left()));
                    pending.push(Piece::Text(", left="));
                    pending.push(Piece::Link(node.right()));
                }
            }
        }

        Ok(())
    }
}
