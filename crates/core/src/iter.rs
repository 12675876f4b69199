use crate::node::KeyedNode;

/// Explicit-stack in-order walk. Holds at most one node per tree level.
struct InOrder<'a, V, K> {
    stack: Vec<&'a KeyedNode<V, K>>,
}

impl<'a, V, K: Ord> InOrder<'a, V, K> {
    fn new(root: Option<&'a KeyedNode<V, K>>) -> Self {
        let mut this = Self { stack: Vec::new() };
        this.push_left_spine(root);
        this
    }

    fn push_left_spine(&mut self, mut node: Option<&'a KeyedNode<V, K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }

    fn next_node(&mut self) -> Option<&'a KeyedNode<V, K>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Values in increasing key order.
pub struct Traverse<'a, V, K> {
    inner: InOrder<'a, V, K>,
}

impl<'a, V, K: Ord> Traverse<'a, V, K> {
    pub(crate) fn new(root: Option<&'a KeyedNode<V, K>>) -> Self {
        Self {
            inner: InOrder::new(root),
        }
    }
}

impl<'a, V, K: Ord> Iterator for Traverse<'a, V, K> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_node().map(KeyedNode::value)
    }
}

/// `(key, value)` pairs in increasing key order.
pub struct Entries<'a, V, K> {
    inner: InOrder<'a, V, K>,
}

impl<'a, V, K: Ord> Entries<'a, V, K> {
    pub(crate) fn new(root: Option<&'a KeyedNode<V, K>>) -> Self {
        Self {
            inner: InOrder::new(root),
        }
    }
}

impl<'a, V, K: Ord> Iterator for Entries<'a, V, K> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_node().map(|n| (n.key(), n.value()))
    }
}
