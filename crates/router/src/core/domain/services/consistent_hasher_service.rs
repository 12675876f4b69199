use crate::core::domain::models::RouterResult;

/// Places cache nodes on a ring and tells which one owns a hash.
pub trait ConsistentHasherService: Send + Sync {
    /// Ring position of `key`, as 16 lower-case hex digits.
    fn create_hash(&self, key: &str) -> RouterResult<String>;

    fn add_node(&self, node_id: &str) -> RouterResult<bool>;

    fn remove_node(&self, node_id: &str) -> RouterResult<bool>;

    fn node_exists(&self, node_id: &str) -> RouterResult<bool>;

    /// Owner of a hash produced by [`Self::create_hash`]. Also accepts
    /// `0x` prefixed hex, or a decimal number when it is not exactly 16 hex
    /// digits. `None` when no node is registered.
    fn get_node_id_from_hash(&self, hash: &str) -> RouterResult<Option<String>>;

    fn node_count(&self) -> usize;

    /// Registered nodes in ring order.
    fn node_ids(&self) -> Vec<String>;
}
