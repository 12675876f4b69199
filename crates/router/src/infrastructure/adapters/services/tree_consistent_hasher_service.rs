use std::sync::Arc;

use parking_lot::RwLock;
use ring_core::{HashRing, KeyHasher, StdKeyHasher};
use tracing::debug;

use crate::core::domain::{
    models::{RouterError, RouterResult},
    services::ConsistentHasherService,
};

const HASH_DIGITS: usize = 16;

/// Node ring kept in a search tree. The lock admits one writer at a time;
/// the ring itself is never mutated concurrently.
pub struct TreeConsistentHasherService {
    ring: RwLock<HashRing<Arc<str>>>,
}

impl TreeConsistentHasherService {
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            ring: RwLock::new(HashRing::with_hasher(StdKeyHasher::with_seed(seed))),
        }
    }

    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// `0x` prefix or exactly 16 hex digits (the [`Self::create_hash`] form)
    /// is hex; anything else is decimal.
    pub(crate) fn parse_hash(hash: &str) -> RouterResult<u64> {
        let trimmed = hash.trim();

        let (digits, radix) = match trimmed.strip_prefix("0x") {
            Some(rest) => (rest, 16),
            None if trimmed.len() == HASH_DIGITS
                && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) =>
            {
                (trimmed, 16)
            }
            None => (trimmed, 10),
        };

        // from_str_radix admite un signo delante; aqui no
        if digits.starts_with(['+', '-']) {
            return Err(RouterError::BadRequest(format!("Invalid hash: {hash}")));
        }

        u64::from_str_radix(digits, radix)
            .map_err(|_| RouterError::BadRequest(format!("Invalid hash: {hash}")))
    }

    /// Exact owner check. A different id whose hash collides with a stored
    /// one is not reported as present.
    fn holds(ring: &HashRing<Arc<str>>, node_id: &str) -> RouterResult<bool> {
        let found = ring.find_best_match(node_id)?;
        Ok(found.is_some_and(|n| &**n == node_id))
    }
}

impl Default for TreeConsistentHasherService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsistentHasherService for TreeConsistentHasherService {
    fn create_hash(&self, key: &str) -> RouterResult<String> {
        let hasher = *self.ring.read().hasher();
        let hv = hasher.key_of(key)?;
        Ok(format!("{:016x}", hv))
    }

    fn add_node(&self, node_id: &str) -> RouterResult<bool> {
        let mut ring = self.ring.write();

        let added = ring.add(Arc::<str>::from(node_id))?;
        if !added {
            // Ya existe (o colisiona) -> no se reinserta
            debug!("Node {node_id} not added, position already taken");
        }

        Ok(added)
    }

    fn remove_node(&self, node_id: &str) -> RouterResult<bool> {
        let mut ring = self.ring.write();

        if !Self::holds(&ring, node_id)? {
            return Ok(false);
        }

        Ok(ring.remove(node_id)?.is_some())
    }

    fn node_exists(&self, node_id: &str) -> RouterResult<bool> {
        Self::holds(&self.ring.read(), node_id)
    }

    fn get_node_id_from_hash(&self, hash: &str) -> RouterResult<Option<String>> {
        let parsed = Self::parse_hash(hash)?;

        let ring = self.ring.read();
        Ok(ring.find_best_match_key(&parsed).map(|node| node.to_string()))
    }

    fn node_count(&self) -> usize {
        self.ring.read().len()
    }

    fn node_ids(&self) -> Vec<String> {
        self.ring.read().iter().map(|node| node.to_string()).collect()
    }
}
