use parking_lot::Mutex;

use crate::core::domain::{
    models::{RouterError, RouterResult},
    services::ConsistentHasherService,
};

pub struct MockHasher {
    // respuestas configurables
    pub add_node_result: Mutex<RouterResult<bool>>,
    pub remove_node_result: Mutex<RouterResult<bool>>,
    pub node_for_hash: Mutex<Option<String>>,
    pub node_count: Mutex<usize>,

    // para inspección de llamadas
    pub last_add_node: Mutex<Option<String>>,
    pub last_remove_node: Mutex<Option<String>>,
    pub last_hash_lookup: Mutex<Option<String>>,
}

impl MockHasher {
    pub fn new() -> Self {
        Self {
            add_node_result: Mutex::new(Ok(true)),
            remove_node_result: Mutex::new(Ok(true)),
            node_for_hash: Mutex::new(None),
            node_count: Mutex::new(0),
            last_add_node: Mutex::new(None),
            last_remove_node: Mutex::new(None),
            last_hash_lookup: Mutex::new(None),
        }
    }

    // helpers para configurar
    pub fn set_add_node_result(&self, r: RouterResult<bool>) {
        *self.add_node_result.lock() = r;
    }
    pub fn set_remove_node_result(&self, r: RouterResult<bool>) {
        *self.remove_node_result.lock() = r;
    }
    pub fn set_node_for_hash(&self, id: Option<&str>) {
        *self.node_for_hash.lock() = id.map(|s| s.to_string());
    }
    pub fn set_node_count(&self, count: usize) {
        *self.node_count.lock() = count;
    }
}

impl ConsistentHasherService for MockHasher {
    fn create_hash(&self, _key: &str) -> RouterResult<String> {
        Ok("hash".into())
    }

    fn add_node(&self, node_id: &str) -> RouterResult<bool> {
        *self.last_add_node.lock() = Some(node_id.to_string());
        self.add_node_result.lock().clone()
    }

    fn remove_node(&self, node_id: &str) -> RouterResult<bool> {
        *self.last_remove_node.lock() = Some(node_id.to_string());
        self.remove_node_result.lock().clone()
    }

    fn node_exists(&self, _node_id: &str) -> RouterResult<bool> {
        Err(RouterError::BadRequest("not used by these tests".into()))
    }

    fn get_node_id_from_hash(&self, hash: &str) -> RouterResult<Option<String>> {
        *self.last_hash_lookup.lock() = Some(hash.to_string());
        Ok(self.node_for_hash.lock().clone())
    }

    fn node_count(&self) -> usize {
        *self.node_count.lock()
    }

    fn node_ids(&self) -> Vec<String> {
        vec![]
    }
}
