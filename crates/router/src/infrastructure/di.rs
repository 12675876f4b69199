use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    core::{
        domain::{models::RouterResult, services::ConsistentHasherService},
        usecases::{AddNodeUseCase, LocateNodeUseCase, RemoveNodeUseCase},
    },
    infrastructure::{
        adapters::services::TreeConsistentHasherService, config::RouterConfig,
    },
};

pub struct RouterModule {
    pub hasher_service: Arc<TreeConsistentHasherService>,
    pub add_node_use_case: Arc<AddNodeUseCase>,
    pub remove_node_use_case: Arc<RemoveNodeUseCase>,
    pub locate_node_use_case: Arc<LocateNodeUseCase>,
}

impl RouterModule {
    pub fn build_from_config(config: &RouterConfig) -> RouterResult<Self> {
        let hasher_service = Arc::new(TreeConsistentHasherService::with_seed(config.hash_seed));

        for node_id in &config.initial_nodes {
            if !hasher_service.add_node(node_id)? {
                warn!("Node {node_id} listed twice in config");
            }
        }

        let add_node_use_case = Arc::new(AddNodeUseCase::new(hasher_service.clone()));
        let remove_node_use_case = Arc::new(RemoveNodeUseCase::new(hasher_service.clone()));
        let locate_node_use_case = Arc::new(LocateNodeUseCase::new(hasher_service.clone()));

        info!(
            nodes = hasher_service.node_count(),
            seed = config.hash_seed,
            "Router module ready"
        );

        Ok(Self {
            hasher_service,
            add_node_use_case,
            remove_node_use_case,
            locate_node_use_case,
        })
    }
}
