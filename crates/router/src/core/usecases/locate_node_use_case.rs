use std::sync::Arc;

use tracing::trace;

use crate::core::{
    domain::{
        models::{
            RouterError,
            usecases::{LocateNodeUseCaseInput, LocateNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    use_case::{UseCase, UseCaseValidatable},
};

/// Finds the cache node that owns a data key.
pub struct LocateNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl LocateNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

impl UseCase<LocateNodeUseCaseInput, LocateNodeUseCaseOutput, RouterError> for LocateNodeUseCase {
    fn execute(
        &self,
        input: LocateNodeUseCaseInput,
    ) -> Result<LocateNodeUseCaseOutput, RouterError> {
        let hash = self.hasher_service.create_hash(&input.key)?;
        trace!("Hash for key {}: {}", input.key, hash);

        let Some(node_id) = self.hasher_service.get_node_id_from_hash(&hash)? else {
            return Err(RouterError::NodeNotFound(format!(
                "No node found for key {} with hash {}",
                input.key, hash
            )));
        };

        trace!("Node ID for key {}: {}", input.key, node_id);

        Ok(LocateNodeUseCaseOutput { node_id, hash })
    }
}

impl UseCaseValidatable<LocateNodeUseCaseInput, LocateNodeUseCaseOutput, RouterError>
    for LocateNodeUseCase
{
    fn validate(&self, input: &LocateNodeUseCaseInput) -> Result<(), RouterError> {
        if input.key.is_empty() {
            return Err(RouterError::BadRequest("Key is empty".to_string()));
        }

        Ok(())
    }
}
