use std::sync::Arc;

use tracing::info;

use crate::core::{
    domain::{
        models::{
            RouterError,
            usecases::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    use_case::{UseCase, UseCaseValidatable},
};

pub struct RemoveNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl RemoveNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

impl UseCase<RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput, RouterError> for RemoveNodeUseCase {
    fn execute(
        &self,
        input: RemoveNodeUseCaseInput,
    ) -> Result<RemoveNodeUseCaseOutput, RouterError> {
        let node_id = input.node_id.trim();

        let removed = self.hasher_service.remove_node(node_id)?;

        info!("Remove node result from hasher service: {node_id} {removed}");

        if !removed {
            return Err(RouterError::NodeNotFound(format!(
                "{node_id} in hasher service",
            )));
        }

        Ok(RemoveNodeUseCaseOutput {
            success: true,
            node_count: self.hasher_service.node_count(),
        })
    }
}

impl UseCaseValidatable<RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput, RouterError>
    for RemoveNodeUseCase
{
    fn validate(&self, input: &RemoveNodeUseCaseInput) -> Result<(), RouterError> {
        if input.node_id.trim().is_empty() {
            return Err(RouterError::BadRequest("Node id is empty".to_string()));
        }

        Ok(())
    }
}
