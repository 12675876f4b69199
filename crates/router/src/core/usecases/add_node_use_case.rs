use std::sync::Arc;

use tracing::info;

use crate::core::{
    domain::{
        models::{
            RouterError,
            usecases::{AddNodeUseCaseInput, AddNodeUseCaseOutput},
        },
        services::ConsistentHasherService,
    },
    use_case::{UseCase, UseCaseValidatable},
};

pub struct AddNodeUseCase {
    hasher_service: Arc<dyn ConsistentHasherService>,
}

impl AddNodeUseCase {
    pub fn new(hasher_service: Arc<dyn ConsistentHasherService>) -> Self {
        Self { hasher_service }
    }
}

impl UseCase<AddNodeUseCaseInput, AddNodeUseCaseOutput, RouterError> for AddNodeUseCase {
    fn execute(&self, input: AddNodeUseCaseInput) -> Result<AddNodeUseCaseOutput, RouterError> {
        info!("New Node: {:?}", input);

        let node_id = input.node_id.trim();
        if !self.hasher_service.add_node(node_id)? {
            return Err(RouterError::NodeAlreadyExists(node_id.to_string()));
        }

        Ok(AddNodeUseCaseOutput {
            success: true,
            node_count: self.hasher_service.node_count(),
        })
    }
}

impl UseCaseValidatable<AddNodeUseCaseInput, AddNodeUseCaseOutput, RouterError>
    for AddNodeUseCase
{
    fn validate(&self, input: &AddNodeUseCaseInput) -> Result<(), RouterError> {
        if input.node_id.trim().is_empty() {
            return Err(RouterError::BadRequest("Node id is empty".to_string()));
        }

        Ok(())
    }
}
