#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ring_core::RingError;

    use crate::core::domain::models::{RouterError, usecases::AddNodeUseCaseInput};
    use crate::core::usecases::AddNodeUseCase;
    use crate::infrastructure::adapters::services::TreeConsistentHasherService;
    use crate::tests::test_mocks::MockHasher;
    use crate::{ConsistentHasherService, UseCase, UseCaseValidatable};

    #[test]
    fn validate_fails_when_node_id_is_blank() {
        let hasher = Arc::new(MockHasher::new());
        let uc = AddNodeUseCase::new(hasher.clone());

        let input = AddNodeUseCaseInput { node_id: "  ".into() };
        let err = uc.validate_and_execute(input).unwrap_err();

        assert_eq!(err, RouterError::BadRequest("Node id is empty".into()));
        // no llega al hasher
        assert_eq!(hasher.last_add_node.lock().as_deref(), None);
    }

    #[test]
    fn execute_adds_node_and_reports_count() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_node_count(3);
        let uc = AddNodeUseCase::new(hasher.clone());

        let out = uc
            .validate_and_execute(AddNodeUseCaseInput {
                node_id: "cache-1".into(),
            })
            .expect("no debería fallar");

        assert!(out.success);
        assert_eq!(out.node_count, 3);
        assert_eq!(hasher.last_add_node.lock().as_deref(), Some("cache-1"));
    }

    #[test]
    fn execute_fails_when_node_already_exists() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_add_node_result(Ok(false));
        let uc = AddNodeUseCase::new(hasher);

        let err = uc
            .execute(AddNodeUseCaseInput {
                node_id: "cache-1".into(),
            })
            .unwrap_err();

        match err {
            RouterError::NodeAlreadyExists(id) => assert_eq!(id, "cache-1"),
            other => panic!("Esperaba NodeAlreadyExists, got {other:?}"),
        }
    }

    #[test]
    fn execute_propagates_ring_error() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_add_node_result(Err(RingError::UnhashableValue("boom".into()).into()));
        let uc = AddNodeUseCase::new(hasher);

        let err = uc
            .execute(AddNodeUseCaseInput {
                node_id: "cache-1".into(),
            })
            .unwrap_err();

        assert!(matches!(
            err,
            RouterError::Ring(RingError::UnhashableValue(ref msg)) if msg == "boom"
        ));
    }

    #[test]
    fn execute_stores_the_trimmed_id() {
        let hasher = Arc::new(MockHasher::new());
        let uc = AddNodeUseCase::new(hasher.clone());

        uc.validate_and_execute(AddNodeUseCaseInput {
            node_id: " cache-1 ".into(),
        })
        .expect("no debería fallar");

        assert_eq!(hasher.last_add_node.lock().as_deref(), Some("cache-1"));
    }

    #[test]
    fn padded_id_is_the_same_node() {
        let service = Arc::new(TreeConsistentHasherService::new());
        let uc = AddNodeUseCase::new(service.clone());

        uc.validate_and_execute(AddNodeUseCaseInput {
            node_id: " cache-1 ".into(),
        })
        .expect("no debería fallar");

        assert!(service.node_exists("cache-1").unwrap());
        let err = uc
            .validate_and_execute(AddNodeUseCaseInput {
                node_id: "cache-1".into(),
            })
            .unwrap_err();
        assert_eq!(err, RouterError::NodeAlreadyExists("cache-1".into()));
        assert_eq!(service.node_count(), 1);
    }
}
