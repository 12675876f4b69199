#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::core::domain::models::{RouterError, usecases::LocateNodeUseCaseInput};
    use crate::core::usecases::LocateNodeUseCase;
    use crate::tests::test_mocks::MockHasher;
    use crate::{UseCase, UseCaseValidatable};

    #[test]
    fn validate_fails_when_key_is_empty() {
        let hasher = Arc::new(MockHasher::new());
        let uc = LocateNodeUseCase::new(hasher);

        let input = LocateNodeUseCaseInput { key: "".into() };
        let err = uc.validate(&input).unwrap_err();

        match err {
            RouterError::BadRequest(msg) => assert_eq!(msg, "Key is empty"),
            _ => panic!("Esperaba BadRequest(\"Key is empty\")"),
        }
    }

    #[test]
    fn execute_fails_when_no_node_owns_the_hash() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_node_for_hash(None);
        let uc = LocateNodeUseCase::new(hasher);

        let err = uc
            .execute(LocateNodeUseCaseInput {
                key: "mykey".into(),
            })
            .unwrap_err();

        match err {
            RouterError::NodeNotFound(msg) => {
                assert!(msg.contains("mykey"));
                assert!(msg.contains("hash")); // create_hash() => "hash"
            }
            _ => panic!("Esperaba NodeNotFound"),
        }
    }

    #[test]
    fn execute_returns_owner_and_hash() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_node_for_hash(Some("node-1"));
        let uc = LocateNodeUseCase::new(hasher.clone());

        let out = uc
            .validate_and_execute(LocateNodeUseCaseInput { key: "k1".into() })
            .expect("no debería fallar");

        assert_eq!(out.node_id, "node-1");
        assert_eq!(out.hash, "hash");
        assert_eq!(hasher.last_hash_lookup.lock().as_deref(), Some("hash"));
    }
}
