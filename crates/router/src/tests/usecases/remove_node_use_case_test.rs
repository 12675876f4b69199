#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::core::domain::models::{RouterError, usecases::RemoveNodeUseCaseInput};
    use crate::core::usecases::RemoveNodeUseCase;
    use crate::tests::test_mocks::MockHasher;
    use crate::{UseCase, UseCaseValidatable};

    #[test]
    fn validate_fails_when_node_id_is_empty() {
        let hasher = Arc::new(MockHasher::new());
        let uc = RemoveNodeUseCase::new(hasher);

        let input = RemoveNodeUseCaseInput { node_id: "".into() };
        let err = uc.validate(&input).unwrap_err();

        assert!(matches!(err, RouterError::BadRequest(_)));
    }

    #[test]
    fn removes_node_from_hasher() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_node_count(1);
        let uc = RemoveNodeUseCase::new(hasher.clone());

        let out = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "n1".into(),
            })
            .expect("no debería fallar");

        assert!(out.success);
        assert_eq!(out.node_count, 1);
        assert_eq!(hasher.last_remove_node.lock().as_deref(), Some("n1"));
    }

    #[test]
    fn fails_when_hasher_does_not_hold_the_node() {
        let hasher = Arc::new(MockHasher::new());
        hasher.set_remove_node_result(Ok(false));
        let uc = RemoveNodeUseCase::new(hasher);

        let err = uc
            .execute(RemoveNodeUseCaseInput {
                node_id: "n3".into(),
            })
            .unwrap_err();

        match err {
            RouterError::NodeNotFound(msg) => assert!(msg.contains("n3")),
            other => panic!("Esperaba NodeNotFound, got {other:?}"),
        }
    }

    #[test]
    fn removes_the_trimmed_id() {
        let hasher = Arc::new(MockHasher::new());
        let uc = RemoveNodeUseCase::new(hasher.clone());

        uc.validate_and_execute(RemoveNodeUseCaseInput {
            node_id: "\tn1 ".into(),
        })
        .expect("no debería fallar");

        assert_eq!(hasher.last_remove_node.lock().as_deref(), Some("n1"));
    }
}
