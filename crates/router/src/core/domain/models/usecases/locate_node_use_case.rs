#[derive(Debug)]
pub struct LocateNodeUseCaseInput {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocateNodeUseCaseOutput {
    pub node_id: String,
    pub hash: String,
}
