#[derive(Debug)]
pub struct AddNodeUseCaseInput {
    pub node_id: String,
}

#[derive(Debug)]
pub struct AddNodeUseCaseOutput {
    pub success: bool,
    pub node_count: usize,
}
