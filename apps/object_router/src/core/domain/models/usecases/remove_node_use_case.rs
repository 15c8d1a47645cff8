use crate::core::domain::models::StopPolicy;

#[derive(Debug)]
pub struct RemoveNodeUseCaseInput {
    pub node_id: String,
    pub policy: StopPolicy,
}

#[derive(Debug)]
pub struct RemoveNodeUseCaseOutput {
    pub success: bool,
}
