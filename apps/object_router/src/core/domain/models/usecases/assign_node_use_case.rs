use app_ring::AddOutcome;

use crate::core::domain::models::InstanceInfo;

#[derive(Debug)]
pub struct AssignNodeUseCaseInput {
    pub instance: InstanceInfo,
}

#[derive(Debug)]
pub struct AssignNodeUseCaseOutput {
    pub position: u64,
    pub outcome: AddOutcome,
}
