use app_ring::{AddOutcome, RingEntry};

use crate::core::domain::models::{AppError, BackendNode};

pub trait NodeProvider: Send + Sync {
    fn add_node(&self, node: BackendNode) -> (u64, AddOutcome);

    fn remove_node(&self, node_id: &str) -> bool;

    fn stop_node(&self, node_id: &str) -> bool;

    fn pick_node(&self, key: &str) -> Result<BackendNode, AppError>;

    fn snapshot(&self) -> Vec<RingEntry>;
}
