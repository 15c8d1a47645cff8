use std::sync::Arc;

use app_ring::{AddOutcome, HashRing, RingEntry};

use crate::core::domain::{
    models::{AppError, BackendNode},
    services::{BlobStore, NodeProvider},
};

pub struct HashRingNodeProvider {
    ring: HashRing<Arc<dyn BlobStore>>,
}

impl HashRingNodeProvider {
    pub fn new(ring_size: u64) -> Result<Self, AppError> {
        Ok(Self::from_ring(HashRing::with_capacity(ring_size)?))
    }

    #[inline]
    pub fn from_ring(ring: HashRing<Arc<dyn BlobStore>>) -> Self {
        Self { ring }
    }

    pub fn new_shared(ring_size: u64) -> Result<Arc<Self>, AppError> {
        Ok(Arc::new(Self::new(ring_size)?))
    }

    pub fn ring(&self) -> &HashRing<Arc<dyn BlobStore>> {
        &self.ring
    }
}

impl NodeProvider for HashRingNodeProvider {
    fn add_node(&self, node: BackendNode) -> (u64, AddOutcome) {
        self.ring.add_node(node)
    }

    fn remove_node(&self, node_id: &str) -> bool {
        self.ring.remove_node(node_id)
    }

    fn stop_node(&self, node_id: &str) -> bool {
        self.ring.stop_node(node_id)
    }

    fn pick_node(&self, key: &str) -> Result<BackendNode, AppError> {
        Ok(self.ring.pick_node(key)?)
    }

    fn snapshot(&self) -> Vec<RingEntry> {
        self.ring.snapshot()
    }
}
