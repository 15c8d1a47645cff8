use std::{sync::Arc, time::Duration};

use bytes::Bytes;

#[derive(Debug)]
pub struct PutObjectUseCaseInput {
    pub id: String,
    pub body: Bytes,
    pub timeout: Duration,
}

#[derive(Debug)]
pub struct PutObjectUseCaseOutput {
    pub node_id: Arc<str>,
}
