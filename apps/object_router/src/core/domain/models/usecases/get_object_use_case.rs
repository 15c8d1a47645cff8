use std::time::Duration;

use bytes::Bytes;

#[derive(Debug)]
pub struct GetObjectUseCaseInput {
    pub id: String,
    pub timeout: Duration,
}

#[derive(Debug)]
pub struct GetObjectUseCaseOutput {
    pub body: Bytes,
}
