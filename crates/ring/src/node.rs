use std::{fmt, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Running,
    Stopped,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Running => "running",
            NodeStatus::Stopped => "stopped",
        }
    }
}

/// A ring entry: the backend's stable name, its availability and the handle
/// used to talk to it.
#[derive(Clone)]
pub struct Node<T> {
    pub name: Arc<str>,
    pub status: NodeStatus,
    pub client: T,
}

impl<T> Node<T> {
    #[inline]
    pub fn new(name: impl Into<Arc<str>>, client: T) -> Self {
        Self {
            name: name.into(),
            status: NodeStatus::Running,
            client,
        }
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.status == NodeStatus::Stopped
    }
}

impl<T> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("status", &self.status)
            .finish()
    }
}
