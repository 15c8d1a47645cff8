pub mod membership_watcher;
pub mod routing_service;

pub use membership_watcher::{MembershipWatcher, WatcherConfig};
pub use routing_service::RoutingService;
