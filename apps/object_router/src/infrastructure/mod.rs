pub mod adapters;
pub mod app_state;
pub mod config;
pub mod di;
pub mod router;
