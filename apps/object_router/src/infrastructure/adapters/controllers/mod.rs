pub mod admin_controller;
pub mod error_response;
pub mod object_controller;
