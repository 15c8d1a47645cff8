pub mod assign_node_use_case;
pub mod get_object_use_case;
pub mod put_object_use_case;
pub mod remove_node_use_case;

pub use assign_node_use_case::{AssignNodeUseCaseInput, AssignNodeUseCaseOutput};
pub use get_object_use_case::{GetObjectUseCaseInput, GetObjectUseCaseOutput};
pub use put_object_use_case::{PutObjectUseCaseInput, PutObjectUseCaseOutput};
pub use remove_node_use_case::{RemoveNodeUseCaseInput, RemoveNodeUseCaseOutput};
