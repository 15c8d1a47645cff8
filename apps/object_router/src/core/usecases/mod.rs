pub mod assign_node_use_case;
pub mod get_object_use_case;
pub mod put_object_use_case;
pub mod remove_node_use_case;

pub use assign_node_use_case::AssignNodeUseCase;
pub use get_object_use_case::GetObjectUseCase;
pub use put_object_use_case::PutObjectUseCase;
pub use remove_node_use_case::RemoveNodeUseCase;
