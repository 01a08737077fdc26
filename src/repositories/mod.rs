pub mod policy_repository;
pub mod role_repository;

pub use policy_repository::PolicyRepository;
pub use role_repository::RoleRepository;
