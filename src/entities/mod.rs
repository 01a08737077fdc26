pub mod permission;
pub mod policy;
pub mod role;
