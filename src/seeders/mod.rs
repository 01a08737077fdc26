pub mod constants;
pub mod loader;
pub mod permission_seeder;
pub mod policy_seeder;
pub mod preparer;
pub mod role_seeder;
pub mod seeder;

pub use constants::SeedTable;
pub use loader::{DataLoader, SeedFile};
pub use preparer::{preparer_for, PolicySelector, PreparedRows, Preparer};
pub use seeder::{SeedReport, Seeder};
