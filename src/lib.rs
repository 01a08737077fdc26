pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod repositories;
pub mod seeders;

pub use error::SeedError;
