use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, DatabaseTransaction, Set};
use serde::Deserialize;
use serde_json::Value;

use crate::entities::role;
use crate::error::SeedError;
use super::constants::SeedTable;
use super::preparer::{parse_records, PreparedRows, Preparer};

#[derive(Debug, Deserialize)]
pub struct RoleRecord {
    pub role: String,
}

pub struct RolePreparer;

#[async_trait]
impl Preparer for RolePreparer {
    fn table(&self) -> SeedTable {
        SeedTable::Roles
    }

    async fn prepare(&self, _db: &DatabaseTransaction, data: &[Value]) -> Result<PreparedRows, SeedError> {
        let rows = parse_records::<RoleRecord>(self.table(), data)?
            .into_iter()
            .map(|item| role::ActiveModel {
                role: Set(item.role),
                ..ActiveModelBehavior::new()
            })
            .collect();

        Ok(PreparedRows::Roles(rows))
    }
}
