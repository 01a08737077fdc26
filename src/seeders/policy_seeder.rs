use async_trait::async_trait;
use sea_orm::{ActiveModelBehavior, DatabaseTransaction, Set};
use serde::Deserialize;
use serde_json::Value;

use crate::entities::policy;
use crate::error::SeedError;
use super::constants::SeedTable;
use super::preparer::{parse_records, PreparedRows, Preparer};

#[derive(Debug, Deserialize)]
pub struct PolicyRecord {
    pub policy_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
}

pub struct PolicyPreparer;

#[async_trait]
impl Preparer for PolicyPreparer {
    fn table(&self) -> SeedTable {
        SeedTable::Policies
    }

    async fn prepare(&self, _db: &DatabaseTransaction, data: &[Value]) -> Result<PreparedRows, SeedError> {
        let rows = parse_records::<PolicyRecord>(self.table(), data)?
            .into_iter()
            .map(|item| policy::ActiveModel {
                policy_name: Set(item.policy_name),
                category: Set(item.category),
                action: Set(item.action),
                ..ActiveModelBehavior::new()
            })
            .collect();

        Ok(PreparedRows::Policies(rows))
    }
}
