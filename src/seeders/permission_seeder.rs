use async_trait::async_trait;
use sea_orm::DatabaseTransaction;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::permission;
use crate::error::SeedError;
use crate::repositories::{PolicyRepository, RoleRepository};
use super::constants::SeedTable;
use super::preparer::{parse_records, PolicySelector, PreparedRows, Preparer};

#[derive(Debug, Deserialize)]
pub struct PermissionRecord {
    pub role: String,
    pub policies: PolicySelector,
}

/// Resolves role and policy names to ids and emits one grant per pair.
pub struct PermissionPreparer;

#[async_trait]
impl Preparer for PermissionPreparer {
    fn table(&self) -> SeedTable {
        SeedTable::Permissions
    }

    async fn prepare(&self, db: &DatabaseTransaction, data: &[Value]) -> Result<PreparedRows, SeedError> {
        let mut rows = Vec::new();

        for item in parse_records::<PermissionRecord>(self.table(), data)? {
            let Some(role) = RoleRepository::find_by_name(db, &item.role).await? else {
                tracing::warn!("Role '{}' not found, skipping permissions", item.role);
                continue;
            };

            let policies = match &item.policies {
                PolicySelector::All => PolicyRepository::find_all(db).await?,
                PolicySelector::Named(names) => {
                    let found = PolicyRepository::find_by_names(db, names).await?;
                    let missing: Vec<&str> = names
                        .iter()
                        .filter(|n| !found.iter().any(|p| &p.policy_name == *n))
                        .map(String::as_str)
                        .collect();
                    if !missing.is_empty() {
                        tracing::warn!(
                            "Unknown policies for role '{}': {}",
                            item.role,
                            missing.join(", ")
                        );
                    }
                    found
                }
            };

            if policies.is_empty() {
                tracing::warn!("No policies found for role '{}'", item.role);
                continue;
            }

            rows.extend(
                policies
                    .iter()
                    .map(|policy| permission::ActiveModel::grant(role.id, policy.id)),
            );
        }

        Ok(PreparedRows::Permissions(rows))
    }
}
