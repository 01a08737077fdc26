use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::entities::{permission, policy, role};
use crate::error::SeedError;
use super::constants::SeedTable;
use super::permission_seeder::PermissionPreparer;
use super::policy_seeder::PolicyPreparer;
use super::role_seeder::RolePreparer;

/// Rows ready for a bulk insert into one table.
#[derive(Debug)]
pub enum PreparedRows {
    Policies(Vec<policy::ActiveModel>),
    Roles(Vec<role::ActiveModel>),
    Permissions(Vec<permission::ActiveModel>),
}

impl PreparedRows {
    pub fn len(&self) -> usize {
        match self {
            PreparedRows::Policies(rows) => rows.len(),
            PreparedRows::Roles(rows) => rows.len(),
            PreparedRows::Permissions(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts all rows with a single statement. Returns the affected row count.
    pub async fn insert_all<C: ConnectionTrait>(self, db: &C) -> Result<u64, DbErr> {
        if self.is_empty() {
            return Ok(0);
        }

        match self {
            PreparedRows::Policies(rows) => {
                policy::Entity::insert_many(rows).exec_without_returning(db).await
            }
            PreparedRows::Roles(rows) => {
                role::Entity::insert_many(rows).exec_without_returning(db).await
            }
            PreparedRows::Permissions(rows) => {
                permission::Entity::insert_many(rows).exec_without_returning(db).await
            }
        }
    }
}

/// Turns raw fixture items for one table into insertable rows.
#[async_trait]
pub trait Preparer: Send + Sync {
    fn table(&self) -> SeedTable;

    fn table_name(&self) -> &'static str {
        self.table().table_name()
    }

    async fn prepare(&self, db: &DatabaseTransaction, data: &[Value]) -> Result<PreparedRows, SeedError>;
}

static PREPARERS: [&dyn Preparer; 3] = [&PolicyPreparer, &RolePreparer, &PermissionPreparer];

pub fn preparer_for(table_name: &str) -> Option<&'static dyn Preparer> {
    PREPARERS.iter().copied().find(|p| p.table_name() == table_name)
}

/// Deserializes every item, failing on the first one with the wrong shape.
pub(crate) fn parse_records<T: DeserializeOwned>(
    table: SeedTable,
    data: &[Value],
) -> Result<Vec<T>, SeedError> {
    data.iter()
        .map(|item| {
            T::deserialize(item).map_err(|source| SeedError::InvalidRecord {
                table: table.table_name(),
                source,
            })
        })
        .collect()
}

/// Which policies a permission entry grants: `"*"` or a list of policy names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSelector")]
pub enum PolicySelector {
    All,
    Named(Vec<String>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSelector {
    Wildcard(String),
    Names(Vec<String>),
}

impl TryFrom<RawSelector> for PolicySelector {
    type Error = String;

    fn try_from(raw: RawSelector) -> Result<Self, Self::Error> {
        match raw {
            RawSelector::Wildcard(s) if s == "*" => Ok(PolicySelector::All),
            RawSelector::Wildcard(s) => Err(format!(
                "expected \"*\" or a list of policy names, got \"{}\"",
                s
            )),
            RawSelector::Names(names) => Ok(PolicySelector::Named(names)),
        }
    }
}
