#![allow(dead_code)]

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use tempfile::TempDir;

use hotel_reservation::entities::{permission, policy, role};

/// Fresh in-memory database with the full schema applied.
pub async fn setup_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Writes each `(file_name, body)` pair into a temporary fixture folder.
pub fn fixture_dir(files: &[(&str, Value)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, body) in files {
        std::fs::write(dir.path().join(name), serde_json::to_string_pretty(body).unwrap()).unwrap();
    }
    dir
}

pub fn policies_file() -> Value {
    json!({
        "table_name": "policies",
        "data": [
            {"policy_name": "reservations:create", "category": "reservations", "action": "create"},
            {"policy_name": "reservations:read", "category": "reservations", "action": "read"},
            {"policy_name": "rooms:read", "category": "rooms", "action": "read"},
            {"policy_name": "rooms:update", "category": "rooms", "action": "update"}
        ]
    })
}

pub fn roles_file() -> Value {
    json!({
        "table_name": "roles",
        "data": [{"role": "admin"}, {"role": "receptionist"}, {"role": "housekeeping"}]
    })
}

pub fn permissions_file() -> Value {
    json!({
        "table_name": "permissions",
        "data": [
            {"role": "admin", "policies": "*"},
            {"role": "receptionist", "policies": ["reservations:create", "reservations:read", "rooms:read"]},
            {"role": "housekeeping", "policies": ["rooms:update"]}
        ]
    })
}

pub fn standard_fixtures() -> TempDir {
    fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("2_roles.json", roles_file()),
        ("3_permissions.json", permissions_file()),
    ])
}

pub async fn counts(db: &DatabaseConnection) -> (u64, u64, u64) {
    (
        policy::Entity::find().count(db).await.unwrap(),
        role::Entity::find().count(db).await.unwrap(),
        permission::Entity::find().count(db).await.unwrap(),
    )
}
