//! End-to-end seeding runs against an in-memory database

mod common;

use common::{counts, fixture_dir, permissions_file, policies_file, roles_file, setup_db, standard_fixtures};
use hotel_reservation::repositories::RoleRepository;
use hotel_reservation::seeders::{SeedReport, Seeder};
use hotel_reservation::SeedError;
use serde_json::json;

// ══════════════════════════════════════════════════════════
//  full runs
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn seeds_every_table() {
    let db = setup_db().await;
    let dir = standard_fixtures();

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 3, failed: 0, dry_run: false });
    // admin gets all 4 policies, receptionist 3, housekeeping 1
    assert_eq!(counts(&db).await, (4, 3, 8));
}

#[tokio::test]
async fn file_names_do_not_decide_the_order() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("a_permissions.json", permissions_file()),
        ("b_roles.json", roles_file()),
        ("c_policies.json", policies_file()),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.failed, 0);
    assert_eq!(counts(&db).await, (4, 3, 8));
}

#[tokio::test]
async fn wildcard_grants_every_policy() {
    let db = setup_db().await;
    let dir = standard_fixtures();
    Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    let admin = RoleRepository::find_by_name(&db, "admin").await.unwrap().unwrap();
    let policies = RoleRepository::policies_of(&db, &admin).await.unwrap();
    let names: Vec<_> = policies.iter().map(|p| p.policy_name.as_str()).collect();
    assert_eq!(
        names,
        ["reservations:create", "reservations:read", "rooms:read", "rooms:update"]
    );
}

#[tokio::test]
async fn dry_run_leaves_database_untouched() {
    let db = setup_db().await;
    let dir = standard_fixtures();

    let report = Seeder::new(dir.path(), None, true).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 3, failed: 0, dry_run: true });
    assert_eq!(counts(&db).await, (0, 0, 0));
}

#[tokio::test]
async fn empty_folder_reports_nothing() {
    let db = setup_db().await;
    let dir = fixture_dir(&[]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport::default());
}

#[tokio::test]
async fn missing_folder_fails_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let result = Seeder::new(dir.path().join("absent"), None, false);
    assert!(matches!(result, Err(SeedError::DataFolderMissing(_))));
}

// ══════════════════════════════════════════════════════════
//  model selection
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn model_filter_seeds_only_selected_tables() {
    let db = setup_db().await;
    let dir = standard_fixtures();

    let models = Some(vec!["Policy".to_string(), "roles".to_string()]);
    let report = Seeder::new(dir.path(), models, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.succeeded, 2);
    assert_eq!(counts(&db).await, (4, 3, 0));
}

#[tokio::test]
async fn unknown_models_fall_back_to_everything() {
    let db = setup_db().await;
    let dir = standard_fixtures();

    let models = Some(vec!["Booking".to_string()]);
    let report = Seeder::new(dir.path(), models, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.succeeded, 3);
    assert_eq!(counts(&db).await, (4, 3, 8));
}

// ══════════════════════════════════════════════════════════
//  per-table failures
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn second_run_hits_unique_constraints_and_keeps_data() {
    let db = setup_db().await;
    let dir = standard_fixtures();
    let seeder = Seeder::new(dir.path(), None, false).unwrap();

    seeder.run(&db).await.unwrap();
    let report = seeder.run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 0, failed: 3, dry_run: false });
    assert_eq!(counts(&db).await, (4, 3, 8));
}

#[tokio::test]
async fn failed_table_does_not_undo_the_others() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        (
            "2_roles.json",
            json!({"table_name": "roles", "data": [{"role": "admin"}, {"role": "admin"}]}),
        ),
        ("3_permissions.json", permissions_file()),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    // roles collide; permissions then find no roles and prepare nothing
    assert_eq!(report, SeedReport { succeeded: 2, failed: 1, dry_run: false });
    assert_eq!(counts(&db).await, (4, 0, 0));
}

#[tokio::test]
async fn table_without_preparer_is_a_failure() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("9_rooms.json", json!({"table_name": "rooms", "data": [{"number": 101}]})),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 1, failed: 1, dry_run: false });
    assert_eq!(counts(&db).await, (4, 0, 0));
}

#[tokio::test]
async fn malformed_records_fail_their_table() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("2_roles.json", json!({"table_name": "roles", "data": [{"name": "admin"}]})),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.failed, 1);
    assert_eq!(counts(&db).await, (4, 0, 0));
}

#[tokio::test]
async fn empty_data_counts_as_success() {
    let db = setup_db().await;
    let dir = fixture_dir(&[("2_roles.json", json!({"table_name": "roles", "data": []}))]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 1, failed: 0, dry_run: false });
}

// ══════════════════════════════════════════════════════════
//  permission resolution
// ══════════════════════════════════════════════════════════

#[tokio::test]
async fn unknown_role_is_skipped_but_others_are_granted() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("2_roles.json", roles_file()),
        (
            "3_permissions.json",
            json!({
                "table_name": "permissions",
                "data": [
                    {"role": "night_auditor", "policies": "*"},
                    {"role": "housekeeping", "policies": ["rooms:read", "rooms:update"]}
                ]
            }),
        ),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.failed, 0);
    assert_eq!(counts(&db).await, (4, 3, 2));
}

#[tokio::test]
async fn unknown_policy_names_are_ignored() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("2_roles.json", roles_file()),
        (
            "3_permissions.json",
            json!({
                "table_name": "permissions",
                "data": [
                    {"role": "receptionist", "policies": ["rooms:read", "minibar:restock"]},
                    {"role": "housekeeping", "policies": ["minibar:restock"]}
                ]
            }),
        ),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report.failed, 0);
    assert_eq!(counts(&db).await, (4, 3, 1));

    let housekeeping = RoleRepository::find_by_name(&db, "housekeeping").await.unwrap().unwrap();
    assert!(RoleRepository::policies_of(&db, &housekeeping).await.unwrap().is_empty());
}

#[tokio::test]
async fn bad_policy_selector_fails_the_table() {
    let db = setup_db().await;
    let dir = fixture_dir(&[
        ("1_policies.json", policies_file()),
        ("2_roles.json", roles_file()),
        (
            "3_permissions.json",
            json!({"table_name": "permissions", "data": [{"role": "admin", "policies": "all"}]}),
        ),
    ]);

    let report = Seeder::new(dir.path(), None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 2, failed: 1, dry_run: false });
    assert_eq!(counts(&db).await, (4, 3, 0));
}

#[tokio::test]
async fn bundled_fixtures_seed_cleanly() {
    let db = setup_db().await;
    let data_dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("seeds/data");

    let report = Seeder::new(data_dir, None, false).unwrap().run(&db).await.unwrap();

    assert_eq!(report, SeedReport { succeeded: 3, failed: 0, dry_run: false });
    assert_eq!(counts(&db).await, (22, 5, 56));
}
