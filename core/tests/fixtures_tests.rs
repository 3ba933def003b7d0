/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for fixture loading


use roster_core::error::ModelError;
use roster_core::fixtures::*;
use roster_core::types::*;
use sea_orm::{DatabaseBackend, MockDatabase};
use uuid::uuid;

#[test]
fn test_parse_fixture_rejects_invalid_document() {
    let err = parse_fixture("{ not json").unwrap_err();
    assert!(matches!(err, ModelError::Fixture(_)));
}

#[tokio::test]
async fn test_load_fixture_rejects_unseedable_model_before_storage() {
    let raw = r#"[{ "model": "organization", "pk": "00000000-0000-0000-0000-000000000001", "fields": {} }]"#;
    let records = parse_fixture(raw).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = load_fixture(&db, &records).await.unwrap_err();
    assert!(matches!(err, ModelError::Fixture(_)));
}

#[tokio::test]
async fn test_load_fixture_inserts_records() {
    let raw = r#"[{ "model": "grade", "pk": "00000000-0000-0000-0001-000000000002", "fields": { "level": 0, "name": "K" } }]"#;
    let records = parse_fixture(raw).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MGrade>::new()])
        .append_query_results([vec![MGrade {
            id: uuid!("00000000-0000-0000-0001-000000000002"),
            level: 0,
            name: "K".to_owned(),
        }]])
        .into_connection();

    let inserted = load_fixture(&db, &records).await.unwrap();
    assert_eq!(inserted, 1);
}

#[tokio::test]
async fn test_load_fixture_is_idempotent() {
    let raw = r#"[{ "model": "grade", "pk": "00000000-0000-0000-0001-000000000002", "fields": { "level": 0, "name": "K" } }]"#;
    let records = parse_fixture(raw).unwrap();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MGrade {
            id: uuid!("00000000-0000-0000-0001-000000000002"),
            level: 0,
            name: "K".to_owned(),
        }]])
        .into_connection();

    let inserted = load_fixture(&db, &records).await.unwrap();
    assert_eq!(inserted, 0);
}
