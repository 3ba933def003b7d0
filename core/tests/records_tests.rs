/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for record operations


use chrono::NaiveDate;
use roster_core::error::{ModelError, delete_error, write_error};
use roster_core::records::*;
use roster_core::types::*;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use uuid::Uuid;

#[test]
fn test_validate_grade_level_range() {
    validate_grade(&GradeInput {
        level: 0,
        name: "K".to_owned(),
    })
    .unwrap();
    validate_grade(&GradeInput {
        level: -1,
        name: "PK".to_owned(),
    })
    .unwrap();
    validate_grade(&GradeInput {
        level: 12,
        name: "12".to_owned(),
    })
    .unwrap();

    let err = validate_grade(&GradeInput {
        level: -2,
        name: "PK".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "level", .. }));

    let err = validate_grade(&GradeInput {
        level: 13,
        name: "13".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "level", .. }));
}

#[test]
fn test_validate_grade_name() {
    let err = validate_grade(&GradeInput {
        level: 0,
        name: "".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));

    let err = validate_grade(&GradeInput {
        level: 0,
        name: "XYZ".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));
}

#[test]
fn test_validate_location() {
    validate_location(&LocationInput {
        name: "California".to_owned(),
        abbreviation: "CA".to_owned(),
    })
    .unwrap();

    let err = validate_location(&LocationInput {
        name: "California".to_owned(),
        abbreviation: "CAL".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Validation {
            field: "abbreviation",
            ..
        }
    ));

    let err = validate_location(&LocationInput {
        name: "".to_owned(),
        abbreviation: "CA".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));
}

#[test]
fn test_validate_org_type_name() {
    validate_org_type(&OrgTypeInput {
        name: "School District".to_owned(),
    })
    .unwrap();

    let err = validate_org_type(&OrgTypeInput {
        name: "".to_owned(),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));

    let err = validate_org_type(&OrgTypeInput {
        name: "x".repeat(51),
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));
}

#[test]
fn test_validate_organization_name() {
    validate_organization(&OrganizationInput {
        name: "Code Club West".to_owned(),
        size: None,
        org_type: Uuid::new_v4(),
        grades: vec![],
        locations: vec![],
    })
    .unwrap();

    let err = validate_organization(&OrganizationInput {
        name: "   ".to_owned(),
        size: None,
        org_type: Uuid::new_v4(),
        grades: vec![],
        locations: vec![],
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));

    let err = validate_organization(&OrganizationInput {
        name: "x".repeat(51),
        size: None,
        org_type: Uuid::new_v4(),
        grades: vec![],
        locations: vec![],
    })
    .unwrap_err();
    assert!(matches!(err, ModelError::Validation { field: "name", .. }));
}

#[test]
fn test_validate_profile_github_id() {
    validate_profile(&ProfileInput {
        user: Uuid::new_v4(),
        github_id: "octocat".to_owned(),
        organization: Uuid::new_v4(),
    })
    .unwrap();

    let err = validate_profile(&ProfileInput {
        user: Uuid::new_v4(),
        github_id: "a".repeat(40),
        organization: Uuid::new_v4(),
    })
    .unwrap_err();
    assert!(matches!(
        err,
        ModelError::Validation {
            field: "github_id",
            ..
        }
    ));
}

#[tokio::test]
async fn test_create_grade() -> Result<(), DbErr> {
    let grade_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MGrade {
            id: grade_id,
            level: 0,
            name: "K".to_owned(),
        }]])
        .into_connection();

    let grade = create_grade(
        &db,
        GradeInput {
            level: 0,
            name: "K".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(grade.level, 0);
    assert_eq!(grade.to_string(), "K");

    Ok(())
}

#[tokio::test]
async fn test_create_grade_rejects_invalid_level_before_storage() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = create_grade(
        &db,
        GradeInput {
            level: -2,
            name: "PK".to_owned(),
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, ModelError::Validation { field: "level", .. }));
}

#[tokio::test]
async fn test_create_location() -> Result<(), DbErr> {
    let location_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MLocation {
            id: location_id,
            name: "California".to_owned(),
            abbreviation: "CA".to_owned(),
        }]])
        .into_connection();

    let location = create_location(
        &db,
        LocationInput {
            name: "California".to_owned(),
            abbreviation: "CA".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(location.abbreviation, "CA");
    assert_eq!(location.to_string(), "California");

    Ok(())
}

#[tokio::test]
async fn test_create_org_type() -> Result<(), DbErr> {
    let org_type_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MOrgType {
            id: org_type_id,
            name: "School".to_owned(),
        }]])
        .into_connection();

    let org_type = create_org_type(
        &db,
        OrgTypeInput {
            name: "School".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(org_type.to_string(), "School");

    Ok(())
}

#[tokio::test]
async fn test_create_profile() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let organization_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MProfile {
            id: Uuid::new_v4(),
            user: user_id,
            github_id: "octocat".to_owned(),
            organization: organization_id,
        }]])
        .into_connection();

    let profile = create_profile(
        &db,
        ProfileInput {
            user: user_id,
            github_id: "octocat".to_owned(),
            organization: organization_id,
        },
    )
    .await
    .unwrap();

    assert_eq!(profile.user, user_id);
    assert_eq!(profile.github_id, "octocat");

    Ok(())
}

#[tokio::test]
async fn test_create_organization_with_links() -> Result<(), DbErr> {
    let organization_id = Uuid::new_v4();
    let org_type_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MOrganization {
            id: organization_id,
            name: "Code Club West".to_owned(),
            size: Some(120),
            org_type: org_type_id,
        }]])
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ])
        .into_connection();

    let organization = create_organization(
        &db,
        OrganizationInput {
            name: "Code Club West".to_owned(),
            size: Some(120),
            org_type: org_type_id,
            grades: vec![Uuid::new_v4()],
            locations: vec![Uuid::new_v4()],
        },
    )
    .await
    .unwrap();

    assert_eq!(organization.name, "Code Club West");
    assert_eq!(organization.size, Some(120));

    Ok(())
}

#[tokio::test]
async fn test_delete_org_type_protected() {
    let org_type_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MOrganization {
            id: Uuid::new_v4(),
            name: "Code Club West".to_owned(),
            size: None,
            org_type: org_type_id,
        }]])
        .into_connection();

    let err = delete_org_type(&db, org_type_id).await.unwrap_err();

    assert!(matches!(
        err,
        ModelError::Protected {
            entity: "org_type",
            ..
        }
    ));
}

#[tokio::test]
async fn test_delete_org_type_unreferenced() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<MOrganization>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    delete_org_type(&db, Uuid::new_v4()).await.unwrap();
}

// Grades and locations are not protect-on-delete targets; their junction
// rows cascade with either endpoint.
#[tokio::test]
async fn test_delete_grade() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    delete_grade(&db, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_delete_location() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    delete_location(&db, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_delete_profile() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    delete_profile(&db, Uuid::new_v4()).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_protected() {
    let user_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MProfile {
            id: Uuid::new_v4(),
            user: user_id,
            github_id: "octocat".to_owned(),
            organization: Uuid::new_v4(),
        }]])
        .into_connection();

    let err = delete_user(&db, user_id).await.unwrap_err();

    assert!(matches!(err, ModelError::Protected { entity: "user", .. }));
}

#[tokio::test]
async fn test_delete_organization_protected() {
    let organization_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MProfile {
            id: Uuid::new_v4(),
            user: Uuid::new_v4(),
            github_id: "octocat".to_owned(),
            organization: organization_id,
        }]])
        .into_connection();

    let err = delete_organization(&db, organization_id).await.unwrap_err();

    assert!(matches!(
        err,
        ModelError::Protected {
            entity: "organization",
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_grades_returns_level_order() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MGrade {
                id: Uuid::new_v4(),
                level: -1,
                name: "PK".to_owned(),
            },
            MGrade {
                id: Uuid::new_v4(),
                level: 0,
                name: "K".to_owned(),
            },
            MGrade {
                id: Uuid::new_v4(),
                level: 1,
                name: "1".to_owned(),
            },
        ]])
        .into_connection();

    let grades = list_grades(&db).await.unwrap();

    assert_eq!(grades.len(), 3);
    assert_eq!(grades[0].name, "PK");
    assert_eq!(grades[2].name, "1");

    Ok(())
}

#[tokio::test]
async fn test_list_locations_returns_name_order() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MLocation {
                id: Uuid::new_v4(),
                name: "California".to_owned(),
                abbreviation: "CA".to_owned(),
            },
            MLocation {
                id: Uuid::new_v4(),
                name: "New York".to_owned(),
                abbreviation: "NY".to_owned(),
            },
            MLocation {
                id: Uuid::new_v4(),
                name: "Texas".to_owned(),
                abbreviation: "TX".to_owned(),
            },
        ]])
        .into_connection();

    let locations = list_locations(&db).await.unwrap();

    assert_eq!(locations.len(), 3);
    assert_eq!(locations[0].name, "California");
    assert_eq!(locations[2].name, "Texas");

    Ok(())
}

#[tokio::test]
async fn test_list_org_types_returns_name_order() -> Result<(), DbErr> {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MOrgType {
                id: Uuid::new_v4(),
                name: "Nonprofit".to_owned(),
            },
            MOrgType {
                id: Uuid::new_v4(),
                name: "School".to_owned(),
            },
            MOrgType {
                id: Uuid::new_v4(),
                name: "University".to_owned(),
            },
        ]])
        .into_connection();

    let org_types = list_org_types(&db).await.unwrap();

    assert_eq!(org_types.len(), 3);
    assert_eq!(org_types[0].name, "Nonprofit");
    assert_eq!(org_types[2].name, "University");

    Ok(())
}

#[tokio::test]
async fn test_list_organizations_returns_name_order() -> Result<(), DbErr> {
    let org_type_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MOrganization {
                id: Uuid::new_v4(),
                name: "Code Club East".to_owned(),
                size: None,
                org_type: org_type_id,
            },
            MOrganization {
                id: Uuid::new_v4(),
                name: "Code Club West".to_owned(),
                size: Some(120),
                org_type: org_type_id,
            },
        ]])
        .into_connection();

    let organizations = list_organizations(&db).await.unwrap();

    assert_eq!(organizations.len(), 2);
    assert_eq!(organizations[0].name, "Code Club East");
    assert_eq!(organizations[1].name, "Code Club West");

    Ok(())
}

#[tokio::test]
async fn test_organization_grades_returns_level_order() -> Result<(), DbErr> {
    let organization = MOrganization {
        id: Uuid::new_v4(),
        name: "Code Club West".to_owned(),
        size: None,
        org_type: Uuid::new_v4(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MGrade {
                id: Uuid::new_v4(),
                level: 0,
                name: "K".to_owned(),
            },
            MGrade {
                id: Uuid::new_v4(),
                level: 1,
                name: "1".to_owned(),
            },
        ]])
        .into_connection();

    let grades = organization_grades(&db, &organization).await.unwrap();

    assert_eq!(grades.len(), 2);
    assert_eq!(grades[0].name, "K");
    assert_eq!(grades[1].name, "1");

    Ok(())
}

#[tokio::test]
async fn test_organization_locations_returns_name_order() -> Result<(), DbErr> {
    let organization = MOrganization {
        id: Uuid::new_v4(),
        name: "Code Club West".to_owned(),
        size: None,
        org_type: Uuid::new_v4(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            MLocation {
                id: Uuid::new_v4(),
                name: "California".to_owned(),
                abbreviation: "CA".to_owned(),
            },
            MLocation {
                id: Uuid::new_v4(),
                name: "Oregon".to_owned(),
                abbreviation: "OR".to_owned(),
            },
        ]])
        .into_connection();

    let locations = organization_locations(&db, &organization).await.unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].abbreviation, "CA");
    assert_eq!(locations[1].abbreviation, "OR");

    Ok(())
}

#[tokio::test]
async fn test_profile_display_is_username() -> Result<(), DbErr> {
    let user_id = Uuid::new_v4();
    let naive_date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    let profile = MProfile {
        id: Uuid::new_v4(),
        user: user_id,
        github_id: "octocat".to_owned(),
        organization: Uuid::new_v4(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![MUser {
            id: user_id,
            username: "octocat".to_owned(),
            created_at: naive_date,
        }]])
        .into_connection();

    let display = profile_display(&db, &profile).await.unwrap();

    assert_eq!(display, "octocat");

    Ok(())
}

#[test]
fn test_write_error_passes_through_other_failures() {
    let err = write_error(DbErr::Custom("boom".to_owned()));
    assert!(matches!(err, ModelError::Database(_)));
}

#[test]
fn test_delete_error_passes_through_other_failures() {
    let err = delete_error("grade", Uuid::new_v4(), DbErr::Custom("boom".to_owned()));
    assert!(matches!(err, ModelError::Database(_)));
}
