/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::consts::*;
use super::error::{delete_error, write_error, ModelError};
use super::input::{check_grade_level, check_required_string};
use super::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeInput {
    pub level: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationInput {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgTypeInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationInput {
    pub name: String,
    pub size: Option<i32>,
    pub org_type: Uuid,
    pub grades: Vec<Uuid>,
    pub locations: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInput {
    pub user: Uuid,
    pub github_id: String,
    pub organization: Uuid,
}

pub fn validate_grade(input: &GradeInput) -> Result<(), ModelError> {
    check_grade_level(input.level).map_err(|e| ModelError::validation("level", e))?;
    check_required_string(&input.name, GRADE_NAME_MAX)
        .map_err(|e| ModelError::validation("name", e))?;
    Ok(())
}

pub fn validate_location(input: &LocationInput) -> Result<(), ModelError> {
    check_required_string(&input.name, LOCATION_NAME_MAX)
        .map_err(|e| ModelError::validation("name", e))?;
    check_required_string(&input.abbreviation, LOCATION_ABBREVIATION_MAX)
        .map_err(|e| ModelError::validation("abbreviation", e))?;
    Ok(())
}

pub fn validate_org_type(input: &OrgTypeInput) -> Result<(), ModelError> {
    check_required_string(&input.name, ORG_TYPE_NAME_MAX)
        .map_err(|e| ModelError::validation("name", e))?;
    Ok(())
}

pub fn validate_organization(input: &OrganizationInput) -> Result<(), ModelError> {
    check_required_string(&input.name, ORGANIZATION_NAME_MAX)
        .map_err(|e| ModelError::validation("name", e))?;
    Ok(())
}

pub fn validate_profile(input: &ProfileInput) -> Result<(), ModelError> {
    check_required_string(&input.github_id, PROFILE_GITHUB_ID_MAX)
        .map_err(|e| ModelError::validation("github_id", e))?;
    Ok(())
}

pub async fn create_grade(db: &DatabaseConnection, input: GradeInput) -> Result<MGrade, ModelError> {
    validate_grade(&input)?;

    let agrade = AGrade {
        id: Set(Uuid::new_v4()),
        level: Set(input.level),
        name: Set(input.name),
    };

    agrade.insert(db).await.map_err(write_error)
}

pub async fn create_location(
    db: &DatabaseConnection,
    input: LocationInput,
) -> Result<MLocation, ModelError> {
    validate_location(&input)?;

    let alocation = ALocation {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        abbreviation: Set(input.abbreviation),
    };

    alocation.insert(db).await.map_err(write_error)
}

pub async fn create_org_type(
    db: &DatabaseConnection,
    input: OrgTypeInput,
) -> Result<MOrgType, ModelError> {
    validate_org_type(&input)?;

    let aorg_type = AOrgType {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
    };

    aorg_type.insert(db).await.map_err(write_error)
}

// The organization row and its grade/location links are written in one
// transaction; a failed link insert leaves no partial organization behind.
pub async fn create_organization(
    db: &DatabaseConnection,
    input: OrganizationInput,
) -> Result<MOrganization, ModelError> {
    validate_organization(&input)?;

    let txn = db.begin().await?;

    let aorganization = AOrganization {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        size: Set(input.size),
        org_type: Set(input.org_type),
    };

    let organization = aorganization.insert(&txn).await.map_err(write_error)?;

    if !input.grades.is_empty() {
        let links = input
            .grades
            .iter()
            .map(|grade| AOrganizationGrade {
                id: Set(Uuid::new_v4()),
                organization: Set(organization.id),
                grade: Set(*grade),
            })
            .collect::<Vec<_>>();

        EOrganizationGrade::insert_many(links)
            .exec_without_returning(&txn)
            .await
            .map_err(write_error)?;
    }

    if !input.locations.is_empty() {
        let links = input
            .locations
            .iter()
            .map(|location| AOrganizationLocation {
                id: Set(Uuid::new_v4()),
                organization: Set(organization.id),
                location: Set(*location),
            })
            .collect::<Vec<_>>();

        EOrganizationLocation::insert_many(links)
            .exec_without_returning(&txn)
            .await
            .map_err(write_error)?;
    }

    txn.commit().await?;
    Ok(organization)
}

pub async fn create_profile(
    db: &DatabaseConnection,
    input: ProfileInput,
) -> Result<MProfile, ModelError> {
    validate_profile(&input)?;

    let aprofile = AProfile {
        id: Set(Uuid::new_v4()),
        user: Set(input.user),
        github_id: Set(input.github_id),
        organization: Set(input.organization),
    };

    aprofile.insert(db).await.map_err(write_error)
}

pub async fn delete_grade(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    EGrade::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("grade", id, err))?;
    Ok(())
}

pub async fn delete_location(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    ELocation::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("location", id, err))?;
    Ok(())
}

pub async fn delete_org_type(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    let referenced = EOrganization::find()
        .filter(COrganization::OrgType.eq(id))
        .one(db)
        .await?
        .is_some();

    if referenced {
        return Err(ModelError::Protected {
            entity: "org_type",
            id,
        });
    }

    EOrgType::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("org_type", id, err))?;
    Ok(())
}

pub async fn delete_organization(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    let referenced = EProfile::find()
        .filter(CProfile::Organization.eq(id))
        .one(db)
        .await?
        .is_some();

    if referenced {
        return Err(ModelError::Protected {
            entity: "organization",
            id,
        });
    }

    EOrganization::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("organization", id, err))?;
    Ok(())
}

pub async fn delete_user(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    let referenced = EProfile::find()
        .filter(CProfile::User.eq(id))
        .one(db)
        .await?
        .is_some();

    if referenced {
        return Err(ModelError::Protected { entity: "user", id });
    }

    EUser::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("user", id, err))?;
    Ok(())
}

pub async fn delete_profile(db: &DatabaseConnection, id: Uuid) -> Result<(), ModelError> {
    EProfile::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|err| delete_error("profile", id, err))?;
    Ok(())
}

pub async fn list_grades(db: &DatabaseConnection) -> Result<Vec<MGrade>, ModelError> {
    Ok(EGrade::find()
        .order_by_asc(CGrade::Level)
        .all(db)
        .await?)
}

pub async fn list_locations(db: &DatabaseConnection) -> Result<Vec<MLocation>, ModelError> {
    Ok(ELocation::find()
        .order_by_asc(CLocation::Name)
        .all(db)
        .await?)
}

pub async fn list_org_types(db: &DatabaseConnection) -> Result<Vec<MOrgType>, ModelError> {
    Ok(EOrgType::find()
        .order_by_asc(COrgType::Name)
        .all(db)
        .await?)
}

pub async fn list_organizations(db: &DatabaseConnection) -> Result<Vec<MOrganization>, ModelError> {
    Ok(EOrganization::find()
        .order_by_asc(COrganization::Name)
        .all(db)
        .await?)
}

pub async fn organization_grades(
    db: &DatabaseConnection,
    organization: &MOrganization,
) -> Result<Vec<MGrade>, ModelError> {
    Ok(organization
        .find_related(EGrade::default())
        .order_by_asc(CGrade::Level)
        .all(db)
        .await?)
}

pub async fn organization_locations(
    db: &DatabaseConnection,
    organization: &MOrganization,
) -> Result<Vec<MLocation>, ModelError> {
    Ok(organization
        .find_related(ELocation::default())
        .order_by_asc(CLocation::Name)
        .all(db)
        .await?)
}

// A profile renders as the username of the account it extends.
pub async fn profile_display(
    db: &DatabaseConnection,
    profile: &MProfile,
) -> Result<String, ModelError> {
    let user = profile
        .find_related(EUser::default())
        .one(db)
        .await?
        .ok_or_else(|| {
            ModelError::Database(DbErr::RecordNotFound(format!(
                "user for profile {}",
                profile.id
            )))
        })?;

    Ok(user.username)
}
