/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub name: String,
    pub size: Option<i32>,
    pub org_type: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::org_type::Entity",
        from = "Column::OrgType",
        to = "super::org_type::Column::Id"
    )]
    OrgType,
    #[sea_orm(has_many = "super::organization_grade::Entity")]
    OrganizationGrade,
    #[sea_orm(has_many = "super::organization_location::Entity")]
    OrganizationLocation,
    #[sea_orm(has_many = "super::profile::Entity")]
    Profile,
}

impl Related<super::org_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrgType.def()
    }
}

impl Related<super::profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Profile.def()
    }
}

impl Related<super::grade::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_grade::Relation::Grade.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::organization_grade::Relation::Organization.def().rev())
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        super::organization_location::Relation::Location.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::organization_location::Relation::Organization.def().rev())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl ActiveModelBehavior for ActiveModel {}
