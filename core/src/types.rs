/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use clap::Parser;
use entity::*;
use sea_orm::DatabaseConnection;

#[derive(Parser, Debug)]
#[command(name = "Roster", display_name = "Roster", bin_name = "roster-server", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "ROSTER_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "ROSTER_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "ROSTER_FIXTURE_FILE")]
    pub fixture_file: Option<String>,
}

#[derive(Debug)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub cli: Cli,
}

pub type EGrade = grade::Entity;
pub type ELocation = location::Entity;
pub type EOrgType = org_type::Entity;
pub type EOrganization = organization::Entity;
pub type EOrganizationGrade = organization_grade::Entity;
pub type EOrganizationLocation = organization_location::Entity;
pub type EProfile = profile::Entity;
pub type EUser = user::Entity;

pub type MGrade = grade::Model;
pub type MLocation = location::Model;
pub type MOrgType = org_type::Model;
pub type MOrganization = organization::Model;
pub type MOrganizationGrade = organization_grade::Model;
pub type MOrganizationLocation = organization_location::Model;
pub type MProfile = profile::Model;
pub type MUser = user::Model;

pub type AGrade = grade::ActiveModel;
pub type ALocation = location::ActiveModel;
pub type AOrgType = org_type::ActiveModel;
pub type AOrganization = organization::ActiveModel;
pub type AOrganizationGrade = organization_grade::ActiveModel;
pub type AOrganizationLocation = organization_location::ActiveModel;
pub type AProfile = profile::ActiveModel;
pub type AUser = user::ActiveModel;

pub type CGrade = grade::Column;
pub type CLocation = location::Column;
pub type COrgType = org_type::Column;
pub type COrganization = organization::Column;
pub type COrganizationGrade = organization_grade::Column;
pub type COrganizationLocation = organization_location::Column;
pub type CProfile = profile::Column;
pub type CUser = user::Column;
