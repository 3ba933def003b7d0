/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub use sea_orm_migration::prelude::*;

mod m20250512_100000_create_table_user;
mod m20250512_100500_create_table_grade;
mod m20250512_101000_create_table_location;
mod m20250512_101500_create_table_org_type;
mod m20250512_102000_create_table_organization;
mod m20250512_102500_create_table_organization_grade;
mod m20250512_103000_create_table_organization_location;
mod m20250512_103500_create_table_profile;
mod m20250519_090000_seed_reference_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250512_100000_create_table_user::Migration),
            Box::new(m20250512_100500_create_table_grade::Migration),
            Box::new(m20250512_101000_create_table_location::Migration),
            Box::new(m20250512_101500_create_table_org_type::Migration),
            Box::new(m20250512_102000_create_table_organization::Migration),
            Box::new(m20250512_102500_create_table_organization_grade::Migration),
            Box::new(m20250512_103000_create_table_organization_location::Migration),
            Box::new(m20250512_103500_create_table_profile::Migration),
            Box::new(m20250519_090000_seed_reference_data::Migration),
        ]
    }
}
