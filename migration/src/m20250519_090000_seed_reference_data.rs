/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::fixture;
use entity::{grade, location, org_type};
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::EntityTrait;

const REFERENCE_DATA: &str = include_str!("../reference_data.json");

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let records = fixture::parse(REFERENCE_DATA).map_err(DbErr::Custom)?;
        fixture::apply(manager.get_connection(), &records).await?;
        Ok(())
    }

    // Reversal removes every current row of the lookup tables, not only the
    // ids this step inserted.
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        grade::Entity::delete_many().exec(db).await?;
        location::Entity::delete_many().exec(db).await?;
        org_type::Entity::delete_many().exec(db).await?;

        Ok(())
    }
}
