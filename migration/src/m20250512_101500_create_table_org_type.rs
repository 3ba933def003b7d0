/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrgType::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(OrgType::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(OrgType::Name).string_len(50).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrgType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrgType {
    Table,
    Id,
    Name,
}
