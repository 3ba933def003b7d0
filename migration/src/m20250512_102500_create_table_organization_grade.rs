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
                    .table(OrganizationGrade::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganizationGrade::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OrganizationGrade::Organization)
                            .uuid()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OrganizationGrade::Grade).uuid().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-organization_grade-organization")
                            .from(OrganizationGrade::Table, OrganizationGrade::Organization)
                            .to(Organization::Table, Organization::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-organization_grade-grade")
                            .from(OrganizationGrade::Table, OrganizationGrade::Grade)
                            .to(Grade::Table, Grade::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-organization_grade-unique")
                    .table(OrganizationGrade::Table)
                    .col(OrganizationGrade::Organization)
                    .col(OrganizationGrade::Grade)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganizationGrade::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum OrganizationGrade {
    Table,
    Id,
    Organization,
    Grade,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Grade {
    Table,
    Id,
}
