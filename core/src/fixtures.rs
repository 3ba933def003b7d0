/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use entity::fixture::{self, FixtureRecord};
use sea_orm::DatabaseConnection;
use tracing::info;

use super::error::ModelError;

pub fn parse_fixture(raw: &str) -> Result<Vec<FixtureRecord>, ModelError> {
    fixture::parse(raw).map_err(ModelError::Fixture)
}

/// Decodes every record before touching the database, so a malformed fixture
/// is rejected without a partial load.
pub async fn load_fixture(
    db: &DatabaseConnection,
    records: &[FixtureRecord],
) -> Result<usize, ModelError> {
    for record in records {
        fixture::decode(record).map_err(ModelError::Fixture)?;
    }

    Ok(fixture::apply(db, records).await?)
}

pub async fn load_fixture_file(db: &DatabaseConnection, path: &str) -> Result<usize, ModelError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ModelError::Fixture(format!("cannot read `{}`: {}", path, e)))?;

    let records = parse_fixture(&raw)?;
    let inserted = load_fixture(db, &records).await?;

    info!(
        "loaded {} of {} fixture records from {}",
        inserted,
        records.len(),
        path
    );
    Ok(inserted)
}
