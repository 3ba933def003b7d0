/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{grade, location, org_type};

/// One record of the on-disk seed format: the target model, a stable primary
/// key, and a mapping of field name to value. Only the lookup models (grade,
/// location, org_type) are seedable.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FixtureRecord {
    pub model: String,
    pub pk: Uuid,
    pub fields: Map<String, Value>,
}

#[derive(Clone, Debug)]
pub enum FixtureRow {
    Grade(grade::ActiveModel),
    Location(location::ActiveModel),
    OrgType(org_type::ActiveModel),
}

pub fn parse(raw: &str) -> Result<Vec<FixtureRecord>, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid fixture document: {}", e))
}

pub fn decode(record: &FixtureRecord) -> Result<FixtureRow, String> {
    match record.model.as_str() {
        "grade" => {
            known_fields(record, &["level", "name"])?;
            Ok(FixtureRow::Grade(grade::ActiveModel {
                id: Set(record.pk),
                level: Set(int_field(record, "level")?),
                name: Set(string_field(record, "name")?),
            }))
        }
        "location" => {
            known_fields(record, &["name", "abbreviation"])?;
            Ok(FixtureRow::Location(location::ActiveModel {
                id: Set(record.pk),
                name: Set(string_field(record, "name")?),
                abbreviation: Set(string_field(record, "abbreviation")?),
            }))
        }
        "org_type" => {
            known_fields(record, &["name"])?;
            Ok(FixtureRow::OrgType(org_type::ActiveModel {
                id: Set(record.pk),
                name: Set(string_field(record, "name")?),
            }))
        }
        other => Err(format!("`{}` is not a seedable model", other)),
    }
}

/// Inserts the records in document order. A record whose pk already exists is
/// skipped, so loading the same fixture twice neither duplicates rows nor
/// fails. Returns the number of rows actually inserted.
pub async fn apply<C: ConnectionTrait>(db: &C, records: &[FixtureRecord]) -> Result<usize, DbErr> {
    let mut inserted = 0;

    for record in records {
        match decode(record).map_err(DbErr::Custom)? {
            FixtureRow::Grade(row) => {
                if grade::Entity::find_by_id(record.pk).one(db).await?.is_none() {
                    row.insert(db).await?;
                    inserted += 1;
                }
            }
            FixtureRow::Location(row) => {
                if location::Entity::find_by_id(record.pk).one(db).await?.is_none() {
                    row.insert(db).await?;
                    inserted += 1;
                }
            }
            FixtureRow::OrgType(row) => {
                if org_type::Entity::find_by_id(record.pk).one(db).await?.is_none() {
                    row.insert(db).await?;
                    inserted += 1;
                }
            }
        }
    }

    Ok(inserted)
}

fn known_fields(record: &FixtureRecord, names: &[&str]) -> Result<(), String> {
    for key in record.fields.keys() {
        if !names.contains(&key.as_str()) {
            return Err(format!(
                "{} {} has unknown field `{}`",
                record.model, record.pk, key
            ));
        }
    }
    Ok(())
}

fn string_field(record: &FixtureRecord, name: &str) -> Result<String, String> {
    record
        .fields
        .get(name)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| {
            format!(
                "{} {} is missing string field `{}`",
                record.model, record.pk, name
            )
        })
}

fn int_field(record: &FixtureRecord, name: &str) -> Result<i32, String> {
    record
        .fields
        .get(name)
        .and_then(Value::as_i64)
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| {
            format!(
                "{} {} is missing integer field `{}`",
                record.model, record.pk, name
            )
        })
}
