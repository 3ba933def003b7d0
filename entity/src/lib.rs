/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod fixture;
pub mod grade;
pub mod location;
pub mod org_type;
pub mod organization;
pub mod organization_grade;
pub mod organization_location;
pub mod profile;
pub mod user;
