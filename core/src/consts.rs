/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::ops::RangeInclusive;

// -1 is pre-kindergarten, 0 is kindergarten.
pub const GRADE_LEVEL_RANGE: RangeInclusive<i32> = -1..=12;

pub const GRADE_NAME_MAX: usize = 2;
pub const LOCATION_NAME_MAX: usize = 25;
pub const LOCATION_ABBREVIATION_MAX: usize = 2;
pub const ORG_TYPE_NAME_MAX: usize = 50;
pub const ORGANIZATION_NAME_MAX: usize = 50;

// GitHub caps logins at 39 characters.
pub const PROFILE_GITHUB_ID_MAX: usize = 39;
