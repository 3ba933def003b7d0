/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;

pub fn check_required_string(s: &str, max_len: usize) -> Result<(), String> {
    if s.trim().is_empty() {
        return Err("cannot be blank".to_string());
    }

    if s.chars().count() > max_len {
        return Err(format!("cannot be longer than {} characters", max_len));
    }

    Ok(())
}

pub fn check_grade_level(level: i32) -> Result<(), String> {
    if GRADE_LEVEL_RANGE.contains(&level) {
        Ok(())
    } else {
        Err(format!(
            "must be between {} and {}",
            GRADE_LEVEL_RANGE.start(),
            GRADE_LEVEL_RANGE.end()
        ))
    }
}
