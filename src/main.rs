/*
 * SPDX-FileCopyrightText: 2025 Roster Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use roster_core::{fixtures, init_state};
use tracing::info;

#[tokio::main]
pub async fn main() -> anyhow::Result<()> {
    let state = init_state().await?;

    if let Some(file) = &state.cli.fixture_file {
        let inserted = fixtures::load_fixture_file(&state.db, file).await?;
        info!("loaded {} fixture records from {}", inserted, file);
    }

    info!("database schema is up to date");
    Ok(())
}
