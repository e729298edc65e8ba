// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.spendlog", "Spendlog", "spendlog"));

/// Resolve the database file path. `SPENDLOG_DB` overrides the
/// platform-specific data directory.
pub fn db_path() -> Result<PathBuf> {
    if let Ok(p) = std::env::var("SPENDLOG_DB") {
        return Ok(PathBuf::from(p));
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendlog.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// Create the expenses table if it does not exist. Public so tests can
/// initialize in-memory connections with the real schema.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        external_id INTEGER UNIQUE,
        description TEXT NOT NULL,
        amount TEXT NOT NULL, -- stored in base currency (USD)
        category TEXT,
        source TEXT NOT NULL DEFAULT 'personal' CHECK(source IN ('personal','external')),
        date TEXT NOT NULL DEFAULT (date('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    "#,
    )?;
    Ok(())
}
