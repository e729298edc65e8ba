// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Expense, Source};
use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

/// Record a locally-entered expense. The date defaults to today.
pub fn insert_personal(
    conn: &Connection,
    description: &str,
    amount: Decimal,
    category: Option<&str>,
) -> Result<()> {
    conn.execute(
        "INSERT INTO expenses(description, amount, category, source) VALUES (?1, ?2, ?3, 'personal')",
        params![description, amount.to_string(), category],
    )?;
    Ok(())
}

/// Record an externally-imported expense. Idempotent on external_id: a row
/// already carrying this id is left untouched. Returns true iff a new row
/// was actually inserted.
pub fn insert_external(
    conn: &Connection,
    external_id: i64,
    description: &str,
    amount: Decimal,
    category: Option<&str>,
    date: Option<&str>,
) -> Result<bool> {
    let affected = conn.execute(
        "INSERT OR IGNORE INTO expenses(external_id, description, amount, category, source, date)
         VALUES (?1, ?2, ?3, ?4, 'external', COALESCE(?5, date('now')))",
        params![external_id, description, amount.to_string(), category, date],
    )?;
    Ok(affected > 0)
}

/// Most recent expenses first.
pub fn list_recent(conn: &Connection, limit: usize) -> Result<Vec<Expense>> {
    let mut stmt = conn.prepare(
        "SELECT id, external_id, description, amount, category, source, date
         FROM expenses ORDER BY date DESC, id DESC LIMIT ?1",
    )?;
    let mut rows = stmt.query(params![limit])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let amount_raw: String = r.get(3)?;
        let source_raw: String = r.get(5)?;
        data.push(Expense {
            id: r.get(0)?,
            external_id: r.get(1)?,
            description: r.get(2)?,
            amount: amount_raw
                .parse::<Decimal>()
                .with_context(|| format!("Invalid stored amount '{}'", amount_raw))?,
            category: r.get(4)?,
            source: Source::parse(&source_raw).unwrap_or(Source::Personal),
            date: r.get(6)?,
        });
    }
    Ok(data)
}

/// Returns true iff a row existed and was removed.
pub fn delete_by_id(conn: &Connection, id: i64) -> Result<bool> {
    let affected = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    Ok(affected > 0)
}

/// Delete a batch of rows by id; returns how many actually existed.
pub fn delete_by_ids(conn: &Connection, ids: &[i64]) -> Result<usize> {
    if ids.is_empty() {
        return Ok(0);
    }
    let placeholders = vec!["?"; ids.len()].join(",");
    let sql = format!("DELETE FROM expenses WHERE id IN ({})", placeholders);
    let affected = conn.execute(&sql, rusqlite::params_from_iter(ids.iter()))?;
    Ok(affected)
}
