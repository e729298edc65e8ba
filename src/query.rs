// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Read-only query gate for agent-constructed SQL.
//!
//! Textual allow/deny check, not a parser: the trimmed text must start with
//! SELECT and must not contain any write/schema/introspection keyword. It
//! defends against the agent constructing destructive statements; it is not
//! a SQL sandbox. Anything not affirmatively a SELECT is rejected.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::Value;

// Substring deny list, so e.g. `SELECT replace(...)` is also rejected:
// default-deny beats losing a built-in.
const FORBIDDEN: [&str; 10] = [
    "insert", "update", "delete", "drop", "alter", "pragma", "attach", "detach", "create",
    "replace",
];

/// Outcome of a gated read query. Zero rows is a distinct value, not an
/// error and not an empty row list.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The text failed the safety check; reason attached.
    Rejected(String),
    NoResults,
    /// Exactly one row with one numeric column.
    Scalar(f64),
    /// Ordered rows of (column, value) pairs.
    Rows(Vec<Vec<(String, Value)>>),
}

pub fn check_read_only(sql: &str) -> std::result::Result<(), String> {
    let lowered = sql.trim().to_lowercase();
    if !lowered.starts_with("select") {
        return Err("Only SELECT queries are allowed".to_string());
    }
    for word in FORBIDDEN {
        if lowered.contains(word) {
            return Err(format!("Unsafe query detected: contains '{}'", word));
        }
    }
    Ok(())
}

// Matches the literal `category = '<text>'` clause form. Paraphrases
// (IN lists, aliased columns, bound parameters) bypass this rewrite; that
// gap is known and deliberately not extended here.
static CATEGORY_EQ: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bcategory\s*=\s*'([^']*)'").unwrap());

/// Category comparisons must never be case-sensitive, however the query was
/// phrased. Rewrites `category = 'x'` into a LOWER()-folded comparison.
pub fn patch_category_equality(sql: &str) -> String {
    CATEGORY_EQ
        .replace_all(sql, "LOWER(category) = LOWER('${1}')")
        .into_owned()
}

/// Gate, patch and execute an ad-hoc read query against the expense schema.
/// Rejections are returned as a value; only store-level failures (e.g. SQL
/// syntax errors) surface as Err.
pub fn run_read_query(conn: &Connection, sql: &str) -> Result<QueryOutcome> {
    if let Err(reason) = check_read_only(sql) {
        return Ok(QueryOutcome::Rejected(reason));
    }
    let patched = patch_category_equality(sql);

    let mut stmt = conn.prepare(&patched)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut rows = stmt.query([])?;

    let mut data: Vec<Vec<(String, Value)>> = Vec::new();
    while let Some(r) = rows.next()? {
        let mut row = Vec::with_capacity(columns.len());
        for (i, col) in columns.iter().enumerate() {
            let v = match r.get_ref(i)? {
                ValueRef::Null => Value::Null,
                ValueRef::Integer(n) => Value::from(n),
                ValueRef::Real(f) => Value::from(f),
                ValueRef::Text(t) => Value::from(String::from_utf8_lossy(t).into_owned()),
                ValueRef::Blob(b) => Value::from(format!("<blob {} bytes>", b.len())),
            };
            row.push((col.clone(), v));
        }
        data.push(row);
    }

    if data.is_empty() {
        return Ok(QueryOutcome::NoResults);
    }
    if data.len() == 1 && data[0].len() == 1 {
        if let Some(n) = data[0][0].1.as_f64() {
            return Ok(QueryOutcome::Scalar(n));
        }
    }
    Ok(QueryOutcome::Rows(data))
}
