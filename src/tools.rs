// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Agent-facing tool surface. Every tool takes validated, typed arguments
//! and returns a tagged [`ToolReply`]; nothing here panics past the tool
//! boundary. `render()` flattens a reply onto the single-text channel the
//! conversational layer consumes, with distinct prefixes for success,
//! failure and chart payloads.

use crate::insights::{self, BreakdownPeriod, TrendPeriod};
use crate::models;
use crate::query::{self, QueryOutcome};
use crate::splitwise::SplitwiseApi;
use crate::store;
use crate::sync::{self, GroupCache};
use crate::utils::fmt_usd;
use rusqlite::Connection;
use rust_decimal::Decimal;

/// How many rows run_query renders before truncating.
const MAX_QUERY_ROWS: usize = 10;

/// How many Splitwise records one sync tool call pulls.
const SYNC_BATCH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Trend,
    Category,
}

impl ChartKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            ChartKind::Trend => "TREND_DATA",
            ChartKind::Category => "CATEGORY_DATA",
        }
    }
}

/// Tagged tool result. The conversational layer historically multiplexed
/// success/error/chart over one string channel with magic prefixes; the
/// enum is the API, `render()` reproduces that channel.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolReply {
    Success(String),
    Error(String),
    Chart {
        kind: ChartKind,
        payload: serde_json::Value,
    },
}

impl ToolReply {
    pub fn is_error(&self) -> bool {
        matches!(self, ToolReply::Error(_))
    }

    pub fn render(&self) -> String {
        match self {
            ToolReply::Success(msg) => format!("✅ {}", msg),
            ToolReply::Error(msg) => format!("❌ {}", msg),
            ToolReply::Chart { kind, payload } => format!("{}:{}", kind.prefix(), payload),
        }
    }
}

fn chart(kind: ChartKind, payload: impl serde::Serialize) -> ToolReply {
    match serde_json::to_value(payload) {
        Ok(payload) => ToolReply::Chart { kind, payload },
        Err(e) => ToolReply::Error(format!("Error encoding chart data: {}", e)),
    }
}

/// Add a new personal expense.
///
/// The category must be one of the fixed set and must have been explicitly
/// confirmed by the user before this tool is called — the caller asks for
/// the category first and never infers it.
pub fn add_expense(
    conn: &Connection,
    description: &str,
    amount: Decimal,
    category: &str,
) -> ToolReply {
    if !models::is_valid_category(category) {
        return ToolReply::Error(format!(
            "Invalid category '{}'. Please use one of: {}",
            category,
            models::CATEGORIES.join(", ")
        ));
    }
    if description.trim().is_empty() {
        return ToolReply::Error("Description must not be empty".to_string());
    }
    match store::insert_personal(conn, description, amount, Some(category)) {
        Ok(()) => ToolReply::Success(format!(
            "Added: {} for {} (Category: {})",
            crate::utils::fmt_usd_dec(&amount),
            description,
            category
        )),
        Err(e) => ToolReply::Error(format!("Error: {}", e)),
    }
}

/// Execute a read-only SQL query against the expenses table.
///
/// Schema: expenses(id, external_id, description, amount, category, source,
/// date), date format 'YYYY-MM-DD'. Non-SELECT or forbidden-keyword text is
/// rejected as an error reply.
pub fn run_query(conn: &Connection, sql: &str) -> ToolReply {
    match query::run_read_query(conn, sql) {
        Ok(QueryOutcome::Rejected(reason)) => ToolReply::Error(reason),
        Ok(QueryOutcome::NoResults) => ToolReply::Success("No results found.".to_string()),
        Ok(QueryOutcome::Scalar(v)) => ToolReply::Success(fmt_usd(v)),
        Ok(QueryOutcome::Rows(rows)) => {
            let lines: Vec<String> = rows
                .iter()
                .take(MAX_QUERY_ROWS)
                .map(|row| {
                    row.iter()
                        .map(|(k, v)| format!("{}: {}", k, render_value(v)))
                        .collect::<Vec<_>>()
                        .join(" | ")
                })
                .collect();
            ToolReply::Success(lines.join("\n"))
        }
        Err(e) => ToolReply::Error(format!("Query error: {}", e)),
    }
}

fn render_value(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// Delete a single expense by id.
pub fn delete_expense_by_id(conn: &Connection, expense_id: i64) -> ToolReply {
    match store::delete_by_id(conn, expense_id) {
        Ok(true) => ToolReply::Success(format!("Deleted expense ID {}", expense_id)),
        Ok(false) => ToolReply::Error(format!("No expense found with ID {}", expense_id)),
        Err(e) => ToolReply::Error(format!("Error deleting expense: {}", e)),
    }
}

/// Delete several expenses at once; reports how many rows actually existed.
pub fn delete_multiple_expenses(conn: &Connection, expense_ids: &[i64]) -> ToolReply {
    if expense_ids.is_empty() {
        return ToolReply::Error("No expense IDs provided".to_string());
    }
    match store::delete_by_ids(conn, expense_ids) {
        Ok(0) => ToolReply::Error("No expenses were deleted".to_string()),
        Ok(count) => ToolReply::Success(format!("Deleted {} expense(s)", count)),
        Err(e) => ToolReply::Error(format!("Error deleting expenses: {}", e)),
    }
}

/// This month vs last month, with the top categories for the current month.
pub fn get_spending_insights(conn: &Connection) -> ToolReply {
    match insights::spending_insights(conn) {
        Ok(report) => ToolReply::Success(report.render()),
        Err(e) => ToolReply::Error(format!("Error getting insights: {}", e)),
    }
}

/// Time-bucketed spending, returned as a chart payload.
/// `period` must be 'week', 'month' or 'year'.
pub fn get_spending_trends(conn: &Connection, period: &str) -> ToolReply {
    let period = match TrendPeriod::parse(period) {
        Ok(p) => p,
        Err(reason) => return ToolReply::Error(reason),
    };
    match insights::spending_trends(conn, period) {
        Ok(Some(report)) => chart(ChartKind::Trend, report),
        Ok(None) => ToolReply::Success(format!("No spending data found for {}", period.label())),
        Err(e) => ToolReply::Error(format!("Error getting trends: {}", e)),
    }
}

/// Spending by category for a period, returned as a chart payload.
/// `period` is one of week/month/last_month/year/all/specific_month;
/// specific_month takes a month name or number and an optional year.
pub fn get_category_breakdown(
    conn: &Connection,
    period: &str,
    specific_month: Option<&str>,
    year: Option<i32>,
) -> ToolReply {
    let period = match BreakdownPeriod::parse(period, specific_month, year) {
        Ok(p) => p,
        Err(reason) => return ToolReply::Error(reason),
    };
    match insights::category_breakdown(conn, &period) {
        Ok(Some(breakdown)) => chart(ChartKind::Category, breakdown),
        Ok(None) => ToolReply::Success(format!("No spending data found for {}", period.label())),
        Err(e) => ToolReply::Error(format!("Error getting category breakdown: {}", e)),
    }
}

/// Import shared expenses from Splitwise.
pub fn sync_splitwise(
    conn: &Connection,
    api: &impl SplitwiseApi,
    cache: &mut GroupCache,
    viewer_id: i64,
) -> ToolReply {
    match sync::sync_expenses(conn, api, cache, viewer_id, SYNC_BATCH) {
        Ok(count) => ToolReply::Success(format!(
            "Successfully synced {} expenses from Splitwise!",
            count
        )),
        Err(e) => ToolReply::Error(format!("Error syncing Splitwise: {}", e)),
    }
}
