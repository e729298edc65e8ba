// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::currency;
use crate::splitwise::RemoteExpense;
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

/// A remote expense normalized into the shape the store persists.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedExpense {
    pub external_id: i64,
    pub description: String,
    pub amount: Decimal, // base currency
    pub category: Option<String>,
    pub date: Option<String>, // YYYY-MM-DD; None if the record carried no date
}

/// Convert an extended ISO-8601 timestamp (e.g. '2025-09-22T23:36:37Z')
/// into 'YYYY-MM-DD'. Returns None for anything unparseable.
pub fn normalize_date(raw: &str) -> Option<String> {
    let s = raw.trim().trim_end_matches('Z');
    let date = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .map(|dt| dt.date())
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// The viewer's owed share on this expense, if they appear in the share list.
pub fn owed_share(e: &RemoteExpense, viewer_id: i64) -> Option<Decimal> {
    e.users.iter().find(|u| u.user_id == viewer_id).map(|u| {
        u.owed_share
            .as_deref()
            .and_then(|s| s.parse::<Decimal>().ok())
            .unwrap_or(Decimal::ZERO)
    })
}

/// Normalize one remote expense for the viewer.
///
/// The amount is the viewer's owed share when they appear in the share list
/// ("what I owe"), otherwise the total cost. Foreign-currency amounts are
/// converted to the base currency and the original amount is kept in the
/// description so provenance is not lost. A group label, when supplied, is
/// prefixed as '[label] '.
pub fn map_expense(
    e: &RemoteExpense,
    viewer_id: i64,
    group_name: Option<&str>,
) -> Result<MappedExpense> {
    let mut description = e
        .description
        .clone()
        .unwrap_or_else(|| "No description".to_string());
    let category = e.category.as_ref().and_then(|c| c.name.clone());
    let date = e.date.as_deref().and_then(normalize_date);

    let mut amount = match e.cost.as_deref() {
        Some(c) => c
            .parse::<Decimal>()
            .with_context(|| format!("Invalid cost '{}' on expense {}", c, e.id))?,
        None => Decimal::ZERO,
    };
    if let Some(share) = owed_share(e, viewer_id) {
        amount = share;
    }

    let code = e.currency_code.as_deref().unwrap_or(currency::BASE_CURRENCY);
    if code != currency::BASE_CURRENCY {
        description = format!("{} ({} {:.2})", description, code, amount);
        amount = currency::to_base(amount, code);
    }

    if let Some(group) = group_name {
        description = format!("[{}] {}", group, description);
    }

    Ok(MappedExpense {
        external_id: e.id,
        description,
        amount,
        category,
        date,
    })
}
