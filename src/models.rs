// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed category set used on the agent write path. Externally imported
/// rows carry whatever category text the remote service supplied.
pub const CATEGORIES: [&str; 8] = [
    "Groceries",
    "Food & Drink",
    "Transportation",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "General",
];

pub fn is_valid_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Personal,
    External,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Personal => "personal",
            Source::External => "external",
        }
    }

    pub fn parse(s: &str) -> Option<Source> {
        match s {
            "personal" => Some(Source::Personal),
            "external" => Some(Source::External),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub external_id: Option<i64>,
    pub description: String,
    pub amount: Decimal, // base currency
    pub category: Option<String>,
    pub source: Source,
    pub date: String, // YYYY-MM-DD
}
