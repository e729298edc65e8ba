// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::query::{run_read_query, QueryOutcome};
use crate::utils::{fmt_usd, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let sql = sub.get_one::<String>("sql").unwrap();
    match run_read_query(conn, sql)? {
        QueryOutcome::Rejected(reason) => println!("❌ {}", reason),
        QueryOutcome::NoResults => println!("No results found."),
        QueryOutcome::Scalar(v) => println!("{}", fmt_usd(v)),
        QueryOutcome::Rows(rows) => {
            let headers: Vec<&str> = rows[0].iter().map(|(k, _)| k.as_str()).collect();
            let data: Vec<Vec<String>> = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|(_, v)| match v {
                            serde_json::Value::String(s) => s.clone(),
                            serde_json::Value::Null => String::new(),
                            other => other.to_string(),
                        })
                        .collect()
                })
                .collect();
            println!("{}", pretty_table(&headers, data));
        }
    }
    Ok(())
}
