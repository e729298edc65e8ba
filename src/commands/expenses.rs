// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store;
use crate::tools;
use crate::utils::{fmt_usd_dec, maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;

pub fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();

    let reply = tools::add_expense(conn, description, amount, category);
    println!("{}", reply.render());
    Ok(())
}

pub fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let limit = *sub.get_one::<usize>("limit").unwrap();

    let data = store::list_recent(conn, limit)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.to_string(),
                    e.date.clone(),
                    e.description.clone(),
                    fmt_usd_dec(&e.amount),
                    e.category.clone().unwrap_or_default(),
                    e.source.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Description", "Amount", "Category", "Source"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let ids: Vec<i64> = sub.get_many::<i64>("ids").unwrap().copied().collect();
    let reply = tools::delete_multiple_expenses(conn, &ids);
    println!("{}", reply.render());
    Ok(())
}
