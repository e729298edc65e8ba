// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::insights::{self, BreakdownPeriod, TrendPeriod};
use crate::utils::maybe_print_json;
use anyhow::{anyhow, Result};
use rusqlite::Connection;

pub fn insights(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let report = insights::spending_insights(conn)?;
    if !maybe_print_json(sub.get_flag("json"), false, &report)? {
        println!("{}", report.render());
    }
    Ok(())
}

pub fn trends(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = sub.get_one::<String>("period").unwrap();
    let period = TrendPeriod::parse(period).map_err(|e| anyhow!(e))?;
    match insights::spending_trends(conn, period)? {
        Some(report) => {
            if !maybe_print_json(sub.get_flag("json"), false, &report)? {
                println!("{}", report.render());
            }
        }
        None => println!("No spending data found for {}", period.label()),
    }
    Ok(())
}

pub fn breakdown(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let period = sub.get_one::<String>("period").unwrap();
    let month = sub.get_one::<String>("month").map(|s| s.as_str());
    let year = sub.get_one::<i32>("year").copied();
    let period = BreakdownPeriod::parse(period, month, year).map_err(|e| anyhow!(e))?;
    match insights::category_breakdown(conn, &period)? {
        Some(breakdown) => {
            if !maybe_print_json(sub.get_flag("json"), false, &breakdown)? {
                println!("{}", breakdown.render());
            }
        }
        None => println!("No spending data found for {}", period.label()),
    }
    Ok(())
}
