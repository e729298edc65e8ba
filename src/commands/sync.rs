// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::splitwise::{self, SplitwiseClient};
use crate::sync::{sync_expenses, GroupCache};
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let limit = *sub.get_one::<usize>("limit").unwrap();
    let client = SplitwiseClient::from_env()?;
    let viewer_id = splitwise::viewer_id_from_env()?;
    let mut cache = GroupCache::new();
    let count = sync_expenses(conn, &client, &mut cache, viewer_id, limit)?;
    println!("✅ Synced {} expenses into DB.", count);
    Ok(())
}

pub fn whoami() -> Result<()> {
    let client = SplitwiseClient::from_env()?;
    let me = client.current_user()?;
    println!("ID: {}", me.id);
    println!(
        "Name: {} {}",
        me.first_name.unwrap_or_default(),
        me.last_name.unwrap_or_default()
    );
    Ok(())
}
