// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::mapper;
use crate::splitwise::SplitwiseApi;
use crate::store;
use anyhow::Result;
use rusqlite::Connection;
use std::collections::HashMap;

/// Process-lifetime cache of group id -> group name. A failed lookup caches
/// the "Unknown" sentinel so a persistently failing group id costs a single
/// request per process. Entries are never invalidated; group names are
/// treated as immutable for the life of the process.
#[derive(Debug, Default)]
pub struct GroupCache {
    names: HashMap<i64, String>,
}

impl GroupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, api: &impl SplitwiseApi, group_id: i64) -> &str {
        self.names.entry(group_id).or_insert_with(|| {
            api.group_name(group_id)
                .unwrap_or_else(|_| "Unknown".to_string())
        })
    }
}

/// Fetch up to `limit` recent Splitwise expenses and persist the ones that
/// belong to the viewer. Returns how many rows were newly persisted.
///
/// Records where the viewer does not appear, or owes exactly zero, are
/// skipped. A record that fails to map is logged and skipped; it never
/// aborts the rest of the batch.
pub fn sync_expenses(
    conn: &Connection,
    api: &impl SplitwiseApi,
    cache: &mut GroupCache,
    viewer_id: i64,
    limit: usize,
) -> Result<usize> {
    let records = api.recent_expenses(limit)?;
    let mut synced = 0usize;

    for e in &records {
        let share = match mapper::owed_share(e, viewer_id) {
            Some(s) => s,
            None => continue, // viewer not part of this expense
        };
        if share.is_zero() {
            continue; // participation without debt is not imported
        }

        let group_name = e
            .group_id
            .map(|gid| cache.resolve(api, gid).to_string());

        let mapped = match mapper::map_expense(e, viewer_id, group_name.as_deref()) {
            Ok(m) => m,
            Err(err) => {
                eprintln!("skipping expense {}: {:#}", e.id, err);
                continue;
            }
        };

        let inserted = match store::insert_external(
            conn,
            mapped.external_id,
            &mapped.description,
            mapped.amount,
            mapped.category.as_deref(),
            mapped.date.as_deref(),
        ) {
            Ok(i) => i,
            Err(err) => {
                eprintln!("skipping expense {}: {:#}", e.id, err);
                continue;
            }
        };
        if inserted {
            synced += 1;
        }
    }
    Ok(synced)
}
