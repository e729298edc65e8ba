// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendlog::models::Source;
use spendlog::{db, store};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn insert_external_is_idempotent() {
    let conn = setup();
    let amt = Decimal::new(1250, 2);
    let first = store::insert_external(&conn, 777, "Dinner", amt, None, Some("2025-03-01")).unwrap();
    let second =
        store::insert_external(&conn, 777, "Dinner", amt, None, Some("2025-03-01")).unwrap();
    assert!(first);
    assert!(!second);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn insert_personal_defaults_date_to_today() {
    let conn = setup();
    store::insert_personal(&conn, "Coffee", Decimal::new(450, 2), Some("Food & Drink")).unwrap();

    let (date, source): (String, String) = conn
        .query_row("SELECT date, source FROM expenses", [], |r| {
            Ok((r.get(0)?, r.get(1)?))
        })
        .unwrap();
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(date, today);
    assert_eq!(source, "personal");
}

#[test]
fn external_insert_without_date_falls_back_to_today() {
    let conn = setup();
    store::insert_external(&conn, 5, "Rent", Decimal::new(90000, 2), None, None).unwrap();
    let date: String = conn
        .query_row("SELECT date FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(date, chrono::Utc::now().date_naive().to_string());
}

#[test]
fn list_recent_orders_and_limits() {
    let conn = setup();
    for (i, d) in ["2025-01-01", "2025-01-03", "2025-01-02"].iter().enumerate() {
        conn.execute(
            "INSERT INTO expenses(description, amount, source, date) VALUES (?1, '10', 'personal', ?2)",
            rusqlite::params![format!("e{}", i), d],
        )
        .unwrap();
    }
    let rows = store::list_recent(&conn, 2).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date, "2025-01-03");
    assert_eq!(rows[1].date, "2025-01-02");
    assert_eq!(rows[0].source, Source::Personal);
    assert_eq!(rows[0].external_id, None);
}

#[test]
fn delete_by_id_reports_existence() {
    let conn = setup();
    store::insert_personal(&conn, "Bus", Decimal::new(250, 2), None).unwrap();
    assert!(store::delete_by_id(&conn, 1).unwrap());
    assert!(!store::delete_by_id(&conn, 1).unwrap());
}

#[test]
fn delete_by_ids_counts_only_existing_rows() {
    let conn = setup();
    store::insert_personal(&conn, "a", Decimal::ONE, None).unwrap();
    store::insert_personal(&conn, "b", Decimal::ONE, None).unwrap();
    let removed = store::delete_by_ids(&conn, &[1, 2, 999]).unwrap();
    assert_eq!(removed, 2);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn delete_by_ids_empty_is_noop() {
    let conn = setup();
    assert_eq!(store::delete_by_ids(&conn, &[]).unwrap(), 0);
}

#[test]
fn db_path_honors_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("custom.sqlite");
    unsafe { std::env::set_var("SPENDLOG_DB", &target) };
    let path = db::db_path().unwrap();
    unsafe { std::env::remove_var("SPENDLOG_DB") };
    assert_eq!(path, target);
}
