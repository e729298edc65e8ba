// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendlog::db;
use spendlog::query::{check_read_only, patch_category_equality, run_read_query, QueryOutcome};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn.execute_batch(
        r#"
        INSERT INTO expenses(description, amount, category, source, date)
            VALUES ('milk', '20', 'Groceries', 'personal', '2025-02-01');
        INSERT INTO expenses(description, amount, category, source, date)
            VALUES ('bus pass', '30', 'Transportation', 'personal', '2025-02-02');
        "#,
    )
    .unwrap();
    conn
}

#[test]
fn rejects_non_select() {
    let conn = setup();
    let out = run_read_query(&conn, "DROP TABLE expenses").unwrap();
    assert!(matches!(out, QueryOutcome::Rejected(_)));
    // still there
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM expenses", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
}

#[test]
fn rejects_forbidden_keyword_anywhere() {
    assert!(check_read_only("select amount from expenses; DELETE FROM expenses").is_err());
    assert!(check_read_only("SELECT * FROM expenses WHERE id = 1").is_ok());
    assert!(check_read_only("  select id from expenses  ").is_ok());
    assert!(check_read_only("PRAGMA table_info(expenses)").is_err());
}

#[test]
fn deny_list_covers_schema_and_write_keywords() {
    for word in [
        "insert", "update", "delete", "drop", "alter", "pragma", "attach", "detach", "create",
        "replace",
    ] {
        let sql = format!("select 1 -- {} something", word);
        assert!(check_read_only(&sql).is_err(), "'{}' slipped through", word);
    }
    // built-ins shadowed by the deny list are rejected too; default-deny
    assert!(check_read_only("SELECT replace(description, 'a', 'b') FROM expenses").is_err());
    assert!(check_read_only("select 1 -- detach database aux").is_err());
}

#[test]
fn accepts_plain_select() {
    let conn = setup();
    let out = run_read_query(&conn, "SELECT description FROM expenses ORDER BY id").unwrap();
    match out {
        QueryOutcome::Rows(rows) => {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0][0].0, "description");
            assert_eq!(rows[0][0].1, serde_json::json!("milk"));
        }
        other => panic!("expected rows, got {:?}", other),
    }
}

#[test]
fn category_comparison_is_case_insensitive() {
    let conn = setup();
    let out = run_read_query(
        &conn,
        "SELECT description FROM expenses WHERE category = 'groceries'",
    )
    .unwrap();
    match out {
        QueryOutcome::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0][0].1, serde_json::json!("milk"));
        }
        other => panic!("expected one row, got {:?}", other),
    }
}

#[test]
fn category_patch_rewrites_only_the_literal_form() {
    let patched = patch_category_equality("SELECT * FROM expenses WHERE Category = 'Fun'");
    assert_eq!(
        patched,
        "SELECT * FROM expenses WHERE LOWER(category) = LOWER('Fun')"
    );
    // Paraphrases pass through untouched (known gap).
    let untouched = "SELECT * FROM expenses WHERE category IN ('Fun')";
    assert_eq!(patch_category_equality(untouched), untouched);
}

#[test]
fn zero_rows_is_a_distinct_no_results_value() {
    let conn = setup();
    let out = run_read_query(&conn, "SELECT * FROM expenses WHERE date = '1999-01-01'").unwrap();
    assert_eq!(out, QueryOutcome::NoResults);
}

#[test]
fn single_numeric_cell_becomes_scalar() {
    let conn = setup();
    let out = run_read_query(&conn, "SELECT SUM(amount) FROM expenses").unwrap();
    match out {
        QueryOutcome::Scalar(v) => assert_eq!(v, 50.0),
        other => panic!("expected scalar, got {:?}", other),
    }
}

#[test]
fn null_category_surfaces_as_json_null() {
    let conn = setup();
    conn.execute(
        "INSERT INTO expenses(description, amount, source, date) VALUES ('misc', '5', 'personal', '2025-02-03')",
        [],
    )
    .unwrap();
    let out = run_read_query(&conn, "SELECT category FROM expenses WHERE description = 'misc'")
        .unwrap();
    match out {
        QueryOutcome::Rows(rows) => assert_eq!(rows[0][0].1, serde_json::Value::Null),
        other => panic!("expected rows, got {:?}", other),
    }
}
