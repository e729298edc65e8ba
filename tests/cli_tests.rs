// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use spendlog::cli;

#[test]
fn add_takes_description_amount_and_category() {
    let matches = cli::build_cli().get_matches_from([
        "spendlog", "add", "paneer from Costco", "30", "Groceries",
    ]);
    let Some(("add", sub)) = matches.subcommand() else {
        panic!("no add subcommand");
    };
    assert_eq!(
        sub.get_one::<String>("description").unwrap(),
        "paneer from Costco"
    );
    assert_eq!(sub.get_one::<String>("amount").unwrap(), "30");
    assert_eq!(sub.get_one::<String>("category").unwrap(), "Groceries");
}

#[test]
fn list_limit_defaults_to_ten() {
    let matches = cli::build_cli().get_matches_from(["spendlog", "list"]);
    let Some(("list", sub)) = matches.subcommand() else {
        panic!("no list subcommand");
    };
    assert_eq!(*sub.get_one::<usize>("limit").unwrap(), 10);
    assert!(!sub.get_flag("json"));
}

#[test]
fn rm_collects_multiple_ids() {
    let matches = cli::build_cli().get_matches_from(["spendlog", "rm", "1", "2", "999"]);
    let Some(("rm", sub)) = matches.subcommand() else {
        panic!("no rm subcommand");
    };
    let ids: Vec<i64> = sub.get_many::<i64>("ids").unwrap().copied().collect();
    assert_eq!(ids, vec![1, 2, 999]);
}

#[test]
fn breakdown_accepts_specific_month_flags() {
    let matches = cli::build_cli().get_matches_from([
        "spendlog",
        "breakdown",
        "--period",
        "specific_month",
        "--month",
        "September",
        "--year",
        "2024",
    ]);
    let Some(("breakdown", sub)) = matches.subcommand() else {
        panic!("no breakdown subcommand");
    };
    assert_eq!(sub.get_one::<String>("period").unwrap(), "specific_month");
    assert_eq!(sub.get_one::<String>("month").unwrap(), "September");
    assert_eq!(*sub.get_one::<i32>("year").unwrap(), 2024);
}
