// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .about("Personal expense tracker: local entries, Splitwise sync, spending insights")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("add")
                .about("Record a personal expense")
                .arg(Arg::new("description").required(true))
                .arg(Arg::new("amount").required(true))
                .arg(
                    Arg::new("category")
                        .required(true)
                        .help("One of the fixed categories, e.g. Groceries"),
                ),
        )
        .subcommand(
            Command::new("list")
                .about("List recent expenses")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .default_value("10"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue))
                .arg(Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("rm").about("Delete expenses by id").arg(
                Arg::new("ids")
                    .required(true)
                    .num_args(1..)
                    .value_parser(value_parser!(i64)),
            ),
        )
        .subcommand(
            Command::new("sync")
                .about("Import shared expenses from Splitwise")
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize))
                        .default_value("50"),
                ),
        )
        .subcommand(Command::new("whoami").about("Show the authenticated Splitwise user"))
        .subcommand(
            Command::new("insights")
                .about("This month vs last month, with top categories")
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("trends")
                .about("Time-bucketed spending trends")
                .arg(
                    Arg::new("period")
                        .required(true)
                        .help("week, month or year"),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("breakdown")
                .about("Spending by category for a period")
                .arg(
                    Arg::new("period")
                        .long("period")
                        .default_value("month")
                        .help("week, month, last_month, year, all or specific_month"),
                )
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Month name or number, with --period specific_month"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32)),
                )
                .arg(Arg::new("json").long("json").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("query")
                .about("Run a read-only SQL query against the expenses table")
                .arg(Arg::new("sql").required(true)),
        )
}
