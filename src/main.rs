// Copyright (c) 2025 Spendlog Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use spendlog::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("add", sub)) => commands::expenses::add(&conn, sub)?,
        Some(("list", sub)) => commands::expenses::list(&conn, sub)?,
        Some(("rm", sub)) => commands::expenses::remove(&conn, sub)?,
        Some(("sync", sub)) => commands::sync::handle(&conn, sub)?,
        Some(("whoami", _)) => commands::sync::whoami()?,
        Some(("insights", sub)) => commands::reports::insights(&conn, sub)?,
        Some(("trends", sub)) => commands::reports::trends(&conn, sub)?,
        Some(("breakdown", sub)) => commands::reports::breakdown(&conn, sub)?,
        Some(("query", sub)) => commands::query::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
