use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AsyncReply;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        create,
        create_async,
        drop,
        query,
        info: show_info,
        check,
        vacuum,
    } = cmd
    {
        let store = open_store(cfg)?;

        //
        // 1) DROP
        //
        if *drop {
            store.drop_table()?;
            success("Table drop query executed successfully.");
            audit(&store, "drop", "events", "Dropped the events table");
        }

        //
        // 2) CREATE (sync)
        //
        if *create {
            store.create_table()?;
            success("Table creation query executed successfully.");
            audit(&store, "create", "events", "Created the events table");
        }

        //
        // 3) CREATE (async)
        //
        if *create_async {
            let rx = store.create_table_async()?;
            info("Create table started…");

            let reply = rx
                .blocking_recv()
                .map_err(|_| AppError::Other("asynchronous request dropped its reply".into()))?;

            match reply {
                AsyncReply::Succeeded => {
                    success("Asynchronous create table query succeeded!");
                    audit(
                        &store,
                        "create_async",
                        "events",
                        "Created the events table asynchronously",
                    );
                }
                AsyncReply::Failed(msg) => {
                    error(format!("Error creating table: {}", msg));
                    return Err(AppError::Schema(msg));
                }
            }
        }

        //
        // 4) QUERY
        //
        if *query {
            let records = store.query_table()?;
            println!("{}▶ {} row(s) in events{}", CYAN, records.len(), RESET);
            for rec in records {
                println!("{:>6} | {} | {}", rec.id, rec.timestamp, rec.text);
            }
        }

        //
        // 5) INFO
        //
        if *show_info {
            stats::print_db_info(&store.info()?);
        }

        //
        // 6) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);
            match store.integrity_check()? {
                None => println!("{}✔ Integrity check passed.{}\n", GREEN, RESET),
                Some(report) => {
                    println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, report)
                }
            }
        }

        //
        // 7) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            store.vacuum()?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
            audit(&store, "vacuum", "", "Database vacuumed");
        }
    }

    Ok(())
}
