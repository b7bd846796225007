use crate::cli::parser::Cli;
use crate::cli::commands::audit;
use crate::config::Config;
use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let custom = cli.db.as_ref().map(|_| cfg.database_path());
    let db_path = Config::init_all(custom, cli.test)?;

    println!("⚙️  Initializing dwriter…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_path.display());

    let store = EventStore::open(&db_path, cfg.addressing)?;
    // the file may predate the schema (e.g. created empty by hand)
    store.create_table()?;

    success(format!("Database initialized at {}", db_path.display()));

    audit(
        &store,
        "init",
        "",
        &format!("Database initialized at {}", db_path.display()),
    );

    Ok(())
}
