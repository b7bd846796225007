use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

/// Print the number of events; a failed count reads as an empty journal.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let total = match store.count() {
        Ok(n) => n,
        Err(e) => {
            warning(format!("Counting events failed: {}", e));
            0
        }
    };
    println!("{}", total);
    Ok(())
}
