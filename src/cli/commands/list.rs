use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projection::{DataModel, EventListProjection};
use crate::core::store::NOT_FOUND_SENTINEL;
use crate::errors::AppResult;
use crate::models::index_path::IndexPath;
use crate::utils::colors::colorize_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = open_store(cfg)?;
        let model = EventListProjection::new(&store);

        if *json {
            let total = model.child_count(&IndexPath::root());
            let mut records = Vec::with_capacity(total);
            for i in 0..total {
                if let Some(rec) = model.try_value_at(&IndexPath::row(i))? {
                    records.push(rec);
                }
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        if !model.has_children(&IndexPath::root()) {
            println!("No events.");
            return Ok(());
        }

        for (i, row) in model.rows().enumerate() {
            println!("{:>4}  {}", i, colorize_row(&row, NOT_FOUND_SENTINEL));
        }
    }
    Ok(())
}
