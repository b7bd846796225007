use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projection::{DataModel, EventListProjection};
use crate::core::store::NOT_FOUND_SENTINEL;
use crate::errors::AppResult;
use crate::models::index_path::IndexPath;
use crate::utils::colors::colorize_row;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { position } = cmd {
        let store = open_store(cfg)?;
        let model = EventListProjection::new(&store);
        let value = model.data(&IndexPath::row(*position));
        println!("{}", colorize_row(&value, NOT_FOUND_SENTINEL));
    }
    Ok(())
}
