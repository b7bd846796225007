use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddEvent;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Append a new event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { text, at } = cmd {
        let mut draft = match at {
            Some(moment) => AddEvent::from_input(moment, &cfg.timestamp_format),
            None => AddEvent::new(&cfg.timestamp_format),
        };
        draft.set_text(text.as_str());

        let store = open_store(cfg)?;
        let id = draft.commit(&store)?;

        success(format!(
            "Event #{} added: {}, {}",
            id,
            draft.current_time(),
            draft.text()
        ));

        audit(
            &store,
            "add",
            &format!("#{id}"),
            &format!("Added event at {}", draft.current_time()),
        );
    }

    Ok(())
}
