use crate::core::observable::Observable;
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::utils::time::{self, NOT_AVAILABLE};
use chrono::NaiveDateTime;

/// Draft of a new journal entry.
///
/// The moment is captured when the draft is created; the text is edited
/// until `commit` appends both to the store.
pub struct AddEvent {
    pub text: Observable<String>,
    captured_at: Option<NaiveDateTime>,
    raw_moment: Option<String>,
    format: String,
}

impl AddEvent {
    /// Draft stamped with the current local time.
    pub fn new(format: &str) -> Self {
        Self::with_moment(Some(time::now()), format)
    }

    pub fn with_moment(moment: Option<NaiveDateTime>, format: &str) -> Self {
        Self {
            text: Observable::default(),
            captured_at: moment,
            raw_moment: None,
            format: format.to_string(),
        }
    }

    /// Draft stamped with a moment typed by the user.
    /// An unparsable input gives an invalid draft rather than an error.
    pub fn from_input(input: &str, format: &str) -> Self {
        let mut draft = Self::with_moment(time::parse_moment(input), format);
        draft.raw_moment = Some(input.to_string());
        draft
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        self.text.set(text.into())
    }

    pub fn text(&self) -> &str {
        self.text.get()
    }

    pub fn is_valid(&self) -> bool {
        self.captured_at
            .as_ref()
            .and_then(|m| time::format_moment(m, &self.format))
            .is_some()
    }

    /// The captured moment rendered for display, `"n/a"` when invalid.
    pub fn current_time(&self) -> String {
        self.captured_at
            .as_ref()
            .and_then(|m| time::format_moment(m, &self.format))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// Append the draft to `store`, returning the new record id.
    pub fn commit(&self, store: &EventStore) -> AppResult<i64> {
        if !self.is_valid() {
            let shown = self
                .raw_moment
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());
            return Err(AppError::InvalidTimestamp(shown));
        }
        store.append(&self.current_time(), self.text())
    }
}
