use super::keymap::KeyMap;
use crate::domain::catalog::Catalog;
use crate::domain::models::{FetchToken, PendingFetch, Template};
use crate::domain::selection::Selections;
use crate::theme::Theme;
use std::sync::Arc;
use std::time::Instant;

pub mod combobox;
pub mod error;
pub mod input;

// Re-exports
pub use combobox::{ComboboxState, MenuState};
pub use error::{ErrorSeverity, ErrorState};
pub use input::AppTextArea;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Focus {
    Input,
    Chips,
    Output,
}

impl Focus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Chips,
            Focus::Chips => Focus::Output,
            Focus::Output => Focus::Input,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Output,
            Focus::Chips => Focus::Input,
            Focus::Output => Focus::Chips,
        }
    }
}

/// One entry of the chip row: either a finished selection or a download
/// still in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip<'s> {
    pub name: &'s str,
    pub pending: bool,
}

#[derive(Debug, Clone)]
pub struct AppState<'a> {
    // --- Lifecycle & Status ---
    pub should_quit: bool,
    pub focus: Focus,
    pub show_help: bool,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,

    // --- Catalog ---
    pub catalog_status: CatalogStatus,
    pub catalog: Catalog,

    // --- Combobox ---
    pub combobox: ComboboxState<'a>,

    // --- Selections & downloads ---
    pub selections: Selections,
    pub pending: Vec<PendingFetch>,
    pub next_token: FetchToken,
    pub chip_cursor: usize,

    // --- Output ---
    pub output_scroll: u16,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
}

impl AppState<'_> {
    /// True while any template download is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Selected or currently downloading; either way not selectable again.
    #[must_use]
    pub fn is_taken(&self, name: &str) -> bool {
        self.selections.contains(name) || self.pending.iter().any(|p| p.name == name)
    }

    #[must_use]
    pub fn candidates(&self) -> Vec<&Template> {
        let query = self.combobox.query();
        self.catalog.candidates(&query, |name| self.is_taken(name))
    }

    #[must_use]
    pub fn highlighted_candidate(&self) -> Option<&Template> {
        let candidates = self.candidates();
        let idx = self.combobox.menu.effective_highlight(candidates.len())?;
        candidates.get(idx).copied()
    }

    /// Selections first, then downloads in confirm order.
    #[must_use]
    pub fn chips(&self) -> Vec<Chip<'_>> {
        self.selections
            .names()
            .map(|name| Chip {
                name,
                pending: false,
            })
            .chain(self.pending.iter().map(|p| Chip {
                name: p.name.as_str(),
                pending: true,
            }))
            .collect()
    }

    /// The selection controller and output panel exist only with a non-empty catalog.
    #[must_use]
    pub fn shows_controller(&self) -> bool {
        self.catalog_status == CatalogStatus::Loaded && !self.catalog.is_empty()
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        SPINNER[(self.frame_count as usize) % SPINNER.len()]
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now());
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            focus: Focus::Input,
            show_help: false,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            catalog_status: CatalogStatus::Loading,
            catalog: Catalog::default(),
            combobox: ComboboxState::default(),
            selections: Selections::default(),
            pending: Vec::new(),
            next_token: FetchToken::default(),
            chip_cursor: 0,
            output_scroll: 0,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            theme: Theme::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::SelectedTemplate;

    fn template(name: &str) -> Template {
        Template {
            name: name.to_string(),
            download_url: format!("https://raw.example/{name}"),
        }
    }

    #[test]
    fn test_candidates_skip_selected_and_pending() {
        let mut state = AppState {
            catalog: Catalog::new(vec![template("Go"), template("Godot"), template("Gradle")]),
            catalog_status: CatalogStatus::Loaded,
            ..Default::default()
        };
        state.selections.push(SelectedTemplate {
            name: "Go".to_string(),
            text: String::new(),
        });
        state.pending.push(PendingFetch {
            token: FetchToken(0),
            name: "Gradle".to_string(),
            started: false,
        });
        let names: Vec<_> = state.candidates().iter().map(|t| t.name.clone()).collect();
        assert_eq!(names, vec!["Godot"]);
    }

    #[test]
    fn test_chips_list_pending_after_selected() {
        let mut state = AppState::default();
        state.pending.push(PendingFetch {
            token: FetchToken(3),
            name: "Rust".to_string(),
            started: true,
        });
        state.selections.push(SelectedTemplate {
            name: "Node".to_string(),
            text: String::new(),
        });
        assert_eq!(
            state.chips(),
            vec![
                Chip {
                    name: "Node",
                    pending: false
                },
                Chip {
                    name: "Rust",
                    pending: true
                },
            ]
        );
    }

    #[test]
    fn test_focus_ring() {
        assert_eq!(Focus::Input.next().next().next(), Focus::Input);
        assert_eq!(Focus::Input.prev(), Focus::Output);
    }
}
