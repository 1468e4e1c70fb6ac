use crate::app::command::Command;
use crate::app::state::Focus;
use crate::domain::models::{FetchToken, Template};

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Combobox ---
    QueryInput(crossterm::event::KeyEvent), // Raw keystroke for the text input
    QueryChanged(String),                   // Replace the query outright
    HighlightNext,                          // Down
    HighlightPrev,                          // Up
    OpenMenu,                               // Click on the input
    CloseMenu,                              // Esc
    ConfirmHighlighted,                     // Enter
    ItemClicked(usize),                     // Click on a candidate row
    ItemConfirmed(String),                  // Confirm by template name
    InputBlurred,                           // Focus left the input

    // --- Focus ---
    SetFocus(Focus),
    FocusNext,
    FocusPrev,

    // --- Chips ---
    ChipNext,
    ChipPrev,
    RemoveFocusedChip,
    ItemRemoved(String),

    // --- Output ---
    ScrollOutputUp(u16),
    ScrollOutputDown(u16),
    CopyOutput,

    // --- Overlays ---
    ToggleHelp,
    DismissError,

    // --- Async Results ---
    // Sent back to the loop by spawned tasks
    CatalogLoaded(Result<Vec<Template>, String>),
    FetchStarted(FetchToken),
    FetchSucceeded(FetchToken, String),
    FetchFailed(FetchToken, String),
    ClipboardResult(Result<usize, String>),
}
