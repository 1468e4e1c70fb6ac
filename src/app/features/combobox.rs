use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Focus, MenuState},
};
use crate::domain::models::PendingFetch;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::QueryInput(key) => {
            let before = state.combobox.query();
            state.focus = Focus::Input;
            state.combobox.text_area.input(*key);
            let after = state.combobox.query();
            if after != before {
                // Keep the input single-line even if the key inserted a break
                if state.combobox.text_area.lines().len() > 1 {
                    state.combobox.set_query(&after);
                }
                state.combobox.menu = MenuState::Filtering;
            }
            UpdateResult::Handled(None)
        }
        Action::QueryChanged(query) => {
            state.focus = Focus::Input;
            state.combobox.set_query(query);
            state.combobox.menu = MenuState::Filtering;
            UpdateResult::Handled(None)
        }
        Action::HighlightNext => {
            let len = state.candidates().len();
            state.combobox.menu = state.combobox.menu.next(len);
            UpdateResult::Handled(None)
        }
        Action::HighlightPrev => {
            let len = state.candidates().len();
            state.combobox.menu = state.combobox.menu.prev(len);
            UpdateResult::Handled(None)
        }
        Action::OpenMenu => {
            state.focus = Focus::Input;
            if !state.combobox.menu.is_open() {
                state.combobox.menu = MenuState::Filtering;
            }
            UpdateResult::Handled(None)
        }
        Action::CloseMenu => {
            if state.combobox.menu.is_open() {
                state.combobox.menu = MenuState::Closed;
            } else {
                state.combobox.clear_query();
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmHighlighted => {
            let name = state.highlighted_candidate().map(|t| t.name.clone());
            UpdateResult::Handled(name.and_then(|n| confirm(state, &n)))
        }
        Action::ItemClicked(idx) => {
            let name = state.candidates().get(*idx).map(|t| t.name.clone());
            UpdateResult::Handled(name.and_then(|n| confirm(state, &n)))
        }
        Action::ItemConfirmed(name) => UpdateResult::Handled(confirm(state, name)),
        Action::InputBlurred => UpdateResult::Handled(blur(state)),
        Action::SetFocus(focus) => UpdateResult::Handled(set_focus(state, *focus)),
        Action::FocusNext => {
            let target = state.focus.next();
            UpdateResult::Handled(set_focus(state, target))
        }
        Action::FocusPrev => {
            let target = state.focus.prev();
            UpdateResult::Handled(set_focus(state, target))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Queues a download for `name`. The query is cleared and the menu stays open
/// with the first row implied so several templates can be picked in a row.
pub fn confirm(state: &mut AppState, name: &str) -> Option<Command> {
    if state.is_taken(name) {
        return None;
    }
    let template = state.catalog.find(name)?.clone();

    let token = state.next_token;
    state.next_token = token.next();
    state.pending.push(PendingFetch {
        token,
        name: template.name.clone(),
        started: false,
    });

    state.combobox.clear_query();
    state.combobox.menu = MenuState::Filtering;
    state.output_scroll = 0;

    tracing::info!(name = %template.name, %token, "template selected");
    Some(Command::FetchTemplate { token, template })
}

/// Leaving the input confirms an explicit highlight or a typed match; the
/// query is abandoned either way.
fn blur(state: &mut AppState) -> Option<Command> {
    let has_intent = match state.combobox.menu {
        MenuState::Highlighted(_) => true,
        MenuState::Filtering => !state.combobox.query().is_empty(),
        MenuState::Closed => false,
    };
    let name = if has_intent {
        state.highlighted_candidate().map(|t| t.name.clone())
    } else {
        None
    };

    let command = name.and_then(|n| confirm(state, &n));
    state.combobox.clear_query();
    state.combobox.menu = MenuState::Closed;
    command
}

fn set_focus(state: &mut AppState, focus: Focus) -> Option<Command> {
    if state.focus == focus {
        return None;
    }
    let command = if state.focus == Focus::Input {
        blur(state)
    } else {
        None
    };
    state.focus = focus;
    if focus == Focus::Chips {
        let len = state.chips().len();
        state.chip_cursor = state.chip_cursor.min(len.saturating_sub(1));
    }
    command
}
