use crate::app::{
    action::{Action, UpdateResult},
    output::output_content,
    state::AppState,
};
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|t| Instant::now().duration_since(t) >= STATUS_TTL)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(_, _) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ScrollOutputDown(amount) => {
            state.output_scroll = state.output_scroll.saturating_add(*amount);
            clamp_output_scroll(state);
            UpdateResult::Handled(None)
        }
        Action::ScrollOutputUp(amount) => {
            state.output_scroll = state.output_scroll.saturating_sub(*amount);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Keeps the output offset on a line that exists in the current content.
pub fn clamp_output_scroll(state: &mut AppState) {
    let max_scroll = output_content(state).text().lines().count().saturating_sub(1);
    let max_scroll = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    state.output_scroll = state.output_scroll.min(max_scroll);
}
