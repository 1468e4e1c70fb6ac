use super::{
    action::{Action, UpdateResult},
    command::Command,
    features,
    state::AppState,
};

type Feature = fn(&mut AppState<'_>, &Action) -> UpdateResult;

const FEATURES: [Feature; 3] = [
    features::combobox::update,
    features::templates::update,
    features::ui::update,
];

/// Applies `action` to `state`. Any I/O it implies comes back as a `Command`
/// for the runtime to execute.
pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    for feature in FEATURES {
        if let UpdateResult::Handled(command) = feature(state, &action) {
            return command;
        }
    }
    None
}

#[cfg(test)]
#[path = "reducer_tests.rs"]
mod tests;
