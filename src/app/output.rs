use crate::app::state::AppState;
use crate::domain::selection::Selections;

pub const LOADING_TEXT: &str = "Loading...";
pub const PLACEHOLDER_TEXT: &str = "Choose a template";

/// What the output panel shows, in priority order: any download in flight,
/// nothing selected yet, or the combined templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputContent {
    Loading,
    Placeholder,
    Templates(String),
}

impl OutputContent {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            OutputContent::Loading => LOADING_TEXT,
            OutputContent::Placeholder => PLACEHOLDER_TEXT,
            OutputContent::Templates(text) => text,
        }
    }
}

#[must_use]
pub fn combine(selections: &Selections) -> String {
    selections
        .iter()
        .map(|t| format!("\n\n##### {}\n\n{}", t.name, t.text))
        .collect()
}

#[must_use]
pub fn render_output(loading: bool, selections: &Selections) -> OutputContent {
    if loading {
        OutputContent::Loading
    } else if selections.is_empty() {
        OutputContent::Placeholder
    } else {
        OutputContent::Templates(combine(selections))
    }
}

#[must_use]
pub fn output_content(state: &AppState) -> OutputContent {
    render_output(state.is_loading(), &state.selections)
}
