use crate::app::output::output_content;
use crate::app::state::{AppState, Focus};
use crate::components::{
    chips::{chip_label, chip_rows, ChipRow},
    combobox::{menu_height, CandidateMenu, QueryInput, INPUT_PLACEHOLDER},
    footer::Footer,
    header::Header,
    modals::{ErrorModal, HelpModal},
    output_view::OutputView,
    splash::Splash,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};

const MAX_CHIP_ROWS: u16 = 4;

/// Screen regions for one frame. Controller regions are empty while the
/// splash screen is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub input: Rect,
    pub chips: Rect,
    pub output: Rect,
    pub footer: Rect,
    pub menu: Option<Rect>,
}

#[must_use]
pub fn chip_labels(state: &AppState) -> Vec<String> {
    let spinner = state.spinner();
    state
        .chips()
        .iter()
        .map(|chip| chip_label(chip, spinner))
        .collect()
}

#[must_use]
pub fn get_layout(area: Rect, state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let mut layout = AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
        ..Default::default()
    };
    if !state.shows_controller() {
        return layout;
    }

    let chip_height = chip_rows(&chip_labels(state), layout.body.width.saturating_sub(2))
        .min(MAX_CHIP_ROWS)
        + 2;
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(chip_height),
            Constraint::Min(0),
        ])
        .split(layout.body);
    layout.input = body[0];
    layout.chips = body[1];
    layout.output = body[2];

    if state.focus == Focus::Input && state.combobox.menu.is_open() {
        let y = layout.input.bottom();
        let height = menu_height(state.candidates().len()).min(layout.body.bottom().saturating_sub(y));
        if height > 0 {
            layout.menu = Some(Rect::new(layout.input.x, y, layout.input.width, height));
        }
    }
    layout
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let focused_input = app_state.focus == Focus::Input;
    let text_area = &mut app_state.combobox.text_area;
    text_area.set_cursor_line_style(Style::default());
    text_area.set_placeholder_text(INPUT_PLACEHOLDER);
    text_area.set_placeholder_style(app_state.theme.placeholder);
    text_area.set_cursor_style(if focused_input {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });

    let state: &AppState = app_state;
    let theme = &state.theme;
    let layout = get_layout(f.area(), state);

    f.render_widget(Header { state, theme }, layout.header);

    if state.shows_controller() {
        f.render_widget(
            QueryInput {
                text_area: &state.combobox.text_area,
                focused: focused_input,
                theme,
            },
            layout.input,
        );

        let chips = state.chips();
        let labels = chip_labels(state);
        f.render_widget(
            ChipRow {
                chips: &chips,
                labels: &labels,
                cursor: Some(state.chip_cursor),
                focused: state.focus == Focus::Chips,
                theme,
            },
            layout.chips,
        );

        let content = output_content(state);
        f.render_widget(
            OutputView {
                content: &content,
                scroll: state.output_scroll,
                focused: state.focus == Focus::Output,
                spinner: state.spinner(),
                theme,
            },
            layout.output,
        );

        if let Some(menu_area) = layout.menu {
            let candidates = state.candidates();
            let query = state.combobox.query();
            f.render_widget(
                CandidateMenu {
                    candidates: &candidates,
                    highlight: state.combobox.menu.effective_highlight(candidates.len()),
                    query: &query,
                    theme,
                },
                menu_area,
            );
        }
    } else {
        f.render_widget(
            Splash {
                app_state: state,
                theme,
            },
            layout.body,
        );
    }

    f.render_widget(Footer { state, theme }, layout.footer);

    // --- Overlays ---
    if state.show_help {
        f.render_widget(HelpModal { theme }, f.area());
    }
    if let Some(error) = &state.last_error {
        f.render_widget(ErrorModal { theme, error }, f.area());
    }
}
