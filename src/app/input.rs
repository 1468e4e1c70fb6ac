use crate::app::{
    action::Action,
    state::{AppState, Focus},
    ui,
};
use crate::components::{chips::chip_layout, combobox::menu_offset};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Overlays swallow everything but their own keys. The error modal is
    // drawn above help, so it answers first.
    if app_state.last_error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }
    if app_state.show_help {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::F(1) => Some(Action::ToggleHelp),
            _ => None,
        };
    }
    if !app_state.shows_controller() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::F(1) | KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        };
    }

    if let Some(action) = app_state.keymap.get_action(key, app_state.focus) {
        return Some(action);
    }
    match app_state.focus {
        Focus::Input => Some(Action::QueryInput(key)),
        Focus::Chips | Focus::Output => None,
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    if app_state.show_help || app_state.last_error.is_some() || !app_state.shows_controller() {
        return None;
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area, app_state);
    let pos = Position::new(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::ScrollUp if layout.output.contains(pos) => Some(Action::ScrollOutputUp(1)),
        MouseEventKind::ScrollDown if layout.output.contains(pos) => {
            Some(Action::ScrollOutputDown(1))
        }
        MouseEventKind::ScrollUp if layout.menu.is_some_and(|m| m.contains(pos)) => {
            Some(Action::HighlightPrev)
        }
        MouseEventKind::ScrollDown if layout.menu.is_some_and(|m| m.contains(pos)) => {
            Some(Action::HighlightNext)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            // The menu overlays the chips and output, so it is checked first
            if let Some(menu) = layout.menu.filter(|m| m.contains(pos)) {
                return clicked_menu_row(app_state, menu, pos.y);
            }
            if layout.input.contains(pos) {
                return Some(Action::OpenMenu);
            }
            if layout.chips.contains(pos) {
                return Some(clicked_chip(app_state, layout.chips, pos));
            }
            if layout.output.contains(pos) {
                return Some(Action::SetFocus(Focus::Output));
            }
            // Header, footer and any other chrome
            (app_state.focus == Focus::Input).then_some(Action::InputBlurred)
        }
        _ => None,
    }
}

fn clicked_menu_row(app_state: &AppState<'_>, menu: Rect, y: u16) -> Option<Action> {
    let inner_height = menu.height.saturating_sub(2);
    let row = y.checked_sub(menu.y + 1).filter(|row| *row < inner_height)?;
    let len = app_state.candidates().len();
    let highlight = app_state.combobox.menu.effective_highlight(len);
    let offset = menu_offset(highlight, len, inner_height as usize);
    let idx = offset + row as usize;
    (idx < len).then_some(Action::ItemClicked(idx))
}

fn clicked_chip(app_state: &AppState<'_>, chips_area: Rect, pos: Position) -> Action {
    let inner = Rect::new(
        chips_area.x + 1,
        chips_area.y + 1,
        chips_area.width.saturating_sub(2),
        chips_area.height.saturating_sub(2),
    );
    let labels = ui::chip_labels(app_state);
    let hit = chip_layout(&labels, inner)
        .into_iter()
        .zip(app_state.chips())
        .find(|(cells, _)| cells.area.contains(pos));

    match hit {
        Some((cells, chip)) if cells.remove.contains(pos) => {
            Action::ItemRemoved(chip.name.to_string())
        }
        _ => Action::SetFocus(Focus::Chips),
    }
}
