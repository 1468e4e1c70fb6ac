use super::action::Action;
use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug)]
pub struct KeyMap {
    // Checked first, for every focus
    pub global: HashMap<KeyEvent, Action>,
    pub input: HashMap<KeyEvent, Action>,
    pub chips: HashMap<KeyEvent, Action>,
    pub output: HashMap<KeyEvent, Action>,
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut global = HashMap::new();
        let mut input = HashMap::new();
        let mut chips = HashMap::new();
        let mut output = HashMap::new();

        // --- Global ---
        global.insert(ctrl('c'), Action::Quit);
        global.insert(ctrl('y'), Action::CopyOutput);
        global.insert(key(KeyCode::F(1)), Action::ToggleHelp);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusPrev);

        // --- Input (everything unmapped is typed into the query) ---
        input.insert(key(KeyCode::Enter), Action::ConfirmHighlighted);
        input.insert(key(KeyCode::Down), Action::HighlightNext);
        input.insert(key(KeyCode::Up), Action::HighlightPrev);
        input.insert(ctrl('n'), Action::HighlightNext);
        input.insert(ctrl('p'), Action::HighlightPrev);
        input.insert(key(KeyCode::Esc), Action::CloseMenu);

        // --- Chips ---
        for (code, action) in [
            (KeyCode::Left, Action::ChipPrev),
            (KeyCode::Char('h'), Action::ChipPrev),
            (KeyCode::Right, Action::ChipNext),
            (KeyCode::Char('l'), Action::ChipNext),
            (KeyCode::Delete, Action::RemoveFocusedChip),
            (KeyCode::Backspace, Action::RemoveFocusedChip),
            (KeyCode::Char('x'), Action::RemoveFocusedChip),
        ] {
            chips.insert(key(code), action);
        }

        // --- Output ---
        for (code, action) in [
            (KeyCode::Down, Action::ScrollOutputDown(1)),
            (KeyCode::Char('j'), Action::ScrollOutputDown(1)),
            (KeyCode::Up, Action::ScrollOutputUp(1)),
            (KeyCode::Char('k'), Action::ScrollOutputUp(1)),
            (KeyCode::PageDown, Action::ScrollOutputDown(10)),
            (KeyCode::PageUp, Action::ScrollOutputUp(10)),
            (KeyCode::Char('y'), Action::CopyOutput),
        ] {
            output.insert(key(code), action);
        }

        // Shared by the two non-typing panels
        for map in [&mut chips, &mut output] {
            map.insert(key(KeyCode::Char('q')), Action::Quit);
            map.insert(key(KeyCode::Char('?')), Action::ToggleHelp);
            map.insert(key(KeyCode::Char('/')), Action::SetFocus(Focus::Input));
            map.insert(key(KeyCode::Char('i')), Action::SetFocus(Focus::Input));
            map.insert(key(KeyCode::Esc), Action::SetFocus(Focus::Input));
        }

        Self {
            global,
            input,
            chips,
            output,
        }
    }
}

impl KeyMap {
    pub fn get_action(&self, event: KeyEvent, focus: Focus) -> Option<Action> {
        let event = normalize(event);
        if let Some(action) = self.global.get(&event) {
            return Some(action.clone());
        }
        let map = match focus {
            Focus::Input => &self.input,
            Focus::Chips => &self.chips,
            Focus::Output => &self.output,
        };
        map.get(&event).cloned()
    }
}

// Terminals report Shift on upper-case chars and BackTab; kind/state vary by
// protocol. Lookups only care about code and the remaining modifiers.
fn normalize(event: KeyEvent) -> KeyEvent {
    let modifiers = match event.code {
        KeyCode::Char(_) | KeyCode::BackTab => event.modifiers.difference(KeyModifiers::SHIFT),
        _ => event.modifiers,
    };
    KeyEvent::new(event.code, modifiers)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
