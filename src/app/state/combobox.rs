use super::input::AppTextArea;

/// Menu half of the combobox. `Filtering` means open with the implicit
/// first-row highlight; `Highlighted` carries an explicit row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Filtering,
    Highlighted(usize),
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self != MenuState::Closed
    }

    /// The row that Enter would confirm, given `len` candidates.
    #[must_use]
    pub fn effective_highlight(self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        match self {
            MenuState::Closed => None,
            MenuState::Filtering => Some(0),
            MenuState::Highlighted(i) => Some(i.min(len - 1)),
        }
    }

    #[must_use]
    pub fn next(self, len: usize) -> Self {
        if !self.is_open() {
            return MenuState::Highlighted(0);
        }
        match self.effective_highlight(len) {
            Some(i) => MenuState::Highlighted((i + 1).min(len - 1)),
            None => self,
        }
    }

    #[must_use]
    pub fn prev(self, len: usize) -> Self {
        if !self.is_open() {
            return MenuState::Highlighted(0);
        }
        match self.effective_highlight(len) {
            Some(i) => MenuState::Highlighted(i.saturating_sub(1)),
            None => self,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComboboxState<'a> {
    pub text_area: AppTextArea<'a>,
    pub menu: MenuState,
}

impl ComboboxState<'_> {
    #[must_use]
    pub fn query(&self) -> String {
        self.text_area.text()
    }

    pub fn set_query(&mut self, query: &str) {
        self.text_area = AppTextArea::default();
        self.text_area.insert_str(query);
    }

    pub fn clear_query(&mut self) {
        self.text_area = AppTextArea::default();
    }
}
