use crate::domain::models::SelectedTemplate;

/// Insertion-ordered selections, unique by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selections {
    items: Vec<SelectedTemplate>,
}

impl Selections {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|s| s.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SelectedTemplate> {
        self.items.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.name.as_str())
    }

    /// Appends `item` unless its name is already present. Returns whether it was added.
    pub fn push(&mut self, item: SelectedTemplate) -> bool {
        if self.contains(&item.name) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the entry named `name`. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<SelectedTemplate> {
        let pos = self.items.iter().position(|s| s.name == name)?;
        Some(self.items.remove(pos))
    }
}
