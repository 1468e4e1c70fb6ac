pub mod combobox;
pub mod templates;
pub mod ui;
