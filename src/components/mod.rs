pub mod chips;
pub mod combobox;
pub mod footer;
pub mod header;
pub mod modals;
pub mod output_view;
pub mod splash;
