pub mod action;
pub mod command;
pub mod config;
pub mod features;
pub mod input;
pub mod keymap;
pub mod r#loop;
pub mod output;
pub mod recovery;
pub mod reducer;
pub mod state;
pub mod ui;
