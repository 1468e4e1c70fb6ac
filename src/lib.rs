pub mod app;
pub mod cli;
pub mod components;
pub mod domain;
pub mod infrastructure;
pub mod theme;
