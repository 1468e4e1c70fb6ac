pub mod clipboard;
pub mod github;
