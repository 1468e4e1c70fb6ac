pub mod catalog;
pub mod models;
pub mod selection;
pub mod source;
