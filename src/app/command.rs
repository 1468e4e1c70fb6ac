use crate::domain::models::{FetchToken, Template};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadCatalog,
    FetchTemplate { token: FetchToken, template: Template },
    CopyToClipboard(String),
}
