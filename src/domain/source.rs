use crate::domain::models::Template;
use anyhow::Result;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateSource: Send + Sync {
    // The full catalog, in the order the remote returns it
    async fn list_templates(&self) -> Result<Vec<Template>>;

    // Raw body behind a template's download_url
    async fn fetch_template(&self, template: &Template) -> Result<String>;
}
