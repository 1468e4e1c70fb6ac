use crate::app::{action::Action, command::Command};
use crate::domain::source::TemplateSource;
use crate::infrastructure::clipboard;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinSet;

/// Spawns the side effect for `command` onto `tasks`. Each task reports back
/// through `tx` with exactly one terminal action. If the loop is gone by then
/// the send fails and the result is dropped.
pub fn handle_command(
    command: Command,
    source: Arc<dyn TemplateSource>,
    tx: mpsc::Sender<Action>,
    tasks: &mut JoinSet<()>,
) {
    match command {
        Command::LoadCatalog => {
            tasks.spawn(async move {
                let result = source
                    .list_templates()
                    .await
                    .map_err(|e| format!("{e:#}"));
                deliver(&tx, Action::CatalogLoaded(result)).await;
            });
        }
        Command::FetchTemplate { token, template } => {
            tasks.spawn(async move {
                deliver(&tx, Action::FetchStarted(token)).await;
                let action = match source.fetch_template(&template).await {
                    Ok(text) => Action::FetchSucceeded(token, text),
                    Err(e) => Action::FetchFailed(token, format!("{e:#}")),
                };
                deliver(&tx, action).await;
            });
        }
        Command::CopyToClipboard(text) => {
            tasks.spawn(async move {
                let result = clipboard::copy_text(text)
                    .await
                    .map_err(|e| format!("{e:#}"));
                deliver(&tx, Action::ClipboardResult(result)).await;
            });
        }
    }
}

async fn deliver(tx: &mpsc::Sender<Action>, action: Action) {
    if tx.send(action).await.is_err() {
        tracing::debug!("event loop closed, dropping async result");
    }
}
