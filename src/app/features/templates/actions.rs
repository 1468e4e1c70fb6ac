use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    output::{output_content, OutputContent},
    features::ui::clamp_output_scroll,
    state::{AppState, CatalogStatus, ErrorSeverity, ErrorState, Focus},
};
use crate::domain::{
    catalog::Catalog,
    models::{FetchToken, SelectedTemplate},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CatalogLoaded(Ok(templates)) => {
            tracing::info!(count = templates.len(), "catalog loaded");
            state.catalog = Catalog::new(templates.clone());
            state.catalog_status = CatalogStatus::Loaded;
            state.focus = Focus::Input;
            UpdateResult::Handled(None)
        }
        Action::CatalogLoaded(Err(err)) => {
            tracing::error!("catalog load failed: {err}");
            state.catalog = Catalog::default();
            state.catalog_status = CatalogStatus::Failed(err.clone());
            state.last_error = Some(ErrorState::new(
                format!("Failed to load templates: {err}"),
                ErrorSeverity::Error,
            ));
            UpdateResult::Handled(None)
        }
        Action::FetchStarted(token) => {
            if let Some(pending) = state.pending.iter_mut().find(|p| p.token == *token) {
                pending.started = true;
            }
            UpdateResult::Handled(None)
        }
        Action::FetchSucceeded(token, text) => {
            match take_pending(state, *token) {
                Some(name) => {
                    tracing::info!(%name, %token, bytes = text.len(), "template downloaded");
                    state.selections.push(SelectedTemplate {
                        name,
                        text: text.clone(),
                    });
                }
                None => tracing::debug!(%token, "discarding result for removed selection"),
            }
            clamp_output_scroll(state);
            UpdateResult::Handled(None)
        }
        Action::FetchFailed(token, err) => {
            match take_pending(state, *token) {
                Some(name) => {
                    tracing::warn!(%name, %token, "template download failed: {err}");
                    state.last_error = Some(ErrorState::new(
                        format!("Failed to fetch {name}: {err}"),
                        ErrorSeverity::Error,
                    ));
                }
                None => tracing::debug!(%token, "discarding failure for removed selection"),
            }
            clamp_output_scroll(state);
            UpdateResult::Handled(None)
        }
        Action::ItemRemoved(name) => {
            remove(state, name);
            UpdateResult::Handled(None)
        }
        Action::RemoveFocusedChip => {
            let name = state
                .chips()
                .get(state.chip_cursor)
                .map(|chip| chip.name.to_string());
            if let Some(name) = name {
                remove(state, &name);
            }
            UpdateResult::Handled(None)
        }
        Action::ChipNext => {
            let len = state.chips().len();
            state.chip_cursor = (state.chip_cursor + 1).min(len.saturating_sub(1));
            UpdateResult::Handled(None)
        }
        Action::ChipPrev => {
            state.chip_cursor = state.chip_cursor.saturating_sub(1);
            UpdateResult::Handled(None)
        }
        Action::CopyOutput => match output_content(state) {
            OutputContent::Templates(text) => {
                UpdateResult::Handled(Some(Command::CopyToClipboard(text)))
            }
            _ => {
                state.set_status("Nothing to copy");
                UpdateResult::Handled(None)
            }
        },
        Action::ClipboardResult(Ok(bytes)) => {
            tracing::info!(bytes, "output copied to clipboard");
            state.set_status(format!("Copied {bytes} bytes"));
            UpdateResult::Handled(None)
        }
        Action::ClipboardResult(Err(err)) => {
            tracing::warn!("clipboard copy failed: {err}");
            state.last_error = Some(ErrorState::new(
                format!("Copy failed: {err}"),
                ErrorSeverity::Warning,
            ));
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn take_pending(state: &mut AppState, token: FetchToken) -> Option<String> {
    let pos = state.pending.iter().position(|p| p.token == token)?;
    Some(state.pending.remove(pos).name)
}

// Drops a finished selection or a download still in flight. Query and menu
// are left alone.
fn remove(state: &mut AppState, name: &str) {
    if state.selections.remove(name).is_some() {
        tracing::info!(%name, "selection removed");
    } else if let Some(pos) = state.pending.iter().position(|p| p.name == name) {
        let pending = state.pending.remove(pos);
        tracing::info!(%name, token = %pending.token, "pending download dropped");
    }
    let len = state.chips().len();
    state.chip_cursor = state.chip_cursor.min(len.saturating_sub(1));
    clamp_output_scroll(state);
}
