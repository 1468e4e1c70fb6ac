use super::*;
use crate::app::output::{output_content, OutputContent};
use crate::app::state::{CatalogStatus, Focus, MenuState};
use crate::domain::models::{FetchToken, Template};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};

fn template(name: &str, url: &str) -> Template {
    Template {
        name: name.to_string(),
        download_url: url.to_string(),
    }
}

fn loaded_state<'a>() -> AppState<'a> {
    let mut state = AppState::default();
    update(
        &mut state,
        Action::CatalogLoaded(Ok(vec![
            template("Node", "U1"),
            template("Python", "U2"),
            template("Nim", "U3"),
        ])),
    );
    state
}

fn candidate_names(state: &AppState) -> Vec<String> {
    state.candidates().iter().map(|t| t.name.clone()).collect()
}

fn expect_fetch(command: Option<Command>) -> (FetchToken, Template) {
    match command {
        Some(Command::FetchTemplate { token, template }) => (token, template),
        other => panic!("Expected Command::FetchTemplate, got {other:?}"),
    }
}

fn type_str(state: &mut AppState, text: &str) {
    for c in text.chars() {
        update(
            state,
            Action::QueryInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
    }
}

#[test]
fn test_scenario_select_node() {
    let mut state = loaded_state();

    update(&mut state, Action::QueryChanged("No".to_string()));
    assert_eq!(candidate_names(&state), vec!["Node"]);

    let (token, template) = expect_fetch(update(&mut state, Action::ConfirmHighlighted));
    assert_eq!(template.download_url, "U1");
    assert_eq!(output_content(&state), OutputContent::Loading);

    update(&mut state, Action::FetchStarted(token));
    update(
        &mut state,
        Action::FetchSucceeded(token, "node-body".to_string()),
    );

    assert_eq!(state.selections.names().collect::<Vec<_>>(), vec!["Node"]);
    assert_eq!(
        output_content(&state).text(),
        "\n\n##### Node\n\nnode-body"
    );
}

#[test]
fn test_typing_filters_and_opens_menu() {
    let mut state = loaded_state();
    type_str(&mut state, "n");
    assert_eq!(state.combobox.menu, MenuState::Filtering);
    assert_eq!(candidate_names(&state), vec!["Node", "Nim"]);

    type_str(&mut state, "I");
    assert_eq!(candidate_names(&state), vec!["Nim"]);
    assert_eq!(state.catalog.len(), 3);
}

#[test]
fn test_confirm_keeps_menu_open_and_clears_query() {
    let mut state = loaded_state();
    update(&mut state, Action::QueryChanged("py".to_string()));
    expect_fetch(update(&mut state, Action::ConfirmHighlighted));

    assert!(state.combobox.query().is_empty());
    assert_eq!(state.combobox.menu, MenuState::Filtering);
    assert_eq!(state.combobox.menu.effective_highlight(2), Some(0));
}

#[test]
fn test_pending_name_is_not_selectable_twice() {
    let mut state = loaded_state();
    expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    assert!(!candidate_names(&state).contains(&"Node".to_string()));
    assert!(update(&mut state, Action::ItemConfirmed("Node".to_string())).is_none());
    assert_eq!(state.pending.len(), 1);
}

#[test]
fn test_unknown_name_is_ignored() {
    let mut state = loaded_state();
    assert!(update(&mut state, Action::ItemConfirmed("Cobol".to_string())).is_none());
    assert!(state.pending.is_empty());
}

#[test]
fn test_arrow_navigation_clamps() {
    let mut state = loaded_state();
    update(&mut state, Action::HighlightNext);
    assert_eq!(state.combobox.menu, MenuState::Highlighted(0));
    for _ in 0..10 {
        update(&mut state, Action::HighlightNext);
    }
    assert_eq!(state.combobox.menu, MenuState::Highlighted(2));
    for _ in 0..10 {
        update(&mut state, Action::HighlightPrev);
    }
    assert_eq!(state.combobox.menu, MenuState::Highlighted(0));
}

#[test]
fn test_click_confirms_row() {
    let mut state = loaded_state();
    update(&mut state, Action::OpenMenu);
    let (_, template) = expect_fetch(update(&mut state, Action::ItemClicked(1)));
    assert_eq!(template.name, "Python");
    assert!(update(&mut state, Action::ItemClicked(99)).is_none());
}

#[test]
fn test_blur_with_typed_match_selects() {
    let mut state = loaded_state();
    type_str(&mut state, "pyt");
    let (_, template) = expect_fetch(update(&mut state, Action::FocusNext));
    assert_eq!(template.name, "Python");
    assert_eq!(state.focus, Focus::Chips);
    assert_eq!(state.combobox.menu, MenuState::Closed);
    assert!(state.combobox.query().is_empty());
}

#[test]
fn test_blur_without_match_abandons_query() {
    let mut state = loaded_state();
    type_str(&mut state, "zzz");
    assert!(update(&mut state, Action::InputBlurred).is_none());
    assert!(state.combobox.query().is_empty());
    assert!(state.pending.is_empty());
}

#[test]
fn test_blur_with_closed_menu_selects_nothing() {
    let mut state = loaded_state();
    assert!(update(&mut state, Action::InputBlurred).is_none());
    assert!(state.pending.is_empty());
}

#[test]
fn test_escape_closes_then_clears() {
    let mut state = loaded_state();
    type_str(&mut state, "no");
    update(&mut state, Action::CloseMenu);
    assert_eq!(state.combobox.menu, MenuState::Closed);
    assert_eq!(state.combobox.query(), "no");
    update(&mut state, Action::CloseMenu);
    assert!(state.combobox.query().is_empty());
}

#[test]
fn test_fetch_failure_clears_loading_and_reports() {
    let mut state = loaded_state();
    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Nim".to_string())));
    update(
        &mut state,
        Action::FetchFailed(token, "HTTP 404 from U3".to_string()),
    );

    assert!(!state.is_loading());
    assert!(state.selections.is_empty());
    assert_eq!(output_content(&state), OutputContent::Placeholder);
    let err = state.last_error.as_ref().unwrap();
    assert!(err.message.contains("Nim"));
    // The failed template can be picked again
    assert!(candidate_names(&state).contains(&"Nim".to_string()));
}

#[test]
fn test_interleaved_fetches_track_loading_independently() {
    let mut state = loaded_state();
    let (first, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    let (second, _) = expect_fetch(update(
        &mut state,
        Action::ItemConfirmed("Python".to_string()),
    ));
    assert_ne!(first, second);

    update(&mut state, Action::FetchSucceeded(second, "py".to_string()));
    assert!(state.is_loading());
    assert_eq!(output_content(&state), OutputContent::Loading);

    update(&mut state, Action::FetchSucceeded(first, "node".to_string()));
    assert!(!state.is_loading());
    assert_eq!(
        state.selections.names().collect::<Vec<_>>(),
        vec!["Python", "Node"]
    );
}

#[test]
fn test_removing_pending_discards_late_result() {
    let mut state = loaded_state();
    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    update(&mut state, Action::ItemRemoved("Node".to_string()));
    assert!(!state.is_loading());

    update(&mut state, Action::FetchSucceeded(token, "late".to_string()));
    assert!(state.selections.is_empty());
}

#[test]
fn test_remove_leaves_query_and_menu() {
    let mut state = loaded_state();
    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    update(&mut state, Action::FetchSucceeded(token, "n".to_string()));
    type_str(&mut state, "p");
    let menu = state.combobox.menu;

    update(&mut state, Action::ItemRemoved("Node".to_string()));
    assert_eq!(state.combobox.query(), "p");
    assert_eq!(state.combobox.menu, menu);
    assert!(state.selections.is_empty());
}

#[test]
fn test_remove_focused_chip() {
    let mut state = loaded_state();
    for name in ["Node", "Python"] {
        let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed(name.to_string())));
        update(&mut state, Action::FetchSucceeded(token, String::new()));
    }
    update(&mut state, Action::SetFocus(Focus::Chips));
    update(&mut state, Action::ChipNext);
    update(&mut state, Action::ChipNext);
    assert_eq!(state.chip_cursor, 1);
    update(&mut state, Action::RemoveFocusedChip);
    assert_eq!(state.selections.names().collect::<Vec<_>>(), vec!["Node"]);
    assert_eq!(state.chip_cursor, 0);
}

#[test]
fn test_catalog_failure_hides_controller() {
    let mut state = AppState::default();
    update(
        &mut state,
        Action::CatalogLoaded(Err("error sending request".to_string())),
    );
    assert_eq!(
        state.catalog_status,
        CatalogStatus::Failed("error sending request".to_string())
    );
    assert!(state.catalog.is_empty());
    assert!(!state.shows_controller());
    assert!(state.last_error.is_some());
}

#[test]
fn test_empty_catalog_hides_controller() {
    let mut state = AppState::default();
    update(&mut state, Action::CatalogLoaded(Ok(Vec::new())));
    assert_eq!(state.catalog_status, CatalogStatus::Loaded);
    assert!(!state.shows_controller());
}

#[test]
fn test_catalog_reload_replaces_wholesale() {
    let mut state = loaded_state();
    update(
        &mut state,
        Action::CatalogLoaded(Ok(vec![template("Rust", "U9")])),
    );
    assert_eq!(state.catalog.len(), 1);
    assert!(state.catalog.find("Node").is_none());
}

#[test]
fn test_copy_requires_templates() {
    let mut state = loaded_state();
    assert!(update(&mut state, Action::CopyOutput).is_none());
    assert_eq!(state.status_message.as_deref(), Some("Nothing to copy"));

    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    update(&mut state, Action::FetchSucceeded(token, "x".to_string()));
    assert_eq!(
        update(&mut state, Action::CopyOutput),
        Some(Command::CopyToClipboard("\n\n##### Node\n\nx".to_string()))
    );
}

#[test]
fn test_output_scroll_is_bounded() {
    let mut state = loaded_state();
    update(&mut state, Action::ScrollOutputDown(50));
    assert_eq!(state.output_scroll, 0);
    update(&mut state, Action::ScrollOutputUp(3));
    assert_eq!(state.output_scroll, 0);
}

#[test]
fn test_output_scroll_follows_content_changes() {
    let mut state = loaded_state();
    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Node".to_string())));
    update(&mut state, Action::FetchSucceeded(token, "a\nb\nc\nd\ne".to_string()));
    update(&mut state, Action::ScrollOutputDown(4));
    assert_eq!(state.output_scroll, 4);

    // A new download swaps the output for the loading text
    let (token, _) = expect_fetch(update(&mut state, Action::ItemConfirmed("Nim".to_string())));
    assert_eq!(state.output_scroll, 0);
    update(&mut state, Action::FetchSucceeded(token, "x".to_string()));

    update(&mut state, Action::ScrollOutputDown(6));
    assert_eq!(state.output_scroll, 6);
    update(&mut state, Action::ItemRemoved("Node".to_string()));
    // "\n\n##### Nim\n\nx" has five lines
    assert_eq!(state.output_scroll, 4);
}

#[test]
fn test_random_select_remove_never_duplicates() {
    let names = ["Node", "Python", "Nim"];
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut state = loaded_state();
    let mut in_flight = Vec::new();

    for _ in 0..500 {
        match rng.gen_range(0..4) {
            0 => {
                let name = names[rng.gen_range(0..names.len())];
                if let Some(Command::FetchTemplate { token, .. }) =
                    update(&mut state, Action::ItemConfirmed(name.to_string()))
                {
                    in_flight.push(token);
                }
            }
            1 => {
                let name = names[rng.gen_range(0..names.len())];
                update(&mut state, Action::ItemRemoved(name.to_string()));
            }
            _ if !in_flight.is_empty() => {
                let token = in_flight.swap_remove(rng.gen_range(0..in_flight.len()));
                update(&mut state, Action::FetchSucceeded(token, "body".to_string()));
            }
            _ => {}
        }

        let mut seen: Vec<&str> = state.selections.names().collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);

        for candidate in state.candidates() {
            assert!(!state.selections.contains(&candidate.name));
        }
    }
}
