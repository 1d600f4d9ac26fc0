use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, Panel},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterSearchMode => {
            state.mode = AppMode::Search;
            UpdateResult::Handled(None)
        }
        Action::ExitSearchMode => {
            state.mode = AppMode::Normal;
            if state.search.is_active() {
                state.focused_panel = Panel::Content;
            }
            UpdateResult::Handled(None)
        }
        Action::ClearSearch => {
            if state.search.clear() {
                state.selected_card = 0;
            }
            if state.mode == AppMode::Search {
                state.mode = AppMode::Normal;
            }
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if state.mode == AppMode::Search && state.search.input(*key) {
                state.selected_card = 0;
            }
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
