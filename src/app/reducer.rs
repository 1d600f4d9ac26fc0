use super::{action::Action, action::UpdateResult, command::Command, features, state::AppState};

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    let handlers: [fn(&mut AppState, &Action) -> UpdateResult; 4] = [
        features::navigation::update,
        features::search::update,
        features::clipboard::update,
        features::ui::update,
    ];
    for handler in handlers {
        if let UpdateResult::Handled(command) = handler(state, &action) {
            return command;
        }
    }

    match action {
        Action::Tick => {
            let now = chrono::Local::now();
            if state.status.as_ref().is_some_and(|s| s.is_expired(now)) {
                state.status = None;
            }
        }
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Resize(..) => {}
        other => tracing::trace!(action = ?other, "unhandled action"),
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{AppMode, Panel, StatusMessage};
    use crate::domain::models::Section;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(
                state,
                Action::TextAreaInput(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
        }
    }

    #[test]
    fn test_quit() {
        let mut state = AppState::default();
        assert_eq!(update(&mut state, Action::Quit), None);
        assert!(state.should_quit);
    }

    #[test]
    fn test_section_round_trip_keeps_selection() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectTopic(3));
        let category = state.navigation.selected_category;

        update(&mut state, Action::ToggleSection);
        assert_eq!(state.active_section(), Section::Problems);
        update(&mut state, Action::SelectNextTopic);
        update(&mut state, Action::ToggleSection);

        assert_eq!(state.active_section(), Section::Commands);
        assert_eq!(state.navigation.selected_category, category);
        assert_eq!(
            state.navigation.selected_problem,
            "Undo last commit but keep changes"
        );
    }

    #[test]
    fn test_search_flow() {
        let mut state = AppState::default();
        update(&mut state, Action::EnterSearchMode);
        assert_eq!(state.mode, AppMode::Search);

        type_str(&mut state, "stash");
        assert_eq!(state.search.query, "stash");
        assert_eq!(state.page().card_count(), 9);

        update(&mut state, Action::ExitSearchMode);
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.focused_panel, Panel::Content);
        assert_eq!(state.search.query, "stash");

        update(&mut state, Action::ClearSearch);
        assert!(!state.page().searching);
    }

    #[test]
    fn test_typing_outside_search_mode_is_ignored() {
        let mut state = AppState::default();
        type_str(&mut state, "abc");
        assert_eq!(state.search.query, "");
    }

    #[test]
    fn test_card_cursor_resets_on_page_change() {
        let mut state = AppState::default();
        update(&mut state, Action::FocusContent);
        update(&mut state, Action::SelectNextCard);
        update(&mut state, Action::SelectCardBelow);
        assert_eq!(state.selected_card, 4);

        update(&mut state, Action::SelectNextTopic);
        assert_eq!(state.selected_card, 0);

        update(&mut state, Action::SelectCard(2));
        update(&mut state, Action::ToggleSection);
        assert_eq!(state.selected_card, 0);

        update(&mut state, Action::SelectCard(1));
        update(&mut state, Action::EnterSearchMode);
        type_str(&mut state, "g");
        assert_eq!(state.selected_card, 0);
    }

    #[test]
    fn test_copy_selected_emits_command() {
        let mut state = AppState::default();
        update(&mut state, Action::SelectCard(1));
        let command = update(&mut state, Action::CopySelected);
        let expected = state.page().card(1).map(|c| c.command.to_string());
        assert_eq!(command, expected.map(Command::CopyToClipboard));
    }

    #[test]
    fn test_copy_with_no_results_sets_warning() {
        let mut state = AppState::default().with_query("zzzz");
        assert_eq!(update(&mut state, Action::CopySelected), None);
        assert!(state.status.is_some());
    }

    #[test]
    fn test_tick_expires_status() {
        let mut state = AppState::default();
        let mut status = StatusMessage::info("Copied: git status");
        status.timestamp = status.timestamp - chrono::Duration::seconds(10);
        state.status = Some(status);

        update(&mut state, Action::Tick);
        assert_eq!(state.status, None);
    }
}
