use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, Panel, StatusMessage},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::CopySelected => {
            let page = state.page();
            match page.card(state.selected_card) {
                Some(card) => {
                    // Only the focused pane highlights its card.
                    state.focused_panel = Panel::Content;
                    UpdateResult::Handled(Some(Command::CopyToClipboard(
                        card.command.to_string(),
                    )))
                }
                None => {
                    state.status = Some(StatusMessage::warning("Nothing to copy"));
                    UpdateResult::Handled(None)
                }
            }
        }
        Action::CopyFinished(text, copied) => {
            state.status = Some(if *copied {
                StatusMessage::info(format!("Copied: {text}"))
            } else {
                StatusMessage::warning("Clipboard unavailable")
            });
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::StatusSeverity;

    #[test]
    fn test_copy_finished_sets_status() {
        let mut state = AppState::default();
        update(
            &mut state,
            &Action::CopyFinished("git status".to_string(), true),
        );
        let status = state.status.clone().unwrap();
        assert_eq!(status.message, "Copied: git status");
        assert_eq!(status.severity, StatusSeverity::Info);

        update(
            &mut state,
            &Action::CopyFinished("git status".to_string(), false),
        );
        let status = state.status.unwrap();
        assert_eq!(status.message, "Clipboard unavailable");
        assert_eq!(status.severity, StatusSeverity::Warning);
    }

    #[test]
    fn test_copy_from_sidebar_focuses_the_copied_card() {
        let mut state = AppState::default();
        state.selected_card = 2;
        assert_eq!(state.focused_panel, Panel::Sidebar);

        let result = update(&mut state, &Action::CopySelected);
        let expected = state.page().card(2).map(|c| c.command.to_string());
        let UpdateResult::Handled(Some(Command::CopyToClipboard(text))) = result else {
            panic!("expected a copy command");
        };
        assert_eq!(Some(text), expected);
        assert_eq!(state.focused_panel, Panel::Content);
    }

    #[test]
    fn test_copy_selected_uses_search_results() {
        let mut state = AppState::default().with_query("stash");
        let result = update(&mut state, &Action::CopySelected);
        let UpdateResult::Handled(Some(Command::CopyToClipboard(text))) = result else {
            panic!("expected a copy command");
        };
        assert!(text.contains("stash"));
    }
}
