use crate::app::{
    action::{Action, UpdateResult},
    state::{AppState, Panel},
};

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::SelectSection(section) => {
            if state.navigation.active_section != *section {
                state.navigation.select_section(*section);
                state.selected_card = 0;
            }
            UpdateResult::Handled(None)
        }
        Action::ToggleSection => {
            let other = state.navigation.active_section.other();
            state.navigation.select_section(other);
            state.selected_card = 0;
            UpdateResult::Handled(None)
        }
        Action::SelectTopic(idx) => {
            let before = state.navigation.selected_key();
            if state.navigation.select_topic_index(&state.catalogs, *idx)
                && state.navigation.selected_key() != before
            {
                state.selected_card = 0;
            }
            state.focused_panel = Panel::Sidebar;
            UpdateResult::Handled(None)
        }
        Action::SelectNextTopic => {
            state.navigation.select_next_topic(&state.catalogs);
            state.selected_card = 0;
            UpdateResult::Handled(None)
        }
        Action::SelectPrevTopic => {
            state.navigation.select_prev_topic(&state.catalogs);
            state.selected_card = 0;
            UpdateResult::Handled(None)
        }
        Action::SelectCard(idx) => {
            if *idx < state.page().card_count() {
                state.selected_card = *idx;
                state.focused_panel = Panel::Content;
            }
            UpdateResult::Handled(None)
        }
        Action::SelectNextCard => {
            let count = state.page().card_count();
            if state.selected_card + 1 < count {
                state.selected_card += 1;
            }
            UpdateResult::Handled(None)
        }
        Action::SelectPrevCard => {
            state.selected_card = state.selected_card.saturating_sub(1);
            UpdateResult::Handled(None)
        }
        Action::SelectCardBelow => {
            let page = state.page();
            state.selected_card = card_below(state.selected_card, page.columns(), page.card_count());
            UpdateResult::Handled(None)
        }
        Action::SelectCardAbove => {
            let columns = state.page().columns();
            if state.selected_card >= columns {
                state.selected_card -= columns;
            }
            UpdateResult::Handled(None)
        }
        Action::FocusSidebar => {
            state.focused_panel = Panel::Sidebar;
            UpdateResult::Handled(None)
        }
        Action::FocusContent => {
            state.focused_panel = Panel::Content;
            UpdateResult::Handled(None)
        }
        Action::ToggleFocus => {
            state.focused_panel = match state.focused_panel {
                Panel::Sidebar => Panel::Content,
                Panel::Content => Panel::Sidebar,
            };
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Moves one row down. From a column the short last row lacks, lands on its
/// last card instead of staying put.
fn card_below(current: usize, columns: usize, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let target = current + columns;
    if target < count {
        target
    } else if current / columns < (count - 1) / columns {
        count - 1
    } else {
        current
    }
}
