use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, Panel};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup> {
    match state.mode {
        AppMode::Normal => {
            let move_hint = match state.focused_panel {
                Panel::Sidebar => FooterItem::new("j/k", "topic"),
                Panel::Content => FooterItem::new("hjkl", "card"),
            };
            vec![
                FooterGroup {
                    name: "NAV",
                    items: vec![
                        move_hint,
                        FooterItem::new("Tab", "focus"),
                        FooterItem::new("s", "section"),
                    ],
                },
                FooterGroup {
                    name: "FIND",
                    items: vec![
                        FooterItem::new("/", "search"),
                        FooterItem::new("Esc", "clear").highlighted(state.search.is_active()),
                        FooterItem::new("y", "copy"),
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![
                        FooterItem::new("T", "theme"),
                        FooterItem::new("?", "help"),
                        FooterItem::new("q", "quit"),
                    ],
                },
            ]
        }
        AppMode::Search => vec![FooterGroup {
            name: "SEARCH",
            items: vec![
                FooterItem::new("Enter", "results"),
                FooterItem::new("Esc", "clear"),
                FooterItem::new("^C", "quit"),
            ],
        }],
        AppMode::Help => vec![FooterGroup {
            name: "HELP",
            items: vec![FooterItem::new("Esc", "close")],
        }],
        AppMode::ThemeSelection => vec![FooterGroup {
            name: "THEME",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("Enter", "apply"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_hint_highlights_while_searching() {
        let state = AppState::default().with_query("stash");
        let groups = get_groups(&state);
        let clear = groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|i| i.desc == "clear")
            .unwrap();
        assert!(clear.highlighted);
    }

    #[test]
    fn test_search_mode_hints() {
        let state = AppState {
            mode: AppMode::Search,
            ..Default::default()
        };
        let groups = get_groups(&state);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "SEARCH");
    }
}
