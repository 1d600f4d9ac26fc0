use crate::app::{
    action::Action,
    state::{AppMode, AppState, Panel},
    ui,
};
use crate::components::{content, sidebar};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key, app_state),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app_state.mode {
        AppMode::Search => match key.code {
            KeyCode::Esc => Some(Action::ClearSearch),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Down => Some(Action::ExitSearchMode),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::ThemeSelection => match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::CancelMode),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
            KeyCode::Enter => Some(Action::ConfirmThemeSelection),
            _ => None,
        },
        AppMode::Normal => app_state
            .keymap
            .get_action(key, app_state.focused_panel),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, terminal_size: Size) -> Option<Action> {
    match app_state.mode {
        // Any click closes an overlay.
        AppMode::Help => {
            matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Action::ToggleHelp)
        }
        AppMode::ThemeSelection => match mouse.kind {
            MouseEventKind::ScrollDown => Some(Action::SelectThemeNext),
            MouseEventKind::ScrollUp => Some(Action::SelectThemePrev),
            _ => None,
        },
        AppMode::Normal | AppMode::Search => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            let layout = ui::get_layout(area);
            let position = Position::new(mouse.column, mouse.row);

            match mouse.kind {
                MouseEventKind::ScrollDown => {
                    if layout.sidebar.contains(position) {
                        Some(Action::SelectNextTopic)
                    } else if layout.content.contains(position) {
                        Some(Action::SelectCardBelow)
                    } else {
                        None
                    }
                }
                MouseEventKind::ScrollUp => {
                    if layout.sidebar.contains(position) {
                        Some(Action::SelectPrevTopic)
                    } else if layout.content.contains(position) {
                        Some(Action::SelectCardAbove)
                    } else {
                        None
                    }
                }
                MouseEventKind::Down(MouseButton::Left) => {
                    if layout.search.contains(position) {
                        return Some(Action::EnterSearchMode);
                    }
                    if app_state.mode == AppMode::Search {
                        return Some(Action::ExitSearchMode);
                    }
                    if layout.sidebar.contains(position) {
                        return click_sidebar(app_state, layout.sidebar, position);
                    }
                    if layout.content.contains(position) {
                        return click_content(app_state, layout.content, position);
                    }
                    None
                }
                _ => None,
            }
        }
    }
}

fn click_sidebar(app_state: &AppState<'_>, area: Rect, position: Position) -> Option<Action> {
    let focused = app_state.focused_panel == Panel::Sidebar;
    let inner = sidebar::block(focused, &app_state.theme).inner(area);
    if !inner.contains(position) {
        return Some(Action::FocusSidebar);
    }
    if position.y == inner.y + sidebar::TAB_ROW {
        return Some(
            sidebar::tab_at(inner, position.x)
                .map_or(Action::FocusSidebar, Action::SelectSection),
        );
    }
    Some(
        sidebar::topic_at(app_state, inner, position.y)
            .map_or(Action::FocusSidebar, Action::SelectTopic),
    )
}

fn click_content(app_state: &AppState<'_>, area: Rect, position: Position) -> Option<Action> {
    let page = app_state.page();
    let focused = app_state.focused_panel == Panel::Content;
    let inner = content::block(&page, focused, &app_state.theme).inner(area);
    Some(
        content::card_at(
            inner,
            &page,
            app_state.selected_card,
            position.x,
            position.y,
        )
        .map_or(Action::FocusContent, Action::SelectCard),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Section;
    use crossterm::event::KeyEventState;

    const SIZE: Size = Size {
        width: 120,
        height: 40,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_slash_enters_search() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('/')), &state, SIZE),
            Some(Action::EnterSearchMode)
        );
    }

    #[test]
    fn test_search_mode_routes_typing_to_text_area() {
        let state = AppState {
            mode: AppMode::Search,
            ..Default::default()
        };
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(
            map_event_to_action(Event::Key(q), &state, SIZE),
            Some(Action::TextAreaInput(q))
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClearSearch)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::ExitSearchMode)
        );
    }

    #[test]
    fn test_esc_in_normal_mode_clears_search() {
        let state = AppState::default().with_query("stash");
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ClearSearch)
        );
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        for mode in [
            AppMode::Normal,
            AppMode::Search,
            AppMode::Help,
            AppMode::ThemeSelection,
        ] {
            let state = AppState {
                mode,
                ..Default::default()
            };
            assert_eq!(
                map_event_to_action(ctrl_c.clone(), &state, SIZE),
                Some(Action::Quit)
            );
        }
    }

    #[test]
    fn test_key_release_is_ignored() {
        let state = AppState::default();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event_to_action(release, &state, SIZE), None);
    }

    #[test]
    fn test_click_tabs_and_topics() {
        let state = AppState::default();
        // Sidebar inner area starts at (1, 3) on a 120x40 screen.
        assert_eq!(
            map_event_to_action(click(14, 3), &state, SIZE),
            Some(Action::SelectSection(Section::Problems))
        );
        assert_eq!(
            map_event_to_action(click(5, 7), &state, SIZE),
            Some(Action::SelectTopic(2))
        );
    }

    #[test]
    fn test_click_card_and_search_bar() {
        let state = AppState::default();
        // Content inner area starts at (37, 6); cards are 27 wide.
        assert_eq!(
            map_event_to_action(click(70, 8), &state, SIZE),
            Some(Action::SelectCard(1))
        );
        assert_eq!(
            map_event_to_action(click(50, 3), &state, SIZE),
            Some(Action::EnterSearchMode)
        );
    }

    #[test]
    fn test_scroll_follows_pointer() {
        let state = AppState::default();
        let scroll = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(
            map_event_to_action(scroll(5, 10), &state, SIZE),
            Some(Action::SelectNextTopic)
        );
        assert_eq!(
            map_event_to_action(scroll(60, 10), &state, SIZE),
            Some(Action::SelectCardBelow)
        );
    }
}
