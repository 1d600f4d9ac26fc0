use crate::app::state::{AppMode, AppState, Panel};
use crate::components::content::ContentPane;
use crate::components::detail::DetailPane;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::modals::{helpers::dim_area, HelpModal, ThemeSelectionModal};
use crate::components::search_bar::SearchBar;
use crate::components::sidebar::Sidebar;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 36;
const SEARCH_HEIGHT: u16 = 3;
const DETAIL_HEIGHT: u16 = 7;
/// Right column height below which the detail pane is dropped.
const DETAIL_MIN_COLUMN_HEIGHT: u16 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub sidebar: Rect,
    pub search: Rect,
    pub content: Rect,
    pub detail: Option<Rect>,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(area);

    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 3);
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).areas(body);

    let detail_height = if main.height >= DETAIL_MIN_COLUMN_HEIGHT {
        DETAIL_HEIGHT
    } else {
        0
    };
    let [search, content, detail] = Layout::vertical([
        Constraint::Length(SEARCH_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(detail_height),
    ])
    .areas(main);

    AppLayout {
        header,
        sidebar,
        search,
        content,
        detail: (detail_height > 0).then_some(detail),
        footer,
    }
}

pub fn draw(f: &mut Frame, app_state: &AppState) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }
    let theme = &app_state.theme;
    let layout = get_layout(area);
    let page = app_state.page();

    if !layout.header.is_empty() {
        f.render_widget(
            Header {
                section: app_state.active_section(),
                theme,
            },
            layout.header,
        );
    }

    if !layout.sidebar.is_empty() {
        f.render_widget(
            Sidebar {
                state: app_state,
                theme,
            },
            layout.sidebar,
        );
    }

    if !layout.search.is_empty() {
        f.render_widget(
            SearchBar {
                search: &app_state.search,
                editing: app_state.mode == AppMode::Search,
                theme,
            },
            layout.search,
        );
    }

    if !layout.content.is_empty() {
        f.render_widget(
            ContentPane {
                page: &page,
                selected: app_state.selected_card,
                focused: app_state.focused_panel == Panel::Content,
                theme,
            },
            layout.content,
        );
    }

    if let Some(detail) = layout.detail {
        f.render_widget(
            DetailPane {
                card: page.card(app_state.selected_card),
                theme,
            },
            detail,
        );
    }

    if !layout.footer.is_empty() {
        f.render_widget(
            Footer {
                state: app_state,
                summary: &page.summary,
                theme,
            },
            layout.footer,
        );
    }

    // --- Modals ---
    match app_state.mode {
        AppMode::Help => {
            dim_area(f.buffer_mut(), area);
            f.render_widget(HelpModal { theme }, area);
        }
        AppMode::ThemeSelection => {
            if let Some(selection) = &app_state.theme_selection {
                dim_area(f.buffer_mut(), area);
                f.render_widget(
                    ThemeSelectionModal {
                        theme,
                        state: selection,
                    },
                    area,
                );
            }
        }
        AppMode::Normal | AppMode::Search => {}
    }
}
