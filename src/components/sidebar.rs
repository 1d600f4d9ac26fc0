use crate::app::state::{AppState, Panel};
use crate::domain::models::Section;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

// Rows inside the sidebar border.
pub const TAB_ROW: u16 = 0;
pub const HEADING_ROW: u16 = 1;
pub const LIST_START_ROW: u16 = 2;

const TABS: [(Section, &str); 2] = [
    (Section::Commands, " Commands "),
    (Section::Problems, " Problems "),
];

pub fn block(focused: bool, theme: &Theme) -> Block<'static> {
    let (border, title) = if focused {
        (theme.border_focus, theme.card_title)
    } else {
        (theme.border, theme.dimmed)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled("NAVIGATION", title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// Section tab under `column` on the tab row.
pub fn tab_at(inner: Rect, column: u16) -> Option<Section> {
    let mut x = inner.x;
    for (section, label) in TABS {
        let width = label.len() as u16;
        if column >= x && column < x + width {
            return Some(section);
        }
        x += width + 1;
    }
    None
}

/// First visible topic, keeping `selected` on screen.
pub fn list_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return 0;
    }
    selected.saturating_sub(visible - 1)
}

/// Topic index drawn on terminal row `row`, if any.
pub fn topic_at(state: &AppState, inner: Rect, row: u16) -> Option<usize> {
    let list_top = inner.y + LIST_START_ROW;
    if row < list_top || row >= inner.bottom() {
        return None;
    }
    let visible = inner.height.saturating_sub(LIST_START_ROW) as usize;
    let offset = list_offset(state.navigation.selected_index(&state.catalogs), visible);
    let index = offset + (row - list_top) as usize;
    (index < state.catalogs.for_section(state.active_section()).len()).then_some(index)
}

pub struct Sidebar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;
        let block = block(state.focused_panel == Panel::Sidebar, theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let active = state.active_section();
        let mut tabs = Vec::new();
        for (i, (section, label)) in TABS.iter().enumerate() {
            if i > 0 {
                tabs.push(Span::raw(" "));
            }
            let style = if *section == active {
                theme.tab_active
            } else {
                theme.tab_inactive
            };
            tabs.push(Span::styled(*label, style));
        }
        buf.set_line(inner.x, inner.y + TAB_ROW, &Line::from(tabs), inner.width);

        if inner.height <= HEADING_ROW {
            return;
        }
        buf.set_line(
            inner.x,
            inner.y + HEADING_ROW,
            &Line::from(Span::styled(active.label(), theme.sidebar_heading)),
            inner.width,
        );

        let catalog = state.catalogs.for_section(active);
        let selected = state.navigation.selected_index(&state.catalogs);
        let visible = inner.height.saturating_sub(LIST_START_ROW) as usize;
        let offset = list_offset(selected, visible);
        let searching = state.search.is_active();

        for (row, (i, topic)) in catalog
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            // The highlight is muted while search results replace the topic page.
            let style = match (i == selected, searching) {
                (true, false) => theme.list_selected,
                (true, true) => theme.list_active,
                (false, _) => theme.list_item,
            };
            let marker = if i == selected { "\u{25b8} " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, style),
                Span::styled(topic.name, style),
            ]);
            let y = inner.y + LIST_START_ROW + row as u16;
            buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_hit_testing() {
        let inner = Rect::new(1, 4, 30, 20);
        assert_eq!(tab_at(inner, 1), Some(Section::Commands));
        assert_eq!(tab_at(inner, 10), Some(Section::Commands));
        assert_eq!(tab_at(inner, 11), None);
        assert_eq!(tab_at(inner, 12), Some(Section::Problems));
        assert_eq!(tab_at(inner, 25), None);
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(0, 5), 0);
        assert_eq!(list_offset(4, 5), 0);
        assert_eq!(list_offset(7, 5), 3);
        assert_eq!(list_offset(7, 0), 0);
    }

    #[test]
    fn test_topic_at_maps_rows() {
        let state = AppState::default();
        let inner = Rect::new(1, 4, 30, 12);
        assert_eq!(topic_at(&state, inner, 5), None);
        assert_eq!(topic_at(&state, inner, 6), Some(0));
        assert_eq!(topic_at(&state, inner, 8), Some(2));
        assert_eq!(topic_at(&state, inner, 16), None);
    }
}
