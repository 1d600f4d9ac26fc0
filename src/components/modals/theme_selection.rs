use crate::app::state::ThemeSelectionState;
use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow};

pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.state.themes.len() as u16 + 2;
        let modal_area = centered_rect_fixed_height(40, height, area);
        if modal_area.is_empty() {
            return;
        }
        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SELECT THEME ", self.theme.tab_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let items: Vec<ListItem> = self
            .state
            .themes
            .iter()
            .enumerate()
            .map(|(i, palette)| {
                let selected = i == self.state.selected_index;
                let style = if selected {
                    self.theme.list_selected
                } else {
                    self.theme.list_item
                };
                let prefix = if selected { "> " } else { "  " };
                let mut spans = vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<20}", palette.label()), style),
                ];
                spans.extend(swatch(*palette));
                ListItem::new(Line::from(spans))
            })
            .collect();

        List::new(items).block(block).render(modal_area, buf);
    }
}

/// A few blocks in the palette's own accent colors.
fn swatch(palette: PaletteType) -> Vec<Span<'static>> {
    let preview = Theme::from_palette_type(palette);
    [
        preview.border_focus,
        preview.card_title,
        preview.command,
        preview.sidebar_heading,
    ]
    .into_iter()
    .map(|style| Span::styled("\u{2588}\u{2588}", style.remove_modifier(Modifier::all())))
    .collect()
}
