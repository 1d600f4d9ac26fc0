use crate::app::state::SearchState;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

pub struct SearchBar<'a, 'b> {
    pub search: &'a SearchState<'b>,
    pub editing: bool,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let (border, title_style) = if self.editing {
            (theme.border_focus, theme.card_title)
        } else {
            (theme.border, theme.dimmed)
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("Search commands:", title_style),
                Span::raw(" "),
            ]))
            .title_bottom(if self.editing {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled("Enter", theme.footer_segment_key),
                    Span::raw(": results "),
                    Span::styled("Esc", theme.footer_segment_key),
                    Span::raw(": clear "),
                ])
            } else {
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled("/", theme.footer_segment_key),
                    Span::raw(": search "),
                ])
            })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if self.editing {
            let mut text_area = self.search.text_area.clone();
            text_area.set_cursor_style(theme.description.add_modifier(Modifier::REVERSED));
            text_area.set_style(theme.description);
            text_area.set_placeholder_style(theme.dimmed);
            Widget::render(&text_area, inner, buf);
        } else if self.search.is_active() {
            buf.set_line(
                inner.x,
                inner.y,
                &Line::from(Span::styled(self.search.query.as_str(), theme.description)),
                inner.width,
            );
        } else {
            buf.set_line(
                inner.x,
                inner.y,
                &Line::from(Span::styled(
                    self.search.text_area.placeholder_text(),
                    theme.dimmed,
                )),
                inner.width,
            );
        }
    }
}
