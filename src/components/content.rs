use crate::app::view::{Content, EntryCard, PageView};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Border, command, two description lines and the example.
const CARD_HEIGHT: u16 = 6;
const DESCRIPTION_LINES: u16 = 2;

pub fn card_height(page: &PageView) -> u16 {
    if page.searching {
        CARD_HEIGHT + 1
    } else {
        CARD_HEIGHT
    }
}

pub fn block(page: &PageView, focused: bool, theme: &Theme) -> Block<'static> {
    let border = if focused {
        theme.border_focus
    } else {
        theme.border
    };
    let mut block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(page.title.clone(), theme.card_title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border);
    if page.searching {
        let count = page.card_count();
        let noun = if count == 1 { "match" } else { "matches" };
        block = block.title_bottom(
            Line::from(Span::styled(format!(" {count} {noun} "), theme.dimmed))
                .alignment(Alignment::Right),
        );
    }
    block
}

/// Screen rects of the cards that fit in `inner`, scrolled so that
/// `selected` is visible. Shared by rendering and mouse hit-testing.
pub fn card_rects(inner: Rect, page: &PageView, selected: usize) -> Vec<(usize, Rect)> {
    let count = page.card_count();
    if count == 0 || inner.width == 0 || inner.height == 0 {
        return Vec::new();
    }
    let columns = page.columns().max(1);
    let height = card_height(page);
    let visible_rows = (inner.height / height).max(1) as usize;
    let selected_row = selected.min(count - 1) / columns;
    let first_row = selected_row.saturating_sub(visible_rows - 1);

    let column_width = inner.width / columns as u16;
    let mut rects = Vec::new();
    for (screen_row, row) in (first_row..page.row_count()).take(visible_rows).enumerate() {
        for column in 0..columns {
            let index = row * columns + column;
            if index >= count {
                break;
            }
            let x = inner.x + column as u16 * column_width;
            let width = if column == columns - 1 {
                inner.right() - x
            } else {
                column_width
            };
            let rect = Rect::new(x, inner.y + screen_row as u16 * height, width, height)
                .intersection(inner);
            if !rect.is_empty() {
                rects.push((index, rect));
            }
        }
    }
    rects
}

pub fn card_at(inner: Rect, page: &PageView, selected: usize, column: u16, row: u16) -> Option<usize> {
    card_rects(inner, page, selected)
        .into_iter()
        .find(|(_, r)| column >= r.x && column < r.right() && row >= r.y && row < r.bottom())
        .map(|(index, _)| index)
}

pub struct ContentPane<'a> {
    pub page: &'a PageView,
    pub selected: usize,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for ContentPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = block(self.page, self.focused, self.theme);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        if let Content::NoResults { message } = &self.page.content {
            let y = inner.y + inner.height.saturating_sub(2) / 2;
            let text = vec![
                Line::from(Span::styled(format!(" {message} "), self.theme.no_results)),
                Line::from(Span::styled("Esc clears the search", self.theme.dimmed)),
            ];
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .render(Rect::new(inner.x, y, inner.width, inner.bottom() - y), buf);
            return;
        }

        let labels: Vec<Option<&str>> = match &self.page.content {
            Content::Options(options) => options.iter().map(|o| Some(o.label.as_str())).collect(),
            _ => Vec::new(),
        };

        for (index, rect) in card_rects(inner, self.page, self.selected) {
            let Some(card) = self.page.card(index) else {
                continue;
            };
            CardWidget {
                card,
                label: labels.get(index).copied().flatten(),
                selected: index == self.selected && self.focused,
                theme: self.theme,
            }
            .render(rect, buf);
        }
    }
}

struct CardWidget<'a> {
    card: &'a EntryCard,
    label: Option<&'a str>,
    selected: bool,
    theme: &'a Theme,
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.selected {
                theme.border_focus
            } else {
                theme.border
            });
        if let Some(label) = self.label {
            block = block.title(Line::from(vec![
                Span::raw(" "),
                Span::styled(label.to_string(), theme.card_title),
                Span::raw(" "),
            ]));
        }
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let command_style = if self.selected {
            theme.list_selected
        } else {
            theme.command
        };
        let mut y = inner.y;
        buf.set_line(
            inner.x,
            y,
            &Line::from(Span::styled(format!(" {} ", self.card.command), command_style)),
            inner.width,
        );
        y += 1;

        let description_height = DESCRIPTION_LINES.min(inner.bottom().saturating_sub(y));
        Paragraph::new(Span::styled(self.card.description, theme.description))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, y, inner.width, description_height), buf);
        y += description_height;

        if y < inner.bottom() {
            buf.set_line(
                inner.x,
                y,
                &Line::from(vec![
                    Span::styled("e.g. ", theme.dimmed),
                    Span::styled(self.card.example, theme.example),
                ]),
                inner.width,
            );
            y += 1;
        }

        if let Some(origin) = &self.card.origin {
            if y < inner.bottom() {
                buf.set_line(
                    inner.x,
                    y,
                    &Line::from(Span::styled(origin.clone(), theme.origin)),
                    inner.width,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppState;

    #[test]
    fn test_card_rects_lay_out_rows_of_three() {
        let page = AppState::default().page();
        let inner = Rect::new(0, 0, 90, 12);
        let rects = card_rects(inner, &page, 0);

        // Two rows of six-line cards fit.
        assert_eq!(rects.len(), 6);
        assert_eq!(rects[0], (0, Rect::new(0, 0, 30, 6)));
        assert_eq!(rects[2], (2, Rect::new(60, 0, 30, 6)));
        assert_eq!(rects[3], (3, Rect::new(0, 6, 30, 6)));
    }

    #[test]
    fn test_card_rects_scroll_to_selection() {
        let page = AppState::default().page();
        let inner = Rect::new(0, 0, 90, 12);
        let rects = card_rects(inner, &page, 7);
        assert_eq!(rects.first().map(|(i, _)| *i), Some(3));
        assert!(rects.iter().any(|(i, _)| *i == 7));
    }

    #[test]
    fn test_card_at() {
        let page = AppState::default().page();
        let inner = Rect::new(1, 1, 90, 12);
        assert_eq!(card_at(inner, &page, 0, 35, 3), Some(1));
        assert_eq!(card_at(inner, &page, 0, 0, 0), None);
    }

    #[test]
    fn test_no_cards_for_empty_results() {
        let page = AppState::default().with_query("zzzz").page();
        assert!(card_rects(Rect::new(0, 0, 80, 20), &page, 0).is_empty());
    }
}
