use crate::app::view::EntryCard;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// Untruncated view of the highlighted card.
pub struct DetailPane<'a> {
    pub card: Option<&'a EntryCard>,
    pub theme: &'a Theme,
}

impl Widget for DetailPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("DETAILS", theme.dimmed),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("y", theme.footer_segment_key),
                Span::raw(": copy command "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border);

        let lines = match self.card {
            Some(card) => {
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("$ ", theme.dimmed),
                        Span::styled(card.command, theme.command),
                    ]),
                    Line::from(Span::styled(card.description, theme.description)),
                    Line::from(vec![
                        Span::styled("Example: ", theme.dimmed),
                        Span::styled(card.example, theme.example),
                    ]),
                ];
                if let Some(origin) = &card.origin {
                    lines.push(Line::from(Span::styled(origin.clone(), theme.origin)));
                }
                lines
            }
            None => vec![Line::from(Span::styled("Nothing selected", theme.dimmed))],
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
