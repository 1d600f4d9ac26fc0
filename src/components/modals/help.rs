use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Browsing",
        &[
            (" s / 1 / 2", "Switch between Commands and Problems"),
            (" j / k", "Previous / next topic (sidebar)"),
            (" h j k l", "Move between cards (content)"),
            (" Tab", "Switch focus between sidebar and content"),
            (" Enter", "Open topic / copy card"),
        ],
    ),
    (
        "Searching",
        &[
            (" /", "Search the active section"),
            (" Enter", "Browse the results"),
            (" Esc", "Clear the search"),
        ],
    ),
    (
        "General",
        &[
            (" y", "Copy the highlighted command"),
            (" T", "Choose a theme"),
            (" ?", "Show this help"),
            (" q / Ctrl-C", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.is_empty() {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" HELP - KEYBINDINGS ", self.theme.tab_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus);

        let mut rows = Vec::new();
        for (i, (heading, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*heading, self.theme.sidebar_heading)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, self.theme.footer_segment_key)),
                    Cell::from(Span::styled(*desc, self.theme.list_item)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
