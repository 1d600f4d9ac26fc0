use crate::domain::models::Section;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub const TITLE: &str = "Git Commands Documentation";
pub const SUBTITLE: &str = "Complete reference guide for Git commands with copy functionality";

pub struct Header<'a> {
    pub section: Section,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let section = format!(" {} ", self.section.label());
        let used = " GIT ".len() + TITLE.len() + 2 + section.len();
        let padding = (area.width as usize).saturating_sub(used);

        let mut lines = vec![Line::from(vec![
            Span::styled(" GIT ", theme.header_logo),
            Span::styled(format!(" {TITLE} "), theme.header_title),
            Span::styled(" ".repeat(padding), theme.header),
            Span::styled(section, theme.tab_active),
        ])];
        if area.height > 1 {
            lines.push(Line::from(Span::styled(
                format!(" {SUBTITLE} "),
                theme.header_subtitle,
            )));
        }

        Paragraph::new(lines).style(theme.header).render(area, buf);
    }
}
