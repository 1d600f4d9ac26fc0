mod groups;
mod types;

use crate::app::state::{AppState, StatusSeverity};
use crate::theme::Theme;
pub use types::{FooterGroup, FooterItem};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Summary line on top, status and key hints below.
pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub summary: &'a str,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;
        if area.is_empty() {
            return;
        }

        let mut hints_area = area;
        if area.height > 1 {
            Paragraph::new(Line::from(Span::styled(
                format!(" {} ", self.summary),
                theme.footer_summary,
            )))
            .style(theme.footer)
            .render(Rect { height: 1, ..area }, buf);
            hints_area = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
        }

        let status_span = match &state.status {
            Some(status) => {
                let style = match status.severity {
                    StatusSeverity::Info => theme.status_info,
                    StatusSeverity::Warning => theme.status_warn,
                };
                Span::styled(format!("  {}  ", status.message), style)
            }
            None => Span::styled("  READY  ", theme.status_ready),
        };

        let mut spans = vec![status_span, Span::raw(" ")];
        let available_width = hints_area.width.saturating_sub(2) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        'groups: for group in groups::get_groups(state) {
            if hints_area.width > 100 {
                let label = Span::styled(format!("{}: ", group.name), theme.dimmed);
                if current_width + label.width() < available_width {
                    current_width += label.width();
                    spans.push(label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = key_str.len() + desc_str.len() + 1;
                if current_width + item_width > available_width {
                    break 'groups;
                }

                let (key_style, val_style) = if item.highlighted {
                    (
                        theme.tab_active,
                        theme.tab_active.add_modifier(Modifier::DIM),
                    )
                } else {
                    (theme.footer_segment_key, theme.footer_segment_val)
                };
                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(hints_area, buf);
    }
}
