use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Type to search...";

#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl Clone for AppTextArea<'_> {
    fn clone(&self) -> Self {
        let mut area = TextArea::new(self.0.lines().to_vec());
        let (row, col) = self.0.cursor();
        area.move_cursor(CursorMove::Jump(row as u16, col as u16));
        area.set_placeholder_text(self.0.placeholder_text());
        area.set_cursor_line_style(Style::default());
        Self(area)
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppTextArea")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for AppTextArea<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

/// The search field. `query` mirrors the text area's single line.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState<'a> {
    pub text_area: AppTextArea<'a>,
    pub query: String,
}

impl Default for SearchState<'_> {
    fn default() -> Self {
        Self::with_query("")
    }
}

impl SearchState<'_> {
    #[must_use]
    pub fn with_query(query: &str) -> Self {
        let mut text_area = TextArea::default();
        text_area.set_placeholder_text(PLACEHOLDER);
        text_area.set_cursor_line_style(Style::default());
        text_area.insert_str(query);
        Self {
            text_area: AppTextArea(text_area),
            query: query.to_string(),
        }
    }

    /// Feeds a key to the text area. Returns `true` when the query changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(key) {
            return false;
        }
        self.text_area.input(key);
        let query = self.text_area.lines().concat();
        if query == self.query {
            return false;
        }
        self.query = query;
        true
    }

    /// Returns `true` when there was a query to clear.
    pub fn clear(&mut self) -> bool {
        let had_query = !self.query.is_empty();
        *self = Self::default();
        had_query
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }
}

// The field is a single line; these keys would split it.
fn inserts_newline(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m' | 'j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
