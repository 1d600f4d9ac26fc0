use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
};

/// Dims everything behind an open modal.
pub fn dim_area(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(cell.style().add_modifier(Modifier::DIM));
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
        Constraint::Percentage(percent_y.min(100)),
        Constraint::Percentage(100u16.saturating_sub(percent_y) / 2),
    ])
    .areas(r);
    horizontal_center(percent_x, middle)
}

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Length(r.height.saturating_sub(height) / 2),
        Constraint::Length(height.min(r.height)),
        Constraint::Min(0),
    ])
    .areas(r);
    horizontal_center(percent_x, middle)
}

fn horizontal_center(percent_x: u16, r: Rect) -> Rect {
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Percentage(100u16.saturating_sub(percent_x) / 2),
    ])
    .areas(r);
    center
}

pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow = Rect {
        x: area.x + 1,
        y: area.y + 1,
        ..area
    }
    .intersection(terminal_area);

    for y in shadow.top()..shadow.bottom() {
        for x in shadow.left()..shadow.right() {
            let cell = &mut buf[(x, y)];
            cell.set_style(Style::default().bg(Color::Black));
            cell.set_symbol(" ");
        }
    }
}
