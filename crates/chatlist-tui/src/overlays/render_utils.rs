use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Calculates the area for an overlay, centered within `area`.
///
/// The overlay never exceeds `area`; it keeps a 2-column margin on each
/// side when the terminal is narrow.
pub fn calculate_overlay_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height);

    let overlay_x = area.x + (area.width.saturating_sub(width)) / 2;
    let overlay_y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(overlay_x, overlay_y, width, height)
}

/// Renders the base container for an overlay (clears background, draws border and title).
pub fn render_overlay_container(frame: &mut Frame, area: Rect, title: &str, border_color: Color) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {title} "))
        .title_style(
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, area);
}

/// Area inside a bordered container.
pub fn inner_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}

/// Helper struct for keyboard hints.
pub struct InputHint<'a> {
    pub key: &'a str,
    pub action: &'a str,
}

impl<'a> InputHint<'a> {
    pub fn new(key: &'a str, action: &'a str) -> Self {
        Self { key, action }
    }
}

/// Builds a line of keyboard hints: `key action • key action`.
pub fn hints_line<'a>(hints: &[InputHint<'a>], highlight_color: Color) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(hint.key, Style::default().fg(highlight_color)));
        spans.push(Span::styled(
            format!(" {}", hint.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

/// Renders a line of keyboard hints on the last row of `area`.
pub fn render_hints(frame: &mut Frame, area: Rect, hints: &[InputHint], highlight_color: Color) {
    if area.height == 0 {
        return;
    }
    let hints_y = area.y + area.height - 1;
    let hints_area = Rect::new(area.x, hints_y, area.width, 1);

    let para = Paragraph::new(hints_line(hints, highlight_color)).alignment(Alignment::Center);
    frame.render_widget(para, hints_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_area_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let overlay = calculate_overlay_area(area, 50, 10);
        assert_eq!(overlay, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_overlay_area_respects_offset_and_margin() {
        let area = Rect::new(10, 5, 30, 6);
        let overlay = calculate_overlay_area(area, 50, 10);
        assert_eq!(overlay.width, 26);
        assert_eq!(overlay.height, 6);
        assert_eq!(overlay.x, 12);
        assert_eq!(overlay.y, 5);
    }

    #[test]
    fn test_hints_line_text() {
        let line = hints_line(
            &[InputHint::new("Enter", "open"), InputHint::new("q", "quit")],
            Color::Cyan,
        );
        assert_eq!(line.to_string(), "Enter open • q quit");
    }
}
