//! Loading placeholder for the thread list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

/// Number of placeholder bars below the action square.
pub const SKELETON_BARS: u16 = 5;

const SKELETON_GLYPH: &str = "░";
const SQUARE_WIDTH: u16 = 4;
const SQUARE_HEIGHT: u16 = 2;

/// Renders the static placeholder: a small square at the top right (where
/// the action button sits) followed by evenly spaced bars.
pub fn render_skeleton(frame: &mut Frame, area: Rect) {
    let padded = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    if padded.width == 0 || padded.height == 0 {
        return;
    }

    let style = Style::default().fg(Color::DarkGray);
    let square_width = SQUARE_WIDTH.min(padded.width);
    let square_height = SQUARE_HEIGHT.min(padded.height);
    let square = Rect::new(
        padded.x + padded.width - square_width,
        padded.y,
        square_width,
        square_height,
    );
    let square_text = vec![SKELETON_GLYPH.repeat(square_width as usize); square_height as usize]
        .join("\n");
    frame.render_widget(Paragraph::new(square_text).style(style), square);

    let bar = SKELETON_GLYPH.repeat(padded.width as usize);
    for i in 0..SKELETON_BARS {
        // One blank row between bars.
        let y = padded.y + square_height + 1 + i * 2;
        if y >= padded.y + padded.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(bar.as_str()).style(style),
            Rect::new(padded.x, y, padded.width, 1),
        );
    }
}
