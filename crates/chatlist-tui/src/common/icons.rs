//! Icon glyphs.

use ratatui::style::Style;
use ratatui::text::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Plus,
    Delete,
    Active,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Plus => "+",
            Icon::Delete => "✕",
            Icon::Active => "▌",
        }
    }

    pub fn span(self, style: Style) -> Span<'static> {
        Span::styled(self.glyph(), style)
    }
}
