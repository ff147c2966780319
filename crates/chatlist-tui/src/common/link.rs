//! Link rendering.
//!
//! A link is a row the user can activate. The widget never interprets the
//! target: it hands the target to a [`LinkComponent`] for rendering and
//! returns it to the host when the row is activated.

use std::fmt;
use std::marker::PhantomData;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Anything that can render a navigable link for an opaque target.
pub trait LinkComponent {
    type Target: Clone + fmt::Debug;

    /// Renders `children` as a link pointing at `target`.
    fn render_link<'a>(&self, target: &Self::Target, children: Vec<Span<'a>>) -> Line<'a>;
}

/// Renders the children unchanged.
#[derive(Debug, Clone, Copy)]
pub struct PlainLink<T>(PhantomData<T>);

impl<T> PlainLink<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for PlainLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug> LinkComponent for PlainLink<T> {
    type Target = T;

    fn render_link<'a>(&self, _target: &T, children: Vec<Span<'a>>) -> Line<'a> {
        Line::from(children)
    }
}

/// Appends the target (dimmed) after the children, e.g. `Chat from  → /chat/42`.
#[derive(Debug, Clone, Copy)]
pub struct TargetHintLink<T>(PhantomData<T>);

impl<T> TargetHintLink<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for TargetHintLink<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + fmt::Debug + fmt::Display> LinkComponent for TargetHintLink<T> {
    type Target = T;

    fn render_link<'a>(&self, target: &T, mut children: Vec<Span<'a>>) -> Line<'a> {
        children.push(Span::styled(
            format!("  → {target}"),
            Style::default().fg(Color::DarkGray),
        ));
        Line::from(children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_link_keeps_children() {
        let link = PlainLink::<String>::new();
        let line = link.render_link(&"/chat/1".to_string(), vec![Span::raw("Roadmap")]);
        assert_eq!(line.to_string(), "Roadmap");
    }

    #[test]
    fn test_target_hint_link_appends_target() {
        let link = TargetHintLink::<String>::new();
        let line = link.render_link(&"/chat/1".to_string(), vec![Span::raw("Roadmap")]);
        assert_eq!(line.to_string(), "Roadmap  → /chat/1");
    }
}
