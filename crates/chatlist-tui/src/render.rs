//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::common::{PlainLink, TargetHintLink, truncate_with_ellipsis};
use crate::overlays::render_utils::{InputHint, render_hints};
use crate::state::{AppState, StatusMessage};

/// Height of the footer (status or key hints).
const STATUS_HEIGHT: u16 = 1;

const LIST_TITLE: &str = " Chats ";

/// Screen regions of the main view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    /// Bordered block around the list.
    pub frame: Rect,
    /// Inside of the block, where the thread list draws.
    pub list: Rect,
    pub footer: Rect,
}

pub fn main_layout(area: Rect) -> MainLayout {
    let [frame, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)]).areas(area);
    let list = Block::default().borders(Borders::ALL).inner(frame);
    MainLayout {
        frame,
        list,
        footer,
    }
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let layout = main_layout(frame.area());

    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(LIST_TITLE)
            .title_style(Style::default().add_modifier(Modifier::BOLD)),
        layout.frame,
    );

    if app.tui.show_link_targets {
        let link = TargetHintLink::new();
        app.tui
            .threads_widget(&link)
            .render(frame, layout.list, &app.list);
    } else {
        let link = PlainLink::new();
        app.tui
            .threads_widget(&link)
            .render(frame, layout.list, &app.list);
    }

    render_footer(app, frame, layout.footer);
}

fn render_footer(app: &AppState, frame: &mut Frame, area: Rect) {
    let width = area.width as usize;
    match &app.tui.status {
        Some(StatusMessage::Error(message)) => {
            let line = Line::from(Span::styled(
                truncate_with_ellipsis(message, width),
                Style::default().fg(Color::Red),
            ));
            frame.render_widget(Paragraph::new(line), area);
        }
        Some(StatusMessage::Info(message)) if !app.list.delete_target.is_pending() => {
            let line = Line::from(Span::styled(
                truncate_with_ellipsis(message, width),
                Style::default().fg(Color::Gray),
            ));
            frame.render_widget(Paragraph::new(line), area);
        }
        _ => render_hints(frame, area, &footer_hints(app), Color::Cyan),
    }
}

fn footer_hints(app: &AppState) -> Vec<InputHint<'static>> {
    if app.list.delete_target.is_pending() {
        vec![
            InputHint::new("y/Enter", "confirm"),
            InputHint::new("n/Esc", "cancel"),
            InputHint::new("←/→", "focus"),
        ]
    } else {
        vec![
            InputHint::new("↑/↓", "move"),
            InputHint::new("Enter", "open"),
            InputHint::new("d", "delete"),
            InputHint::new("r", "refresh"),
            InputHint::new("q", "quit"),
        ]
    }
}
