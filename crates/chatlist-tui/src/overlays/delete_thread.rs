//! Delete confirmation dialog.
//!
//! Stateless: the caller decides whether it is open and which button has
//! focus. Input handling only translates a key or click into at most one
//! [`DialogEvent`]; applying it is the caller's job.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::render_utils::{calculate_overlay_area, inner_area, render_overlay_container};

pub const DIALOG_TITLE: &str = "Are you absolutely sure?";
pub const DIALOG_DESCRIPTION: &str = "This action cannot be undone. This will permanently delete your chat and remove it from our servers.";
pub const CANCEL_LABEL: &str = "[ Cancel ]";
pub const CONFIRM_LABEL: &str = "[ Continue ]";

const DIALOG_WIDTH: u16 = 56;
const DIALOG_HEIGHT: u16 = 9;
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogButton {
    #[default]
    Cancel,
    Continue,
}

impl DialogButton {
    fn toggle(self) -> Self {
        match self {
            DialogButton::Cancel => DialogButton::Continue,
            DialogButton::Continue => DialogButton::Cancel,
        }
    }
}

/// Event produced by a single dialog interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The dialog asks to change its open state (cancel/dismiss sends `false`).
    OpenChange(bool),
    /// The user confirmed the deletion.
    Delete,
    /// Keyboard focus moved to another button.
    Focus(DialogButton),
}

/// Screen regions of an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    pub popup: Rect,
    pub body: Rect,
    pub cancel: Rect,
    pub confirm: Rect,
}

impl DialogLayout {
    pub fn compute(area: Rect) -> Self {
        let popup = calculate_overlay_area(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let inner = inner_area(popup);
        let buttons_y = inner.y + inner.height.saturating_sub(1);

        let confirm_width = CONFIRM_LABEL.len() as u16;
        let cancel_width = CANCEL_LABEL.len() as u16;
        let confirm_x = (inner.x + inner.width).saturating_sub(confirm_width);
        let cancel_x = confirm_x
            .saturating_sub(BUTTON_GAP + cancel_width)
            .max(inner.x);

        Self {
            popup,
            body: Rect::new(
                inner.x,
                inner.y,
                inner.width,
                inner.height.saturating_sub(2),
            ),
            cancel: Rect::new(cancel_x, buttons_y, cancel_width, 1),
            confirm: Rect::new(confirm_x, buttons_y, confirm_width, 1),
        }
    }
}

/// Confirmation dialog for deleting a thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteThreadDialog {
    pub open: bool,
    pub focus: DialogButton,
}

impl DeleteThreadDialog {
    pub fn new(open: bool) -> Self {
        Self {
            open,
            focus: DialogButton::default(),
        }
    }

    #[must_use]
    pub fn with_focus(mut self, focus: DialogButton) -> Self {
        self.focus = focus;
        self
    }

    pub fn handle_key(&self, key: KeyEvent) -> Option<DialogEvent> {
        if !self.open {
            return None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('n' | 'q') => Some(DialogEvent::OpenChange(false)),
            KeyCode::Char('y') => Some(DialogEvent::Delete),
            KeyCode::Enter => Some(self.activate(self.focus)),
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Tab
            | KeyCode::BackTab
            | KeyCode::Char('h' | 'l') => Some(DialogEvent::Focus(self.focus.toggle())),
            _ => None,
        }
    }

    pub fn handle_mouse(&self, mouse: MouseEvent, area: Rect) -> Option<DialogEvent> {
        if !self.open || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        let layout = DialogLayout::compute(area);
        let pos = Position::new(mouse.column, mouse.row);
        if layout.confirm.contains(pos) {
            Some(self.activate(DialogButton::Continue))
        } else if layout.cancel.contains(pos) {
            Some(self.activate(DialogButton::Cancel))
        } else {
            None
        }
    }

    fn activate(&self, button: DialogButton) -> DialogEvent {
        match button {
            DialogButton::Cancel => DialogEvent::OpenChange(false),
            DialogButton::Continue => DialogEvent::Delete,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.open {
            return;
        }

        let layout = DialogLayout::compute(area);
        render_overlay_container(frame, layout.popup, DIALOG_TITLE, Color::Red);

        frame.render_widget(
            Paragraph::new(DIALOG_DESCRIPTION)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true }),
            layout.body,
        );

        frame.render_widget(
            Paragraph::new(button_line(CANCEL_LABEL, self.focus == DialogButton::Cancel, Color::Gray)),
            layout.cancel,
        );
        frame.render_widget(
            Paragraph::new(button_line(
                CONFIRM_LABEL,
                self.focus == DialogButton::Continue,
                Color::Red,
            )),
            layout.confirm,
        );
    }
}

fn button_line(label: &'static str, focused: bool, color: Color) -> Line<'static> {
    let style = if focused {
        Style::default()
            .bg(color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Line::from(Span::styled(label, style))
}
