//! Thread list rendering.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::skeleton::render_skeleton;
use super::state::ChatThreadsState;
use super::view::{ChatThreads, ThreadEntry, ThreadListEntry, ThreadsView};
use crate::common::{Icon, LinkComponent, truncate_with_ellipsis};

pub const NEW_CHAT_LABEL: &str = "New Chat";
pub const EMPTY_STATE_MESSAGE: &str =
    "Your conversations will appear here once you start chatting!";

/// Columns used by the active-thread marker at the start of each row.
const MARKER_WIDTH: u16 = 2;
/// Columns used by the delete trigger at the end of each thread row.
pub const DELETE_TRIGGER_WIDTH: u16 = 2;
const EMPTY_STATE_MAX_WIDTH: u16 = 24;

const ACCENT: Color = Color::Green;
const ACTIVE: Color = Color::Cyan;

/// Part of a row under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHit {
    Link(usize),
    Delete(usize),
}

/// Maps a screen position to a row of the list drawn in `area`.
///
/// Rows are one line each, starting at `offset`. Only thread rows (row > 0)
/// have a delete trigger.
pub fn hit_test(area: Rect, offset: usize, row_count: usize, pos: Position) -> Option<RowHit> {
    if !area.contains(pos) {
        return None;
    }
    let row = offset + usize::from(pos.y - area.y);
    if row >= row_count {
        return None;
    }
    let delete_x = (area.x + area.width).saturating_sub(DELETE_TRIGGER_WIDTH);
    if row > 0 && pos.x >= delete_x {
        Some(RowHit::Delete(row))
    } else {
        Some(RowHit::Link(row))
    }
}

impl<L: LinkComponent> ChatThreads<'_, L> {
    /// Renders the list (or the skeleton) into `area`, with the delete
    /// dialog on top when a delete is pending.
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &ChatThreadsState) {
        let list = match self.view(state) {
            ThreadsView::Loading => {
                render_skeleton(frame, area);
                return;
            }
            ThreadsView::Ready(list) => list,
        };

        let offset = state.offset.min(self.row_count().saturating_sub(1));
        let bottom = area.y + area.height;
        let mut y = area.y;

        for (row, entry) in list.entries.iter().enumerate().skip(offset) {
            if y >= bottom {
                break;
            }
            let selected = row == state.selected;
            let row_area = Rect::new(area.x, y, area.width, 1);
            match entry {
                ThreadListEntry::NewChat { target } => {
                    self.render_new_chat(frame, row_area, target, selected);
                }
                ThreadListEntry::Empty => {
                    let width = area.width.min(EMPTY_STATE_MAX_WIDTH + MARKER_WIDTH);
                    let empty_area = Rect::new(area.x, y, width, bottom - y);
                    frame.render_widget(
                        Paragraph::new(Line::from(vec![
                            Span::raw("  "),
                            Span::styled(EMPTY_STATE_MESSAGE, Style::default().fg(Color::DarkGray)),
                        ]))
                        .wrap(Wrap { trim: false }),
                        empty_area,
                    );
                    break;
                }
                ThreadListEntry::Thread(thread) => {
                    self.render_thread(frame, row_area, thread, selected);
                }
            }
            y += 1;
        }

        list.dialog.render(frame, area);
    }

    fn render_new_chat(&self, frame: &mut Frame, area: Rect, target: &L::Target, selected: bool) {
        let children = vec![
            Icon::Plus.span(
                Style::default()
                    .fg(Color::Black)
                    .bg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(NEW_CHAT_LABEL, Style::default().fg(ACCENT)),
        ];
        let mut line = Line::from(Span::raw("  "));
        line.spans
            .extend(self.link.render_link(target, children).spans);
        frame.render_widget(Paragraph::new(line).style(row_style(selected)), area);
    }

    fn render_thread(
        &self,
        frame: &mut Frame,
        area: Rect,
        thread: &ThreadEntry<'_, L::Target>,
        selected: bool,
    ) {
        let link_width = area
            .width
            .saturating_sub(MARKER_WIDTH + DELETE_TRIGGER_WIDTH) as usize;

        let marker = if thread.is_active {
            Span::styled(
                format!("{} ", Icon::Active.glyph()),
                Style::default().fg(ACTIVE),
            )
        } else {
            Span::raw("  ")
        };

        let mut children = Vec::new();
        let date_width = thread.created.width();
        let mut used = 0;
        if let Some(label) = thread.title.label() {
            let max_title = self
                .display
                .title_max_width
                .min(link_width.saturating_sub(date_width + 1));
            let title = truncate_with_ellipsis(label, max_title);
            used = title.width();
            let style = if thread.title.is_fallback() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else if thread.is_active {
                Style::default().fg(ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            children.push(Span::styled(title, style));
        }
        let gap = link_width.saturating_sub(used + date_width).max(1);
        children.push(Span::raw(" ".repeat(gap)));
        children.push(Span::styled(
            thread.created.clone(),
            Style::default().fg(Color::DarkGray),
        ));

        let link = self.link.render_link(&thread.target, children);
        let mut spans = vec![marker];
        spans.extend(link.spans);

        let link_area = Rect::new(
            area.x,
            area.y,
            area.width.saturating_sub(DELETE_TRIGGER_WIDTH),
            1,
        );
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(row_style(selected)),
            link_area,
        );

        let delete_area = Rect::new(
            link_area.x + link_area.width,
            area.y,
            area.width - link_area.width,
            1,
        );
        let delete_style = if selected {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![Span::raw(" "), Icon::Delete.span(delete_style)]))
                .style(row_style(selected)),
            delete_area,
        );
    }
}

fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    }
}
