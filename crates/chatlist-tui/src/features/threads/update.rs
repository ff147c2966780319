//! Thread list input handling.
//!
//! Each key press or click yields at most one [`ThreadsEvent`] for the host.
//! Local state (cursor, scroll, pending delete) is updated in place.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::render::{RowHit, hit_test};
use super::state::ChatThreadsState;
use super::view::ChatThreads;
use crate::common::LinkComponent;
use crate::overlays::{DeleteThreadDialog, DialogEvent};

/// Output of the thread list towards its host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadsEvent<T> {
    /// A link was activated.
    Navigate(T),
    /// Deletion of `thread_id` was confirmed.
    Delete { thread_id: String },
}

const PAGE_ROWS: isize = 10;

impl<L: LinkComponent> ChatThreads<'_, L> {
    /// Handles a key press for the list drawn in `area`.
    pub fn handle_key(
        &self,
        state: &mut ChatThreadsState,
        key: KeyEvent,
        area: Rect,
    ) -> Option<ThreadsEvent<L::Target>> {
        if self.is_loading() {
            return None;
        }
        if state.delete_target.is_pending() {
            let event = self.dialog(state).handle_key(key)?;
            return self.apply_dialog_event(state, event);
        }

        let rows = self.row_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.move_selection(-1, rows),
            KeyCode::Down | KeyCode::Char('j') => state.move_selection(1, rows),
            KeyCode::PageUp => state.move_selection(-PAGE_ROWS, rows),
            KeyCode::PageDown => state.move_selection(PAGE_ROWS, rows),
            KeyCode::Home | KeyCode::Char('g') => state.select(0, rows),
            KeyCode::End | KeyCode::Char('G') => state.select(rows, rows),
            KeyCode::Enter => return self.activate(state.selected),
            KeyCode::Char('d') | KeyCode::Delete => {
                let row = state.selected;
                self.trigger_delete(state, row);
            }
            _ => return None,
        }
        state.ensure_visible(usize::from(area.height));
        None
    }

    /// Handles a mouse event for the list drawn in `area`.
    pub fn handle_mouse(
        &self,
        state: &mut ChatThreadsState,
        mouse: MouseEvent,
        area: Rect,
    ) -> Option<ThreadsEvent<L::Target>> {
        if self.is_loading() {
            return None;
        }
        if state.delete_target.is_pending() {
            let event = self.dialog(state).handle_mouse(mouse, area)?;
            return self.apply_dialog_event(state, event);
        }

        let rows = self.row_count();
        match mouse.kind {
            MouseEventKind::ScrollUp => state.move_selection(-1, rows),
            MouseEventKind::ScrollDown => state.move_selection(1, rows),
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = Position::new(mouse.column, mouse.row);
                match hit_test(area, state.offset, rows, pos)? {
                    RowHit::Link(row) => {
                        state.select(row, rows);
                        return self.activate(row);
                    }
                    RowHit::Delete(row) => {
                        state.select(row, rows);
                        self.trigger_delete(state, row);
                    }
                }
            }
            _ => return None,
        }
        state.ensure_visible(usize::from(area.height));
        None
    }

    fn dialog(&self, state: &ChatThreadsState) -> DeleteThreadDialog {
        DeleteThreadDialog::new(state.delete_target.is_pending()).with_focus(state.dialog_focus)
    }

    fn activate(&self, row: usize) -> Option<ThreadsEvent<L::Target>> {
        let target = self.target_for_row(row)?;
        tracing::debug!(row, ?target, "link activated");
        Some(ThreadsEvent::Navigate(target))
    }

    /// Stages the thread on `row` for deletion. Does not notify the host.
    fn trigger_delete(&self, state: &mut ChatThreadsState, row: usize) {
        if let Some(thread) = self.thread_at_row(row) {
            state.request_delete(thread.id.clone());
        }
    }

    fn apply_dialog_event(
        &self,
        state: &mut ChatThreadsState,
        event: DialogEvent,
    ) -> Option<ThreadsEvent<L::Target>> {
        match event {
            DialogEvent::OpenChange(true) => None,
            DialogEvent::OpenChange(false) => {
                state.dismiss_delete();
                None
            }
            DialogEvent::Focus(button) => {
                state.dialog_focus = button;
                None
            }
            DialogEvent::Delete => {
                // Cleared here as well as by the host, so a failed delete
                // cannot leave the dialog open on a stale target.
                let thread_id = state.delete_target.take()?;
                tracing::info!(thread_id = %thread_id, "delete confirmed");
                Some(ThreadsEvent::Delete { thread_id })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::common::PlainLink;
    use crate::features::threads::state::DeleteTarget;
    use crate::features::threads::view::tests::{thread, widget};
    use crate::overlays::{DialogButton, DialogLayout};

    const AREA: Rect = Rect::new(0, 0, 60, 20);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn threads() -> Vec<chatlist_core::Thread> {
        vec![
            thread("a", Some("Alpha"), 1),
            thread("b", Some("Bravo"), 2),
            thread("c", Some("Charlie"), 3),
        ]
    }

    #[test]
    fn test_enter_on_new_chat_navigates_to_new_thread_link() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();

        assert_eq!(
            w.handle_key(&mut state, key(KeyCode::Enter), AREA),
            Some(ThreadsEvent::Navigate("/chat/new".to_string()))
        );
    }

    #[test]
    fn test_enter_on_thread_navigates_to_its_link() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Down), AREA), None);
        assert_eq!(w.handle_key(&mut state, key(KeyCode::Down), AREA), None);
        assert_eq!(
            w.handle_key(&mut state, key(KeyCode::Enter), AREA),
            Some(ThreadsEvent::Navigate("/chat/b".to_string()))
        );
    }

    #[test]
    fn test_delete_trigger_stages_target_without_event() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.select(1, w.row_count());

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Char('d')), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Pending("c".to_string()));
    }

    #[test]
    fn test_delete_trigger_on_new_chat_is_ignored() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Delete), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_dismiss_clears_target_without_delete() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.request_delete("b".to_string());

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Esc), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_confirm_emits_delete_once_and_clears() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.request_delete("b".to_string());

        assert_eq!(
            w.handle_key(&mut state, key(KeyCode::Char('y')), AREA),
            Some(ThreadsEvent::Delete {
                thread_id: "b".to_string()
            })
        );
        assert_eq!(state.delete_target, DeleteTarget::Idle);

        // Dialog is closed now; a second confirm key is ordinary list input.
        assert_eq!(w.handle_key(&mut state, key(KeyCode::Char('y')), AREA), None);
    }

    #[test]
    fn test_dialog_captures_navigation_keys() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.request_delete("a".to_string());

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Down), AREA), None);
        assert_eq!(state.selected, 0);

        // Enter with Cancel focused dismisses.
        assert_eq!(w.handle_key(&mut state, key(KeyCode::Enter), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_focus_then_enter_confirms() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.request_delete("a".to_string());

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Right), AREA), None);
        assert_eq!(state.dialog_focus, DialogButton::Continue);
        assert_eq!(
            w.handle_key(&mut state, key(KeyCode::Enter), AREA),
            Some(ThreadsEvent::Delete {
                thread_id: "a".to_string()
            })
        );
    }

    #[test]
    fn test_click_delete_trigger_opens_dialog_for_that_thread() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();

        // Row 2 is "b"; the trigger sits in the last column.
        assert_eq!(w.handle_mouse(&mut state, click(59, 2), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Pending("b".to_string()));
        assert_eq!(state.selected, 2);

        let layout = DialogLayout::compute(AREA);
        assert_eq!(
            w.handle_mouse(&mut state, click(layout.confirm.x, layout.confirm.y), AREA),
            Some(ThreadsEvent::Delete {
                thread_id: "b".to_string()
            })
        );
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_click_cancel_button_dismisses() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        state.request_delete("c".to_string());

        let layout = DialogLayout::compute(AREA);
        assert_eq!(
            w.handle_mouse(&mut state, click(layout.cancel.x, layout.cancel.y), AREA),
            None
        );
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_click_row_navigates() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();

        assert_eq!(
            w.handle_mouse(&mut state, click(4, 3), AREA),
            Some(ThreadsEvent::Navigate("/chat/a".to_string()))
        );
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_loading_ignores_input() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, true, "");
        let mut state = ChatThreadsState::new();

        assert_eq!(w.handle_key(&mut state, key(KeyCode::Enter), AREA), None);
        assert_eq!(w.handle_mouse(&mut state, click(59, 2), AREA), None);
        assert_eq!(state.delete_target, DeleteTarget::Idle);
    }

    #[test]
    fn test_navigation_scrolls_small_area() {
        let link = PlainLink::new();
        let threads = threads();
        let w = widget(&link, &threads, false, "");
        let mut state = ChatThreadsState::new();
        let small = Rect::new(0, 0, 60, 2);

        w.handle_key(&mut state, key(KeyCode::End), small);
        assert_eq!(state.selected, 3);
        assert_eq!(state.offset, 2);

        w.handle_key(&mut state, key(KeyCode::Home), small);
        assert_eq!(state.offset, 0);
    }
}
