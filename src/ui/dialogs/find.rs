use fltk::{
    button::{Button, CheckButton},
    dialog,
    frame::Frame,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use crate::app::services::text_ops::{find_in_text, find_in_text_backward};

/// Result of one "Find Next" press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Range<usize>),
    /// No match before the edge; the next search restarts from the other end.
    Wrapped { to_end: bool },
    NotFound,
}

/// Where the next search starts, and which query that position belongs to.
#[derive(Debug, Default)]
pub struct SearchCursor {
    query: String,
    pos: usize,
    last_match: Option<Range<usize>>,
    backward: bool,
}

impl SearchCursor {
    /// `cursor` is the editor's insert position, used when the query changes.
    pub fn next(
        &mut self,
        text: &str,
        query: &str,
        cursor: usize,
        case_sensitive: bool,
        backward: bool,
    ) -> SearchOutcome {
        if self.query != query {
            self.query = query.to_string();
            self.pos = cursor;
            self.last_match = None;
        } else if self.backward != backward {
            // Step over the current hit instead of finding it again
            if let Some(hit) = &self.last_match {
                self.pos = if backward { hit.start } else { hit.end };
            }
        }
        self.backward = backward;

        let found = if backward {
            find_in_text_backward(text, query, self.pos, case_sensitive)
        } else {
            find_in_text(text, query, self.pos, case_sensitive)
        };

        match found {
            Some(range) => {
                self.pos = if backward { range.start } else { range.end };
                self.last_match = Some(range.clone());
                SearchOutcome::Found(range)
            }
            None => {
                self.last_match = None;
                let wrap_pos = if backward { text.len() } else { 0 };
                if self.pos != wrap_pos {
                    self.pos = wrap_pos;
                    SearchOutcome::Wrapped { to_end: backward }
                } else {
                    SearchOutcome::NotFound
                }
            }
        }
    }
}

/// Modeless Find dialog. Built once and shown again on every Edit/Find, so
/// the main loop keeps running while it is open.
///
/// Selecting a match does not modify the buffer, so the document stays clean.
pub struct FindDialog {
    win: Window,
    find_input: Input,
}

impl FindDialog {
    pub fn new(buffer: &TextBuffer, editor: &TextEditor) -> Self {
        let mut win = Window::default()
            .with_size(400, 160)
            .with_label("Find")
            .center_screen();

        Frame::default().with_pos(20, 20).with_size(80, 30).with_label("Find what:");
        let find_input = Input::default().with_pos(110, 20).with_size(270, 30);

        let case_check = CheckButton::default()
            .with_pos(110, 58).with_size(130, 25).with_label("Match case");
        let backward_check = CheckButton::default()
            .with_pos(240, 58).with_size(150, 25).with_label("Search backward");

        let mut find_btn = Button::default()
            .with_pos(200, 110).with_size(90, 30).with_label("Find Next");
        let mut close_btn = Button::default()
            .with_pos(300, 110).with_size(90, 30).with_label("Close");

        win.end();
        win.make_resizable(false);

        let cursor = Rc::new(RefCell::new(SearchCursor::default()));
        let mut text_buf = buffer.clone();
        let mut text_ed = editor.clone();
        let input = find_input.clone();

        find_btn.set_callback(move |_| {
            let query = input.value();
            if query.is_empty() {
                dialog::message_default("Please enter text to find");
                return;
            }

            let text = text_buf.text();
            let outcome = cursor.borrow_mut().next(
                &text,
                &query,
                text_ed.insert_position().max(0) as usize,
                case_check.is_checked(),
                backward_check.is_checked(),
            );

            match outcome {
                SearchOutcome::Found(range) => {
                    text_buf.select(range.start as i32, range.end as i32);
                    text_ed.set_insert_position(range.end as i32);
                    text_ed.show_insert_position();
                }
                SearchOutcome::Wrapped { to_end } => {
                    let edge = if to_end { "end" } else { "beginning" };
                    dialog::message_default(&format!("No more matches. Wrapped to {}.", edge));
                }
                SearchOutcome::NotFound => {
                    dialog::message_default(&format!("Cannot find '{}'", query));
                }
            }
        });

        let mut dialog_close = win.clone();
        close_btn.set_callback(move |_| {
            dialog_close.hide();
        });

        Self { win, find_input }
    }

    pub fn show(&mut self) {
        self.win.show();
        let _ = self.find_input.take_focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_steps_through_matches_then_wraps() {
        let text = "cat dog cat";
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(0..3));
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(8..11));
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Wrapped { to_end: false });
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(0..3));
    }

    #[test]
    fn test_new_query_starts_at_editor_cursor() {
        let text = "cat dog cat";
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next(text, "cat", 4, true, false), SearchOutcome::Found(8..11));
        assert_eq!(cur.next(text, "dog", 0, true, false), SearchOutcome::Found(4..7));
    }

    #[test]
    fn test_switch_to_backward_skips_current_hit() {
        let text = "cat dog cat mouse cat";
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(0..3));
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(8..11));
        assert_eq!(cur.next(text, "cat", 0, true, true), SearchOutcome::Found(0..3));
    }

    #[test]
    fn test_switch_to_forward_skips_current_hit() {
        let text = "cat dog cat mouse cat";
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next(text, "cat", text.len(), true, true), SearchOutcome::Found(18..21));
        assert_eq!(cur.next(text, "cat", 0, true, true), SearchOutcome::Found(8..11));
        assert_eq!(cur.next(text, "cat", 0, true, false), SearchOutcome::Found(18..21));
    }

    #[test]
    fn test_backward_wraps_to_end() {
        let text = "cat dog";
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next(text, "cat", text.len(), true, true), SearchOutcome::Found(0..3));
        assert_eq!(cur.next(text, "cat", 0, true, true), SearchOutcome::Wrapped { to_end: true });
        assert_eq!(cur.next(text, "cat", 0, true, true), SearchOutcome::Found(0..3));
    }

    #[test]
    fn test_missing_query_is_not_found() {
        let mut cur = SearchCursor::default();
        assert_eq!(cur.next("abc", "zzz", 0, false, false), SearchOutcome::NotFound);
    }
}
