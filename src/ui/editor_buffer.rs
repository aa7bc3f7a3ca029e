use fltk::text::TextBuffer;

use crate::app::domain::collaborators::{ChangeHandler, DocumentBuffer};

/// The editor widget's buffer, seen through [`DocumentBuffer`].
///
/// `TextBuffer` is a handle onto FLTK's buffer, so the widget and this
/// adapter share the same text.
#[derive(Clone)]
pub struct FltkBuffer {
    buffer: TextBuffer,
}

impl FltkBuffer {
    pub fn new(buffer: TextBuffer) -> Self {
        Self { buffer }
    }
}

impl DocumentBuffer for FltkBuffer {
    fn text(&self) -> String {
        self.buffer.text()
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn clear(&mut self) {
        self.buffer.set_text("");
    }

    fn subscribe(&mut self, handler: ChangeHandler) {
        let mut handler = handler;
        // Restyle-only and selection events report no inserted/deleted chars.
        self.buffer
            .add_modify_callback(move |_pos, inserted, deleted, _restyled, _deleted_text| {
                if inserted > 0 || deleted > 0 {
                    handler();
                }
            });
    }
}
