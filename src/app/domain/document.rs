use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::app::services::text_ops::extract_filename;

pub const UNTITLED: &str = "Untitled";
pub const APP_NAME: &str = "SlatePad";

/// How the file's bytes map to buffer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// Every byte is the char with the same value (U+0000..=U+00FF).
    Latin1,
}

impl TextEncoding {
    /// UTF-8 when the bytes are valid UTF-8, Latin-1 otherwise. Neither
    /// path loses bytes.
    pub fn decode(bytes: &[u8]) -> (String, TextEncoding) {
        match std::str::from_utf8(bytes) {
            Ok(text) => (text.to_string(), TextEncoding::Utf8),
            Err(_) => (
                bytes.iter().map(|&b| char::from(b)).collect(),
                TextEncoding::Latin1,
            ),
        }
    }

    /// `None` when `text` holds a char Latin-1 cannot represent.
    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            TextEncoding::Utf8 => Some(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => text.chars().map(|c| u8::try_from(c).ok()).collect(),
        }
    }
}

/// Identity and modified status of the one open document.
///
/// `modified` is shared with the buffer's change handler, which is why it
/// lives behind `Rc<Cell<_>>` instead of a plain `bool`.
#[derive(Debug, Default)]
pub struct DocumentState {
    current_path: Option<PathBuf>,
    modified: Rc<Cell<bool>>,
    encoding: TextEncoding,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.modified.get()
    }

    /// Handle for the buffer's change handler. Setting it to `true` is the
    /// `BufferChanged` transition.
    pub fn modified_flag(&self) -> Rc<Cell<bool>> {
        self.modified.clone()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: TextEncoding) {
        self.encoding = encoding;
    }

    #[cfg(test)]
    pub fn mark_dirty(&self) {
        self.modified.set(true);
    }

    /// `LoadSucceeded` / `SaveSucceeded` / new document: back to clean with
    /// the given identity.
    pub fn set_current_file(&mut self, path: Option<PathBuf>) {
        self.current_path = path;
        self.modified.set(false);
    }

    pub fn title(&self) -> String {
        title_for(self.current_path(), self.is_dirty())
    }
}

/// Basename of `path` (or "Untitled"), with a trailing `*` when modified.
pub fn title_for(path: Option<&Path>, modified: bool) -> String {
    let shown = match path {
        Some(p) => extract_filename(&p.to_string_lossy()),
        None => UNTITLED.to_string(),
    };
    if modified {
        format!("{}*", shown)
    } else {
        shown
    }
}

pub fn window_title_for(path: Option<&Path>, modified: bool) -> String {
    format!("{} - {}", title_for(path, modified), APP_NAME)
}
