//! Traits the document session talks to.
//!
//! The FLTK shell implements these with real widgets and the filesystem
//! (`crate::ui::editor_buffer`, `crate::ui::prompt`,
//! `crate::app::infrastructure::file_store`). Tests implement them with
//! in-memory fakes.

use std::io;
use std::path::{Path, PathBuf};

/// Callback fired after every content mutation of a [`DocumentBuffer`].
pub type ChangeHandler = Box<dyn FnMut()>;

/// The editable text the user is working on.
pub trait DocumentBuffer {
    /// Full current text.
    fn text(&self) -> String;

    /// Replace the whole content. Fires the change handlers.
    fn set_text(&mut self, text: &str);

    /// Remove all content. Fires the change handlers.
    fn clear(&mut self);

    /// Register a handler called on every content mutation.
    fn subscribe(&mut self, handler: ChangeHandler);
}

/// Byte-level whole-file storage.
pub trait FileStore {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
    fn write(&mut self, path: &Path, bytes: &[u8]) -> io::Result<()>;
}

/// Answer to "the document has been modified, save it?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardChoice {
    Save,
    Discard,
    Cancel,
}

/// Modal questions asked of the user. Every call blocks until answered.
pub trait UserPrompt {
    fn confirm_discard(&mut self) -> DiscardChoice;

    /// `None` when the picker was cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;

    /// `None` when the picker was cancelled.
    fn pick_save_path(&mut self) -> Option<PathBuf>;

    /// Non-fatal notice, e.g. a failed read or write.
    fn show_error(&mut self, message: &str);
}

/// Best-effort key/value persistence across runs.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<Vec<u8>>;
    fn set(&mut self, key: &str, value: &[u8]);
}
