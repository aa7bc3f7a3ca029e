//! Document lifecycle: file identity, modified state and the
//! save-before-discard protocol for the single open document.
//!
//! The controller never touches widgets or the filesystem directly. It goes
//! through the [`DocumentBuffer`], [`FileStore`] and [`UserPrompt`] it was
//! built with, so the shell can pass FLTK-backed implementations and tests
//! can pass fakes.
//!
//! State transitions:
//!
//! - any buffer change: clean -> dirty
//! - successful load or save of `path`: any -> clean, identity = `path`
//! - new document: any -> clean, untitled
//!
//! A failed read or write changes nothing.

use std::path::{Path, PathBuf};

use crate::app::domain::collaborators::{DiscardChoice, DocumentBuffer, FileStore, UserPrompt};
use crate::app::domain::document::{DocumentState, TextEncoding, window_title_for};
use crate::app::infrastructure::error::{AppError, Result};

pub struct DocumentSession<B, F, P> {
    state: DocumentState,
    buffer: B,
    store: F,
    prompt: P,
}

impl<B, F, P> DocumentSession<B, F, P>
where
    B: DocumentBuffer,
    F: FileStore,
    P: UserPrompt,
{
    /// Start clean and untitled, subscribed to the buffer's change events.
    pub fn new(mut buffer: B, store: F, prompt: P) -> Self {
        let state = DocumentState::new();
        let modified = state.modified_flag();
        buffer.subscribe(Box::new(move || modified.set(true)));

        Self {
            state,
            buffer,
            store,
            prompt,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.state.is_dirty()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.state.current_path()
    }

    pub fn encoding(&self) -> TextEncoding {
        self.state.encoding()
    }

    /// "name" or "name*".
    pub fn title(&self) -> String {
        self.state.title()
    }

    pub fn window_title(&self) -> String {
        window_title_for(self.current_path(), self.is_dirty())
    }

    /// Full path for the status bar, empty while untitled.
    pub fn status_text(&self) -> String {
        self.current_path()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut B {
        &mut self.buffer
    }

    #[cfg(test)]
    pub fn store(&self) -> &F {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    // --- File operations ---

    /// Empty, untitled document. `Err(Cancelled)` if the user kept the
    /// current one.
    pub fn new_document(&mut self) -> Result<()> {
        if !self.guard_discard() {
            return Err(AppError::Cancelled);
        }
        self.buffer.clear();
        self.state.set_current_file(None);
        self.state.set_encoding(TextEncoding::Utf8);
        tracing::debug!("Started new untitled document");
        Ok(())
    }

    /// Guard, then ask for a path, then load it.
    pub fn open(&mut self) -> Result<()> {
        if !self.guard_discard() {
            return Err(AppError::Cancelled);
        }
        let path = self.prompt.pick_open_path().ok_or(AppError::Cancelled)?;
        self.load_file(&path)
    }

    /// Guard, then load an already chosen path.
    pub fn open_document(&mut self, path: &Path) -> Result<()> {
        if !self.guard_discard() {
            return Err(AppError::Cancelled);
        }
        self.load_file(path)
    }

    /// Replace the buffer with the file's contents. No guard.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let bytes = match self.store.read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.report_io_failure("opening", path, &e);
                return Err(e.into());
            }
        };

        let (text, encoding) = TextEncoding::decode(&bytes);
        // set_text fires the change handler; the identity update below
        // clears the flag again.
        self.buffer.set_text(&text);
        self.state.set_current_file(Some(path.to_path_buf()));
        self.state.set_encoding(encoding);
        tracing::info!(
            "Opened {} ({} bytes, {:?})",
            path.display(),
            bytes.len(),
            encoding
        );
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        match self.current_path().map(Path::to_path_buf) {
            Some(path) => self.save_file(&path),
            None => self.save_as(),
        }
    }

    pub fn save_as(&mut self) -> Result<()> {
        let path: PathBuf = self.prompt.pick_save_path().ok_or(AppError::Cancelled)?;
        self.save_file(&path)
    }

    pub fn save_file(&mut self, path: &Path) -> Result<()> {
        let text = self.buffer.text();
        let (bytes, encoding) = match self.state.encoding().encode(&text) {
            Some(bytes) => (bytes, self.state.encoding()),
            None => {
                tracing::warn!(
                    "{} has characters outside Latin-1, saving as UTF-8",
                    path.display()
                );
                (text.into_bytes(), TextEncoding::Utf8)
            }
        };
        if let Err(e) = self.store.write(path, &bytes) {
            self.report_io_failure("saving", path, &e);
            return Err(e.into());
        }
        self.state.set_current_file(Some(path.to_path_buf()));
        self.state.set_encoding(encoding);
        tracing::info!("Saved {} ({} bytes, {:?})", path.display(), bytes.len(), encoding);
        Ok(())
    }

    // --- Discard protocol ---

    /// Whether the pending action may throw away the current buffer.
    ///
    /// Clean documents pass straight through. Dirty ones ask the user:
    /// Save passes only if the save succeeds, Discard passes and leaves the
    /// document dirty, Cancel blocks.
    pub fn guard_discard(&mut self) -> bool {
        if !self.state.is_dirty() {
            return true;
        }
        match self.prompt.confirm_discard() {
            DiscardChoice::Save => self.save().is_ok(),
            DiscardChoice::Discard => true,
            DiscardChoice::Cancel => false,
        }
    }

    /// `false` vetoes the window close.
    pub fn close_requested(&mut self) -> bool {
        let accepted = self.guard_discard();
        if !accepted {
            tracing::debug!("Close vetoed, document kept open");
        }
        accepted
    }

    fn report_io_failure(&mut self, action: &str, path: &Path, err: &std::io::Error) {
        tracing::warn!("Error {} {}: {}", action, path.display(), err);
        self.prompt
            .show_error(&format!("Error {} file {}: {}", action, path.display(), err));
    }
}
