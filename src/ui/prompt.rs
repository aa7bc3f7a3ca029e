use std::path::{Path, PathBuf};

use fltk::dialog;

use crate::app::domain::collaborators::{DiscardChoice, UserPrompt};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

/// Modal FLTK dialogs for the document session.
#[derive(Debug, Default)]
pub struct FltkPrompt {
    /// Last directory used in a file open/save dialog.
    last_directory: Option<PathBuf>,
}

impl FltkPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_directory = Some(parent.to_path_buf());
        }
    }
}

impl UserPrompt for FltkPrompt {
    fn confirm_discard(&mut self) -> DiscardChoice {
        let choice = dialog::choice2_default(
            "The document has been modified.\nDo you want to save your changes?",
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => DiscardChoice::Save,
            Some(1) => DiscardChoice::Discard,
            _ => DiscardChoice::Cancel,
        }
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn pick_save_path(&mut self) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref())?;
        self.remember_directory(&path);
        Some(path)
    }

    fn show_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}
