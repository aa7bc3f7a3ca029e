use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

/// Matches any file; the editor opens whatever it is given as text.
const DOCUMENT_FILTER: &str = "Document files\t*";

fn run_chooser(
    kind: FileDialogType,
    title: &str,
    dir: Option<&Path>,
    confirm_overwrite: bool,
) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(DOCUMENT_FILTER);
    if let Some(dir) = dir {
        let _ = nfc.set_directory(&dir);
    }
    if confirm_overwrite {
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        None
    } else {
        Some(filename)
    }
}

pub fn native_open_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open Document", dir, false)
}

pub fn native_save_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save Document", dir, true)
}
