//! FLTK shell: widgets, dialogs, and the FLTK-backed collaborators of the
//! document session.

pub mod dialogs;
pub mod editor_buffer;
pub mod file_dialogs;
pub mod main_window;
pub mod menu;
pub mod prompt;
