use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::domain::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("&File/&New", Shortcut::Ctrl | 'n', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileNew) });
    menu.add("&File/&Open...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileOpen) });
    menu.add("&File/&Save", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileSave) });
    menu.add("&File/Save &As...", Shortcut::Ctrl | Shortcut::Shift | 's', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::FileSaveAs) });
    menu.add("&File/E&xit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::FileQuit) });

    // Edit
    menu.add("&Edit/&Undo", Shortcut::Ctrl | 'z', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditUndo) });
    menu.add("&Edit/&Redo", Shortcut::Ctrl | Shortcut::Shift | 'z', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::EditRedo) });
    menu.add("&Edit/Cu&t", Shortcut::Ctrl | 'x', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCut) });
    menu.add("&Edit/&Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditCopy) });
    menu.add("&Edit/&Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::EditPaste) });
    menu.add("&Edit/Select &All", Shortcut::Ctrl | 'a', MenuFlag::MenuDivider, { let s = *s; move |_| s.send(Message::SelectAll) });
    menu.add("&Edit/&Find...", Shortcut::Ctrl | 'f', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowFind) });

    // Help
    menu.add("&Help/&About SlatePad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
