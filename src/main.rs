use clap::Parser;
use fltk::{app, enums::Event, frame::Frame, prelude::*, window::Window};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slate_pad::app::{AppSettings, DiskFileStore, DocumentSession, Message, Result};
use slate_pad::ui::dialogs::{about::show_about_dialog, find::FindDialog};
use slate_pad::ui::editor_buffer::FltkBuffer;
use slate_pad::ui::main_window::{MainWidgets, build_main_window, window_geometry};
use slate_pad::ui::menu::build_menu;
use slate_pad::ui::prompt::FltkPrompt;

/// SlatePad - a small single-document notepad
#[derive(Parser, Debug)]
#[command(name = "slatepad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

type Session = DocumentSession<FltkBuffer, DiskFileStore, FltkPrompt>;

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(log_level))
        .init();
}

/// Window title and status bar follow the session after every message.
fn refresh_chrome(session: &Session, wind: &mut Window, location_label: &mut Frame) {
    wind.set_label(&session.window_title());
    // '@' starts an FLTK label symbol
    location_label.set_label(&session.status_text().replace('@', "@@"));
    location_label.redraw();
}

/// I/O failures were already shown to the user by the session.
fn log_outcome(action: &str, result: Result<()>) {
    match result {
        Ok(()) => {}
        Err(e) if e.is_cancelled() => tracing::debug!("{} cancelled", action),
        Err(e) => tracing::debug!("{} failed: {}", action, e),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    tracing::info!("Starting SlatePad v{}", env!("CARGO_PKG_VERSION"));

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut settings = AppSettings::load();
    let MainWidgets {
        mut wind,
        mut menu,
        mut text_editor,
        buffer,
        mut location_label,
    } = build_main_window(settings.geometry().unwrap_or_default());
    build_menu(&mut menu, &sender);

    // Second listener on the same buffer: only wakes the dispatch loop so the
    // title picks up the modified marker.
    let mut notify_buf = buffer.clone();
    notify_buf.add_modify_callback({
        let s = sender;
        move |_pos, inserted, deleted, _restyled, _deleted_text| {
            if inserted > 0 || deleted > 0 {
                s.send(Message::DocumentModified);
            }
        }
    });

    wind.set_callback({
        let s = sender;
        move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        }
    });

    let mut session: Session = DocumentSession::new(
        FltkBuffer::new(buffer.clone()),
        DiskFileStore,
        FltkPrompt::new(),
    );

    let mut find_dialog: Option<FindDialog> = None;

    wind.show();

    if let Some(path) = args.file.as_deref() {
        log_outcome("open", session.load_file(path));
    }
    refresh_chrome(&session, &mut wind, &mut location_label);

    while app.wait() {
        let Some(msg) = receiver.recv() else {
            continue;
        };

        match msg {
            Message::FileNew => log_outcome("new", session.new_document()),
            Message::FileOpen => log_outcome("open", session.open()),
            Message::FileSave => log_outcome("save", session.save()),
            Message::FileSaveAs => log_outcome("save as", session.save_as()),
            Message::FileQuit | Message::WindowClose => {
                if session.close_requested() {
                    settings.set_geometry(window_geometry(&wind));
                    if let Err(e) = settings.save() {
                        tracing::warn!("Failed to save settings: {}", e);
                    }
                    tracing::info!("Exiting");
                    break;
                }
            }
            Message::EditUndo => {
                let _ = text_editor.undo();
            }
            Message::EditRedo => {
                let _ = text_editor.redo();
            }
            Message::EditCut => {
                let _ = text_editor.cut();
            }
            Message::EditCopy => {
                let _ = text_editor.copy();
            }
            Message::EditPaste => {
                let _ = text_editor.paste();
            }
            Message::SelectAll => {
                let mut buf = buffer.clone();
                let len = buf.length();
                buf.select(0, len);
            }
            Message::ShowFind => find_dialog
                .get_or_insert_with(|| FindDialog::new(&buffer, &text_editor))
                .show(),
            Message::ShowAbout => show_about_dialog(),
            Message::DocumentModified => {}
        }

        refresh_chrome(&session, &mut wind, &mut location_label);
    }

    Ok(())
}
