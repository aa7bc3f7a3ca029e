use fltk::{
    button::Button,
    enums::{Align, Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::domain::document::APP_NAME;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(360, 240)
        .with_label(&format!("About {}", APP_NAME))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 340, 220, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label(&format!("{} {}", APP_NAME, version));
    title.set_label_size(22);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut info_frame = Frame::default();
    info_frame.set_label(
        "A small single-document notepad.\n\n\
         Built with Rust and FLTK.\n\
         Licensed under the MIT License",
    );
    info_frame.set_label_size(12);
    info_frame.set_label_color(Color::from_rgb(90, 90, 90));
    info_frame.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
