use fltk::{
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::domain::document::{APP_NAME, window_title_for};
use crate::app::domain::settings::WindowGeometry;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 22;

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    /// Status bar label showing the current file location.
    pub location_label: Frame,
}

pub fn build_main_window(geometry: WindowGeometry) -> MainWidgets {
    let mut wind = Window::new(
        geometry.x,
        geometry.y,
        geometry.width,
        geometry.height,
        None,
    );
    wind.set_label(&window_title_for(None, false));
    wind.set_xclass(APP_NAME);

    let mut flex = Flex::new(0, 0, geometry.width, geometry.height, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());

    let mut location_label = Frame::default();
    location_label.set_frame(FrameType::ThinDownBox);
    location_label.set_color(Color::from_rgb(240, 240, 240));
    location_label.set_label_size(12);
    location_label.set_align(Align::Left | Align::Inside);
    flex.fixed(&location_label, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
        location_label,
    }
}

/// Current position and size, for the settings store.
pub fn window_geometry(wind: &Window) -> WindowGeometry {
    WindowGeometry {
        x: wind.x(),
        y: wind.y(),
        width: wind.w(),
        height: wind.h(),
    }
}
