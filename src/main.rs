mod api;
mod app;
mod application;
mod domain;
mod ui;
mod utils;

use iced::window;

fn main() -> iced::Result {
    // RUST_LOG controls diagnostic output; failures are logged here and
    // shown to the user only as a generic message.
    env_logger::init();

    iced::application(app::DownloadApp::default, app::update, app::view)
        .title("Please Download!")
        .window(window::Settings {
            size: iced::Size::new(680.0, 560.0),
            ..Default::default()
        })
        .run()
}
