//! Biobank Catalogue Studio - Desktop GUI Application
//!
//! A desktop application for browsing biobank catalogues and searching
//! their observable features.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message,
//! Update, View).

use iced::window;
use iced::Size;
use tracing_subscriber::EnvFilter;

use bcs_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Starting Biobank Catalogue Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(900.0, 600.0)),
            ..Default::default()
        })
        .run()
}
