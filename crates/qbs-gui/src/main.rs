//! Question Bank Studio - Desktop GUI Application
//!
//! A desktop application for browsing an educational question bank: narrow
//! the class → subject → chapter → topic taxonomy plus difficulty and type
//! facets, scan the matching questions, and inspect one question's content
//! and worked solution.
//!
//! Built with Iced using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use qbs_gui::app::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Question Bank Studio");

    // Run the Iced application using the builder pattern
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1280.0, 800.0),
            min_size: Some(Size::new(1024.0, 600.0)),
            ..Default::default()
        })
        .run()
}
