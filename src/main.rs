// SPDX-License-Identifier: GPL-3.0-only

//! Softboard Main Application
//!
//! Opens a window showing the on-screen keyboard. Clicked keys are written to
//! the status line and logged.

use softboard::{app, app_settings};

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("softboard=info".parse().unwrap()),
        )
        .init();

    let settings = cosmic::app::Settings::default()
        .size(cosmic::iced::Size::new(
            app_settings::DEFAULT_WIDTH,
            app_settings::DEFAULT_HEIGHT,
        ))
        .size_limits(
            cosmic::iced::Limits::NONE
                .min_width(app_settings::MIN_WIDTH)
                .min_height(app_settings::MIN_HEIGHT),
        );

    // Starts the application's event loop with `()` as the application's flags.
    cosmic::app::run::<app::AppModel>(settings, ())
}
