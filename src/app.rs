// SPDX-License-Identifier: GPL-3.0-only

use crate::app_settings;
use crate::config::Config;
use crate::input::{ActivationId, FunctionKind, KeyRole};
use crate::keyboard::{event_channel, KeyboardController, KeyboardEvent};
use crate::layout::{load_layout_file, register_bundled_layouts, Layout, LayoutRegistry};
use crate::renderer::{render_keyboard, KeyGrid, RendererMessage};
use cosmic::cosmic_config::{self, CosmicConfigEntry};
use cosmic::iced::{window, Length, Subscription};
use cosmic::prelude::*;
use cosmic::widget;
use futures::channel::mpsc;

/// Keyboard state shared by the window: the layouts it can switch between,
/// the controller and the events it has produced.
pub struct KeyboardSession {
    registry: LayoutRegistry,
    keyboard: KeyboardController,
    events: mpsc::UnboundedReceiver<KeyboardEvent>,
    /// Everything written since startup.
    typed: String,
    /// Name of the most recently pressed key.
    last_pressed: Option<String>,
}

impl KeyboardSession {
    /// Builds the registry from the bundled layouts and the configured extra
    /// files, then shows the configured default layout.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = LayoutRegistry::new();
        register_bundled_layouts(&mut registry);

        for path in &config.extra_layouts {
            match load_layout_file(path, &registry) {
                Ok(layout) => registry.register(layout),
                Err(err) => tracing::error!("Skipping layout file: {}", err),
            }
        }

        Self::new(registry, &config.default_layout)
    }

    /// Creates a session over `registry` showing the layout named `initial`,
    /// or the first registered layout if there is none by that name.
    pub fn new(registry: LayoutRegistry, initial: &str) -> Self {
        let layout = registry
            .get(initial)
            .or_else(|| {
                tracing::warn!("Layout '{}' is not registered", initial);
                registry.iter().next()
            })
            .cloned()
            .unwrap_or_else(Layout::empty);

        let mut keyboard = KeyboardController::new(layout);
        let events = event_channel(&mut keyboard);

        Self {
            registry,
            keyboard,
            events,
            typed: String::new(),
            last_pressed: None,
        }
    }

    pub fn keyboard(&self) -> &KeyboardController {
        &self.keyboard
    }

    pub fn registry(&self) -> &LayoutRegistry {
        &self.registry
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn last_pressed(&self) -> Option<&str> {
        self.last_pressed.as_deref()
    }

    /// Forwards an activation to the controller. SWAP also moves to the next
    /// registered layout.
    pub fn activate(&mut self, id: ActivationId) {
        self.keyboard.activate(id);

        if id == ActivationId::Function(FunctionKind::Swap) {
            self.swap_layout();
        }

        self.drain_events();
    }

    /// Switches to the layout registered after the current one.
    pub fn swap_layout(&mut self) {
        let current = self.keyboard.current_layout().name();
        if let Some(next) = self.registry.next_after(current).cloned() {
            tracing::info!("Layout: {}", next.name());
            self.keyboard.set_layout(next);
        }
    }

    /// Shows the named layout if it is registered. Returns false otherwise.
    pub fn select_layout(&mut self, name: &str) -> bool {
        match self.registry.get(name).cloned() {
            Some(layout) => {
                self.keyboard.set_layout(layout);
                true
            }
            None => false,
        }
    }

    fn drain_events(&mut self) {
        while let Ok(Some(event)) = self.events.try_next() {
            match event {
                KeyboardEvent::Pressed(role) => {
                    tracing::debug!("Pressed {:?}", role);
                    self.last_pressed = pressed_name(&role);
                }
                KeyboardEvent::Text(text) => {
                    tracing::info!("Text {:?}", text);
                    self.typed.push_str(&text);
                }
            }
        }
    }
}

/// Display name of a pressed key: the function name, or the glyph of a
/// layout key. Glyph-less layout keys have none.
fn pressed_name(role: &KeyRole) -> Option<String> {
    match role.function() {
        Some(kind) => Some(kind.label().to_string()),
        None => role.definition().and_then(|key| key.glyph.clone()),
    }
}

/// The application model stores app-specific state used to describe its interface and
/// drive its logic.
pub struct AppModel {
    /// Application state which is managed by the COSMIC runtime.
    core: cosmic::Core,
    /// Configuration data that persists between application runs.
    config: Config,
    /// Layouts, controller and output.
    session: KeyboardSession,
    /// Physical key arrangement.
    grid: KeyGrid,
    /// Current window size in pixels.
    size: (f32, f32),
}

/// Messages emitted by the application and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key was clicked.
    Renderer(RendererMessage),
    /// Configuration has been updated.
    UpdateConfig(Config),
}

/// Create a COSMIC application from the app model
impl cosmic::Application for AppModel {
    /// The async executor that will be used to run your application's commands.
    type Executor = cosmic::executor::Default;

    /// Data that your application receives to its init method.
    type Flags = ();

    /// Messages which the application and its widgets will emit.
    type Message = Message;

    /// Unique identifier in RDNN (reverse domain name notation) format.
    const APP_ID: &'static str = app_settings::APP_ID;

    fn core(&self) -> &cosmic::Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut cosmic::Core {
        &mut self.core
    }

    /// Initializes the application with any given flags and startup commands.
    fn init(core: cosmic::Core, _flags: Self::Flags) -> (Self, Task<cosmic::Action<Self::Message>>) {
        let config = cosmic_config::Config::new(Self::APP_ID, Config::VERSION)
            .map(|context| match Config::get_entry(&context) {
                Ok(config) => config,
                Err((_errors, config)) => config,
            })
            .unwrap_or_default();

        let session = KeyboardSession::from_config(&config);
        tracing::info!(
            "Loaded {} layouts, showing '{}'",
            session.registry().len(),
            session.keyboard().current_layout().name()
        );

        let app = AppModel {
            core,
            config,
            session,
            grid: KeyGrid::standard(),
            size: (app_settings::DEFAULT_WIDTH, app_settings::DEFAULT_HEIGHT),
        };

        (app, Task::none())
    }

    /// Describes the interface based on the current state of the application model.
    fn view(&self) -> Element<'_, Self::Message> {
        let (width, height) = self.size;

        let status = widget::text::body(format!(
            "{}  [{}]  {}",
            self.session.keyboard().current_layout().name(),
            self.session.last_pressed().unwrap_or_default(),
            self.session.typed()
        ));

        let keys = render_keyboard(
            &self.grid,
            self.session.keyboard(),
            width,
            (height - app_settings::STATUS_HEIGHT).max(0.0),
        )
        .map(Message::Renderer);

        widget::column::column()
            .push(
                widget::container(status)
                    .padding([4, 8])
                    .height(Length::Fixed(app_settings::STATUS_HEIGHT)),
            )
            .push(keys)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Register subscriptions for this application.
    fn subscription(&self) -> Subscription<Self::Message> {
        self.core()
            .watch_config::<Config>(Self::APP_ID)
            .map(|update| Message::UpdateConfig(update.config))
    }

    /// Handles messages emitted by the application and its widgets.
    fn update(&mut self, message: Self::Message) -> Task<cosmic::Action<Self::Message>> {
        match message {
            Message::Renderer(RendererMessage::Activate(id)) => {
                self.session.activate(id);
            }
            Message::UpdateConfig(config) => {
                if config.default_layout != self.config.default_layout
                    && !self.session.select_layout(&config.default_layout)
                {
                    tracing::warn!("Configured layout '{}' is not registered", config.default_layout);
                }
                self.config = config;
            }
        }

        Task::none()
    }

    /// Called when a window is resized.
    fn on_window_resize(&mut self, _id: window::Id, width: f32, height: f32) {
        self.size = (width, height);
        tracing::debug!("on_window_resize: {}x{}", width, height);
    }
}
