// SPDX-License-Identifier: MPL-2.0
//! Demo application wiring the message flow into an iced window.
//!
//! The `App` owns a single [`Flow`], forwards toast input to it and drives
//! its clock from a frame subscription while anything is animating.
//!
//! ```no_run
//! use messg::app::{self, Flags};
//!
//! fn main() -> iced::Result {
//!     app::run(Flags::default())
//! }
//! ```

pub mod message;
mod subscription;
mod view;

pub use message::{DelayPreset, Flags, Message};

use crate::config::{self, Config, Settings};
use crate::flow::{self, Event, Flow, MessageType};
use crate::ui::design_tokens::sizing;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::cell::RefCell;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

/// Delay used for notices raised by the demo itself.
const NOTICE_DELAY_MS: u64 = 5000;

/// Root application state.
pub struct App {
    flow: Flow,
    /// Number of messages spawned from the panel, used to label them.
    spawned: u64,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("settings", self.flow.settings())
            .field("spawned", &self.spawned)
            .finish()
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(
            sizing::CONTROL_PANEL_WIDTH + sizing::TOAST_WIDTH,
            MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the demo.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires Fn for boot; flags are handed over exactly once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line flags on top of the loaded configuration.
///
/// A `max` or `delay` of `0` clears the corresponding limit.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(position) = flags.position {
        config.flow.position = Some(position);
    }
    if let Some(max) = flags.max {
        config.flow.max = (max > 0).then_some(max);
    }
    if let Some(delay) = flags.delay {
        config.flow.delay = (delay > 0).then_some(delay);
    }
    if let Some(speed) = flags.speed {
        config.flow.speed = Some(speed);
    }
    if flags.no_flow {
        config.flow.flow = Some(false);
    }
}

impl App {
    /// Initializes application state from the config file and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        apply_flags(&mut config, &flags);

        let mut app = Self::with_settings(Settings::from(&config));
        tracing::info!(settings = ?app.flow.settings(), "flow configured");

        if let Some(warning) = config_warning {
            tracing::warn!(%warning, "using default settings");
            app.notify(flow::warning(warning, Some(NOTICE_DELAY_MS)));
        }

        (app, Task::none())
    }

    /// Creates the application around an already resolved configuration.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            flow: Flow::new(settings),
            spawned: 0,
        }
    }

    #[must_use]
    pub fn flow(&self) -> &Flow {
        &self.flow
    }

    fn title(&self) -> String {
        "messg".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.flow.is_animating())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();

        match message {
            Message::Flow(action) => {
                let events = self.flow.update(&action);
                log_events(&events);
            }
            Message::Spawn(kind) => {
                self.spawned += 1;
                let text = format!("{} message #{}", kind, self.spawned);
                self.flow.push(flow::Message::new(text, kind), now);
            }
            Message::SpawnWithButtons => {
                self.spawned += 1;
                let text = format!("Remove item #{}?", self.spawned);
                self.flow
                    .push(flow::Message::new(text, MessageType::Warning), now)
                    .button("Undo", |label| tracing::info!(label, "undo requested"))
                    .dismiss_button("Keep")
                    .on_hide(|| tracing::debug!("confirmation closed"));
            }
            Message::PositionSelected(position) => {
                self.flow.settings_mut().position = position;
            }
            Message::FlowToggled(enabled) => {
                self.flow.settings_mut().flow = enabled;
            }
            Message::IncreaseMax => {
                let settings = self.flow.settings_mut();
                settings.max = Some(settings.max.map_or(1, |max| max + 1));
            }
            Message::DecreaseMax => {
                let settings = self.flow.settings_mut();
                settings.max = match settings.max {
                    Some(max) if max > 1 => Some(max - 1),
                    _ => None,
                };
            }
            Message::DelaySelected(preset) => {
                self.flow.settings_mut().delay = preset.millis();
            }
            Message::Clean => self.flow.clean(now),
            Message::Reposition => self.flow.reposition(now),
            Message::SaveSettings => {
                match config::save(&self.flow.settings().to_config()) {
                    Ok(()) => self.notify(flow::success("Settings saved", Some(NOTICE_DELAY_MS))),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to save settings");
                        self.notify(flow::error(err.to_string(), Some(NOTICE_DELAY_MS)));
                    }
                }
            }
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.flow)
    }

    fn notify(&mut self, message: flow::Message) {
        self.flow.push(message, Instant::now());
    }
}

fn log_events(events: &[Event]) {
    for event in events {
        match event {
            Event::ButtonPressed { id, label } => {
                tracing::info!(?id, %label, "button pressed");
            }
            other => tracing::trace!(event = ?other, "flow event"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{Action, Position};

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    fn first_visible(app: &App) -> flow::MessageId {
        app.flow()
            .visible(Position::Top)
            .next()
            .map(|message| message.id())
            .expect("a visible message")
    }

    #[test]
    fn spawn_shows_message_at_configured_position() {
        let mut app = app();
        let _ = app.update(Message::PositionSelected(Position::BottomRight));
        let _ = app.update(Message::Spawn(MessageType::Success));

        assert_eq!(app.flow().visible_count(Position::BottomRight), 1);
        assert_eq!(app.flow().visible_count(Position::Top), 0);
    }

    #[test]
    fn max_steps_between_unlimited_and_limits() {
        let mut app = app();
        let _ = app.update(Message::IncreaseMax);
        assert_eq!(app.flow().settings().max, Some(1));
        let _ = app.update(Message::IncreaseMax);
        assert_eq!(app.flow().settings().max, Some(2));
        let _ = app.update(Message::DecreaseMax);
        let _ = app.update(Message::DecreaseMax);
        assert_eq!(app.flow().settings().max, None);
    }

    #[test]
    fn max_defers_additional_spawns() {
        let mut app = app();
        let _ = app.update(Message::IncreaseMax);
        let _ = app.update(Message::Spawn(MessageType::Info));
        let _ = app.update(Message::Spawn(MessageType::Info));

        assert_eq!(app.flow().visible_count(Position::Top), 1);
        assert_eq!(app.flow().deferred_count(Position::Top), 1);
    }

    #[test]
    fn delay_preset_updates_global_delay() {
        let mut app = app();
        let _ = app.update(Message::DelaySelected(DelayPreset::Medium));
        assert_eq!(app.flow().settings().delay, Some(3000));
        let _ = app.update(Message::DelaySelected(DelayPreset::Off));
        assert_eq!(app.flow().settings().delay, None);
    }

    #[test]
    fn flow_toggle_updates_settings() {
        let mut app = app();
        let _ = app.update(Message::FlowToggled(false));
        assert!(!app.flow().settings().flow);
    }

    #[test]
    fn dismiss_action_hides_message() {
        let mut app = app();
        let _ = app.update(Message::Spawn(MessageType::Error));
        let id = first_visible(&app);

        let _ = app.update(Message::Flow(Action::Dismiss(id)));
        assert!(app.flow().is_hidden(id));
    }

    #[test]
    fn spawn_with_buttons_attaches_two_buttons() {
        let mut app = app();
        let _ = app.update(Message::SpawnWithButtons);
        let id = first_visible(&app);

        let labels: Vec<&str> = app
            .flow()
            .get(id)
            .map(|message| message.buttons().iter().map(|b| b.label()).collect())
            .unwrap_or_default();
        assert_eq!(labels, vec!["Undo", "Keep"]);
    }

    #[test]
    fn clean_hides_everything() {
        let mut app = app();
        let _ = app.update(Message::Spawn(MessageType::Info));
        let _ = app.update(Message::Spawn(MessageType::Warning));
        let ids: Vec<_> = app.flow().visible(Position::Top).map(|m| m.id()).collect();

        let _ = app.update(Message::Clean);
        assert!(ids.iter().all(|id| app.flow().is_hidden(*id)));
    }

    #[test]
    fn apply_flags_overrides_config() {
        let mut config = Config::default();
        let flags = Flags {
            position: Some(Position::BottomLeft),
            max: Some(2),
            delay: Some(0),
            speed: Some(100),
            no_flow: true,
            config_dir: None,
        };
        apply_flags(&mut config, &flags);

        let settings = Settings::from(&config);
        assert_eq!(settings.position, Position::BottomLeft);
        assert_eq!(settings.max, Some(2));
        assert_eq!(settings.delay, None);
        assert_eq!(settings.speed, 100);
        assert!(!settings.flow);
    }

    #[test]
    fn apply_flags_zero_max_means_unlimited() {
        let mut config = Config::default();
        config.flow.max = Some(4);
        apply_flags(
            &mut config,
            &Flags {
                max: Some(0),
                ..Flags::default()
            },
        );
        assert_eq!(config.flow.max, None);
    }
}
