//! Desktop window for `batmon`.
//!
//! Owns the Iced application loop and wires together:
//! - the battery reader, polled on a timer and on the Refresh button
//! - the config file watcher (live reload on change)

use batmon_config::{default_path, load as load_config, MonitorConfig, SensorConfig, WindowConfig};
use batmon_core::{event::Message, state::AppState};
use batmon_system::{BatteryReader, PlatformSensor, PowerSensor};
use batmon_theme::{style, Theme};
use batmon_widgets::{ControlsWidget, DetailsWidget, GaugeWidget, Readout, StatusWidget};
use chrono::Local;
use futures::channel::mpsc::Sender;
use iced::{
    font::Weight,
    widget::{column, container, text},
    Element, Font, Length, Size, Subscription, Task,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn};

/// Sensor handed to the reader; boxed so tests can substitute a fake.
type Sensor = Box<dyn PowerSensor + Send>;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the monitor window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let config_path = default_path();
    let config = load_config(&config_path).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        MonitorConfig::default()
    });
    let window = window_settings(&config.window);

    iced::application(
        move || Monitor::new(config.clone(), config_path.clone()),
        Monitor::update,
        Monitor::view,
    )
    .title(Monitor::title)
    .subscription(Monitor::subscription)
    .style(Monitor::style)
    .window(window)
    .run()
}

/// Initial size, minimum size and resizability from `[window]`.
fn window_settings(cfg: &WindowConfig) -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(cfg.width.max(cfg.min_width), cfg.height.max(cfg.min_height)),
        min_size: Some(Size::new(cfg.min_width, cfg.min_height)),
        resizable: cfg.resizable,
        ..iced::window::Settings::default()
    }
}

/// The OS battery API, or a sysfs directory when `[sensor]` names one.
fn platform_sensor(cfg: &SensorConfig) -> Sensor {
    #[cfg(target_os = "linux")]
    if let Some(path) = &cfg.power_supply_path {
        info!("Reading batteries from {}", path.display());
        return Box::new(batmon_system::SysfsSensor::new(path));
    }

    #[cfg(not(target_os = "linux"))]
    if cfg.power_supply_path.is_some() {
        warn!("[sensor] power_supply_path is only supported on Linux; ignoring");
    }

    Box::new(PlatformSensor::new())
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Monitor {
    reader:      BatteryReader<Sensor>,
    config_path: PathBuf,
    state:    AppState,
    readout:  Readout,
    config:   MonitorConfig,
    theme:    Theme,
    gauge:    GaugeWidget,
    status:   StatusWidget,
    details:  DetailsWidget,
    controls: ControlsWidget,
}

impl Monitor {
    fn new(config: MonitorConfig, config_path: PathBuf) -> (Self, Task<Message>) {
        let sensor = platform_sensor(&config.sensor);
        (Self::with_sensor(config, config_path, sensor), Task::none())
    }

    /// Build the window state around `sensor` and take the first reading.
    /// `config_path` is re-read on every `ConfigReloaded`.
    fn with_sensor(config: MonitorConfig, config_path: PathBuf, sensor: Sensor) -> Self {
        let theme = Theme::from_config(&config.theme, config.thresholds);

        let mut monitor = Self {
            reader:   BatteryReader::new(sensor),
            config_path,
            state:    AppState::default(),
            readout:  Readout::pending(),
            config,
            theme,
            gauge:    GaugeWidget::new(),
            status:   StatusWidget::new(),
            details:  DetailsWidget::new(),
            controls: ControlsWidget::new(),
        };
        monitor.refresh();
        monitor
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick | Message::RefreshRequested => self.refresh(),
            Message::ConfigReloaded => self.reload_config(),
        }
        Task::none()
    }

    /// Pull a fresh record from the reader.  A reader error switches the
    /// window to its error state instead of tearing anything down.
    fn refresh(&mut self) {
        let result = self.reader.get_status();
        if let Err(e) = &result {
            error!("Battery refresh failed: {e}");
        }
        self.state.apply(result, Local::now());
        self.readout = Readout::from_reading(&self.state.reading);
    }

    fn reload_config(&mut self) {
        match load_config(&self.config_path) {
            Ok(cfg) => {
                info!("Config reloaded");
                if cfg.sensor != self.config.sensor {
                    warn!("[sensor] changes take effect after a restart");
                }
                self.theme  = Theme::from_config(&cfg.theme, cfg.thresholds);
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let theme = &self.theme;

        let heading = text(&self.config.window.title)
            .size(theme.title_size)
            .font(Font { weight: Weight::Bold, ..Font::DEFAULT });

        let content = column![
            heading,
            self.gauge.view(&self.readout, theme),
            self.status.view(&self.readout, theme),
            self.details.view(&self.readout, theme),
            self.controls.view(self.state.last_updated, theme),
        ]
        .spacing(theme.spacing as f32);

        container(content)
            .padding(30)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::window(theme))
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(self.config.general.refresh_interval()).map(|_| Message::Tick);

        Subscription::batch([tick, Subscription::run(config_stream)])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/batmon/batmon.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let mut rx = batmon_config::watch(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up; stall rather than end the subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
