use batmon_core::event::Message;
use batmon_theme::{style, Theme};
use chrono::{DateTime, Local};
use iced::{
    widget::{button, column, container, text},
    Element, Length,
};
use std::fmt::Write as _;

const FALLBACK_TIME_FORMAT: &str = "%H:%M:%S";

/// Manual Refresh button with the time of the last refresh below it.
#[derive(Debug, Default)]
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(
        &'a self,
        last_updated: Option<DateTime<Local>>,
        theme: &'a Theme,
    ) -> Element<'a, Message> {
        let refresh = button(
            container(text("Refresh").size(theme.font_size)).center_x(Length::Fill),
        )
        .on_press(Message::RefreshRequested)
        .padding([12, 24])
        .width(Length::Fill)
        .style(style::accent_button(theme));

        let footer = text(last_updated_label(last_updated, &theme.time_format))
            .size(theme.font_size - 2.0)
            .color(theme.foreground.with_alpha(0.6).to_iced());

        column![refresh, container(footer).center_x(Length::Fill)]
            .spacing(8.0)
            .into()
    }
}

/// `"Last updated: 14:02:31"`, or `"Last updated: never"` before the first
/// refresh.  An invalid `format` falls back to `%H:%M:%S`.
pub fn last_updated_label(at: Option<DateTime<Local>>, format: &str) -> String {
    let Some(at) = at else {
        return "Last updated: never".to_string();
    };

    let mut out = String::from("Last updated: ");
    if write!(out, "{}", at.format(format)).is_err() {
        tracing::warn!("invalid time_format '{format}'; using {FALLBACK_TIME_FORMAT}");
        out.truncate("Last updated: ".len());
        let _ = write!(out, "{}", at.format(FALLBACK_TIME_FORMAT));
    }
    out
}
