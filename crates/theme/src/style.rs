use crate::{colors::Color, Theme};
use batmon_config::ThresholdConfig;
use iced::{
    widget::{button, container, progress_bar},
    Background, Border,
};

/// Color band a charge percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelBand {
    Warning,
    Caution,
    Nominal,
}

impl LevelBand {
    /// Bands are inclusive at the top: 20 % is still `Warning` by default.
    pub fn for_percentage(pct: u8, thresholds: ThresholdConfig) -> Self {
        let t = thresholds.normalized();
        if pct <= t.warning {
            Self::Warning
        } else if pct <= t.caution {
            Self::Caution
        } else {
            Self::Nominal
        }
    }
}

/// Rounded card behind each section.
pub fn card(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let surface = theme.surface.to_iced();
    let border  = theme.border.to_iced();
    let radius  = theme.border_radius;
    move |_: &iced::Theme| container::Style {
        background: Some(Background::Color(surface)),
        border: Border { radius: radius.into(), width: 1.0, color: border },
        ..Default::default()
    }
}

/// Window background.
pub fn window(theme: &Theme) -> impl Fn(&iced::Theme) -> container::Style {
    let background = theme.background.to_iced();
    let foreground = theme.foreground.to_iced();
    move |_: &iced::Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(foreground),
        ..Default::default()
    }
}

/// Gauge track in the window color, filled with `fill`.
pub fn gauge(theme: &Theme, fill: Color) -> impl Fn(&iced::Theme) -> progress_bar::Style {
    let track  = theme.background.to_iced();
    let border = theme.surface.to_iced();
    move |_: &iced::Theme| progress_bar::Style {
        background: Background::Color(track),
        bar: Background::Color(fill.to_iced()),
        border: Border { radius: 8.0.into(), width: 2.0, color: border },
    }
}

/// Accent-colored Refresh button, lighter on hover and darker when pressed.
pub fn accent_button(theme: &Theme) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
    let accent = theme.accent;
    let text   = theme.foreground.to_iced();
    move |_: &iced::Theme, status: button::Status| {
        let fill = match status {
            button::Status::Hovered => lighten(accent, 0.12),
            button::Status::Pressed => lighten(accent, -0.12),
            _ => accent,
        };
        button::Style {
            background: Some(Background::Color(fill.to_iced())),
            text_color: text,
            border: Border { radius: 8.0.into(), ..Default::default() },
            ..Default::default()
        }
    }
}

fn lighten(c: Color, amount: f32) -> Color {
    Color {
        r: (c.r + amount).clamp(0.0, 1.0),
        g: (c.g + amount).clamp(0.0, 1.0),
        b: (c.b + amount).clamp(0.0, 1.0),
        a: c.a,
    }
}
