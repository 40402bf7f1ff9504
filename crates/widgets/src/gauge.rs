use crate::readout::Readout;
use batmon_core::event::Message;
use batmon_theme::{style, Theme};
use iced::{
    font::Weight,
    widget::{column, container, progress_bar, text},
    Element, Font, Length,
};

/// Charge gauge with the large percentage label underneath.
#[derive(Debug, Default)]
pub struct GaugeWidget;

impl GaugeWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, readout: &'a Readout, theme: &'a Theme) -> Element<'a, Message> {
        let color = readout.color(theme);

        let bar = progress_bar(0.0..=100.0, f32::from(readout.gauge))
            .style(style::gauge(theme, color));

        let label = container(
            text(&readout.percentage)
                .size(theme.percentage_size)
                .font(Font { weight: Weight::Bold, ..Font::DEFAULT })
                .color(color.to_iced()),
        )
        .center_x(Length::Fill);

        container(column![bar, label].spacing(theme.spacing as f32))
            .padding(theme.padding)
            .width(Length::Fill)
            .style(style::card(theme))
            .into()
    }
}
