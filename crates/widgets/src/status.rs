use crate::readout::Readout;
use batmon_core::event::Message;
use batmon_theme::{style, Theme};
use iced::{
    font::Weight,
    widget::{column, container, text},
    Element, Font, Length,
};

/// Charge status and estimated time remaining.
#[derive(Debug, Default)]
pub struct StatusWidget;

impl StatusWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, readout: &'a Readout, theme: &'a Theme) -> Element<'a, Message> {
        let status = text(&readout.status)
            .size(theme.font_size)
            .font(Font { weight: Weight::Bold, ..Font::DEFAULT })
            .color(readout.status_color(theme).to_iced());
        let time = text(&readout.time).size(theme.font_size);

        container(column![status, time].spacing(8.0))
            .padding(theme.padding)
            .width(Length::Fill)
            .style(style::card(theme))
            .into()
    }
}
