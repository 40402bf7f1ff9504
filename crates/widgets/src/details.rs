use crate::readout::Readout;
use batmon_core::event::Message;
use batmon_theme::{style, Theme};
use iced::{
    widget::{column, container, text},
    Element, Length,
};

/// Battery health and power-supply source.
#[derive(Debug, Default)]
pub struct DetailsWidget;

impl DetailsWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, readout: &'a Readout, theme: &'a Theme) -> Element<'a, Message> {
        let health = text(&readout.health).size(theme.font_size);
        let power  = text(&readout.power).size(theme.font_size);

        container(column![health, power].spacing(8.0))
            .padding(theme.padding)
            .width(Length::Fill)
            .style(style::card(theme))
            .into()
    }
}
