pub mod controls;
pub mod details;
pub mod gauge;
pub mod readout;
pub mod status;

pub use controls::ControlsWidget;
pub use details::DetailsWidget;
pub use gauge::GaugeWidget;
pub use readout::{Readout, Tone};
pub use status::StatusWidget;
