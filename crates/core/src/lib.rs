pub mod error;
pub mod event;
pub mod state;
pub mod status;

pub use error::{BatmonError, RecordError, Result};
pub use event::Message;
pub use state::{AppState, Reading};
pub use status::{BatteryStatus, ChargeStatus};
