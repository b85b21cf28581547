mod events;
mod producer;
mod workspace;

pub use events::{CapturedEvent, capture_events};
pub use producer::{Step, step, write_event_log, write_tracking_log};
pub use workspace::TestDir;
