//! Logging infrastructure for structured console and file output.

mod logger;
mod subscriber;
mod utils;

pub use logger::{Logger, TaskEntry, TaskStatus};
pub use subscriber::init_subscriber;
