pub mod timestamp;

pub use timestamp::{iso8601_now, timestamp_now_ms};
