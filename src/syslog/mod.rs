//! The on-screen system log.
//!
//! Screens report user actions through a [`LogSink`] handed to them at
//! construction. The app drains the sink's channel into a bounded
//! [`SystemLog`] that the log panel renders.

mod buffer;
mod sink;

pub use buffer::{SystemLog, DEFAULT_LOG_CAPACITY};
pub use sink::{ChannelLogSink, LogEntry, LogSink};
