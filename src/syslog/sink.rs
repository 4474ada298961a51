use chrono::{DateTime, Local};
use tokio::sync::mpsc;

/// A single user action, as shown in the log panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub action: String,
    pub path: Option<String>,
}

impl LogEntry {
    pub fn new(action: impl Into<String>, path: Option<&str>) -> Self {
        Self {
            timestamp: Local::now(),
            action: action.into(),
            path: path.map(str::to_string),
        }
    }

    /// Local wall-clock time as `HH:MM:SS`
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Destination for user-action log entries
pub trait LogSink: Send + Sync {
    fn emit(&self, action: &str, path: Option<&str>);
}

/// Forwards entries to the app event loop over an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelLogSink {
    tx: mpsc::UnboundedSender<LogEntry>,
}

impl ChannelLogSink {
    /// Create a sink together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<LogEntry>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl LogSink for ChannelLogSink {
    fn emit(&self, action: &str, path: Option<&str>) {
        tracing::info!(action, path = path.unwrap_or(""), "user action");
        if self.tx.send(LogEntry::new(action, path)).is_err() {
            tracing::debug!(action, "Log receiver dropped; entry discarded");
        }
    }
}
