//! Activity feed of session events.
//!
//! Every entry is forwarded to the `log` facade and broadcast to subscribers
//! (the CLI renders them; the page relies on the console logger).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Capacity of the broadcast channel.
const FEED_CAPACITY: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ActivityLevel {
    /// Prefix used by terminal renderers.
    pub fn prefix(&self) -> &'static str {
        match self {
            ActivityLevel::Info => "  ",
            ActivityLevel::Success => "  ✓",
            ActivityLevel::Warning => "  ⚠️",
            ActivityLevel::Error => "  ❌",
        }
    }

    fn log_level(&self) -> log::Level {
        match self {
            ActivityLevel::Info | ActivityLevel::Success => log::Level::Info,
            ActivityLevel::Warning => log::Level::Warn,
            ActivityLevel::Error => log::Level::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub level: ActivityLevel,
    pub message: String,
    /// Nesting depth for display
    #[serde(default)]
    pub indent: u8,
}

impl ActivityEntry {
    pub fn new(level: ActivityLevel, message: impl Into<String>) -> Self {
        Self { level, message: message.into(), indent: 0 }
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }

    /// One terminal line, indented and prefixed.
    pub fn render(&self) -> String {
        format!(
            "{}{} {}",
            "   ".repeat(self.indent as usize),
            self.level.prefix(),
            self.message
        )
    }
}

/// Process-wide feed.
pub static ACTIVITY: Lazy<ActivityFeed> = Lazy::new(|| ActivityFeed::with_capacity(FEED_CAPACITY));

/// Broadcast side of the feed. Receivers that fall behind lose the oldest
/// entries and are told how many.
pub struct ActivityFeed {
    sender: broadcast::Sender<ActivityEntry>,
}

impl ActivityFeed {
    fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, entry: ActivityEntry) {
        log::log!(entry.level.log_level(), "{}", entry.message);
        // No subscriber is fine
        let _ = self.sender.send(entry);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ActivityEntry> {
        self.sender.subscribe()
    }
}

/// Publish a top-level entry on [`ACTIVITY`].
pub fn record(level: ActivityLevel, message: impl Into<String>) {
    ACTIVITY.publish(ActivityEntry::new(level, message));
}

/// Publish a nested detail line on [`ACTIVITY`].
pub fn record_detail(message: impl Into<String>) {
    ACTIVITY.publish(ActivityEntry::new(ActivityLevel::Info, message).with_indent(1));
}

/// Collect every entry already waiting on a receiver.
pub fn drain(rx: &mut broadcast::Receiver<ActivityEntry>) -> Vec<ActivityEntry> {
    let mut entries = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(entry) => entries.push(entry),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                entries.push(ActivityEntry::new(
                    ActivityLevel::Warning,
                    format!("{} activity entries dropped", skipped),
                ));
            }
            Err(_) => break,
        }
    }
    entries
}
