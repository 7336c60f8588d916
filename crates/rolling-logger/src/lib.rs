//! Rolling Logger
//!
//! A `tracing` layer that keeps the most recent records in a bounded
//! in-memory buffer and forwards every record to a pluggable output.
//! The buffer is circular: once full, the oldest record is evicted.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tracing::field::{Field, Visit};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Default number of records kept in memory
pub const DEFAULT_CAPACITY: usize = 256;

/// One captured log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
    /// Structured fields in the order they were recorded
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Look up a structured field by name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )?;
        for (key, value) in &self.fields {
            write!(f, " {}={}", key, value)?;
        }
        Ok(())
    }
}

/// Fixed-capacity circular buffer of records
#[derive(Debug)]
pub struct RollingBuffer {
    records: VecDeque<LogRecord>,
    capacity: usize,
    evicted: u64,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, record: LogRecord) {
        if self.records.len() == self.capacity {
            self.records.pop_front();
            self.evicted += 1;
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of records pushed out since creation
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Records from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &LogRecord> {
        self.records.iter()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Shared read access to the buffer a layer writes into
#[derive(Clone, Debug)]
pub struct RollingHandle {
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl RollingHandle {
    fn lock(&self) -> MutexGuard<'_, RollingBuffer> {
        // A panic while holding the lock leaves the buffer intact
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Copy of the buffered records, oldest first
    pub fn snapshot(&self) -> Vec<LogRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn evicted(&self) -> u64 {
        self.lock().evicted()
    }

    /// Buffered records at exactly `level`
    pub fn records_at(&self, level: Level) -> Vec<LogRecord> {
        self.lock().iter().filter(|r| r.level == level).cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

/// Where each record goes besides the buffer (e.g. the browser console)
pub type Output = Arc<dyn Fn(&LogRecord) + Send + Sync>;

/// `tracing` layer feeding a [`RollingBuffer`]
pub struct RollingLayer {
    handle: RollingHandle,
    output: Option<Output>,
    min_level: Level,
}

impl RollingLayer {
    /// Create a layer and the handle used to read what it captures
    pub fn new(capacity: usize) -> (Self, RollingHandle) {
        let handle = RollingHandle {
            buffer: Arc::new(Mutex::new(RollingBuffer::new(capacity))),
        };
        let layer = Self {
            handle: handle.clone(),
            output: None,
            min_level: Level::TRACE,
        };
        (layer, handle)
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Drop events more verbose than `level`
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // tracing orders levels by verbosity: TRACE > DEBUG > ... > ERROR
        if *meta.level() > self.min_level {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let record = LogRecord {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.message,
            fields: visitor.fields,
        };

        if let Some(output) = &self.output {
            output(&record);
        }
        self.handle.lock().push(record);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn put(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{:?}", value));
    }
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub capacity: usize,
    pub min_level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            min_level: Level::INFO,
        }
    }
}

/// Install a global subscriber made of a single [`RollingLayer`].
///
/// Fails if a global subscriber is already set.
pub fn init(config: LoggerConfig, output: Output) -> Result<RollingHandle, TryInitError> {
    let (layer, handle) = RollingLayer::new(config.capacity);
    let layer = layer.with_output(output).with_min_level(config.min_level);
    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(handle)
}

/// Capture records on the current thread until the guard is dropped.
///
/// Nothing is forwarded; read the records back through the handle.
pub fn capture(capacity: usize) -> (DefaultGuard, RollingHandle) {
    let (layer, handle) = RollingLayer::new(capacity);
    let guard = tracing::subscriber::set_default(tracing_subscriber::registry().with(layer));
    (guard, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn record(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = RollingBuffer::new(2);
        buffer.push(record("a"));
        buffer.push(record("b"));
        buffer.push(record("c"));

        let messages: Vec<_> = buffer.iter().map(|r| r.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
        assert_eq!(buffer.evicted(), 1);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push(record("a"));
        buffer.push(record("b"));
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let (layer, handle) = RollingLayer::new(8);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(offset = 20, reason = "timeout", "page load failed");
        });

        let records = handle.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, Level::ERROR);
        assert_eq!(records[0].message, "page load failed");
        assert_eq!(records[0].field("offset"), Some("20"));
        assert_eq!(records[0].field("reason"), Some("timeout"));
    }

    #[test]
    fn test_min_level_filters_verbose_events() {
        let (layer, handle) = RollingLayer::new(8);
        let subscriber = tracing_subscriber::registry().with(layer.with_min_level(Level::WARN));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("ignored");
            tracing::debug!("ignored too");
            tracing::warn!("kept");
            tracing::error!("kept as well");
        });

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.records_at(Level::WARN).len(), 1);
        assert_eq!(handle.records_at(Level::ERROR).len(), 1);
    }

    #[test]
    fn test_output_receives_every_record() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        let (layer, handle) = RollingLayer::new(1);
        let layer = layer.with_output(Arc::new(move |_record: &LogRecord| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("one");
            tracing::info!("two");
            tracing::info!("three");
        });

        assert_eq!(seen.load(Ordering::SeqCst), 3);
        assert_eq!(handle.len(), 1);
        assert_eq!(handle.evicted(), 2);
    }

    #[test]
    fn test_capture_is_scoped_to_guard() {
        let (guard, handle) = capture(4);
        tracing::warn!("while captured");
        drop(guard);
        tracing::warn!("after release");

        let records = handle.snapshot();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "while captured");
    }

    #[test]
    fn test_display_line() {
        let mut rec = record("loaded");
        rec.fields.push(("count".to_string(), "3".to_string()));
        let line = rec.to_string();
        assert!(line.contains(" INFO test: loaded count=3"));
    }
}
