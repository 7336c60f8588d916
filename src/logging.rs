//! Browser Logging
//!
//! Routes `tracing` events through the rolling logger into the devtools
//! console.

use std::sync::Arc;

use rolling_logger::{LogRecord, LoggerConfig, Output};
use tracing::Level;
use wasm_bindgen::JsValue;

fn console_output() -> Output {
    Arc::new(|record: &LogRecord| {
        let line = JsValue::from(record.to_string());
        match record.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    })
}

/// Install the global subscriber once at startup
pub fn init() {
    if let Err(e) = rolling_logger::init(LoggerConfig::default(), console_output()) {
        web_sys::console::warn_1(&format!("[LOG] subscriber already installed: {}", e).into());
    }
}
