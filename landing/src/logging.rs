//! Browser console logging.
//!
//! A `tracing-subscriber` fmt layer whose writer hands every formatted line
//! to `console.*`, picked by level so the devtools filters keep working.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

/// Install the global subscriber. Safe to call twice; the second call is a no-op.
pub fn init() {
    let max_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    // wasm32-unknown-unknown has no system clock for the default timer
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(max_level)
        .without_time()
        .with_target(true)
        .try_init();

    if installed.is_ok() {
        print_banner();
    }
}

/// Styled greeting for anyone who opens devtools.
fn print_banner() {
    web_sys::console::log_2(
        &JsValue::from_str("%cStormSense"),
        &JsValue::from_str("color: #60a5fa; font-size: 20px; font-weight: bold;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str("%cAdvanced Weather Intelligence for Storm Preparedness"),
        &JsValue::from_str("color: #94a3b8;"),
    );
}

#[derive(Debug, Clone, Copy, Default)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::with_capacity(128),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let message = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
    }
}
