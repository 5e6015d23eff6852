//! Tracing output for the browser.
//!
//! A `tracing-subscriber` fmt subscriber formats each event into a buffer that
//! is flushed to the devtools console as one line. Timestamps are dropped
//! because the console stamps lines itself.

use std::io;

use tracing::Level;
use wasm_bindgen::JsValue;

/// One formatted event; written to `console.log` when dropped.
#[derive(Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
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
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

/// Install the console subscriber. Later calls are no-ops.
pub fn init_tracing(level: Level) {
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .without_time()
        .with_ansi(false)
        .with_target(true)
        .with_writer(ConsoleWriter::default)
        .try_init();
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
