//! Crash sinks — the reporting backends tagged lines are sent to.
//!
//! A sink exposes exactly one operation, [`CrashSink::log`]. It is
//! fire-and-forget from the mirror's point of view: nothing is read back.

use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Failure reported by a crash sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// A crash/log reporting backend.
pub trait CrashSink {
    /// Record one tagged line.
    fn log(&self, message: &str) -> Result<(), SinkError>;
}

impl<S: CrashSink + ?Sized> CrashSink for &S {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        (**self).log(message)
    }
}

impl<S: CrashSink + ?Sized> CrashSink for Box<S> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        (**self).log(message)
    }
}

impl<S: CrashSink + ?Sized> CrashSink for Arc<S> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        (**self).log(message)
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// Keeps every line in memory. Handy in tests and for in-process inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines received so far, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|lines| lines.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|lines| lines.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }
}

impl CrashSink for MemorySink {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        self.lines
            .lock()
            .map_err(|_| SinkError::Unavailable("memory sink lock poisoned".to_string()))?
            .push(message.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// WriterSink
// ---------------------------------------------------------------------------

/// Writes one line per message to any [`Write`], flushing after each one.
///
/// Line breaks inside a message are written as the escapes `\n` and `\r`, so
/// a message never spans more than one line.
///
/// With timestamps enabled every line is prefixed by the UTC time it was
/// received, e.g. `2024-01-15T10:00:00.123Z E: Error: disk full`.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: Mutex<W>,
    timestamps: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, timestamps: bool) -> Self {
        Self {
            writer: Mutex::new(writer),
            timestamps,
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> Result<W, SinkError> {
        self.writer
            .into_inner()
            .map_err(|_| SinkError::Unavailable("writer sink lock poisoned".to_string()))
    }
}

impl WriterSink<std::fs::File> {
    /// Append to the file at `path`, creating it and its parent directories
    /// when missing.
    pub fn file(path: &Path, timestamps: bool) -> Result<Self, SinkError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(file, timestamps))
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr(timestamps: bool) -> Self {
        Self::new(io::stderr(), timestamps)
    }
}

impl<W: Write> CrashSink for WriterSink<W> {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| SinkError::Unavailable("writer sink lock poisoned".to_string()))?;
        let message = escape_line_breaks(message);
        if self.timestamps {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
            writeln!(writer, "{ts} {message}")?;
        } else {
            writeln!(writer, "{message}")?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn escape_line_breaks(message: &str) -> Cow<'_, str> {
    if message.contains(['\n', '\r']) {
        Cow::Owned(message.replace('\r', "\\r").replace('\n', "\\n"))
    } else {
        Cow::Borrowed(message)
    }
}

// ---------------------------------------------------------------------------
// TracingSink
// ---------------------------------------------------------------------------

/// Forwards each line as a `tracing` event on target `crashmirror::sink`, for
/// hosts whose crash reporter already consumes `tracing` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl CrashSink for TracingSink {
    fn log(&self, message: &str) -> Result<(), SinkError> {
        tracing::info!(target: "crashmirror::sink", "{message}");
        Ok(())
    }
}
