//! Console interception — a decorator that mirrors every console call into a
//! crash sink.
//!
//! [`MirroredConsole::install`] takes the original console by value and hands
//! back the decorator; callers log through the decorator from then on. For
//! every call through an installed method the mirror:
//!
//! 1. normalizes the argument with [`crashmirror_core::normalize`],
//! 2. sends `"<code>: <normalized>"` to the sink,
//! 3. prints the normalized string (untagged) through the original method.
//!
//! Methods the original console does not expose are skipped at install time
//! and calling them is a no-op.

use std::io;

use crashmirror_core::{normalize, tagged_line, Severity};
use serde_json::Value;
use thiserror::Error;

use crate::console::Console;
use crate::sink::{CrashSink, SinkError};

/// Failure while installing or dispatching through a mirror.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("console is already mirrored into a crash sink")]
    AlreadyInstalled,
    #[error(transparent)]
    Sink(#[from] SinkError),
    #[error("console write failed: {0}")]
    Console(#[source] io::Error),
}

/// A console whose installed methods also report to a [`CrashSink`].
#[derive(Debug)]
pub struct MirroredConsole<C, S> {
    console: C,
    sink: S,
    installed: Vec<Severity>,
}

impl<C: Console, S: CrashSink> MirroredConsole<C, S> {
    /// Wrap `console` so its `error`, `log`, `warn` and `info` methods report
    /// to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`MirrorError::AlreadyInstalled`] when `console` is itself a
    /// mirror, so a surface is never reported twice.
    pub fn install(console: C, sink: S) -> Result<Self, MirrorError> {
        if console.is_mirrored() {
            return Err(MirrorError::AlreadyInstalled);
        }

        let installed: Vec<Severity> = Severity::ALL
            .into_iter()
            .filter(|severity| console.supports(*severity))
            .collect();

        for skipped in Severity::ALL.iter().filter(|s| !installed.contains(*s)) {
            tracing::debug!(method = %skipped, "console has no such method, not mirrored");
        }
        tracing::debug!(methods = ?installed, "crash mirror installed");

        Ok(Self {
            console,
            sink,
            installed,
        })
    }

    /// Whether the method for `severity` is mirrored.
    pub fn is_installed(&self, severity: Severity) -> bool {
        self.installed.contains(&severity)
    }

    /// The mirrored methods, in installation order.
    pub fn installed(&self) -> &[Severity] {
        &self.installed
    }

    /// Report `value` through the method for `severity`.
    ///
    /// The console write happens even when the sink fails; the sink failure is
    /// still returned to the caller.
    ///
    /// # Errors
    ///
    /// [`MirrorError::Sink`] when the sink rejects the line,
    /// [`MirrorError::Console`] when the original console fails to print.
    pub fn dispatch(&self, severity: Severity, value: &Value) -> Result<(), MirrorError> {
        if !self.is_installed(severity) {
            return Ok(());
        }

        let normalized = normalize(value);
        let reported = self.sink.log(&tagged_line(severity, &normalized));
        self.console
            .write(severity, &normalized)
            .map_err(MirrorError::Console)?;
        reported.map_err(MirrorError::from)
    }

    pub fn error(&self, value: impl Into<Value>) -> Result<(), MirrorError> {
        self.dispatch(Severity::Error, &value.into())
    }

    pub fn log(&self, value: impl Into<Value>) -> Result<(), MirrorError> {
        self.dispatch(Severity::Log, &value.into())
    }

    pub fn warn(&self, value: impl Into<Value>) -> Result<(), MirrorError> {
        self.dispatch(Severity::Warn, &value.into())
    }

    pub fn info(&self, value: impl Into<Value>) -> Result<(), MirrorError> {
        self.dispatch(Severity::Info, &value.into())
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the mirror apart, returning the original console and the sink.
    pub fn into_parts(self) -> (C, S) {
        (self.console, self.sink)
    }
}

/// A mirror is itself a console, so it can be handed to code that only knows
/// about [`Console`]. Text written this way is treated as a string value.
impl<C: Console, S: CrashSink> Console for MirroredConsole<C, S> {
    fn supports(&self, severity: Severity) -> bool {
        self.is_installed(severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        match self.dispatch(severity, &Value::String(message.to_string())) {
            Ok(()) => Ok(()),
            Err(MirrorError::Console(err)) => Err(err),
            Err(err) => Err(io::Error::other(err)),
        }
    }

    fn is_mirrored(&self) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
