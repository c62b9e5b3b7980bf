//! Logging surfaces — the objects exposing `error`, `log`, `warn` and `info`.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crashmirror_core::Severity;

/// A console-style logging surface.
///
/// A surface may expose only some of the four methods; [`Console::supports`]
/// reports which. Writing through an unsupported method is a no-op.
pub trait Console {
    /// Whether this surface exposes the method for `severity`.
    fn supports(&self, severity: Severity) -> bool;

    /// Print `message` through the method for `severity`.
    fn write(&self, severity: Severity, message: &str) -> io::Result<()>;

    /// Whether this surface already mirrors into a crash sink.
    fn is_mirrored(&self) -> bool {
        false
    }
}

impl<C: Console + ?Sized> Console for &C {
    fn supports(&self, severity: Severity) -> bool {
        (**self).supports(severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        (**self).write(severity, message)
    }

    fn is_mirrored(&self) -> bool {
        (**self).is_mirrored()
    }
}

impl<C: Console + ?Sized> Console for Box<C> {
    fn supports(&self, severity: Severity) -> bool {
        (**self).supports(severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        (**self).write(severity, message)
    }

    fn is_mirrored(&self) -> bool {
        (**self).is_mirrored()
    }
}

impl<C: Console + ?Sized> Console for Arc<C> {
    fn supports(&self, severity: Severity) -> bool {
        (**self).supports(severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        (**self).write(severity, message)
    }

    fn is_mirrored(&self) -> bool {
        (**self).is_mirrored()
    }
}

// ---------------------------------------------------------------------------
// StdConsole
// ---------------------------------------------------------------------------

/// The process console: `error` and `warn` go to stderr, `log` and `info` to
/// stdout.
#[derive(Debug, Clone)]
pub struct StdConsole {
    methods: Vec<Severity>,
}

impl StdConsole {
    /// A console exposing all four methods.
    pub fn new() -> Self {
        Self::only(&Severity::ALL)
    }

    /// A console exposing just `methods`.
    pub fn only(methods: &[Severity]) -> Self {
        Self { methods: methods.to_vec() }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn supports(&self, severity: Severity) -> bool {
        self.methods.contains(&severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        if !self.supports(severity) {
            return Ok(());
        }
        match severity {
            Severity::Error | Severity::Warn => writeln!(io::stderr().lock(), "{message}"),
            Severity::Log | Severity::Info => writeln!(io::stdout().lock(), "{message}"),
        }
    }
}

// ---------------------------------------------------------------------------
// MemoryConsole
// ---------------------------------------------------------------------------

/// A console that records what was printed instead of printing it.
#[derive(Debug)]
pub struct MemoryConsole {
    methods: Vec<Severity>,
    written: Mutex<Vec<(Severity, String)>>,
}

impl MemoryConsole {
    /// A recording console exposing all four methods.
    pub fn new() -> Self {
        Self::only(&Severity::ALL)
    }

    /// A recording console exposing just `methods`.
    pub fn only(methods: &[Severity]) -> Self {
        Self {
            methods: methods.to_vec(),
            written: Mutex::new(Vec::new()),
        }
    }

    /// Everything printed so far, oldest first.
    pub fn written(&self) -> Vec<(Severity, String)> {
        self.written
            .lock()
            .map(|written| written.clone())
            .unwrap_or_default()
    }
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MemoryConsole {
    fn supports(&self, severity: Severity) -> bool {
        self.methods.contains(&severity)
    }

    fn write(&self, severity: Severity, message: &str) -> io::Result<()> {
        if !self.supports(severity) {
            return Ok(());
        }
        self.written
            .lock()
            .map_err(|_| io::Error::other("memory console lock poisoned"))?
            .push((severity, message.to_string()));
        Ok(())
    }
}
