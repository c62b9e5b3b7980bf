//! Test builders — ready-made mirrors and misbehaving collaborators.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use crashmirror_console::{
    Console, CrashSink, MemoryConsole, MemorySink, MirroredConsole, SinkError,
};
use crashmirror_core::Severity;

/// A mirror over a recording console exposing all four methods.
pub fn recording_mirror() -> MirroredConsole<MemoryConsole, MemorySink> {
    recording_mirror_with(&Severity::ALL)
}

/// A mirror over a recording console exposing just `methods`.
pub fn recording_mirror_with(methods: &[Severity]) -> MirroredConsole<MemoryConsole, MemorySink> {
    MirroredConsole::install(MemoryConsole::only(methods), MemorySink::new())
        .expect("a fresh console is never mirrored")
}

/// A sink that rejects every line but counts the attempts.
#[derive(Debug, Default)]
pub struct OfflineSink {
    attempts: AtomicUsize,
}

impl OfflineSink {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl CrashSink for OfflineSink {
    fn log(&self, _message: &str) -> Result<(), SinkError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(SinkError::Unavailable("crash backend offline".to_string()))
    }
}

/// A console whose every write fails, like stdout closed under a pipe.
#[derive(Debug, Default)]
pub struct BrokenPipeConsole;

impl Console for BrokenPipeConsole {
    fn supports(&self, _severity: Severity) -> bool {
        true
    }

    fn write(&self, _severity: Severity, _message: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }
}
