//! crashmirror — mirror console-style logging into a crash reporting sink.
//!
//! The library half of the binary: it wires configuration into a concrete
//! console and sink, and exposes the stdin [`pump`] so integration tests can
//! drive it without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! stdin ──► pump ──► MirroredConsole ──► CrashSink (file / stderr / tracing)
//!                          │
//!                          └───────────► StdConsole (stdout / stderr)
//! ```

pub mod pump;

use std::path::Path;

use crashmirror_console::{CrashSink, StdConsole, TracingSink, WriterSink};
use crashmirror_core::config::{Config, SinkKind};

/// Build the crash sink described by `config.sink`.
///
/// `path_override` replaces the configured path and forces a file sink.
pub fn build_sink(
    config: &Config,
    path_override: Option<&Path>,
) -> anyhow::Result<Box<dyn CrashSink>> {
    let sink = &config.sink;
    if let Some(path) = path_override {
        let file: Box<dyn CrashSink> = Box::new(WriterSink::file(path, sink.timestamps)?);
        return Ok(file);
    }

    let built: Box<dyn CrashSink> = match sink.kind {
        SinkKind::File => {
            let path = sink.resolved_path();
            tracing::debug!(path = %path.display(), "crash sink: file");
            Box::new(WriterSink::file(&path, sink.timestamps)?)
        }
        SinkKind::Stderr => Box::new(WriterSink::stderr(sink.timestamps)),
        SinkKind::Tracing => Box::new(TracingSink),
    };
    Ok(built)
}

/// Build the process console described by `config.console`.
pub fn build_console(config: &Config) -> StdConsole {
    StdConsole::only(&config.console.methods)
}
