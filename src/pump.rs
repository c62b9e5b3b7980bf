//! Stdin pump — feeds one logged value per input line through a mirror.
//!
//! Each non-empty line is parsed with [`crashmirror_core::parse_value`]: JSON
//! when it parses, otherwise the raw text as a string. Bytes that are not
//! valid UTF-8 are replaced with U+FFFD rather than ending the run. Sink failures are
//! logged and counted without stopping the pump; a failing console aborts it.

use std::io::BufRead;

use anyhow::Context;
use crashmirror_console::{Console, CrashSink, MirrorError, MirroredConsole};
use crashmirror_core::{parse_value, Severity};

/// Counters reported once the input is exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpStats {
    /// Non-empty lines read.
    pub lines: usize,
    /// Lines the sink accepted.
    pub reported: usize,
    /// Lines the sink rejected.
    pub sink_failures: usize,
    /// Lines dropped because the console has no method for the severity.
    pub skipped: usize,
}

/// Read `reader` to EOF, dispatching every line through `mirror` with
/// `severity`.
pub fn pump<R, C, S>(
    mut reader: R,
    mirror: &MirroredConsole<C, S>,
    severity: Severity,
) -> anyhow::Result<PumpStats>
where
    R: BufRead,
    C: Console,
    S: CrashSink,
{
    let mut stats = PumpStats::default();
    let mut buf = Vec::new();
    let mut index = 0usize;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read input line {}", index + 1))?;
        if read == 0 {
            break;
        }
        index += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        if !mirror.is_installed(severity) {
            stats.skipped += 1;
            continue;
        }

        match mirror.dispatch(severity, &parse_value(line)) {
            Ok(()) => stats.reported += 1,
            Err(MirrorError::Sink(err)) => {
                stats.sink_failures += 1;
                tracing::warn!(line = index, error = %err, "crash sink rejected line");
            }
            Err(err) => {
                return Err(err).with_context(|| format!("mirror input line {index}"));
            }
        }
    }

    tracing::info!(
        lines = stats.lines,
        reported = stats.reported,
        sink_failures = stats.sink_failures,
        skipped = stats.skipped,
        "input exhausted"
    );
    Ok(stats)
}
