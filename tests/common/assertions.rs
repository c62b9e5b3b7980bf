//! Domain-specific assertion macros for crashmirror harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* side of the mirror (sink or console) diverged.

// ---------------------------------------------------------------------------
// Sink assertions
// ---------------------------------------------------------------------------

/// Assert the exact lines a mirror's `MemorySink` has received.
///
/// ```rust
/// assert_sink_lines!(mirror, ["E: Error: disk full"]);
/// ```
#[macro_export]
macro_rules! assert_sink_lines {
    ($mirror:expr, [$($line:expr),* $(,)?]) => {{
        let actual: Vec<String> = $mirror.sink().lines();
        let expected: Vec<String> = vec![$(String::from($line)),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_sink_lines! failed: sink received unexpected lines"
        );
    }};
}

/// Assert that nothing reached a mirror's `MemorySink`.
#[macro_export]
macro_rules! assert_sink_empty {
    ($mirror:expr) => {{
        let lines: Vec<String> = $mirror.sink().lines();
        if !lines.is_empty() {
            panic!(
                "assert_sink_empty! failed: sink received {} line(s): {:?}",
                lines.len(),
                lines
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Console assertions
// ---------------------------------------------------------------------------

/// Assert what a mirror's `MemoryConsole` printed, as `(severity, text)` pairs.
///
/// ```rust
/// assert_printed!(mirror, [(Severity::Error, "Error: disk full")]);
/// ```
#[macro_export]
macro_rules! assert_printed {
    ($mirror:expr, [$(($severity:expr, $text:expr)),* $(,)?]) => {{
        let actual: Vec<(crashmirror_core::Severity, String)> = $mirror.console().written();
        let expected: Vec<(crashmirror_core::Severity, String)> =
            vec![$(($severity, String::from($text))),*];
        pretty_assertions::assert_eq!(
            actual, expected,
            "assert_printed! failed: console printed unexpected output"
        );
    }};
}

// ---------------------------------------------------------------------------
// Normalizer helpers
// ---------------------------------------------------------------------------

/// Assert the tag structure of a sink line: a known code, `": "`, then a
/// normalized string.
pub fn assert_tagged(line: &str) {
    let (code, rest) = line
        .split_once(": ")
        .unwrap_or_else(|| panic!("sink line has no tag separator: {line:?}"));
    assert!(
        matches!(code, "E" | "L" | "W" | "I"),
        "sink line has unknown severity code {code:?}: {line:?}"
    );
    assert!(
        rest.starts_with("Error: ") || rest.starts_with("Error code: "),
        "sink line payload is not normalized: {line:?}"
    );
}
