//! crashmirror-console — console interception and crash sinks.
//!
//! A [`Console`] is wrapped once by [`MirroredConsole::install`]; every call
//! through the returned mirror is normalized, tagged and pushed to a
//! [`CrashSink`] before being printed by the original console.

pub mod console;
pub mod mirror;
pub mod sink;

pub use console::{Console, MemoryConsole, StdConsole};
pub use mirror::{MirrorError, MirroredConsole};
pub use sink::{CrashSink, MemorySink, SinkError, TracingSink, WriterSink};
