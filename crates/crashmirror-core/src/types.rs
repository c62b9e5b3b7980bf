//! Core types for crashmirror-core.
//!
//! This module defines [`Severity`], the fixed mapping between the four
//! interceptable console methods and the one-letter codes that tag every line
//! sent to a crash sink.

use serde::Deserialize;

/// One of the four console methods a mirror can intercept.
///
/// Each method carries a fixed severity code: `error → E`, `log → L`,
/// `warn → W`, `info → I`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Log,
    Warn,
    Info,
}

impl Severity {
    /// Every severity, in installation order.
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Log,
        Severity::Warn,
        Severity::Info,
    ];

    /// Single-letter code used as the tag prefix of a sink line.
    pub fn code(self) -> char {
        match self {
            Severity::Error => 'E',
            Severity::Log => 'L',
            Severity::Warn => 'W',
            Severity::Info => 'I',
        }
    }

    /// Name of the console method this severity is attached to.
    pub fn method(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Log => "log",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.method())
    }
}

/// Error returned when a string names neither a console method nor a code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown console method: {0:?} (expected error, log, warn or info)")]
pub struct UnknownSeverity(pub String);

impl std::str::FromStr for Severity {
    type Err = UnknownSeverity;

    /// Accepts a method name (case-insensitive) or its single-letter code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "e" => Ok(Severity::Error),
            "log" | "l" => Ok(Severity::Log),
            "warn" | "w" => Ok(Severity::Warn),
            "info" | "i" => Ok(Severity::Info),
            _ => Err(UnknownSeverity(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Severity::Error, 'E', "error")]
    #[case(Severity::Log, 'L', "log")]
    #[case(Severity::Warn, 'W', "warn")]
    #[case(Severity::Info, 'I', "info")]
    fn codes_and_methods(#[case] severity: Severity, #[case] code: char, #[case] method: &str) {
        assert_eq!(severity.code(), code);
        assert_eq!(severity.method(), method);
        assert_eq!(severity.to_string(), method);
        assert_eq!(method.parse::<Severity>(), Ok(severity));
        assert_eq!(code.to_string().parse::<Severity>(), Ok(severity));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!(" Info ".parse::<Severity>(), Ok(Severity::Info));
    }

    #[test]
    fn parse_rejects_unknown_methods() {
        let err = "debug".parse::<Severity>().unwrap_err();
        assert_eq!(err, UnknownSeverity("debug".to_string()));
    }
}
