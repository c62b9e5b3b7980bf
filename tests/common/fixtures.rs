//! Static value corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of JSON texts; [`values`] parses
//! one into `serde_json::Value`s. Object key order in the texts is the order
//! the normalizer is expected to preserve.

use serde_json::Value;

/// Plain string messages, the most common thing handed to a console.
pub const CORPUS_STRINGS: &[&str] = &[
    r#""disk full""#,
    r#""Connection refused: redis:6379""#,
    r#""""#,
    r#""quote \" and newline \n inside""#,
    r#""Error: already prefixed""#,
];

/// Numeric error codes.
pub const CORPUS_NUMBERS: &[&str] = &["42", "0", "-1", "503", "3.25"];

/// Flat records whose fields are all strings or numbers.
pub const CORPUS_FLAT_OBJECTS: &[&str] = &[
    r#"{"code":7,"reason":"timeout"}"#,
    r#"{"message":"payment gateway timeout","gateway":"stripe","attempt":3}"#,
    r#"{"status":503}"#,
    r#"{}"#,
];

/// Records with at least one non-primitive field.
pub const CORPUS_NESTED_OBJECTS: &[&str] = &[
    r#"{"code":7,"detail":{"nested":true}}"#,
    r#"{"message":"bad request","errors":["missing id","missing name"]}"#,
    r#"{"retry":false,"cause":null}"#,
    r#"{"context":{"request":{"id":"abc","path":"/api"},"user":{"id":42}}}"#,
];

/// Shapes that fall through to plain JSON rendering.
pub const CORPUS_FALLBACK: &[&str] = &["[1,2,3]", r#"["a",{"b":1}]"#, "true", "false", "null"];

/// Parse every text of a corpus into a value.
pub fn values(corpus: &[&str]) -> Vec<Value> {
    corpus
        .iter()
        .map(|text| serde_json::from_str(text).expect("fixture corpora must be valid JSON"))
        .collect()
}
