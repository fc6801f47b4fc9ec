use alloc::string::String;

/// Errors from catalog lookups, descriptor queries, and line access.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PixFmtError {
    #[error("pixel format not found: {0}")]
    NotFound(String),

    #[error("empty name")]
    EmptyName,

    #[error("component index out of range: {0}")]
    ComponentOutOfRange(usize),

    #[error("no swapped-endianness equivalent for: {0}")]
    NoEndianSibling(&'static str),

    #[error("no suitable pixel format among the given candidates")]
    NoSuitableFormat,

    #[error("unknown {kind} name: {name}")]
    UnknownColorName { kind: &'static str, name: String },
}
