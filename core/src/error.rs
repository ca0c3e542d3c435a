use thiserror::Error;

/// Contract violations reported by the codecs.
///
/// None of these are transient: each one means the caller handed over a
/// value or a bit buffer whose shape does not match the target.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A source sequence or buffer does not have the configured size.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// An element (or bit) index outside `[0, length)`.
    #[error("index {index} out of range for length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A bit sequence shorter than the width of the scalar it should hold.
    #[error("bit sequence too short: expected {expected} bits, got {got}")]
    ShortBitSequence { expected: usize, got: usize },

    /// A layout whose element width differs from the scalar's width.
    #[error("element width mismatch: expected {expected} bits, got {got}")]
    WidthMismatch { expected: usize, got: usize },

    /// Decoded code units do not form valid text.
    #[error("decoded units are not valid {encoding}")]
    InvalidText { encoding: &'static str },
}

pub type Result<T> = std::result::Result<T, CodecError>;
