use thiserror::Error;

/// Errors surfaced by the footprint geometry engine.
///
/// The first three variants are programming-contract violations rather than
/// expected runtime conditions: they indicate malformed input and are raised
/// immediately at the point of construction. Computation never continues with
/// corrupted data.
#[derive(Error, Debug)]
pub enum SkycoverError {
    #[error("co-latitude out of range [0, pi]: {0}")]
    ColatitudeOutOfRange(f64),

    #[error("vertex ring has odd length {0}, edges are consumed as adjacent vertex pairs")]
    OddVertexRing(usize),

    #[error("parallel array length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("catalog parsing error: {0}")]
    CsvError(#[from] csv::Error),
}
