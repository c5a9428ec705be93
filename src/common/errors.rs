//! Error types for the payoff engine

use thiserror::Error;

/// Result type alias using our PayoffError
pub type Result<T> = std::result::Result<T, PayoffError>;

/// Main error type for strategy evaluation
#[derive(Error, Debug)]
pub enum PayoffError {
    /// A leg lacks a field its instrument needs (e.g. no strike on a call)
    #[error("Leg {leg}: missing field `{field}` required for {instrument}")]
    MissingField {
        leg: usize,
        field: &'static str,
        instrument: &'static str,
    },

    /// Instrument tag is not one of future/call/put
    #[error("Leg {leg}: unknown instrument `{tag}` (expected future, call or put)")]
    UnknownInstrument { leg: usize, tag: String },

    /// Direction tag is not one of long/short
    #[error("Leg {leg}: unknown direction `{tag}` (expected long or short)")]
    UnknownDirection { leg: usize, tag: String },

    /// Breakeven interpolation needs at least two sample points
    #[error("Price sample has {len} point(s); at least 2 are required")]
    InsufficientSamples { len: usize },

    /// Price and P&L vectors must line up index for index
    #[error("Length mismatch: {prices} prices vs {pnl} P&L values")]
    LengthMismatch { prices: usize, pnl: usize },

    /// Strategy name not in the preset catalogue
    #[error("Unknown strategy `{0}`")]
    UnknownStrategy(String),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}
