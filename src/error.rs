//! Error types for the decimal range coder.

use thiserror::Error;

/// Error variants for coding operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Probability outside of 1..=15 (in sixteenths).
    #[error("invalid probability: {0} (expected 1..=15)")]
    InvalidProbability(u8),

    /// Mode string that is neither a probability nor "adaptive".
    #[error("invalid mode: {0:?}")]
    InvalidMode(String),

    /// Stream doesn't start with the '0' marker.
    #[error("bad marker byte: {0:#04x}")]
    BadMarker(u8),

    /// Initial state read from the stream lies outside of the interval.
    #[error("invalid initial state: bits {bits} >= width {width}")]
    InvalidState { bits: u32, width: u32 },

    /// A byte in the payload isn't an ASCII decimal digit.
    #[error("invalid digit: {0:#04x}")]
    InvalidDigit(u8),

    /// Stream ended before all requested symbols were decoded.
    #[error("unexpected end of stream")]
    UnexpectedEof,

    /// Character outside of the 'b'/'g' alphabet.
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(char),

    /// Decoded symbols differ from the encoded ones.
    #[error("round trip failed at symbol {position}")]
    RoundTrip { position: usize },

    /// Command line arguments don't match the usage.
    #[error("usage: {0}")]
    Usage(String),

    /// An I/O error occurred during encoding or decoding.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether the error means the encoded stream is corrupt
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Error::BadMarker(_)
                | Error::InvalidState { .. }
                | Error::InvalidDigit(_)
                | Error::UnexpectedEof
        )
    }
}

/// A specialized Result type for coding operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn malformed_classification() {
        assert!(Error::BadMarker(b'1').is_malformed());
        assert!(Error::InvalidState { bits: 9999, width: 9999 }.is_malformed());
        assert!(Error::UnexpectedEof.is_malformed());
        assert!(!Error::InvalidProbability(0).is_malformed());
        assert!(!Error::RoundTrip { position: 3 }.is_malformed());
    }
}
