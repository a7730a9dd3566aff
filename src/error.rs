use std::fmt;
use thiserror::Error;

/// The message needs more carrier bytes than the carrier has.
///
/// Returned by [`embed`][crate::embed] instead of a new carrier. The original carrier is
/// handed back untouched and can be recovered with [`CapacityExceeded::into_carrier`].
#[derive(Error, Clone, PartialEq, Eq)]
#[error("not enough bits to hide the message: need {required} bits, have {available} bits")]
pub struct CapacityExceeded {
    required: usize,
    available: usize,
    carrier: Vec<u8>,
}

impl CapacityExceeded {
    pub(crate) fn new(required: usize, carrier: Vec<u8>) -> Self {
        Self {
            required,
            available: carrier.len(),
            carrier,
        }
    }

    /// Number of carrier bytes the message needed, one per message bit.
    #[must_use]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Number of carrier bytes that were available.
    #[must_use]
    pub fn available(&self) -> usize {
        self.available
    }

    /// The unmodified carrier.
    #[must_use]
    pub fn carrier(&self) -> &[u8] {
        &self.carrier
    }

    /// Consumes the error, returning the unmodified carrier.
    #[must_use]
    pub fn into_carrier(self) -> Vec<u8> {
        self.carrier
    }
}

impl fmt::Debug for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityExceeded")
            .field("required", &self.required)
            .field("available", &self.available)
            .finish_non_exhaustive()
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Capacity(#[from] CapacityExceeded),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("expected {expected} samples, got {actual}")]
    SampleCount { expected: usize, actual: usize },

    #[error("the message is empty")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, Error>;
