//! Error types for sample data validation and access.

use core::fmt;

/// Errors raised when validating or reading a sample data array.
///
/// Every variant is detectable from the array alone; construction-time
/// validation in [`AudioSample::new`](crate::sample::AudioSample::new) means
/// a bad table declared through [`audio_sample_data!`](crate::audio_sample_data)
/// fails the build rather than misbehaving at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleDataError {
    /// The array is empty: there is no header word to interpret.
    EmptyData,

    /// The header's format code is not a recognized encoding/rate combination.
    UnknownFormat(u8),

    /// The declared sample count needs more payload words than the array holds.
    TruncatedData {
        /// Sample count from the header word.
        declared_samples: u32,
        /// Payload words actually present (array length minus the header).
        payload_words: usize,
    },

    /// The sample count does not fit the 24-bit header length field.
    LengthOverflow(usize),

    /// PCM access was requested on a u-law encoded table.
    UnsupportedEncoding,
}

impl fmt::Display for SampleDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleDataError::EmptyData => write!(f, "sample data array is empty"),
            SampleDataError::UnknownFormat(code) => {
                write!(f, "unknown sample format code 0x{:02X}", code)
            }
            SampleDataError::TruncatedData {
                declared_samples,
                payload_words,
            } => write!(
                f,
                "header declares {} samples but only {} payload words are present",
                declared_samples, payload_words
            ),
            SampleDataError::LengthOverflow(count) => {
                write!(f, "sample count {} exceeds the 24-bit header field", count)
            }
            SampleDataError::UnsupportedEncoding => {
                write!(f, "PCM access requested on a u-law encoded sample")
            }
        }
    }
}
