//! Memory-sample wire format: the header word codec.
//!
//! Every converted sample array starts with a single `u32` header word:
//!
//! ```text
//! bit 31        24 23                                0
//!    +------------+-----------------------------------+
//!    | format code |          sample count            |
//!    +------------+-----------------------------------+
//! ```
//!
//! The format code's low 7 bits select the sample rate and bit 7 selects the
//! encoding (set = 16-bit PCM, clear = u-law):
//!
//! | Code | Encoding | Rate |
//! |------|----------|------|
//! | `0x01` | u-law | 44100 Hz |
//! | `0x02` | u-law | 22050 Hz |
//! | `0x03` | u-law | 11025 Hz |
//! | `0x81` | 16-bit PCM | 44100 Hz |
//! | `0x82` | 16-bit PCM | 22050 Hz |
//! | `0x83` | 16-bit PCM | 11025 Hz |
//!
//! PCM payloads pack two little-endian `i16` samples per word (earlier sample
//! in the low half-word); u-law packs four bytes per word. u-law payloads are
//! recognized for metadata purposes only and never decoded here.

use crate::constants::{
    MAX_SAMPLE_COUNT, PCM_BITS_PER_SAMPLE, PCM_SAMPLES_PER_WORD, ULAW_BITS_PER_SAMPLE,
    ULAW_SAMPLES_PER_WORD,
};
use crate::error::SampleDataError;

/// Payload encoding of a sample array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// 8-bit u-law companded samples, four per word. Metadata only.
    Ulaw,
    /// Signed 16-bit PCM samples, two per word.
    Pcm16,
}

/// Recognized encoding/rate combinations, one per format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    /// u-law at 44100 Hz (code `0x01`).
    Ulaw44100,
    /// u-law at 22050 Hz (code `0x02`).
    Ulaw22050,
    /// u-law at 11025 Hz (code `0x03`).
    Ulaw11025,
    /// 16-bit PCM at 44100 Hz (code `0x81`).
    Pcm44100,
    /// 16-bit PCM at 22050 Hz (code `0x82`).
    Pcm22050,
    /// 16-bit PCM at 11025 Hz (code `0x83`).
    Pcm11025,
}

impl SampleFormat {
    /// Look up the format for a header code byte.
    pub const fn from_code(code: u8) -> Result<Self, SampleDataError> {
        match code {
            0x01 => Ok(SampleFormat::Ulaw44100),
            0x02 => Ok(SampleFormat::Ulaw22050),
            0x03 => Ok(SampleFormat::Ulaw11025),
            0x81 => Ok(SampleFormat::Pcm44100),
            0x82 => Ok(SampleFormat::Pcm22050),
            0x83 => Ok(SampleFormat::Pcm11025),
            other => Err(SampleDataError::UnknownFormat(other)),
        }
    }

    /// The header code byte for this format.
    pub const fn code(self) -> u8 {
        match self {
            SampleFormat::Ulaw44100 => 0x01,
            SampleFormat::Ulaw22050 => 0x02,
            SampleFormat::Ulaw11025 => 0x03,
            SampleFormat::Pcm44100 => 0x81,
            SampleFormat::Pcm22050 => 0x82,
            SampleFormat::Pcm11025 => 0x83,
        }
    }

    /// Payload encoding.
    pub const fn encoding(self) -> Encoding {
        match self {
            SampleFormat::Ulaw44100 | SampleFormat::Ulaw22050 | SampleFormat::Ulaw11025 => {
                Encoding::Ulaw
            }
            SampleFormat::Pcm44100 | SampleFormat::Pcm22050 | SampleFormat::Pcm11025 => {
                Encoding::Pcm16
            }
        }
    }

    /// Sample rate in Hz.
    pub const fn sample_rate_hz(self) -> u32 {
        match self {
            SampleFormat::Ulaw44100 | SampleFormat::Pcm44100 => 44_100,
            SampleFormat::Ulaw22050 | SampleFormat::Pcm22050 => 22_050,
            SampleFormat::Ulaw11025 | SampleFormat::Pcm11025 => 11_025,
        }
    }

    /// Bits used to store each sample
    /// ([`PCM_BITS_PER_SAMPLE`] or [`ULAW_BITS_PER_SAMPLE`]).
    pub const fn bits_per_sample(self) -> u32 {
        match self.encoding() {
            Encoding::Ulaw => ULAW_BITS_PER_SAMPLE,
            Encoding::Pcm16 => PCM_BITS_PER_SAMPLE,
        }
    }

    /// Samples packed into each 32-bit payload word.
    pub const fn samples_per_word(self) -> usize {
        match self.encoding() {
            Encoding::Ulaw => ULAW_SAMPLES_PER_WORD,
            Encoding::Pcm16 => PCM_SAMPLES_PER_WORD,
        }
    }
}

/// Decoded header word: format plus declared sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleHeader {
    format: SampleFormat,
    sample_count: u32,
}

impl SampleHeader {
    /// Build a header, rejecting counts that overflow the 24-bit field.
    pub const fn new(format: SampleFormat, sample_count: usize) -> Result<Self, SampleDataError> {
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(SampleDataError::LengthOverflow(sample_count));
        }
        Ok(SampleHeader {
            format,
            sample_count: sample_count as u32,
        })
    }

    /// Decode a raw header word.
    pub const fn parse(word: u32) -> Result<Self, SampleDataError> {
        let format = match SampleFormat::from_code((word >> 24) as u8) {
            Ok(f) => f,
            Err(e) => return Err(e),
        };
        Ok(SampleHeader {
            format,
            sample_count: word & 0x00FF_FFFF,
        })
    }

    /// Encode back into a raw header word.
    pub const fn pack(self) -> u32 {
        ((self.format.code() as u32) << 24) | self.sample_count
    }

    /// Sample format.
    pub const fn format(self) -> SampleFormat {
        self.format
    }

    /// Declared sample count.
    pub const fn sample_count(self) -> u32 {
        self.sample_count
    }

    /// Payload words needed to hold the declared samples (before any padding).
    pub const fn required_payload_words(self) -> usize {
        let spw = self.format.samples_per_word();
        (self.sample_count as usize + spw - 1) / spw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_code_roundtrip() {
        let formats = [
            SampleFormat::Ulaw44100,
            SampleFormat::Ulaw22050,
            SampleFormat::Ulaw11025,
            SampleFormat::Pcm44100,
            SampleFormat::Pcm22050,
            SampleFormat::Pcm11025,
        ];
        for f in formats {
            assert_eq!(SampleFormat::from_code(f.code()), Ok(f));
        }
    }

    #[test]
    fn unknown_codes_rejected() {
        for code in [0x00u8, 0x04, 0x7F, 0x80, 0x84, 0xFF] {
            assert_eq!(
                SampleFormat::from_code(code),
                Err(SampleDataError::UnknownFormat(code))
            );
        }
    }

    #[test]
    fn rates_and_packing() {
        assert_eq!(SampleFormat::Pcm44100.sample_rate_hz(), 44_100);
        assert_eq!(SampleFormat::Pcm22050.sample_rate_hz(), 22_050);
        assert_eq!(SampleFormat::Ulaw11025.sample_rate_hz(), 11_025);

        assert_eq!(SampleFormat::Pcm44100.samples_per_word(), 2);
        assert_eq!(SampleFormat::Ulaw44100.samples_per_word(), 4);

        assert_eq!(SampleFormat::Pcm44100.bits_per_sample(), 16);
        assert_eq!(SampleFormat::Pcm11025.bits_per_sample(), 16);
        assert_eq!(SampleFormat::Ulaw22050.bits_per_sample(), 8);

        assert_eq!(SampleFormat::Pcm44100.encoding(), Encoding::Pcm16);
        assert_eq!(SampleFormat::Ulaw22050.encoding(), Encoding::Ulaw);
    }

    #[test]
    fn header_parse_fields() {
        // 0x81 = PCM 44100, count = 4410
        let h = SampleHeader::parse(0x8100_113A).unwrap();
        assert_eq!(h.format(), SampleFormat::Pcm44100);
        assert_eq!(h.sample_count(), 4410);
    }

    #[test]
    fn header_pack_roundtrip() {
        for word in [0x8100_113Au32, 0x0100_0001, 0x8300_0000, 0x82FF_FFFF] {
            let h = SampleHeader::parse(word).unwrap();
            assert_eq!(h.pack(), word);
        }
    }

    #[test]
    fn header_parse_unknown_format() {
        assert_eq!(
            SampleHeader::parse(0x7F00_0010),
            Err(SampleDataError::UnknownFormat(0x7F))
        );
    }

    #[test]
    fn header_new_rejects_overflow() {
        assert_eq!(
            SampleHeader::new(SampleFormat::Pcm44100, 0x0100_0000),
            Err(SampleDataError::LengthOverflow(0x0100_0000))
        );
        let h = SampleHeader::new(SampleFormat::Pcm44100, 0x00FF_FFFF).unwrap();
        assert_eq!(h.sample_count(), 0x00FF_FFFF);
    }

    #[test]
    fn required_payload_words_rounds_up() {
        let even = SampleHeader::new(SampleFormat::Pcm44100, 4).unwrap();
        assert_eq!(even.required_payload_words(), 2);

        let odd = SampleHeader::new(SampleFormat::Pcm44100, 5).unwrap();
        assert_eq!(odd.required_payload_words(), 3);

        let ulaw = SampleHeader::new(SampleFormat::Ulaw44100, 5).unwrap();
        assert_eq!(ulaw.required_payload_words(), 2);

        let empty = SampleHeader::new(SampleFormat::Pcm44100, 0).unwrap();
        assert_eq!(empty.required_payload_words(), 0);
    }
}
