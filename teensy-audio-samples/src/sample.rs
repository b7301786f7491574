//! Validated wrapper over a static sample data array.
//!
//! [`AudioSample`] is the typed counterpart of the bare `extern const unsigned
//! int AudioSampleX[]` declaration a converted sketch header exposes: a
//! zero-cost handle over a `&'static [u32]` table whose header word has been
//! checked once, up front. Constructed in a `const` context (as the
//! [`audio_sample_data!`](crate::audio_sample_data) macro does), a malformed
//! table fails the build — the same stage at which a missing definition would
//! have failed the link.
//!
//! The data itself is immutable and lives for the whole program, so any number
//! of threads or interrupt contexts may read it concurrently without
//! synchronization.

use crate::constants::PCM_SAMPLES_PER_WORD;
use crate::error::SampleDataError;
use crate::format::{Encoding, SampleFormat, SampleHeader};

/// Read-only handle to a validated, statically allocated sample data array.
///
/// The wrapped slice follows the memory-sample layout described in
/// [`format`](crate::format): one header word, then the packed payload,
/// optionally zero-padded past the declared sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSample {
    words: &'static [u32],
    header: SampleHeader,
}

impl AudioSample {
    /// Validate a raw word table and wrap it.
    ///
    /// Checks, in order: the table is non-empty, the header's format code is
    /// recognized, and the payload holds at least the declared sample count.
    /// Trailing zero-pad words beyond the declared count are accepted (the
    /// converter pads tables to whole 128-sample blocks).
    pub const fn new(words: &'static [u32]) -> Result<Self, SampleDataError> {
        if words.is_empty() {
            return Err(SampleDataError::EmptyData);
        }
        let header = match SampleHeader::parse(words[0]) {
            Ok(h) => h,
            Err(e) => return Err(e),
        };
        let payload_words = words.len() - 1;
        if header.required_payload_words() > payload_words {
            return Err(SampleDataError::TruncatedData {
                declared_samples: header.sample_count(),
                payload_words,
            });
        }
        Ok(AudioSample { words, header })
    }

    /// Sample format from the header word.
    pub const fn format(&self) -> SampleFormat {
        self.header.format()
    }

    /// Sample rate in Hz.
    pub const fn sample_rate_hz(&self) -> u32 {
        self.header.format().sample_rate_hz()
    }

    /// Declared sample count (not the padded length).
    pub const fn len(&self) -> usize {
        self.header.sample_count() as usize
    }

    /// True if the header declares zero samples.
    pub const fn is_empty(&self) -> bool {
        self.header.sample_count() == 0
    }

    /// Total word count, header included.
    pub const fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The raw word table, header included. This is what a DMA-driven or
    /// word-at-a-time player consumes directly out of flash.
    pub const fn words(&self) -> &'static [u32] {
        self.words
    }

    /// Exact clip duration as a `(sample_count, sample_rate_hz)` pair.
    ///
    /// Lossless form of [`duration_ms`](Self::duration_ms): the duration in
    /// seconds is `count / rate` with no rounding applied.
    pub const fn duration(&self) -> (u32, u32) {
        (self.header.sample_count(), self.sample_rate_hz())
    }

    /// Clip duration in milliseconds, rounded to the nearest millisecond.
    /// Use [`duration`](Self::duration) where rounding is unacceptable.
    pub fn duration_ms(&self) -> u32 {
        let ms = self.len() as f32 * 1000.0 / self.sample_rate_hz() as f32;
        libm::roundf(ms) as u32
    }

    /// Unpacked view of the 16-bit PCM payload.
    ///
    /// Returns [`SampleDataError::UnsupportedEncoding`] for u-law tables:
    /// companded payloads are metadata-only here and are never decoded.
    pub fn samples(&self) -> Result<PcmSamples, SampleDataError> {
        match self.format().encoding() {
            Encoding::Pcm16 => Ok(PcmSamples {
                payload: &self.words[1..],
                len: self.len(),
            }),
            Encoding::Ulaw => Err(SampleDataError::UnsupportedEncoding),
        }
    }
}

/// Indexable view of a 16-bit PCM payload.
///
/// Hides the two-per-word packing and the zero padding past the declared
/// sample count; indices run `0..len()`.
#[derive(Debug, Clone, Copy)]
pub struct PcmSamples {
    payload: &'static [u32],
    len: usize,
}

impl PcmSamples {
    /// Declared sample count.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if the view holds no samples.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The sample at `index`, or `None` past the declared count.
    ///
    /// Earlier sample in the low half-word, per the converter's packing.
    pub fn get(&self, index: usize) -> Option<i16> {
        if index >= self.len {
            return None;
        }
        let word = self.payload[index / PCM_SAMPLES_PER_WORD];
        let half = if index % PCM_SAMPLES_PER_WORD == 0 {
            word
        } else {
            word >> 16
        };
        Some(half as u16 as i16)
    }

    /// Iterate over the declared samples in order.
    pub fn iter(&self) -> PcmSampleIter {
        PcmSampleIter {
            samples: *self,
            index: 0,
        }
    }
}

impl IntoIterator for PcmSamples {
    type Item = i16;
    type IntoIter = PcmSampleIter;

    fn into_iter(self) -> PcmSampleIter {
        self.iter()
    }
}

/// Iterator over unpacked PCM samples.
pub struct PcmSampleIter {
    samples: PcmSamples,
    index: usize,
}

impl Iterator for PcmSampleIter {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        let s = self.samples.get(self.index)?;
        self.index += 1;
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PcmSampleIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::vec::Vec;

    // PCM 44100, 3 declared samples (1, 2, 3), one zero-pad sample.
    static THREE: [u32; 3] = [0x8100_0003, 0x0002_0001, 0x0000_0003];

    // PCM 44100, 4 declared samples spanning both half-words of two words.
    static FOUR: [u32; 3] = [0x8100_0004, 0x1111_2222, 0x3333_4444];

    #[test]
    fn valid_table_constructs() {
        let s = AudioSample::new(&THREE).unwrap();
        assert_eq!(s.format(), SampleFormat::Pcm44100);
        assert_eq!(s.sample_rate_hz(), 44_100);
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.word_count(), 3);
        assert_eq!(s.words()[0], 0x8100_0003);
    }

    #[test]
    fn const_construction() {
        // The macro relies on `new` being usable in a static initializer.
        static S: AudioSample = match AudioSample::new(&THREE) {
            Ok(s) => s,
            Err(_) => panic!("invalid test table"),
        };
        assert_eq!(S.len(), 3);
    }

    #[test]
    fn empty_array_rejected() {
        static EMPTY: [u32; 0] = [];
        assert_eq!(AudioSample::new(&EMPTY), Err(SampleDataError::EmptyData));
    }

    #[test]
    fn unknown_format_rejected() {
        static BAD: [u32; 2] = [0x0000_0002, 0x0000_0000];
        assert_eq!(
            AudioSample::new(&BAD),
            Err(SampleDataError::UnknownFormat(0x00))
        );
    }

    #[test]
    fn truncated_payload_rejected() {
        // Declares 5 samples (3 words needed) but carries only 2 payload words.
        static SHORT: [u32; 3] = [0x8100_0005, 0x0000_0000, 0x0000_0000];
        assert_eq!(
            AudioSample::new(&SHORT),
            Err(SampleDataError::TruncatedData {
                declared_samples: 5,
                payload_words: 2,
            })
        );
    }

    #[test]
    fn trailing_padding_accepted() {
        // 1 declared sample, 3 payload words (block padding).
        static PADDED: [u32; 4] = [0x8100_0001, 0x0000_7FFF, 0, 0];
        let s = AudioSample::new(&PADDED).unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.word_count(), 4);
    }

    #[test]
    fn pcm_unpacking_order() {
        let s = AudioSample::new(&THREE).unwrap();
        let pcm = s.samples().unwrap();
        assert_eq!(pcm.len(), 3);
        assert_eq!(pcm.get(0), Some(1));
        assert_eq!(pcm.get(1), Some(2));
        assert_eq!(pcm.get(2), Some(3));
        // The fourth packed half-word is padding, not a sample.
        assert_eq!(pcm.get(3), None);
    }

    #[test]
    fn negative_samples_unpack() {
        // 0xFFFF = -1, 0x8000 = -32768
        static NEG: [u32; 2] = [0x8100_0002, 0x8000_FFFF];
        let pcm = AudioSample::new(&NEG).unwrap().samples().unwrap();
        assert_eq!(pcm.get(0), Some(-1));
        assert_eq!(pcm.get(1), Some(-32768));
    }

    #[test]
    fn iterator_matches_get() {
        let pcm = AudioSample::new(&FOUR).unwrap().samples().unwrap();
        let collected: Vec<i16> = pcm.iter().collect();
        assert_eq!(collected.len(), 4);
        for (i, &s) in collected.iter().enumerate() {
            assert_eq!(Some(s), pcm.get(i));
        }
        assert_eq!(pcm.iter().len(), 4);
    }

    #[test]
    fn ulaw_pcm_access_refused() {
        static ULAW: [u32; 2] = [0x0100_0004, 0x1234_5678];
        let s = AudioSample::new(&ULAW).unwrap();
        assert_eq!(s.format(), SampleFormat::Ulaw44100);
        assert_eq!(s.samples().unwrap_err(), SampleDataError::UnsupportedEncoding);
        // Raw words stay reachable for metadata-level consumers.
        assert_eq!(s.words().len(), 2);
    }

    #[test]
    fn duration_rounds_to_nearest_ms() {
        // 3 samples at 44100 Hz is 0.068 ms.
        let s = AudioSample::new(&THREE).unwrap();
        assert_eq!(s.duration_ms(), 0);

        // 441 samples at 44100 Hz is exactly 10 ms.
        static TEN_MS: [u32; 222] = {
            let mut words = [0u32; 222];
            words[0] = 0x8100_01B9;
            words
        };
        let s = AudioSample::new(&TEN_MS).unwrap();
        assert_eq!(s.len(), 441);
        assert_eq!(s.duration_ms(), 10);
    }

    #[test]
    fn duration_pair_is_exact() {
        // 3 samples at 44100 Hz round to 0 ms; the pair keeps the count.
        let s = AudioSample::new(&THREE).unwrap();
        assert_eq!(s.duration_ms(), 0);
        assert_eq!(s.duration(), (3, 44_100));

        // Rate comes from the format code, count from the header field.
        static ULAW: [u32; 2] = [0x0300_0004, 0x0000_0000];
        let u = AudioSample::new(&ULAW).unwrap();
        assert_eq!(u.duration(), (4, 11_025));
    }

    #[test]
    fn reads_are_idempotent() {
        let s = AudioSample::new(&FOUR).unwrap();
        let pcm = s.samples().unwrap();
        let first: Vec<i16> = pcm.iter().collect();
        for _ in 0..8 {
            let again: Vec<i16> = pcm.iter().collect();
            assert_eq!(first, again);
        }
    }

    #[test]
    fn concurrent_reads_agree() {
        let s = AudioSample::new(&FOUR).unwrap();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(move || {
                    let pcm = s.samples().unwrap();
                    pcm.iter().collect::<Vec<i16>>()
                })
            })
            .collect();
        let baseline: Vec<i16> = s.samples().unwrap().iter().collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), baseline);
        }
    }
}
