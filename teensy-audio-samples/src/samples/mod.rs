//! Bundled converted sample tables.
//!
//! Each file in this module is the output of the offline WAV converter
//! (wav2sketch_js) wrapped in [`audio_sample_data!`](crate::audio_sample_data):
//! the Rust counterpart of the `AudioSampleX.h/.cpp` pair a converted sketch
//! carries. Regenerating a table means re-running the converter on the source
//! WAV; the data is never produced at runtime.

mod sample;

pub use sample::{AUDIO_SAMPLE_SAMPLE, AUDIO_SAMPLE_SAMPLE_WORDS};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AUDIO_BLOCK_SAMPLES, PCM_SAMPLES_PER_WORD, SAMPLE_RATE_HZ};
    use crate::format::SampleFormat;

    #[test]
    fn bundled_sample_metadata() {
        assert_eq!(AUDIO_SAMPLE_SAMPLE.format(), SampleFormat::Pcm44100);
        assert_eq!(AUDIO_SAMPLE_SAMPLE.sample_rate_hz(), SAMPLE_RATE_HZ);
        assert_eq!(AUDIO_SAMPLE_SAMPLE.len(), 4410);
        assert_eq!(AUDIO_SAMPLE_SAMPLE.duration_ms(), 100);
    }

    #[test]
    fn bundled_sample_padded_to_blocks() {
        // 4410 samples pad to 4480 (35 blocks), plus one header word.
        let padded = 4480;
        assert_eq!(padded % AUDIO_BLOCK_SAMPLES, 0);
        assert_eq!(
            AUDIO_SAMPLE_SAMPLE.word_count(),
            1 + padded / PCM_SAMPLES_PER_WORD
        );

        // Pad region past the declared count is silence.
        let first_pad_word = 1 + 4410 / PCM_SAMPLES_PER_WORD;
        assert!(AUDIO_SAMPLE_SAMPLE.words()[first_pad_word..]
            .iter()
            .all(|&w| w == 0));
    }

    #[test]
    fn bundled_sample_payload() {
        let pcm = AUDIO_SAMPLE_SAMPLE.samples().unwrap();
        assert_eq!(pcm.len(), 4410);

        // Half-scale 441 Hz tone: starts at zero, peaks a quarter-cycle in.
        assert_eq!(pcm.get(0), Some(0));
        assert_eq!(pcm.get(25), Some(16384));
        assert_eq!(pcm.get(75), Some(-16384));
        assert_eq!(pcm.get(4410), None);

        let peak = pcm.iter().map(|s| (s as i32).abs()).max().unwrap();
        assert_eq!(peak, 16384);
    }

    #[test]
    fn bundled_sample_header_word() {
        // format 0x81, count 4410 (0x113A)
        assert_eq!(AUDIO_SAMPLE_SAMPLE_WORDS[0], 0x8100_113A);
        assert_eq!(
            AUDIO_SAMPLE_SAMPLE.words().as_ptr(),
            AUDIO_SAMPLE_SAMPLE_WORDS.as_ptr()
        );
    }
}
