//! Flash placement for sample data: the Rust rendition of `PROGMEM`.
//!
//! The [`audio_sample_data!`] macro declares a converted sample table as a
//! pair of statics: the raw word array, and a validated
//! [`AudioSample`](crate::sample::AudioSample) handle over it.
//!
//! # Syntax
//!
//! ```ignore
//! use teensy_audio_samples::audio_sample_data;
//!
//! audio_sample_data! {
//!     /// Snare hit, 16-bit PCM at 44100 Hz.
//!     pub static AUDIO_SAMPLE_SNARE: AudioSample,
//!     from AUDIO_SAMPLE_SNARE_WORDS: [u32; 1345] = [
//!         0x81000A80, 0x04050000, /* ... converter output ... */
//!     ];
//! }
//! ```
//!
//! # Placement
//!
//! On bare-metal builds (`target_os = "none"`) the word array is emitted into
//! the `.progmem.audio` section. The Teensy 4.x linker script maps that
//! section to external flash and never copies it into OCRAM/DTCM, so large
//! tables cost no RAM — the role `PROGMEM` plays in a C++ sketch. Placement
//! is a directive to the linker, not a behavioral guarantee: a linker script
//! that does not map the section will fall back to its default flash
//! `.rodata` handling. Hosted builds (tests, demos) get an ordinary static.
//!
//! # Build-time validation
//!
//! The `AudioSample` static is initialized in a `const` context, so a table
//! with a bad header word (unknown format code, count exceeding the payload)
//! stops the build with a const-evaluation error. This subsumes the only
//! failure class the C declaration had — an unresolved symbol at link time —
//! and adds header/length checking on top: the count lives in word 0 of the
//! data itself, so there is no separately maintained length constant to
//! drift out of sync.

/// Declare a flash-resident audio sample table with a validated handle.
///
/// See the [module documentation](crate::progmem) for syntax and placement
/// details.
#[macro_export]
macro_rules! audio_sample_data {
    (
        $(#[$meta:meta])*
        $vis:vis static $name:ident : AudioSample,
        from $words_name:ident : [u32; $len:expr] = [ $($word:expr),* $(,)? ];
    ) => {
        #[cfg_attr(target_os = "none", link_section = ".progmem.audio")]
        $vis static $words_name: [u32; $len] = [ $($word),* ];

        $(#[$meta])*
        $vis static $name: $crate::sample::AudioSample =
            match $crate::sample::AudioSample::new(&$words_name) {
                Ok(sample) => sample,
                Err(_) => panic!("invalid audio sample table"),
            };
    };
}

#[cfg(test)]
mod tests {
    use crate::format::SampleFormat;

    crate::audio_sample_data! {
        /// Four-sample test tone.
        static TEST_TONE: AudioSample,
        from TEST_TONE_WORDS: [u32; 3] = [0x8100_0004, 0x1111_2222, 0x3333_4444];
    }

    #[test]
    fn macro_declares_words_and_handle() {
        assert_eq!(TEST_TONE_WORDS.len(), 3);
        assert_eq!(TEST_TONE.len(), 4);
        assert_eq!(TEST_TONE.format(), SampleFormat::Pcm44100);
        // The handle wraps the declared array, not a copy.
        assert_eq!(
            TEST_TONE.words().as_ptr(),
            TEST_TONE_WORDS.as_ptr()
        );
    }

    #[test]
    fn macro_handle_unpacks() {
        let pcm = TEST_TONE.samples().unwrap();
        assert_eq!(pcm.get(0), Some(0x2222));
        assert_eq!(pcm.get(1), Some(0x1111));
        assert_eq!(pcm.get(2), Some(0x4444));
        assert_eq!(pcm.get(3), Some(0x3333));
    }
}
