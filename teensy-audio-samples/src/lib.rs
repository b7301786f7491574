//! # teensy-audio-samples
//!
//! A `no_std`, zero-allocation crate providing **flash-resident audio sample
//! data** for Teensy 4.x (i.MX RT1062, Cortex-M7) audio playback in Rust. It
//! covers the role the wav2sketch-generated `AudioSample*.h/.cpp` pairs play
//! in a PJRC Teensy Audio sketch: statically allocated, immutable, word-packed
//! PCM data that playback nodes read straight out of program flash.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Parameters | [`constants`] | Sample rate, packing, padding constants |
//! | Wire format | [`format`] | Header word codec ([`format::SampleHeader`]) |
//! | Data model | [`sample`] | [`sample::AudioSample`] validated wrapper, PCM view |
//! | Placement | [`progmem`] | [`audio_sample_data!`] flash-section declaration macro |
//! | Data | [`samples`] | Bundled converted tables (feature-gated) |
//!
//! ## Quick start
//!
//! ```ignore
//! use teensy_audio_samples::audio_sample_data;
//!
//! audio_sample_data! {
//!     /// Click sound, 16-bit PCM at 44100 Hz.
//!     pub static AUDIO_SAMPLE_CLICK: AudioSample,
//!     from AUDIO_SAMPLE_CLICK_WORDS: [u32; 65] = [
//!         0x81000080, 0x13C70FEA, /* ... generated by the converter ... */
//!     ];
//! }
//!
//! let pcm = AUDIO_SAMPLE_CLICK.samples()?;
//! for s in pcm.iter() {
//!     // feed `s: i16` to the playback path
//! }
//! ```
//!
//! ## Memory-sample format
//!
//! Each sample array is a `[u32]` whose first word is a header:
//! `(format_code << 24) | sample_count`. Format code `0x81` is 16-bit PCM at
//! 44100 Hz; PCM payloads pack two little-endian `i16` samples per word,
//! earlier sample in the low half-word. See [`format`] for the full table.
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `bundled-samples` | yes | The converted sample tables in [`samples`] |
//!
//! ## Audio parameters
//!
//! - **Sample rate:** 44 100 Hz ([`constants::SAMPLE_RATE_HZ`])
//! - **Sample format:** `i16` (signed 16-bit PCM), two per `u32` word
//! - **Padding:** tables are zero-padded to 128-sample blocks
//!   ([`constants::AUDIO_BLOCK_SAMPLES`])

#![no_std]

#[cfg(test)]
extern crate std;

pub mod constants;
pub mod error;
pub mod format;
pub mod sample;
pub mod progmem;

#[cfg(feature = "bundled-samples")]
pub mod samples;
