//! Print the metadata and payload summary of the bundled sample table.
//!
//! Runs on the host; the same reads work unchanged on the target, where the
//! table lives in flash.

use teensy_audio_samples::error::SampleDataError;
use teensy_audio_samples::samples::AUDIO_SAMPLE_SAMPLE;

fn main() -> Result<(), SampleDataError> {
    let sample = &AUDIO_SAMPLE_SAMPLE;

    println!("AUDIO_SAMPLE_SAMPLE");
    println!("  format:       {:?} (code 0x{:02X})", sample.format(), sample.format().code());
    println!("  sample rate:  {} Hz", sample.sample_rate_hz());
    println!("  samples:      {}", sample.len());
    println!("  duration:     {} ms", sample.duration_ms());
    println!("  table size:   {} words ({} bytes, header included)",
        sample.word_count(),
        sample.word_count() * 4,
    );

    let pcm = sample.samples()?;
    let peak = pcm.iter().map(|s| (s as i32).abs()).max().unwrap_or(0);
    println!("  peak:         {} ({:.1}% of full scale)", peak, peak as f32 * 100.0 / 32768.0);

    print!("  first words: ");
    for w in sample.words().iter().take(6) {
        print!(" 0x{:08X}", w);
    }
    println!();

    Ok(())
}
