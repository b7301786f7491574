/// Sample rate of the standard converted audio data, in Hz.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Bits per sample for 16-bit PCM payloads.
pub const PCM_BITS_PER_SAMPLE: u32 = 16;

/// Bits per sample for u-law companded payloads.
pub const ULAW_BITS_PER_SAMPLE: u32 = 8;

/// 16-bit PCM samples packed into each 32-bit payload word.
pub const PCM_SAMPLES_PER_WORD: usize = 2;

/// u-law samples (one byte each) packed into each 32-bit payload word.
pub const ULAW_SAMPLES_PER_WORD: usize = 4;

/// Number of samples per audio block; converted tables are zero-padded to a
/// whole number of blocks so block-at-a-time readers never run off the end.
pub const AUDIO_BLOCK_SAMPLES: usize = 128;

/// Largest sample count encodable in the 24-bit header length field.
pub const MAX_SAMPLE_COUNT: usize = 0x00FF_FFFF;
