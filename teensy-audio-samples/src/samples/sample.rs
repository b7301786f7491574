// Audio data converted from audio file by wav2sketch_js
// Converted from sample.wav, using 44100 Hz, 16 bit PCM encoding

crate::audio_sample_data! {
    /// Audio data converted from `sample.wav`: 4410 samples (100 ms) of
    /// 16-bit PCM at 44100 Hz, zero-padded to 4480 samples (35 blocks).
    pub static AUDIO_SAMPLE_SAMPLE: AudioSample,
    from AUDIO_SAMPLE_SAMPLE_WORDS: [u32; 2241] = [
        0x8100113A, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF,
        0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD,
        0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F,
        0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62,
        0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021,
        0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B,
        0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5,
        0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF,
        0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E,
        0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871,
        0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123,
        0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431,
        0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA,
        0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609, 0x3B8139E8, 0x3DFD3CDE,
        0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8, 0x33C73609, 0x2EA73150,
        0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805, 0xFBFB0000, 0xF402F7FB,
        0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0, 0xC7EBC9F7, 0xC47FC618,
        0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322, 0xC7EBC618, 0xCC39C9F7,
        0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016, 0xFBFBF7FB, 0x04050000,
        0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x28CB259E, 0x2EA72BCF, 0x33C73150, 0x38153609,
        0x3B8139E8, 0x3DFD3CDE, 0x3F7E3EDD, 0x40003FDF, 0x3F7E3FDF, 0x3DFD3EDD, 0x3B813CDE, 0x381539E8,
        0x33C73609, 0x2EA73150, 0x28CB2BCF, 0x224B259E, 0x1B401ED5, 0x13C7178F, 0x0BFE0FEA, 0x04050805,
        0xFBFB0000, 0xF402F7FB, 0xEC39F016, 0xE4C0E871, 0xDDB5E12B, 0xD735DA62, 0xD159D431, 0xCC39CEB0,
        0xC7EBC9F7, 0xC47FC618, 0xC203C322, 0xC082C123, 0xC000C021, 0xC082C021, 0xC203C123, 0xC47FC322,
        0xC7EBC618, 0xCC39C9F7, 0xD159CEB0, 0xD735D431, 0xDDB5DA62, 0xE4C0E12B, 0xEC39E871, 0xF402F016,
        0xFBFBF7FB, 0x04050000, 0x0BFE0805, 0x13C70FEA, 0x1B40178F, 0x224B1ED5, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000,
    ];
}
