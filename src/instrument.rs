//! Custom instruments and the built-in instrument sound events

use crate::reader::{ReadError, Reader};

/// The game platforms, which name their built-in sound events differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Minecraft Java Edition
    Java,

    /// Minecraft Bedrock Edition
    Bedrock,
}

/// The sound events of the 16 built-in instruments on Java Edition, by
/// instrument index
pub const JAVA_SOUND_EVENTS: [&str; 16] = [
    "block.note_block.harp",
    "block.note_block.bass",
    "block.note_block.basedrum",
    "block.note_block.snare",
    "block.note_block.hat",
    "block.note_block.guitar",
    "block.note_block.flute",
    "block.note_block.bell",
    "block.note_block.chime",
    "block.note_block.xylophone",
    "block.note_block.iron_xylophone",
    "block.note_block.cow_bell",
    "block.note_block.didgeridoo",
    "block.note_block.bit",
    "block.note_block.banjo",
    "block.note_block.pling",
];

/// The sound events of the 16 built-in instruments on Bedrock Edition, by
/// instrument index
pub const BEDROCK_SOUND_EVENTS: [&str; 16] = [
    "note.harp",
    "note.bass",
    "note.bd",
    "note.snare",
    "note.hat",
    "note.guitar",
    "note.flute",
    "note.bell",
    "note.chime",
    "note.xylophone",
    "note.iron_xylophone",
    "note.cow_bell",
    "note.didgeridoo",
    "note.bit",
    "note.banjo",
    "note.pling",
];

/// A user-defined instrument backed by a custom sound file
///
/// Notes reference custom instruments with instrument values of 16 and up;
/// the custom instrument at position `instrument - 16` in
/// [`Song::custom_instruments`](crate::Song::custom_instruments) is the one
/// that plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomInstrument {
    /// The name of the instrument
    pub name: String,

    /// The sound file of the instrument (relative path from the /Sounds
    /// directory)
    pub path: String,

    /// The key of the sound file, from 0-87 like note blocks
    ///
    /// Default is 45 (F#4).
    pub key: i8,

    /// Whether the piano should automatically press keys with this instrument
    /// when the marker passes them (0 or 1)
    pub press_piano_key: u8,
}

impl CustomInstrument {
    pub(crate) fn from_reader(reader: &mut Reader) -> Result<Self, ReadError> {
        Ok(Self {
            name: reader.read_string()?,
            path: reader.read_string()?,
            key: reader.read_i8()?,
            press_piano_key: reader.read_u8()?,
        })
    }
}

impl Default for CustomInstrument {
    fn default() -> Self {
        Self {
            name: String::new(),
            path: String::new(),
            key: 45,
            press_piano_key: 0,
        }
    }
}
