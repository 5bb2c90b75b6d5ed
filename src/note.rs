//! Single note block events

use crate::{
    instrument::{BEDROCK_SOUND_EVENTS, JAVA_SOUND_EVENTS, Platform},
    reader::{ReadError, Reader},
};

/// A single note block event
///
/// Notes are stored as fixed 5-byte records. The [`layer`](Self::layer) field
/// is not part of the record; it comes from the jump stream surrounding the
/// note in the file and is filled in during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Note {
    /// The instrument of the note block
    ///
    /// 0-15 are the built-in instruments; higher values refer to the song's
    /// custom instruments, starting at 16.
    pub instrument: i8,

    /// The key of the note block, from 0 (A0) to 87 (C8)
    ///
    /// 33-57 is within the 2-octave limit.
    pub key: i8,

    /// The velocity/volume of the note block, from 0 to 100
    pub velocity: i8,

    /// The stereo position of the note block, from 0-200
    ///
    /// 0 is 2 blocks right, 100 is center, 200 is 2 blocks left.
    pub panning: u8,

    /// The fine pitch of the note block in cents
    ///
    /// 0 is no fine-tuning, ±100 cents is a single semitone difference. Note
    /// Block Studio itself limits this to ±1200.
    pub pitch: i16,

    /// The absolute index of the layer this note block sits in
    pub layer: i32,
}

impl Note {
    pub(crate) fn from_reader(reader: &mut Reader, layer: i32) -> Result<Self, ReadError> {
        Ok(Self {
            instrument: reader.read_i8()?,
            key: reader.read_i8()?,
            velocity: reader.read_i8()?,
            panning: reader.read_u8()?,
            pitch: reader.read_i16()?,
            layer,
        })
    }

    /// The built-in sound event this note triggers on the given platform
    ///
    /// Returns [`None`] for custom instruments (16 and up), which resolve
    /// through [`Song::custom_instruments`](crate::Song::custom_instruments)
    /// instead.
    pub fn sound_event(&self, platform: Platform) -> Option<&'static str> {
        let events = match platform {
            Platform::Java => &JAVA_SOUND_EVENTS,
            Platform::Bedrock => &BEDROCK_SOUND_EVENTS,
        };

        usize::try_from(self.instrument)
            .ok()
            .and_then(|index| events.get(index))
            .copied()
    }
}
