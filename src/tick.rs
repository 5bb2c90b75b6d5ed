//! Ticks that physically occur in the file, and their note streams

use crate::{
    note::Note,
    reader::{ReadError, Reader},
};

/// All the notes at one tick of the song
///
/// The file only stores ticks that contain at least one note; the silent
/// ticks in between are never written out. Within a tick the notes are
/// sparse too: a signed 16-bit jump advances a running layer index that
/// starts at -1, each nonzero jump is followed by one 5-byte note record,
/// and a jump of zero ends the tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveTick {
    /// Ticks from the beginning of the song
    pub tick: i32,

    /// The notes at this tick, each tagged with its absolute layer index
    pub notes: Vec<Note>,
}

impl EffectiveTick {
    /// An effective tick without any notes, for the gaps the file does not
    /// store
    pub(crate) fn empty(tick: i32) -> Self {
        Self {
            tick,
            notes: Vec::new(),
        }
    }

    /// Decode the layer/note jump stream of a single tick
    ///
    /// The absolute tick index is not part of the stored record; it comes
    /// from the tick jump stream surrounding this one.
    pub(crate) fn from_reader(reader: &mut Reader, tick: i32) -> Result<Self, ReadError> {
        let mut notes = Vec::new();
        let mut layer = -1i32;

        loop {
            let jump = reader.read_i16()?;
            if jump == 0 {
                break;
            }

            layer += i32::from(jump);
            notes.push(Note::from_reader(reader, layer)?);
        }

        Ok(Self { tick, notes })
    }
}
