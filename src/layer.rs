//! Per-layer display and mix properties

use crate::reader::{ReadError, Reader};

/// The display and mix properties of one layer of the song
///
/// Layers are the horizontal tracks notes are organized into. One record is
/// stored for every layer from 0 up to the header's layer count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// The name of the layer
    pub name: String,

    /// Whether the layer has been marked as locked (1 = locked)
    pub lock: i8,

    /// The volume of the layer as a percentage, from 0 to 100
    pub volume: i8,

    /// How much the layer is panned to the left/right
    ///
    /// 0 is 2 blocks right, 100 is center, 200 is 2 blocks left.
    pub stereo: u8,
}

impl Layer {
    pub(crate) fn from_reader(reader: &mut Reader) -> Result<Self, ReadError> {
        Ok(Self {
            name: reader.read_string()?,
            lock: reader.read_i8()?,
            volume: reader.read_i8()?,
            stereo: reader.read_u8()?,
        })
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self {
            name: String::new(),
            lock: 0,
            volume: 100,
            stereo: 100,
        }
    }
}
