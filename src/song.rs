//! The top-level song aggregate and its decode sequence

use crate::{
    header::Header,
    instrument::CustomInstrument,
    layer::Layer,
    player::Player,
    reader::{ReadError, Reader},
    tick::EffectiveTick,
};
use std::io::{self, Read};
use thiserror::Error;

/// A fully decoded `.nbs` song
///
/// The decode either succeeds and returns a complete song, or fails with the
/// phase and byte offset where it went wrong; no partial songs are returned.
/// Once decoded, a song is plain immutable data and can be shared freely
/// across threads.
///
/// ```no_run
/// use nbs::Song;
///
/// // Getting the bytes (from disk, network, ...) is up to the caller
/// let bytes = std::fs::read("bangers.nbs")?;
/// let song = Song::from_bytes(&bytes)?;
///
/// println!("{} by {}", song.header.song_name, song.header.author);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    /// The song metadata
    pub header: Header,

    /// Every tick that contains at least one note, ascending by tick with no
    /// duplicates
    pub effective_ticks: Vec<EffectiveTick>,

    /// The per-layer display and mix properties; the position in this list is
    /// the layer index
    pub layers: Vec<Layer>,

    /// The custom instruments, referenced by notes with instrument values of
    /// 16 and up
    pub custom_instruments: Vec<CustomInstrument>,
}

impl Song {
    /// Decode a [`Song`] from the raw bytes of an `.nbs` file
    ///
    /// The file is one fixed sequence: the header, the tick jump stream with
    /// its notes, one layer record per layer counted in the header, and
    /// finally a count-prefixed list of custom instruments. Ticks are stored
    /// as signed 16-bit jumps relative to the previous stored tick, starting
    /// from -1 and terminated by a jump of zero.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FromBytesError> {
        let mut reader = Reader::new(bytes);

        let header = Header::from_reader(&mut reader).map_err(FromBytesError::Header)?;

        let mut effective_ticks = Vec::new();
        let mut tick = -1i32;
        loop {
            let jump = reader.read_i16().map_err(FromBytesError::Notes)?;
            if jump == 0 {
                break;
            }

            tick += i32::from(jump);
            effective_ticks.push(
                EffectiveTick::from_reader(&mut reader, tick).map_err(FromBytesError::Notes)?,
            );
        }

        let layers = (0..header.layer_count)
            .map(|_| Layer::from_reader(&mut reader))
            .collect::<Result<_, _>>()
            .map_err(FromBytesError::Layers)?;

        let custom_instruments = {
            let count = reader.read_u8().map_err(FromBytesError::Instruments)?;
            (0..count)
                .map(|_| CustomInstrument::from_reader(&mut reader))
                .collect::<Result<_, _>>()
                .map_err(FromBytesError::Instruments)?
        };

        Ok(Self {
            header,
            effective_ticks,
            layers,
            custom_instruments,
        })
    }

    /// Decode a [`Song`] from an arbitrary I/O reader
    ///
    /// This reads the stream to its end before decoding, since the format
    /// requires random access only within the decoder itself.
    pub fn from_reader<R>(mut reader: R) -> Result<Self, FromReaderError>
    where
        R: Read,
    {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        Ok(Self::from_bytes(&bytes)?)
    }

    /// Walk the song tick by tick from the start, with empty ticks filling
    /// the gaps between the stored ones
    pub fn player(&self) -> Player<'_> {
        Player::new(self)
    }

    /// The time from the beginning of the song to `tick`, in seconds
    pub fn seconds_for_tick(&self, tick: i32) -> f64 {
        f64::from(tick) / (f64::from(self.header.tempo) / 100.0)
    }

    /// The time from the beginning of the song to `tick`, in game ticks
    ///
    /// The game clock is assumed to run at the usual 20 ticks per second.
    pub fn game_ticks_for_tick(&self, tick: i32) -> f64 {
        self.seconds_for_tick(tick) * 20.0
    }
}

/// Decode a [`Song`] from the raw bytes of an `.nbs` file
impl TryFrom<&[u8]> for Song {
    type Error = FromBytesError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Errors that might be returned from [`Song::from_bytes()`]
///
/// Each variant corresponds to one phase of the decode sequence; the wrapped
/// [`ReadError`] carries the byte offset where the read failed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FromBytesError {
    /// The header could not be read
    #[error("Reading the header failed")]
    Header(#[source] ReadError),

    /// The tick jump stream or one of its notes could not be read
    #[error("Reading the note data failed")]
    Notes(#[source] ReadError),

    /// The layer properties could not be read
    #[error("Reading the layer properties failed")]
    Layers(#[source] ReadError),

    /// The custom instruments could not be read
    #[error("Reading the custom instruments failed")]
    Instruments(#[source] ReadError),
}

/// Errors that might be returned from [`Song::from_reader()`]
#[derive(Debug, Error)]
pub enum FromReaderError {
    /// Something failed with I/O
    #[error("Something failed with I/O")]
    Read(#[from] io::Error),

    /// Deserialization from the read bytes failed
    #[error("Deserialization from the read bytes failed")]
    FromBytes(#[from] FromBytesError),
}
