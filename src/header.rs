//! The metadata block at the start of every `.nbs` file

use crate::reader::{ReadError, Reader};

/// Song metadata, stored at the start of every `.nbs` file
///
/// Only the "new" OpenNBS layout is supported. The fields are read in their
/// fixed on-disk order regardless of the declared [`version`](Self::version);
/// files saved by NBS versions older than 3 lay some of these fields out
/// differently and will not decode correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Always zero in the new format. The old format stored the song length
    /// here, which can never be zero, so this doubles as a format check.
    pub song_length_old: i16,

    /// The version of the new NBS format
    pub version: i8,

    /// The amount of default instruments when the song was saved
    ///
    /// This determines at what index custom instruments start.
    pub instrument_count: i8,

    /// The length of the song, measured in ticks
    pub song_length: i16,

    /// The last layer with at least one note block in it, or the last layer
    /// that has had its name, volume or stereo changed
    pub layer_count: i16,

    /// The name of the song
    pub song_name: String,

    /// The author of the song
    pub author: String,

    /// The original author of the song
    pub original_author: String,

    /// The description of the song
    pub description: String,

    /// The tempo of the song in ticks per second, multiplied by 100
    ///
    /// For example, 1225 means 12.25 ticks per second.
    pub tempo: i16,

    /// Whether auto-saving was enabled (0 or 1)
    ///
    /// Still saved to the file as of NBS version 4, but no longer used.
    pub auto_save: i8,

    /// The amount of minutes between auto-saves (1-60)
    ///
    /// Still saved to the file as of NBS version 4, but no longer used.
    pub auto_save_duration: i8,

    /// The time signature of the song; 3 means 3/4. Ranges from 2-8
    pub time_signature: i8,

    /// The amount of minutes spent on the project
    pub minutes: i32,

    /// The amount of times the user has left-clicked
    pub left_clicks: i32,

    /// The amount of times the user has right-clicked
    pub right_clicks: i32,

    /// The amount of times the user has added a note block
    pub notes_added: i32,

    /// The amount of times the user has removed a note block
    pub notes_removed: i32,

    /// If the song was imported from a .mid or .schematic file, the name of
    /// that file (without its path)
    pub midi_file: String,

    /// Whether looping is on (0 = off, 1 = on)
    pub loop_enabled: i8,

    /// The amount of times the song loops; 0 means infinite
    pub max_loops: i8,

    /// The tick the song loops back to
    pub loop_start_tick: i16,
}

impl Header {
    pub(crate) fn from_reader(reader: &mut Reader) -> Result<Self, ReadError> {
        Ok(Self {
            song_length_old: reader.read_i16()?,
            version: reader.read_i8()?,
            instrument_count: reader.read_i8()?,
            song_length: reader.read_i16()?,
            layer_count: reader.read_i16()?,
            song_name: reader.read_string()?,
            author: reader.read_string()?,
            original_author: reader.read_string()?,
            description: reader.read_string()?,
            tempo: reader.read_i16()?,
            auto_save: reader.read_i8()?,
            auto_save_duration: reader.read_i8()?,
            time_signature: reader.read_i8()?,
            minutes: reader.read_i32()?,
            left_clicks: reader.read_i32()?,
            right_clicks: reader.read_i32()?,
            notes_added: reader.read_i32()?,
            notes_removed: reader.read_i32()?,
            midi_file: reader.read_string()?,
            loop_enabled: reader.read_i8()?,
            max_loops: reader.read_i8()?,
            loop_start_tick: reader.read_i16()?,
        })
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            song_length_old: 0,
            version: 5,
            instrument_count: 0,
            song_length: 0,
            layer_count: 0,
            song_name: String::new(),
            author: String::new(),
            original_author: String::new(),
            description: String::new(),
            tempo: 0,
            auto_save: 0,
            auto_save_duration: 0,
            time_signature: 0,
            minutes: 0,
            left_clicks: 0,
            right_clicks: 0,
            notes_added: 0,
            notes_removed: 0,
            midi_file: String::new(),
            loop_enabled: 0,
            max_loops: 0,
            loop_start_tick: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a header buffer with a distinct value at every field
    fn distinct_header_bytes() -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&0i16.to_le_bytes()); // song_length_old
        bytes.push(5); // version
        bytes.push(16); // instrument_count
        bytes.extend_from_slice(&400i16.to_le_bytes()); // song_length
        bytes.extend_from_slice(&7i16.to_le_bytes()); // layer_count
        bytes.extend_from_slice(b"\x04\x00\x00\x00Song"); // song_name
        bytes.extend_from_slice(b"\x02\x00\x00\x00Me"); // author
        bytes.extend_from_slice(b"\x03\x00\x00\x00You"); // original_author
        bytes.extend_from_slice(b"\x04\x00\x00\x00Desc"); // description
        bytes.extend_from_slice(&1225i16.to_le_bytes()); // tempo
        bytes.push(1); // auto_save
        bytes.push(10); // auto_save_duration
        bytes.push(4); // time_signature
        bytes.extend_from_slice(&90i32.to_le_bytes()); // minutes
        bytes.extend_from_slice(&1000i32.to_le_bytes()); // left_clicks
        bytes.extend_from_slice(&500i32.to_le_bytes()); // right_clicks
        bytes.extend_from_slice(&300i32.to_le_bytes()); // notes_added
        bytes.extend_from_slice(&20i32.to_le_bytes()); // notes_removed
        bytes.extend_from_slice(b"\x08\x00\x00\x00song.mid"); // midi_file
        bytes.push(1); // loop_enabled
        bytes.push(0); // max_loops
        bytes.extend_from_slice(&32i16.to_le_bytes()); // loop_start_tick

        bytes
    }

    #[test]
    fn field_order() {
        let bytes = distinct_header_bytes();
        let mut reader = Reader::new(&bytes);
        let header = Header::from_reader(&mut reader).expect("could not read header");

        assert_eq!(header.song_length_old, 0);
        assert_eq!(header.version, 5);
        assert_eq!(header.instrument_count, 16);
        assert_eq!(header.song_length, 400);
        assert_eq!(header.layer_count, 7);
        assert_eq!(header.song_name, "Song");
        assert_eq!(header.author, "Me");
        assert_eq!(header.original_author, "You");
        assert_eq!(header.description, "Desc");
        assert_eq!(header.tempo, 1225);
        assert_eq!(header.auto_save, 1);
        assert_eq!(header.auto_save_duration, 10);
        assert_eq!(header.time_signature, 4);
        assert_eq!(header.minutes, 90);
        assert_eq!(header.left_clicks, 1000);
        assert_eq!(header.right_clicks, 500);
        assert_eq!(header.notes_added, 300);
        assert_eq!(header.notes_removed, 20);
        assert_eq!(header.midi_file, "song.mid");
        assert_eq!(header.loop_enabled, 1);
        assert_eq!(header.max_loops, 0);
        assert_eq!(header.loop_start_tick, 32);

        // The header reads the whole buffer, nothing more
        assert_eq!(reader.position(), bytes.len());
    }

    #[test]
    fn cut_off() {
        let bytes = distinct_header_bytes();
        let mut reader = Reader::new(&bytes[..10]);

        assert!(matches!(
            Header::from_reader(&mut reader),
            Err(ReadError::TruncatedBuffer { .. })
        ));
    }
}
