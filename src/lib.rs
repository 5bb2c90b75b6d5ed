//! A reader for the Note Block Studio `.nbs` song format
//!
//! [Note Block Studio](https://opennbs.org/) songs are sparse grids of note
//! block events, stored on disk with a jump-encoded layout that skips empty
//! cells. This crate decodes those bytes into a [`Song`] and lets you walk it
//! tick by tick with a [`Player`], which fills the gaps between stored ticks
//! with empty ones.
//!
//! Getting the bytes into memory is left to the caller; the decoder itself
//! never touches the filesystem or the network.
//!
//! ```no_run
//! use nbs::{Platform, Song};
//!
//! let bytes = std::fs::read("bangers.nbs")?;
//! let song = Song::from_bytes(&bytes)?;
//!
//! println!("{} by {}", song.header.song_name, song.header.author);
//!
//! for tick in song.player() {
//!     let seconds = song.seconds_for_tick(tick.tick);
//!     for note in &tick.notes {
//!         if let Some(sound) = note.sound_event(Platform::Java) {
//!             println!("{seconds:.2}s: {sound} at key {}", note.key);
//!         }
//!     }
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Writing `.nbs` files is not supported.

pub mod header;
pub mod instrument;
pub mod layer;
pub mod note;
pub mod player;
pub mod reader;
pub mod song;
pub mod tick;

pub use self::{
    header::Header,
    instrument::{CustomInstrument, Platform},
    layer::Layer,
    note::Note,
    player::Player,
    song::Song,
    tick::EffectiveTick,
};
