//! Tick-by-tick playback over a decoded song

use crate::{song::Song, tick::EffectiveTick};
use std::borrow::Cow;

/// A tick-by-tick playback cursor over a decoded [`Song`]
///
/// The song only stores ticks that contain notes. A player walks every
/// integer tick from 0 up to and including the last stored one, yielding the
/// stored tick where there is one and a freshly synthesized empty tick for
/// each gap. Synthesized ticks are owned by the caller and never inserted
/// back into the song.
///
/// A player is a single-pass, single-consumer cursor; call
/// [`Song::player()`] again to start over from the beginning.
///
/// ```
/// # use nbs::{EffectiveTick, Song};
/// let mut song = Song::default();
/// song.effective_ticks = vec![
///     EffectiveTick { tick: 0, ..EffectiveTick::default() },
///     EffectiveTick { tick: 3, ..EffectiveTick::default() },
/// ];
///
/// // Ticks 1 and 2 are filled in, empty
/// let ticks: Vec<_> = song.player().map(|tick| tick.tick).collect();
/// assert_eq!(ticks, [0, 1, 2, 3]);
/// ```
pub struct Player<'a> {
    /// The stored ticks of the song being played
    ticks: &'a [EffectiveTick],

    /// The tick most recently yielded
    tick: i32,

    /// The position of the next stored tick to yield
    index: usize,

    /// The tick of the last stored entry; playback ends after it
    max_tick: i32,
}

impl<'a> Player<'a> {
    pub(crate) fn new(song: &'a Song) -> Self {
        let ticks = song.effective_ticks.as_slice();

        // A song without any stored ticks has nothing to play
        let max_tick = ticks.last().map_or(-1, |tick| tick.tick);

        Self {
            ticks,
            tick: -1,
            index: 0,
            max_tick,
        }
    }
}

impl<'a> Iterator for Player<'a> {
    type Item = Cow<'a, EffectiveTick>;

    fn next(&mut self) -> Option<Self::Item> {
        // The index check only fires if the ascending-tick invariant is
        // broken; normally both conditions run out at the same time
        if self.tick >= self.max_tick || self.index >= self.ticks.len() {
            return None;
        }

        self.tick += 1;

        let stored = &self.ticks[self.index];
        if stored.tick == self.tick {
            self.index += 1;
            Some(Cow::Borrowed(stored))
        } else {
            Some(Cow::Owned(EffectiveTick::empty(self.tick)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Note;

    fn song_with_ticks(ticks: &[i32]) -> Song {
        Song {
            effective_ticks: ticks
                .iter()
                .map(|tick| EffectiveTick {
                    tick: *tick,
                    notes: vec![Note::default()],
                })
                .collect(),
            ..Song::default()
        }
    }

    #[test]
    fn gap_filling() {
        let song = song_with_ticks(&[0, 3]);
        let ticks: Vec<_> = song.player().collect();

        assert_eq!(ticks.len(), 4);
        for (index, tick) in ticks.iter().enumerate() {
            assert_eq!(tick.tick, index as i32);
        }

        // Stored ticks come out as-is, the gaps are empty
        assert_eq!(ticks[0].notes.len(), 1);
        assert!(ticks[1].notes.is_empty());
        assert!(ticks[2].notes.is_empty());
        assert_eq!(ticks[3].notes.len(), 1);
    }

    #[test]
    fn leading_gap() {
        let song = song_with_ticks(&[2]);
        let ticks: Vec<_> = song.player().collect();

        assert_eq!(ticks.len(), 3);
        assert!(ticks[0].notes.is_empty());
        assert!(ticks[1].notes.is_empty());
        assert_eq!(ticks[2].notes.len(), 1);
    }

    #[test]
    fn termination() {
        let song = song_with_ticks(&[0, 1]);
        let mut player = song.player();

        assert!(player.next().is_some());
        assert!(player.next().is_some());
        assert!(player.next().is_none());

        // Stays done once finished
        assert!(player.next().is_none());
    }

    #[test]
    fn empty_song() {
        let song = Song::default();
        assert!(song.player().next().is_none());
    }

    #[test]
    fn restart_by_reconstruction() {
        let song = song_with_ticks(&[0, 2]);

        assert_eq!(song.player().count(), 3);
        assert_eq!(song.player().count(), 3);
    }

    #[test]
    fn synthesized_ticks_are_owned() {
        let song = song_with_ticks(&[1]);
        let mut player = song.player();

        assert!(matches!(player.next(), Some(Cow::Owned(_))));
        assert!(matches!(player.next(), Some(Cow::Borrowed(_))));
    }
}
