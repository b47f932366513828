//! Landmark source boundary.
//!
//! Hand detection itself is an external collaborator (a camera pipeline
//! feeding a landmark model); the frame loop only needs something it can
//! poll for zero or one [`HandFrame`] per tick. A missing frame is not an
//! error; gesture and mode simply hold their last values.

use crate::gesture::HandFrame;

/// A provider of per-frame hand landmarks.
pub trait LandmarkSource {
    /// Poll for the most recent detection at `elapsed` seconds.
    ///
    /// Returns `None` when no hand is visible or no new detection is
    /// available for this tick.
    fn poll(&mut self, elapsed: f32) -> Option<HandFrame>;

    /// Release any capture resource. Called once on teardown.
    fn stop(&mut self) {}
}

/// A source that never sees a hand.
#[derive(Debug, Default)]
pub struct NullSource;

impl LandmarkSource for NullSource {
    fn poll(&mut self, _elapsed: f32) -> Option<HandFrame> {
        None
    }
}

/// Timed playback of pre-recorded hand frames.
///
/// Each cue is `(at_seconds, frame)`; from its cue time onward a frame is
/// reported every poll until the next cue takes over. Useful for demos and
/// for driving the full gesture pipeline in tests without a camera.
pub struct ScriptedSource {
    cues: Vec<(f32, Option<HandFrame>)>,
    cursor: usize,
    current: Option<HandFrame>,
}

impl ScriptedSource {
    /// Build a source from cues. `None` cues model the hand leaving the
    /// frame. Cues are sorted by time.
    pub fn new(mut cues: Vec<(f32, Option<HandFrame>)>) -> Self {
        cues.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            cues,
            cursor: 0,
            current: None,
        }
    }
}

impl LandmarkSource for ScriptedSource {
    fn poll(&mut self, elapsed: f32) -> Option<HandFrame> {
        while self.cursor < self.cues.len() && self.cues[self.cursor].0 <= elapsed {
            self.current = self.cues[self.cursor].1;
            self.cursor += 1;
        }
        self.current
    }
}
