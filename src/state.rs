//! Application state and the gesture-to-mode transition table.
//!
//! One plain struct owned by the frame loop replaces any ambient store:
//! every consumer (driver, gallery, camera rig, renderer) reads it by
//! reference once per tick. Gesture updates are edge-triggered: a
//! transition fires only when the classified gesture changes, so a held
//! fist does not re-enter tree mode every frame.

use crate::gesture::{classify, Gesture, HandFrame};
use crate::Vec2;
use rand::Rng;
use std::path::PathBuf;

/// Which target layout the particles damp toward.
///
/// `Zoomed` shares the dispersed targets; it differs only in camera
/// framing and in carrying a focused photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Tree,
    Dispersed,
    Zoomed,
}

/// Shared per-frame state for the whole installation.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active morph mode.
    pub mode: Mode,
    /// Palm position in [-1,1]², y up. Drives the tree group rotation.
    pub hand: Vec2,
    /// Last classified gesture (edge-trigger reference).
    pub gesture: Gesture,
    /// Ordered uploaded-image list. A length change requires layout
    /// regeneration.
    pub images: Vec<PathBuf>,
    /// Photo focused by the last pinch, if any.
    pub focused_image: Option<usize>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an uploaded image.
    pub fn add_image(&mut self, path: PathBuf) {
        self.images.push(path);
    }

    /// Feed one landmark observation (or its absence) into the state.
    ///
    /// Updates the hand position, classifies the gesture and applies the
    /// mode transition on a gesture edge. A missing frame resets the
    /// gesture to `None` but leaves mode and hand untouched, so a dropped
    /// detection degrades silently.
    pub fn observe<R: Rng>(&mut self, frame: Option<&HandFrame>, rng: &mut R) {
        match frame {
            Some(frame) => {
                self.hand = frame.pointer();
                let gesture = classify(frame);
                if gesture != self.gesture {
                    self.apply_gesture(gesture, rng);
                    self.gesture = gesture;
                }
            }
            None => self.gesture = Gesture::None,
        }
    }

    /// Apply one gesture's mode transition.
    ///
    /// Fist → tree, open → dispersed, pinch → zoomed onto a random photo
    /// (only when photos exist). `None`/`Neutral` leave the mode unchanged.
    pub fn apply_gesture<R: Rng>(&mut self, gesture: Gesture, rng: &mut R) {
        match gesture {
            Gesture::Fist => {
                self.mode = Mode::Tree;
                self.focused_image = None;
            }
            Gesture::Open => {
                self.mode = Mode::Dispersed;
                self.focused_image = None;
            }
            Gesture::Pinch => {
                if !self.images.is_empty() {
                    self.mode = Mode::Zoomed;
                    self.focused_image = Some(rng.gen_range(0..self.images.len()));
                }
            }
            Gesture::None | Gesture::Neutral => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::test_frames::synthetic;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0)
    }

    #[test]
    fn test_transition_table() {
        let mut state = AppState::new();
        let mut rng = rng();

        state.apply_gesture(Gesture::Open, &mut rng);
        assert_eq!(state.mode, Mode::Dispersed);

        state.apply_gesture(Gesture::Fist, &mut rng);
        assert_eq!(state.mode, Mode::Tree);

        state.apply_gesture(Gesture::Neutral, &mut rng);
        assert_eq!(state.mode, Mode::Tree);
    }

    #[test]
    fn test_pinch_requires_images() {
        let mut state = AppState::new();
        let mut rng = rng();

        state.apply_gesture(Gesture::Pinch, &mut rng);
        assert_eq!(state.mode, Mode::Tree);
        assert_eq!(state.focused_image, None);

        state.add_image(PathBuf::from("a.png"));
        state.add_image(PathBuf::from("b.png"));
        state.apply_gesture(Gesture::Pinch, &mut rng);
        assert_eq!(state.mode, Mode::Zoomed);
        assert!(state.focused_image.unwrap() < 2);
    }

    #[test]
    fn test_fist_clears_focus() {
        let mut state = AppState::new();
        let mut rng = rng();
        state.add_image(PathBuf::from("a.png"));
        state.apply_gesture(Gesture::Pinch, &mut rng);
        assert!(state.focused_image.is_some());

        state.apply_gesture(Gesture::Fist, &mut rng);
        assert_eq!(state.focused_image, None);
    }

    #[test]
    fn test_observe_edge_trigger() {
        let mut state = AppState::new();
        let mut rng = rng();
        let open = synthetic(0.2, 0.3);

        state.observe(Some(&open), &mut rng);
        assert_eq!(state.mode, Mode::Dispersed);
        assert_eq!(state.gesture, Gesture::Open);

        // Holding the gesture fires no further transition.
        state.mode = Mode::Tree;
        state.observe(Some(&open), &mut rng);
        assert_eq!(state.mode, Mode::Tree);
    }

    #[test]
    fn test_observe_missing_frame_freezes_mode() {
        let mut state = AppState::new();
        let mut rng = rng();
        state.observe(Some(&synthetic(0.2, 0.3)), &mut rng);
        assert_eq!(state.mode, Mode::Dispersed);

        state.observe(None, &mut rng);
        assert_eq!(state.mode, Mode::Dispersed);
        assert_eq!(state.gesture, Gesture::None);
    }
}
