//! Gesture classification from hand landmarks.
//!
//! Works on a single hand's 21 normalized 2D landmarks (the standard hand
//! skeleton ordering: wrist, then four joints per digit from thumb to
//! pinky). Classification is purely geometric: a finger counts as extended
//! when its tip sits farther from the wrist than its PIP joint, and a pinch
//! is a thumb tip close to the index tip. No model inference happens here;
//! the landmark provider is an external collaborator.

use crate::Vec2;

/// Number of landmarks in a hand frame.
pub const LANDMARK_COUNT: usize = 21;

/// Thumb-tip-to-index-tip distance below which a pinch is reported,
/// in normalized landmark space.
pub const PINCH_EPSILON: f32 = 0.05;

/// Landmark indices in the hand skeleton.
pub mod landmark {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
    /// Middle-finger MCP, used as the palm center.
    pub const MIDDLE_MCP: usize = 9;
    /// Index, middle, ring, pinky tips.
    pub const FINGER_TIPS: [usize; 4] = [8, 12, 16, 20];
    /// PIP joints matching [`FINGER_TIPS`].
    pub const FINGER_PIPS: [usize; 4] = [6, 10, 14, 18];
}

/// One hand's landmarks for one video frame, in normalized [0,1]² space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandFrame {
    pub points: [Vec2; LANDMARK_COUNT],
}

impl HandFrame {
    pub fn new(points: [Vec2; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Palm position remapped to [-1,1]² with y up.
    ///
    /// Video space has y growing downward, so y is negated; x keeps the
    /// camera's mirrored sense (consumers negate it for a natural drag).
    pub fn pointer(&self) -> Vec2 {
        let center = self.points[landmark::MIDDLE_MCP];
        Vec2::new((center.x - 0.5) * 2.0, -(center.y - 0.5) * 2.0)
    }
}

/// Recognized gesture for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    /// No hand detected.
    #[default]
    None,
    /// All four tracked fingers curled.
    Fist,
    /// All four tracked fingers extended.
    Open,
    /// Thumb and index fingertips close together.
    Pinch,
    /// A hand is present but matches no other gesture.
    Neutral,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::None => "none",
            Gesture::Fist => "fist",
            Gesture::Open => "open",
            Gesture::Pinch => "pinch",
            Gesture::Neutral => "neutral",
        }
    }
}

/// Classify one hand frame.
///
/// Pinch wins over the finger-count gestures; a fist requires zero extended
/// fingers, an open hand all four.
pub fn classify(frame: &HandFrame) -> Gesture {
    let points = &frame.points;

    let pinch_dist = points[landmark::THUMB_TIP].distance(points[landmark::INDEX_TIP]);
    if pinch_dist < PINCH_EPSILON {
        return Gesture::Pinch;
    }

    let wrist = points[landmark::WRIST];
    let extended = landmark::FINGER_TIPS
        .iter()
        .zip(&landmark::FINGER_PIPS)
        .filter(|&(&tip, &pip)| points[tip].distance(wrist) > points[pip].distance(wrist))
        .count();

    match extended {
        0 => Gesture::Fist,
        4 => Gesture::Open,
        _ => Gesture::Neutral,
    }
}

#[cfg(test)]
pub(crate) mod test_frames {
    use super::*;

    /// Wrist at center-bottom, fingers laid out upward; `reach` scales how
    /// far each tip sits beyond its PIP joint (negative = curled).
    pub fn synthetic(reach: f32, pinch_gap: f32) -> HandFrame {
        let wrist = Vec2::new(0.5, 0.8);
        let mut points = [wrist; LANDMARK_COUNT];
        for (f, (&tip, &pip)) in landmark::FINGER_TIPS
            .iter()
            .zip(&landmark::FINGER_PIPS)
            .enumerate()
        {
            let x = 0.4 + f as f32 * 0.06;
            points[pip] = Vec2::new(x, 0.5);
            points[tip] = Vec2::new(x, 0.5 - reach);
        }
        // Thumb tip relative to index tip controls pinch.
        points[landmark::THUMB_TIP] =
            points[landmark::INDEX_TIP] + Vec2::new(pinch_gap, 0.0);
        points[landmark::MIDDLE_MCP] = Vec2::new(0.5, 0.6);
        HandFrame::new(points)
    }
}
