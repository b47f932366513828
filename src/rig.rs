//! Camera rig and hand-driven tree rotation.
//!
//! The camera eye glides between a fixed vantage point per mode, and the
//! tree group yaws/pitches after the tracked hand. Both use the same
//! frame-rate independent damping as the particles, at their own rates.

use crate::state::Mode;
use crate::{Mat4, Quat, Vec2, Vec3};
use glam::EulerRot;
use std::f32::consts::PI;

/// Camera and group-rotation state.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    /// Damped camera eye position.
    pub eye: Vec3,
    /// Extra distance along the view axis from scroll input.
    pub zoom_offset: f32,
    /// Damped tree group yaw.
    pub group_yaw: f32,
    /// Damped tree group pitch.
    pub group_pitch: f32,
    /// Eye damping rate (per second).
    pub eye_damp: f32,
    /// Group rotation damping rate (per second).
    pub rotation_damp: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye: Self::target_eye(Mode::Tree),
            zoom_offset: 0.0,
            group_yaw: 0.0,
            group_pitch: 0.0,
            eye_damp: 2.0,
            rotation_damp: 4.0,
        }
    }
}

impl CameraRig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vantage point for a mode: close for the tree, pulled back and
    /// raised for the cloud, right up against a focused photo.
    pub fn target_eye(mode: Mode) -> Vec3 {
        match mode {
            Mode::Tree => Vec3::new(0.0, 0.0, 18.0),
            Mode::Dispersed => Vec3::new(0.0, 2.0, 25.0),
            Mode::Zoomed => Vec3::new(0.0, 0.0, 5.0),
        }
    }

    /// Advance the rig one frame.
    ///
    /// The hand vector lives in [-1,1]²; x is negated so dragging feels
    /// natural against the mirrored webcam view.
    pub fn update(&mut self, dt: f32, mode: Mode, hand: Vec2) {
        let eye_damp = (self.eye_damp * dt).min(1.0);
        self.eye += (Self::target_eye(mode) - self.eye) * eye_damp;

        let rot_damp = (self.rotation_damp * dt).min(1.0);
        let target_yaw = -hand.x * PI;
        let target_pitch = hand.y * 0.5;
        self.group_yaw += (target_yaw - self.group_yaw) * rot_damp;
        self.group_pitch += (target_pitch - self.group_pitch) * rot_damp;
    }

    /// View matrix looking at the origin.
    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.eye + Vec3::new(0.0, 0.0, self.zoom_offset);
        Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
    }

    /// World transform of the hand-rotated tree group.
    ///
    /// Applies to the damped particles, the inner photos and the star; the
    /// gallery and the snow live outside the group.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.group_pitch,
            self.group_yaw,
            0.0,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_converges_to_mode_target() {
        let mut rig = CameraRig::new();
        for _ in 0..600 {
            rig.update(1.0 / 60.0, Mode::Dispersed, Vec2::ZERO);
        }
        assert!((rig.eye - CameraRig::target_eye(Mode::Dispersed)).length() < 1e-2);
    }

    #[test]
    fn test_group_follows_hand() {
        let mut rig = CameraRig::new();
        let hand = Vec2::new(0.5, -0.4);
        for _ in 0..600 {
            rig.update(1.0 / 60.0, Mode::Tree, hand);
        }
        assert!((rig.group_yaw - (-0.5 * PI)).abs() < 1e-3);
        assert!((rig.group_pitch - (-0.2)).abs() < 1e-3);
    }

    #[test]
    fn test_fixed_point_is_stable() {
        let mut rig = CameraRig::new();
        let before = rig.eye;
        rig.update(1.0 / 60.0, Mode::Tree, Vec2::ZERO);
        assert!((rig.eye - before).length() < 1e-6);
        assert_eq!(rig.group_yaw, 0.0);
    }
}
