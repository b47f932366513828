//! Orbiting photo gallery.
//!
//! A helix of framed photos wrapping the tree, animated independently of
//! the damped particle population: the whole spiral spins continuously
//! (faster while dispersed), each frame floats on its own phase, and
//! dispersal pushes the frames radially outward by a fixed multiplier.
//!
//! The multiplier only applies to the gallery; the damped particles get no
//! extra expansion. [`GalleryConfig::dispersal_expansion`] is the knob.

use crate::state::Mode;
use crate::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

/// Gallery tuning constants.
#[derive(Debug, Clone, Copy)]
pub struct GalleryConfig {
    /// Number of frames on the spiral.
    pub frame_count: usize,
    /// How many times the spiral wraps around the trunk.
    pub loops: f32,
    /// Total height span, centered on y=0.
    pub height: f32,
    /// Radius at the bottom of the spiral.
    pub base_radius: f32,
    /// Radius floor at the top.
    pub top_radius: f32,
    /// Spiral yaw speed while dispersed (radians per second).
    pub spin_dispersed: f32,
    /// Spiral yaw speed otherwise.
    pub spin_idle: f32,
    /// Per-frame vertical float amplitude.
    pub bob_amplitude: f32,
    /// Per-frame vertical float frequency.
    pub bob_frequency: f32,
    /// Radial multiplier applied to x/z while dispersed.
    pub dispersal_expansion: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            frame_count: 16,
            loops: 2.5,
            height: 11.0,
            base_radius: 7.0,
            top_radius: 2.0,
            spin_dispersed: 0.8,
            spin_idle: 0.2,
            bob_amplitude: 0.2,
            bob_frequency: 2.0,
            dispersal_expansion: 1.8,
        }
    }
}

/// World pose of one gallery frame for the current tick.
#[derive(Debug, Clone, Copy)]
pub struct GalleryFrame {
    pub position: Vec3,
    pub rotation: Quat,
    /// Which photo texture this frame shows (already wrapped).
    pub texture_index: usize,
}

struct Anchor {
    /// Rest position on the helix, before spin and expansion.
    position: Vec3,
    /// Yaw that faces the frame outward from the trunk.
    facing: f32,
}

/// The spinning spiral of photo frames.
pub struct GallerySpiral {
    config: GalleryConfig,
    anchors: Vec<Anchor>,
    frames: Vec<GalleryFrame>,
    yaw: f32,
}

impl GallerySpiral {
    /// Build the spiral; `texture_count` photos are cycled across frames.
    pub fn new(config: GalleryConfig, texture_count: usize) -> Self {
        let textures = texture_count.max(1);
        let anchors: Vec<Anchor> = (0..config.frame_count)
            .map(|i| {
                let t = i as f32 / config.frame_count as f32;
                let angle = t * TAU * config.loops;
                let radius = config.base_radius * (1.0 - t) + config.top_radius;
                Anchor {
                    position: Vec3::new(
                        angle.cos() * radius,
                        (t - 0.5) * config.height,
                        angle.sin() * radius,
                    ),
                    facing: -angle - PI / 2.0,
                }
            })
            .collect();
        let frames = (0..config.frame_count)
            .map(|i| GalleryFrame {
                position: Vec3::ZERO,
                rotation: Quat::IDENTITY,
                texture_index: i % textures,
            })
            .collect();

        Self {
            config,
            anchors,
            frames,
            yaw: 0.0,
        }
    }

    /// Re-wrap texture assignment after the photo list changed.
    pub fn set_texture_count(&mut self, texture_count: usize) {
        let textures = texture_count.max(1);
        for (i, frame) in self.frames.iter_mut().enumerate() {
            frame.texture_index = i % textures;
        }
    }

    /// Advance the spiral one frame.
    pub fn update(&mut self, elapsed: f32, dt: f32, mode: Mode) {
        let speed = if mode == Mode::Dispersed {
            self.config.spin_dispersed
        } else {
            self.config.spin_idle
        };
        // Negative spin reads as an upward corkscrew.
        self.yaw -= dt * speed;

        let expansion = if mode == Mode::Dispersed {
            self.config.dispersal_expansion
        } else {
            1.0
        };
        let spin = Quat::from_rotation_y(self.yaw);

        for (i, (anchor, frame)) in self.anchors.iter().zip(&mut self.frames).enumerate() {
            let bob = (self.config.bob_frequency * elapsed + i as f32).sin() * self.config.bob_amplitude;
            let local = Vec3::new(
                anchor.position.x * expansion,
                anchor.position.y + bob,
                anchor.position.z * expansion,
            );
            frame.position = spin * local;
            frame.rotation = Quat::from_rotation_y(self.yaw + anchor.facing);
        }
    }

    /// Current frame poses.
    #[inline]
    pub fn frames(&self) -> &[GalleryFrame] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texture_cycling() {
        let spiral = GallerySpiral::new(GalleryConfig::default(), 3);
        let indices: Vec<usize> = spiral.frames().iter().map(|f| f.texture_index).collect();
        assert_eq!(&indices[..6], &[0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn test_zero_textures_falls_back_to_one() {
        let spiral = GallerySpiral::new(GalleryConfig::default(), 0);
        assert!(spiral.frames().iter().all(|f| f.texture_index == 0));
    }

    #[test]
    fn test_expansion_only_when_dispersed() {
        let config = GalleryConfig {
            bob_amplitude: 0.0,
            ..GalleryConfig::default()
        };
        let mut a = GallerySpiral::new(config, 1);
        let mut b = GallerySpiral::new(config, 1);

        // Same elapsed time, zero dt so the yaw stays identical.
        a.update(1.0, 0.0, Mode::Tree);
        b.update(1.0, 0.0, Mode::Dispersed);

        for (t, d) in a.frames().iter().zip(b.frames()) {
            let rt = (t.position.x * t.position.x + t.position.z * t.position.z).sqrt();
            let rd = (d.position.x * d.position.x + d.position.z * d.position.z).sqrt();
            assert!((rd / rt - config.dispersal_expansion).abs() < 1e-4);
            assert!((t.position.y - d.position.y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_spin_speed_depends_on_mode() {
        let mut idle = GallerySpiral::new(GalleryConfig::default(), 1);
        let mut fast = GallerySpiral::new(GalleryConfig::default(), 1);
        idle.update(0.0, 1.0, Mode::Tree);
        fast.update(0.0, 1.0, Mode::Dispersed);
        assert!(fast.yaw < idle.yaw);
    }

    #[test]
    fn test_bob_phase_offsets_differ() {
        let mut spiral = GallerySpiral::new(GalleryConfig::default(), 1);
        spiral.update(0.5, 0.0, Mode::Tree);
        let y0 = spiral.frames()[0].position.y;
        let y1 = spiral.frames()[1].position.y;
        // Anchor heights differ too, so compare the bob residual.
        let a0 = spiral.anchors[0].position.y;
        let a1 = spiral.anchors[1].position.y;
        assert!(((y0 - a0) - (y1 - a1)).abs() > 1e-4);
    }

    #[test]
    fn test_frames_broadside_to_trunk() {
        let mut spiral = GallerySpiral::new(GalleryConfig::default(), 1);
        spiral.update(0.0, 0.0, Mode::Tree);
        for frame in spiral.frames() {
            let normal = frame.rotation * Vec3::Z;
            let radial = Vec3::new(frame.position.x, 0.0, frame.position.z).normalize();
            // The plane normal is aligned with the radial line (frames are
            // double-sided, so sign does not matter), never edge-on.
            assert!(normal.dot(radial).abs() > 0.99, "frame edge-on to trunk");
        }
    }
}
