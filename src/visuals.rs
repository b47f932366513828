//! Visual configuration for the installation.
//!
//! Material palettes and the ambient animations (emissive breathing, the
//! star at the apex) live here, separate from the behavioral modules that
//! decide where things are.

use crate::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_4;

/// Material description handed to the rendering boundary.
#[derive(Debug, Clone, Copy)]
pub struct Material {
    /// Albedo, linear RGB.
    pub base_color: Vec3,
    /// Emissive color, linear RGB.
    pub emissive: Vec3,
    /// Emissive multiplier; the pulsed value varies around the base.
    pub emissive_intensity: f32,
}

impl Material {
    pub const fn new(base_color: Vec3, emissive: Vec3, emissive_intensity: f32) -> Self {
        Self {
            base_color,
            emissive,
            emissive_intensity,
        }
    }
}

/// Materials for every archetype plus the fixtures around them.
#[derive(Debug, Clone, Copy)]
pub struct MaterialSet {
    /// Gold orbs.
    pub orb: Material,
    /// Ruby cubes.
    pub cube: Material,
    /// Emerald blocks.
    pub block: Material,
    /// Gold photo frames.
    pub frame: Material,
    /// White-hot star core.
    pub star_core: Material,
    /// Golden star spikes.
    pub star_spikes: Material,
}

impl Default for MaterialSet {
    fn default() -> Self {
        Self {
            orb: Material::new(Vec3::new(1.0, 0.843, 0.0), Vec3::new(1.0, 0.667, 0.0), 0.8),
            cube: Material::new(Vec3::new(0.831, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 0.8),
            block: Material::new(Vec3::new(0.0, 0.302, 0.0), Vec3::new(0.0, 0.149, 0.0), 0.6),
            frame: Material::new(Vec3::new(1.0, 0.8, 0.0), Vec3::new(1.0, 0.8, 0.0), 0.2),
            star_core: Material::new(Vec3::ONE, Vec3::ONE, 4.0),
            star_spikes: Material::new(Vec3::new(1.0, 0.843, 0.0), Vec3::new(1.0, 0.533, 0.0), 2.0),
        }
    }
}

impl MaterialSet {
    /// The set with emissive breathing applied at time `t`.
    ///
    /// Each gem kind pulses on its own rhythm so the tree shimmers instead
    /// of strobing.
    pub fn pulsed(&self, t: f32) -> MaterialSet {
        let mut set = *self;
        set.orb.emissive_intensity = 0.8 + (t * 2.0).sin() * 0.4;
        set.cube.emissive_intensity = 0.8 + (t * 1.5).cos() * 0.4;
        set.block.emissive_intensity = 0.6 + (t * 2.5).sin() * 0.3;
        set
    }
}

/// The star at the apex of the tree: two nested octahedra that spin, bob
/// and pulse.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    /// Rest height above the origin.
    pub height: f32,
    /// Octahedron circumradius.
    pub radius: f32,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            height: 6.5,
            radius: 0.8,
        }
    }
}

impl Star {
    fn group(&self, t: f32) -> Mat4 {
        let position = Vec3::new(0.0, self.height + t.sin() * 0.15, 0.0);
        let rotation =
            Quat::from_rotation_y(t * 0.5) * Quat::from_rotation_z((t * 0.5).sin() * 0.1);
        let pulse = 1.0 + (t * 3.0).sin() * 0.1;
        Mat4::from_scale_rotation_translation(Vec3::splat(pulse), rotation, position)
    }

    /// Transform for the white-hot core octahedron at time `t`.
    pub fn core_transform(&self, t: f32) -> Mat4 {
        self.group(t) * Mat4::from_scale(Vec3::splat(self.radius))
    }

    /// Transform for the golden spike octahedron: rotated 45 degrees and
    /// scaled up so the points interleave with the core.
    pub fn spikes_transform(&self, t: f32) -> Mat4 {
        self.group(t)
            * Mat4::from_quat(Quat::from_rotation_y(FRAC_PI_4))
            * Mat4::from_scale(Vec3::splat(self.radius * 1.3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_positive() {
        let set = MaterialSet::default();
        for i in 0..240 {
            let pulsed = set.pulsed(i as f32 / 24.0);
            assert!(pulsed.orb.emissive_intensity > 0.0);
            assert!(pulsed.cube.emissive_intensity > 0.0);
            assert!(pulsed.block.emissive_intensity > 0.0);
        }
    }

    #[test]
    fn test_pulse_leaves_colors_alone() {
        let set = MaterialSet::default();
        let pulsed = set.pulsed(1.7);
        assert_eq!(pulsed.orb.base_color, set.orb.base_color);
        assert_eq!(pulsed.cube.emissive, set.cube.emissive);
    }

    #[test]
    fn test_star_bobs_around_rest_height() {
        let star = Star::default();
        for i in 0..60 {
            let m = star.core_transform(i as f32 * 0.1);
            let y = m.w_axis.y;
            assert!((y - star.height).abs() <= 0.15 + 1e-4);
        }
    }

    #[test]
    fn test_star_spikes_larger_than_core() {
        let star = Star::default();
        let core = star.core_transform(0.3);
        let spikes = star.spikes_transform(0.3);
        assert!(spikes.x_axis.length() > core.x_axis.length());
    }
}
