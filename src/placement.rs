//! Placement context for layout generation.
//!
//! Provides helper methods to reduce boilerplate when computing target
//! positions for a particle index. Every helper that draws randomness pulls
//! from an RNG stream derived from an explicit seed, so a layout is fully
//! reproducible from `(seed, index, count)`.
//!
//! ```ignore
//! let mut ctx = PlacementContext::new(i, count, seed);
//! let tree_pos = ctx.cone_spiral_position(12.0, 5.0, 0.5);
//! let cloud_pos = ctx.random_in_sphere(15.0);
//! ```

use crate::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// The golden angle (137.5 degrees) in radians.
///
/// Phyllotaxis spacing: advancing by this angle per index gives an even,
/// non-repeating angular spread with no visible radial banding.
pub const GOLDEN_ANGLE: f32 = 137.5 * PI / 180.0;

/// Context provided to the layout generator for one particle index.
pub struct PlacementContext {
    /// Index of the particle being placed (0 to count-1).
    pub index: u32,
    /// Total number of particles being placed.
    pub count: u32,
    rng: SmallRng,
}

impl PlacementContext {
    /// Create a placement context for one particle.
    ///
    /// The RNG stream is derived from the layout seed and the particle
    /// index, so the same `(seed, index)` pair always draws the same values.
    pub fn new(index: u32, count: u32, seed: u64) -> Self {
        let stream = seed ^ (u64::from(index).wrapping_add(1)).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        Self {
            index,
            count,
            rng: SmallRng::seed_from_u64(stream),
        }
    }

    /// Normalized progress through the population (0.0 to 1.0).
    ///
    /// Returns 0.0 for an empty population rather than dividing by zero.
    #[inline]
    pub fn progress(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.index as f32 / self.count as f32
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in the given range.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Position on a cone-shaped spiral, advancing by the golden angle per
    /// index.
    ///
    /// Height runs from `-height/2` (index 0, the widest ring) to `+height/2`
    /// at the apex. The radius tapers linearly from `radius` down to
    /// `radius_floor`, which keeps the apex from degenerating to a point.
    pub fn cone_spiral_position(&self, height: f32, radius: f32, radius_floor: f32) -> Vec3 {
        let t = self.progress();
        let h = t * height - height / 2.0;
        let r = (1.0 - t) * radius + radius_floor;
        let angle = self.index as f32 * GOLDEN_ANGLE;

        Vec3::new(r * angle.cos(), h, r * angle.sin())
    }

    /// Random point inside a sphere of given radius, centered at origin.
    ///
    /// Distribution is uniform throughout the volume: the radial fraction is
    /// the cube root of a uniform draw, not a uniform draw itself, which
    /// would cluster points at the center.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        let u: f32 = self.rng.gen();
        let v: f32 = self.rng.gen();
        let theta = TAU * u;
        let phi = (2.0 * v - 1.0).acos();
        let r = radius * self.rng.gen::<f32>().cbrt();

        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Position on a tapered helix wrapping `loops` times around the Y axis.
    ///
    /// * `base_radius` - radius at the bottom of the helix
    /// * `top_radius` - radius added at the top (taper floor)
    /// * `height` - total height span, centered on y=0
    pub fn helix_position(&self, base_radius: f32, top_radius: f32, height: f32, loops: f32) -> Vec3 {
        let t = self.progress();
        let angle = t * TAU * loops;
        let r = base_radius * (1.0 - t) + top_radius;

        Vec3::new(angle.cos() * r, (t - 0.5) * height, angle.sin() * r)
    }

    /// Random Euler rotation with free x/y components in `[0, PI)` and zero
    /// roll.
    pub fn random_rotation(&mut self) -> Vec3 {
        Vec3::new(
            self.rng.gen::<f32>() * PI,
            self.rng.gen::<f32>() * PI,
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let ctx = PlacementContext::new(50, 100, 7);
        assert!((ctx.progress() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_progress_empty_population() {
        let ctx = PlacementContext::new(0, 0, 7);
        assert_eq!(ctx.progress(), 0.0);
    }

    #[test]
    fn test_deterministic_streams() {
        let mut a = PlacementContext::new(3, 10, 42);
        let mut b = PlacementContext::new(3, 10, 42);
        for _ in 0..16 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut ctx = PlacementContext::new(0, 1, 1);
        for _ in 0..200 {
            let pos = ctx.random_in_sphere(15.0);
            assert!(pos.length() <= 15.0 + 0.001);
        }
    }

    #[test]
    fn test_random_in_sphere_volumetric_density() {
        // Cube-root radial sampling puts the median radius near 0.8 * R
        // (0.5^(1/3) ~= 0.794); linear sampling would put it at 0.5 * R.
        let mut radii: Vec<f32> = (0..2000)
            .map(|i| PlacementContext::new(i, 2000, 9).random_in_sphere(1.0).length())
            .collect();
        radii.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = radii[radii.len() / 2];
        assert!((median - 0.794).abs() < 0.05, "median radius {median}");
    }

    #[test]
    fn test_cone_spiral_angular_spacing() {
        // Consecutive indices are separated by exactly the golden angle.
        for i in 0..64u32 {
            let a = PlacementContext::new(i, 400, 0).cone_spiral_position(12.0, 5.0, 0.5);
            let b = PlacementContext::new(i + 1, 400, 0).cone_spiral_position(12.0, 5.0, 0.5);
            let angle_a = a.z.atan2(a.x);
            let angle_b = b.z.atan2(b.x);
            let mut delta = (angle_b - angle_a).rem_euclid(TAU);
            if delta > TAU - 1e-3 {
                delta -= TAU;
            }
            assert!((delta - GOLDEN_ANGLE.rem_euclid(TAU)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_cone_spiral_height_and_taper() {
        let bottom = PlacementContext::new(0, 100, 0).cone_spiral_position(12.0, 5.0, 0.5);
        assert!((bottom.y - (-6.0)).abs() < 1e-5);
        let r0 = (bottom.x * bottom.x + bottom.z * bottom.z).sqrt();
        assert!((r0 - 5.5).abs() < 1e-4);

        let near_top = PlacementContext::new(99, 100, 0).cone_spiral_position(12.0, 5.0, 0.5);
        let r1 = (near_top.x * near_top.x + near_top.z * near_top.z).sqrt();
        assert!(r1 < r0);
        assert!(r1 >= 0.5);
    }

    #[test]
    fn test_helix_spans_height() {
        let lo = PlacementContext::new(0, 16, 0).helix_position(7.0, 2.0, 11.0, 2.5);
        assert!((lo.y - (-5.5)).abs() < 1e-5);
        let hi = PlacementContext::new(15, 16, 0).helix_position(7.0, 2.0, 11.0, 2.5);
        assert!(hi.y < 5.5 && hi.y > lo.y);
    }
}
