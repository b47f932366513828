//! Falling snow layer.
//!
//! A fixed pool of instanced snowflakes: each flake falls at its own speed,
//! sways on a personal phase, tumbles, and respawns at the top of the
//! volume once it drops below the floor. The pool never grows or shrinks;
//! transforms are rewritten in place every frame.

use crate::{Mat4, Quat, Vec3};
use glam::EulerRot;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;

/// Snowfall tuning constants.
#[derive(Debug, Clone, Copy)]
pub struct SnowConfig {
    /// Number of flakes in the pool.
    pub count: usize,
    /// Half-extent of the spawn volume on x and z.
    pub half_extent: f32,
    /// Respawn height.
    pub top: f32,
    /// Height below which a flake respawns.
    pub floor: f32,
    /// Fall speed range in units per second.
    pub fall_speed_min: f32,
    pub fall_speed_max: f32,
    /// Horizontal sway amplitude.
    pub sway: f32,
    /// Rendered flake size.
    pub flake_size: f32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            half_extent: 30.0,
            top: 25.0,
            floor: -20.0,
            // 0.02..0.10 per frame at 60 fps, expressed per second.
            fall_speed_min: 1.2,
            fall_speed_max: 6.0,
            sway: 1.5,
            flake_size: 0.5,
        }
    }
}

struct Flake {
    base_x: f32,
    base_z: f32,
    y: f32,
    phase: f32,
    fall_speed: f32,
    tumble_speed: f32,
}

/// The instanced snow pool.
pub struct Snowfall {
    config: SnowConfig,
    flakes: Vec<Flake>,
    instances: Vec<Mat4>,
    rng: SmallRng,
}

impl Snowfall {
    pub fn new(config: SnowConfig, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let flakes = (0..config.count)
            .map(|_| Flake {
                base_x: rng.gen_range(-config.half_extent..config.half_extent),
                base_z: rng.gen_range(-config.half_extent..config.half_extent),
                // Initial fill spreads flakes through most of the fall range.
                y: rng.gen_range(config.floor * 0.5..config.top * 1.6),
                phase: rng.gen_range(0.0..PI),
                fall_speed: rng.gen_range(config.fall_speed_min..config.fall_speed_max),
                tumble_speed: rng.gen_range(-0.25..0.25),
            })
            .collect();
        let instances = vec![Mat4::IDENTITY; config.count];

        Self {
            config,
            flakes,
            instances,
            rng,
        }
    }

    /// Advance the fall one frame and rewrite the instance transforms.
    pub fn update(&mut self, elapsed: f32, dt: f32) {
        let config = self.config;
        let scale = Vec3::splat(config.flake_size);

        for (flake, instance) in self.flakes.iter_mut().zip(&mut self.instances) {
            flake.y -= flake.fall_speed * dt;
            if flake.y < config.floor {
                flake.y = config.top;
                flake.base_x = self.rng.gen_range(-config.half_extent..config.half_extent);
                flake.base_z = self.rng.gen_range(-config.half_extent..config.half_extent);
            }

            let position = Vec3::new(
                flake.base_x + (0.5 * elapsed + flake.phase).sin() * config.sway,
                flake.y,
                flake.base_z + (0.3 * elapsed + flake.phase).cos() * config.sway,
            );
            let rotation = Quat::from_euler(
                EulerRot::XYZ,
                elapsed * flake.tumble_speed + flake.phase,
                elapsed * flake.tumble_speed * 0.5,
                elapsed * 0.1,
            );
            *instance = Mat4::from_scale_rotation_translation(scale, rotation, position);
        }
    }

    /// Current instance transforms, one per flake.
    #[inline]
    pub fn instances(&self) -> &[Mat4] {
        &self.instances
    }

    /// Number of flakes in the pool.
    #[inline]
    pub fn len(&self) -> usize {
        self.flakes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.flakes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_size_fixed() {
        let config = SnowConfig {
            count: 50,
            ..SnowConfig::default()
        };
        let mut snow = Snowfall::new(config, 1);
        for i in 0..100 {
            snow.update(i as f32 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(snow.len(), 50);
        assert_eq!(snow.instances().len(), 50);
    }

    #[test]
    fn test_flakes_fall() {
        let config = SnowConfig {
            count: 8,
            ..SnowConfig::default()
        };
        let mut snow = Snowfall::new(config, 2);
        let before: Vec<f32> = snow.flakes.iter().map(|f| f.y).collect();
        snow.update(0.0, 0.5);
        for (b, f) in before.iter().zip(&snow.flakes) {
            assert!(f.y < *b || f.y == config.top);
        }
    }

    #[test]
    fn test_respawn_at_top_within_volume() {
        let config = SnowConfig {
            count: 200,
            ..SnowConfig::default()
        };
        let mut snow = Snowfall::new(config, 3);
        // Long enough for every flake to cross the floor at least once.
        let mut t = 0.0;
        for _ in 0..(60 * 60) {
            snow.update(t, 1.0 / 60.0);
            t += 1.0 / 60.0;
        }
        for flake in &snow.flakes {
            assert!(flake.y >= config.floor - config.fall_speed_max / 60.0);
            assert!(flake.y <= config.top * 1.6);
            assert!(flake.base_x.abs() <= config.half_extent);
            assert!(flake.base_z.abs() <= config.half_extent);
        }
    }
}
