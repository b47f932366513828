//! Per-frame animation driver.
//!
//! Owns the live transform state for the whole particle population plus the
//! two precomputed target layouts, and advances every particle toward the
//! active layout once per rendered frame. Decorative archetypes are
//! compacted into dense per-archetype instance buffers; photo particles
//! write their pose onto an individually addressable plane instead.
//!
//! Damping is exponential and frame-rate independent:
//! `live += (target - live) * min(1, rate * dt)`. The factor never exceeds
//! one, so position convergence is monotonic with no overshoot.
//!
//! # Example
//!
//! ```ignore
//! let layouts = layout::generate(&config, photo_count, seed);
//! let mut out = FrameOutput::for_layouts(&layouts, photo_count);
//! let mut driver = AnimationDriver::new(layouts, DriverConfig::default());
//!
//! // each frame:
//! driver.tick(elapsed, dt, state.mode, &mut out);
//! ```

use crate::layout::{Archetype, Layouts, ParticleDescriptor};
use crate::state::Mode;
use crate::{Mat4, Quat, Vec3};
use glam::EulerRot;

/// Mutable per-particle transform state.
#[derive(Debug, Clone, Copy)]
pub struct LiveParticle {
    pub position: Vec3,
    /// Euler rotation (XYZ). Damped at its own rate, plus spin while
    /// dispersed.
    pub rotation: Vec3,
}

/// Pose written onto an addressable photo plane.
#[derive(Debug, Clone, Copy)]
pub struct PhotoPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for PhotoPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Driver tuning constants.
#[derive(Debug, Clone, Copy)]
pub struct DriverConfig {
    /// Position damping rate (per second).
    pub position_damp: f32,
    /// Rotation damping rate (per second), independent of position.
    pub rotation_damp: f32,
    /// Continuous y spin while dispersed (radians per second).
    pub spin_rate: f32,
    /// Vertical bob amplitude while dispersed.
    pub bob_amplitude: f32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            position_damp: 3.0,
            rotation_damp: 2.0,
            spin_rate: 0.5,
            bob_amplitude: 0.01,
        }
    }
}

/// Caller-owned output buffers, pre-sized at layout generation time.
///
/// The decorative vectors hold one matrix per particle of that archetype
/// and are rewritten in place each tick; nothing reallocates per frame.
/// `photos` holds one slot per *loaded* photo plane, which may be shorter
/// than the layout's photo slot count when the population shrank; the
/// driver skips those writes.
#[derive(Debug, Clone, Default)]
pub struct FrameOutput {
    pub orbs: Vec<Mat4>,
    pub cubes: Vec<Mat4>,
    pub blocks: Vec<Mat4>,
    pub photos: Vec<PhotoPose>,
}

impl FrameOutput {
    /// Size output buffers for a generated population.
    pub fn for_layouts(layouts: &Layouts, photo_elements: usize) -> Self {
        let counts = layouts.archetype_counts();
        Self {
            orbs: vec![Mat4::IDENTITY; counts.orbs],
            cubes: vec![Mat4::IDENTITY; counts.cubes],
            blocks: vec![Mat4::IDENTITY; counts.blocks],
            photos: vec![PhotoPose::default(); photo_elements],
        }
    }
}

/// Advances live particle transforms toward the active layout.
pub struct AnimationDriver {
    tree: Vec<ParticleDescriptor>,
    dispersed: Vec<ParticleDescriptor>,
    live: Vec<LiveParticle>,
    config: DriverConfig,
}

impl AnimationDriver {
    /// Create a driver, seeding live state from the dispersed layout so the
    /// first frames morph inward into the tree.
    pub fn new(layouts: Layouts, config: DriverConfig) -> Self {
        let live = Self::seed_live(&layouts);
        Self {
            tree: layouts.tree,
            dispersed: layouts.dispersed,
            live,
            config,
        }
    }

    fn seed_live(layouts: &Layouts) -> Vec<LiveParticle> {
        layouts
            .dispersed
            .iter()
            .map(|p| LiveParticle {
                position: p.position,
                rotation: p.rotation,
            })
            .collect()
    }

    /// Swap in freshly generated layouts after a population change.
    ///
    /// Live state is rebuilt; the morph restarts from the new dispersed
    /// cloud. Mode switches never come through here, only population
    /// changes do.
    pub fn replace_layouts(&mut self, layouts: Layouts) {
        self.live = Self::seed_live(&layouts);
        self.tree = layouts.tree;
        self.dispersed = layouts.dispersed;
    }

    /// Number of live particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live transform state, mainly for inspection in tests.
    #[inline]
    pub fn live(&self) -> &[LiveParticle] {
        &self.live
    }

    /// Advance one frame.
    ///
    /// Iteration is clamped to the shortest of the live/target arrays, and
    /// every buffer write is bounds-checked, so a population mismatch can
    /// drop particles for a frame but never index out of range.
    pub fn tick(&mut self, elapsed: f32, dt: f32, mode: Mode, out: &mut FrameOutput) {
        let n = self.live.len().min(self.tree.len()).min(self.dispersed.len());
        let damp = (self.config.position_damp * dt).min(1.0);
        let rot_damp = (self.config.rotation_damp * dt).min(1.0);

        let mut orb_slot = 0;
        let mut cube_slot = 0;
        let mut block_slot = 0;

        for i in 0..n {
            let target = match mode {
                Mode::Tree => &self.tree[i],
                Mode::Dispersed | Mode::Zoomed => &self.dispersed[i],
            };
            let live = &mut self.live[i];

            live.position += (target.position - live.position) * damp;
            live.rotation += (target.rotation - live.rotation) * rot_damp;
            if mode == Mode::Dispersed {
                live.rotation.y += dt * self.config.spin_rate;
            }

            let mut position = live.position;
            if mode == Mode::Dispersed {
                // Per-index phase offset keeps the bobbing out of lockstep.
                position.y += (elapsed + i as f32).sin() * self.config.bob_amplitude;
            }

            match target.archetype {
                Archetype::Orb => {
                    write_instance(&mut out.orbs, &mut orb_slot, position, live.rotation, target.scale);
                }
                Archetype::Cube => {
                    write_instance(&mut out.cubes, &mut cube_slot, position, live.rotation, target.scale);
                }
                Archetype::GreenBlock => {
                    write_instance(&mut out.blocks, &mut block_slot, position, live.rotation, target.scale);
                }
                Archetype::Photo(image_index) => {
                    // A shrunken photo population leaves stale indices in the
                    // layout until regeneration; skip those silently.
                    if let Some(plane) = out.photos.get_mut(image_index) {
                        plane.position = position;
                        plane.scale = target.scale;
                        plane.rotation = if mode == Mode::Tree {
                            outward_facing(position)
                        } else {
                            euler_quat(live.rotation)
                        };
                    }
                }
            }
        }
    }
}

fn write_instance(buffer: &mut [Mat4], slot: &mut usize, position: Vec3, rotation: Vec3, scale: f32) {
    if let Some(m) = buffer.get_mut(*slot) {
        *m = Mat4::from_scale_rotation_translation(Vec3::splat(scale), euler_quat(rotation), position);
        *slot += 1;
    }
}

#[inline]
fn euler_quat(rotation: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z)
}

/// Yaw that points a plane's normal away from the trunk axis at the
/// plane's own height, so the printed side faces outward.
fn outward_facing(position: Vec3) -> Quat {
    Quat::from_rotation_y(position.x.atan2(position.z))
}
