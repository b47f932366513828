//! Target layout generation.
//!
//! The morph between the tree formation and the dispersed cloud works by
//! precomputing two complete target layouts for the same particle
//! population and letting the animation driver damp every particle toward
//! whichever layout is active. Both layouts share one archetype assignment
//! per index, so a particle never changes shape mid-morph.
//!
//! # Example
//!
//! ```ignore
//! use arbor::layout::{generate, LayoutConfig};
//!
//! let layouts = generate(&LayoutConfig::default(), 3, 42);
//! assert_eq!(layouts.tree.len(), layouts.dispersed.len());
//! ```

use crate::placement::PlacementContext;
use crate::Vec3;

/// Visual/behavioral category of a particle.
///
/// The archetype decides which mesh/material a particle renders with and
/// which dispatch path the driver takes: the three decorative kinds go
/// through batched instance buffers, photos address an individual plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    /// Gold orb (the bulk of the tree body).
    Orb,
    /// Ruby cube.
    Cube,
    /// Emerald block.
    GreenBlock,
    /// Framed photo plane, indexing into the uploaded-image list.
    Photo(usize),
}

impl Archetype {
    /// Whether this particle renders as an addressable photo plane.
    #[inline]
    pub fn is_photo(&self) -> bool {
        matches!(self, Archetype::Photo(_))
    }

    /// The photo slot for `Photo` archetypes.
    #[inline]
    pub fn image_index(&self) -> Option<usize> {
        match self {
            Archetype::Photo(i) => Some(*i),
            _ => None,
        }
    }
}

/// Immutable per-particle target within one layout.
#[derive(Debug, Clone, Copy)]
pub struct ParticleDescriptor {
    /// Target position.
    pub position: Vec3,
    /// Target Euler rotation (XYZ order).
    pub rotation: Vec3,
    /// Uniform scale. Not interpolated; the active layout's scale applies.
    pub scale: f32,
    /// Visual archetype, identical across both layouts for a given index.
    pub archetype: Archetype,
}

/// Tuning knobs for layout generation.
#[derive(Debug, Clone, Copy)]
pub struct LayoutConfig {
    /// Number of particles in the population.
    pub particle_count: u32,
    /// Total height of the tree cone.
    pub tree_height: f32,
    /// Base radius of the tree cone.
    pub tree_radius: f32,
    /// Radius floor so the apex never collapses to a point.
    pub tree_radius_floor: f32,
    /// Radius of the dispersal sphere.
    pub dispersal_radius: f32,
    /// Fixed scale for photo particles.
    pub photo_scale: f32,
    /// Scale range for decorative particles.
    pub decor_scale_min: f32,
    pub decor_scale_max: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            particle_count: 400,
            tree_height: 12.0,
            tree_radius: 5.0,
            tree_radius_floor: 0.5,
            dispersal_radius: 15.0,
            photo_scale: 1.5,
            decor_scale_min: 0.1,
            decor_scale_max: 0.4,
        }
    }
}

/// Per-archetype population totals for a layout.
///
/// Computed once at generation time; the rendering boundary sizes its
/// instance buffers from these and never resizes them mid-session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchetypeCounts {
    pub orbs: usize,
    pub cubes: usize,
    pub blocks: usize,
    pub photos: usize,
}

/// The two parallel target layouts for one particle population.
#[derive(Debug, Clone, Default)]
pub struct Layouts {
    /// Cone-spiral tree formation.
    pub tree: Vec<ParticleDescriptor>,
    /// Uniformly sampled sphere cloud.
    pub dispersed: Vec<ParticleDescriptor>,
}

impl Layouts {
    /// Number of particles (both layouts always have equal length).
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Count particles per archetype.
    pub fn archetype_counts(&self) -> ArchetypeCounts {
        let mut counts = ArchetypeCounts::default();
        for p in &self.tree {
            match p.archetype {
                Archetype::Orb => counts.orbs += 1,
                Archetype::Cube => counts.cubes += 1,
                Archetype::GreenBlock => counts.blocks += 1,
                Archetype::Photo(_) => counts.photos += 1,
            }
        }
        counts
    }
}

/// Generate the tree and dispersed layouts for one population.
///
/// Deterministic for a given `(config, photo_count, seed)` triple. Indices
/// `[0, photo_slots)` carry the `Photo` archetype with `image_index` equal
/// to the particle index; the remainder draws a weighted decorative
/// archetype (25% cube, 20% green block, 55% orb). When `photo_count` is 0
/// a single placeholder photo slot is still allocated so the photo path
/// always has something to render.
pub fn generate(config: &LayoutConfig, photo_count: usize, seed: u64) -> Layouts {
    let total = config.particle_count;
    let photo_slots = photo_count.max(1).min(total as usize);

    let mut tree = Vec::with_capacity(total as usize);
    let mut dispersed = Vec::with_capacity(total as usize);

    for i in 0..total {
        let mut ctx = PlacementContext::new(i, total, seed);

        let archetype = if (i as usize) < photo_slots {
            Archetype::Photo(i as usize)
        } else {
            match ctx.random() {
                x if x > 0.75 => Archetype::Cube,
                x if x > 0.55 => Archetype::GreenBlock,
                _ => Archetype::Orb,
            }
        };

        let tree_position =
            ctx.cone_spiral_position(config.tree_height, config.tree_radius, config.tree_radius_floor);
        tree.push(ParticleDescriptor {
            position: tree_position,
            rotation: ctx.random_rotation(),
            scale: particle_scale(config, &archetype, &mut ctx),
            archetype,
        });

        let dispersed_position = ctx.random_in_sphere(config.dispersal_radius);
        dispersed.push(ParticleDescriptor {
            position: dispersed_position,
            rotation: ctx.random_rotation(),
            scale: particle_scale(config, &archetype, &mut ctx),
            archetype,
        });
    }

    Layouts { tree, dispersed }
}

fn particle_scale(config: &LayoutConfig, archetype: &Archetype, ctx: &mut PlacementContext) -> f32 {
    if archetype.is_photo() {
        config.photo_scale
    } else {
        ctx.random_range(config.decor_scale_min, config.decor_scale_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_parallel_and_sized() {
        let config = LayoutConfig::default();
        let layouts = generate(&config, 3, 1);
        assert_eq!(layouts.tree.len(), 400);
        assert_eq!(layouts.dispersed.len(), 400);
        assert_eq!(layouts.len(), 400);
    }

    #[test]
    fn test_photo_prefix_invariant() {
        let layouts = generate(&LayoutConfig::default(), 5, 1);
        for (i, p) in layouts.tree.iter().enumerate() {
            if i < 5 {
                assert_eq!(p.archetype, Archetype::Photo(i));
            } else {
                assert!(!p.archetype.is_photo());
            }
        }
    }

    #[test]
    fn test_archetypes_shared_across_layouts() {
        let layouts = generate(&LayoutConfig::default(), 4, 99);
        for (t, d) in layouts.tree.iter().zip(&layouts.dispersed) {
            assert_eq!(t.archetype, d.archetype);
        }
    }

    #[test]
    fn test_zero_photos_allocates_placeholder_slot() {
        let layouts = generate(&LayoutConfig::default(), 0, 1);
        assert_eq!(layouts.tree[0].archetype, Archetype::Photo(0));
        assert!(!layouts.tree[1].archetype.is_photo());
    }

    #[test]
    fn test_zero_particles() {
        let config = LayoutConfig {
            particle_count: 0,
            ..LayoutConfig::default()
        };
        let layouts = generate(&config, 3, 1);
        assert!(layouts.is_empty());
    }

    #[test]
    fn test_deterministic_for_seed() {
        let a = generate(&LayoutConfig::default(), 2, 77);
        let b = generate(&LayoutConfig::default(), 2, 77);
        for (x, y) in a.tree.iter().zip(&b.tree) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.rotation, y.rotation);
            assert_eq!(x.scale, y.scale);
        }
    }

    #[test]
    fn test_dispersed_within_radius() {
        let config = LayoutConfig::default();
        let layouts = generate(&config, 2, 3);
        for p in &layouts.dispersed {
            assert!(p.position.length() <= config.dispersal_radius + 0.001);
        }
    }

    #[test]
    fn test_scales() {
        let config = LayoutConfig::default();
        let layouts = generate(&config, 2, 5);
        for p in &layouts.tree {
            if p.archetype.is_photo() {
                assert_eq!(p.scale, config.photo_scale);
            } else {
                assert!(p.scale >= config.decor_scale_min && p.scale < config.decor_scale_max);
            }
        }
    }

    #[test]
    fn test_archetype_distribution_bands() {
        // Weighted draw should land near 25/20/55 over a large population.
        let config = LayoutConfig {
            particle_count: 10_000,
            ..LayoutConfig::default()
        };
        let counts = generate(&config, 0, 11).archetype_counts();
        let n = config.particle_count as f32;
        assert!((counts.cubes as f32 / n - 0.25).abs() < 0.03);
        assert!((counts.blocks as f32 / n - 0.20).abs() < 0.03);
        assert!((counts.orbs as f32 / n - 0.55).abs() < 0.03);
        assert_eq!(counts.photos, 1);
    }
}
