//! # Arbor - gesture-driven particle tree
//!
//! An interactive 3D installation: a few hundred instanced particles morph
//! between a cone-shaped tree and a dispersed spherical cloud, steered by
//! hand gestures. Uploaded photos hang inside the tree and orbit it on a
//! spiral gallery.
//!
//! ## Quick Start
//!
//! ```ignore
//! use arbor::prelude::*;
//!
//! fn main() -> Result<(), arbor::error::AppError> {
//!     Scene::new()
//!         .with_seed(7)
//!         .with_images(vec!["me.jpg".into(), "us.jpg".into()])
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Layouts
//!
//! [`layout::generate`] produces two parallel target layouts for one
//! population - tree (golden-angle cone spiral) and dispersed (uniform
//! sphere) - sharing a single archetype assignment per index.
//!
//! ### The driver
//!
//! [`AnimationDriver`] owns the live transform of every particle and damps
//! it toward the active layout each frame, compacting results into dense
//! per-archetype instance buffers. Photo particles instead address an
//! individual textured plane.
//!
//! ### Gestures
//!
//! [`gesture::classify`] maps one hand's landmarks to a [`Gesture`] with
//! fixed geometric thresholds, and [`AppState`] turns gesture edges into
//! mode switches:
//!
//! | Gesture | Mode |
//! |---------|------|
//! | Fist | Tree |
//! | Open | Dispersed |
//! | Pinch | Zoomed (focus a random photo) |
//! | Neutral / none | unchanged |

pub mod driver;
pub mod error;
pub mod gallery;
pub mod gesture;
pub mod gpu;
pub mod landmarks;
pub mod layout;
pub mod placement;
pub mod rig;
pub mod scene;
pub mod snow;
pub mod state;
pub mod textures;
pub mod time;
pub mod visuals;
mod window;

pub use driver::{AnimationDriver, DriverConfig, FrameOutput, LiveParticle, PhotoPose};
pub use gallery::{GalleryConfig, GallerySpiral};
pub use gesture::{classify, Gesture, HandFrame};
pub use glam::{Mat4, Quat, Vec2, Vec3};
pub use landmarks::{LandmarkSource, NullSource, ScriptedSource};
pub use layout::{generate, Archetype, LayoutConfig, Layouts, ParticleDescriptor};
pub use scene::Scene;
pub use snow::{SnowConfig, Snowfall};
pub use state::{AppState, Mode};
pub use visuals::{Material, MaterialSet, Star};

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::driver::{AnimationDriver, DriverConfig, FrameOutput};
    pub use crate::gallery::{GalleryConfig, GallerySpiral};
    pub use crate::gesture::{classify, Gesture, HandFrame};
    pub use crate::landmarks::{LandmarkSource, NullSource, ScriptedSource};
    pub use crate::layout::{generate, Archetype, LayoutConfig, Layouts};
    pub use crate::scene::Scene;
    pub use crate::state::{AppState, Mode};
    pub use crate::time::Time;
    pub use crate::visuals::MaterialSet;
    pub use crate::{Mat4, Quat, Vec2, Vec3};
}
