//! Scene builder and runner.
//!
//! Use method chaining to configure, then call `.run()` to open the window
//! and start the frame loop.
//!
//! ```ignore
//! use arbor::prelude::*;
//!
//! Scene::new()
//!     .with_seed(7)
//!     .with_images(vec!["a.jpg".into(), "b.jpg".into()])
//!     .run()
//! ```

use std::path::PathBuf;

use winit::event_loop::{ControlFlow, EventLoop};

use crate::driver::{AnimationDriver, DriverConfig, FrameOutput};
use crate::error::AppError;
use crate::gallery::{GalleryConfig, GallerySpiral};
use crate::landmarks::LandmarkSource;
use crate::layout::{generate, LayoutConfig};
use crate::snow::{SnowConfig, Snowfall};
use crate::state::AppState;
use crate::textures::PhotoSet;
use crate::visuals::MaterialSet;
use crate::window::App;

/// The whole installation, configured but not yet running.
pub struct Scene {
    layout: LayoutConfig,
    driver: DriverConfig,
    gallery: GalleryConfig,
    snow: SnowConfig,
    materials: MaterialSet,
    images: Vec<PathBuf>,
    seed: u64,
    source: Option<Box<dyn LandmarkSource>>,
}

impl Scene {
    /// Create a scene with default settings.
    pub fn new() -> Self {
        Self {
            layout: LayoutConfig::default(),
            driver: DriverConfig::default(),
            gallery: GalleryConfig::default(),
            snow: SnowConfig::default(),
            materials: MaterialSet::default(),
            images: Vec::new(),
            seed: 0,
            source: None,
        }
    }

    /// Set the layout seed. The same seed reproduces the same tree.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the particle population size.
    pub fn with_particle_count(mut self, count: u32) -> Self {
        self.layout.particle_count = count;
        self
    }

    /// Set the initial uploaded-image list.
    pub fn with_images(mut self, images: Vec<PathBuf>) -> Self {
        self.images = images;
        self
    }

    /// Override the layout constants.
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Override the driver damping constants.
    pub fn with_driver(mut self, driver: DriverConfig) -> Self {
        self.driver = driver;
        self
    }

    /// Override the gallery constants.
    pub fn with_gallery(mut self, gallery: GalleryConfig) -> Self {
        self.gallery = gallery;
        self
    }

    /// Set the snowfall density.
    pub fn with_snow_count(mut self, count: usize) -> Self {
        self.snow.count = count;
        self
    }

    /// Override the material palette.
    pub fn with_materials(mut self, materials: MaterialSet) -> Self {
        self.materials = materials;
        self
    }

    /// Attach a hand landmark source. Without one, mouse and keyboard
    /// drive the installation.
    pub fn with_landmark_source<S: LandmarkSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Open the window and run until closed. This blocks.
    pub fn run(self) -> Result<(), AppError> {
        let photos = PhotoSet::load(&self.images)?;
        if self.source.is_none() {
            log::warn!("no landmark source attached; falling back to mouse and keys 1/2/3");
        }
        log::info!(
            "scene: {} particles, {} photo plane(s), {} snowflakes",
            self.layout.particle_count,
            photos.len(),
            self.snow.count
        );

        let layouts = generate(&self.layout, self.images.len(), self.seed);
        let output = FrameOutput::for_layouts(&layouts, photos.len());
        let driver = AnimationDriver::new(layouts, self.driver);
        let gallery = GallerySpiral::new(self.gallery, photos.len());
        let snow = Snowfall::new(self.snow, self.seed.wrapping_add(1));

        let mut state = AppState::new();
        state.images = self.images;

        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(
            state,
            driver,
            output,
            gallery,
            snow,
            self.materials,
            self.source,
            photos,
            self.layout,
            self.seed,
        );
        event_loop.run_app(&mut app)?;
        Ok(())
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
