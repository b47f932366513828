//! Window and frame loop.
//!
//! One `winit` application drives everything in a fixed per-tick order:
//! time, landmark polling, gesture transitions, the particle driver, the
//! ambient layers (gallery, snow, star), the camera rig, then one render.
//! Mouse and keyboard provide a fallback for running without a hand
//! tracker: dragging steers the hand vector, keys 1/2/3 inject the fist /
//! open / pinch gestures, and dropping image files onto the window uploads
//! them.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::driver::{AnimationDriver, FrameOutput};
use crate::gallery::GallerySpiral;
use crate::gesture::Gesture;
use crate::gpu::{GpuConfig, GpuState, RenderFrame};
use crate::landmarks::LandmarkSource;
use crate::layout::{generate, LayoutConfig};
use crate::rig::CameraRig;
use crate::snow::Snowfall;
use crate::state::AppState;
use crate::textures::{PhotoSet, TextureData};
use crate::time::Time;
use crate::visuals::{MaterialSet, Star};
use crate::{Mat4, Vec2, Vec3};

pub(crate) struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,

    state: AppState,
    driver: AnimationDriver,
    output: FrameOutput,
    gallery: GallerySpiral,
    snow: Snowfall,
    star: Star,
    materials: MaterialSet,
    rig: CameraRig,
    time: Time,
    source: Option<Box<dyn LandmarkSource>>,
    rng: SmallRng,

    photos: PhotoSet,
    snowflake: TextureData,
    layout_config: LayoutConfig,
    seed: u64,
    loaded_images: usize,

    // Per-frame world-space transform scratch, reused across ticks.
    world_orbs: Vec<Mat4>,
    world_cubes: Vec<Mat4>,
    world_blocks: Vec<Mat4>,
    world_photos: Vec<Mat4>,
    world_gallery: Vec<(Mat4, usize)>,

    mouse_pressed: bool,
}

impl App {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        state: AppState,
        driver: AnimationDriver,
        output: FrameOutput,
        gallery: GallerySpiral,
        snow: Snowfall,
        materials: MaterialSet,
        source: Option<Box<dyn LandmarkSource>>,
        photos: PhotoSet,
        layout_config: LayoutConfig,
        seed: u64,
    ) -> Self {
        let loaded_images = state.images.len();
        Self {
            window: None,
            gpu: None,
            state,
            driver,
            output,
            gallery,
            snow,
            star: Star::default(),
            materials,
            rig: CameraRig::new(),
            time: Time::new(),
            source,
            rng: SmallRng::seed_from_u64(seed ^ 0xA5A5_5A5A),
            photos,
            snowflake: TextureData::snowflake(256, 2),
            layout_config,
            seed,
            loaded_images,
            world_orbs: Vec::new(),
            world_cubes: Vec::new(),
            world_blocks: Vec::new(),
            world_photos: Vec::new(),
            world_gallery: Vec::new(),
            mouse_pressed: false,
        }
    }

    /// Reload photos and regenerate both layouts after the image list
    /// changed. A failed load rejects the new list and keeps the session
    /// running on the previous photos.
    fn refresh_population(&mut self) {
        match PhotoSet::load(&self.state.images) {
            Ok(photos) => {
                self.photos = photos;
                self.loaded_images = self.state.images.len();

                let layouts = generate(&self.layout_config, self.loaded_images, self.seed);
                self.output = FrameOutput::for_layouts(&layouts, self.photos.len());
                self.driver.replace_layouts(layouts);
                self.gallery.set_texture_count(self.photos.len());
                if let Some(gpu) = &mut self.gpu {
                    gpu.set_photos(&self.photos);
                }
                log::info!(
                    "population regenerated for {} image(s)",
                    self.loaded_images
                );
            }
            Err(e) => {
                log::warn!("rejecting image upload: {}", e);
                self.state.images.truncate(self.loaded_images);
            }
        }
    }

    fn step(&mut self) {
        let (elapsed, dt) = self.time.update();

        if self.state.images.len() != self.loaded_images {
            self.refresh_population();
        }

        if let Some(source) = &mut self.source {
            let frame = source.poll(elapsed);
            self.state.observe(frame.as_ref(), &mut self.rng);
        }

        self.driver.tick(elapsed, dt, self.state.mode, &mut self.output);
        self.gallery.update(elapsed, dt, self.state.mode);
        self.snow.update(elapsed, dt);
        self.rig.update(dt, self.state.mode, self.state.hand);
    }

    fn assemble(&mut self) {
        // The hand-rotated group carries the damped particles, the inner
        // photos and the star; gallery and snow stay in world space.
        let group = self.rig.group_transform();

        self.world_orbs.clear();
        self.world_orbs.extend(self.output.orbs.iter().map(|m| group * *m));
        self.world_cubes.clear();
        self.world_cubes.extend(self.output.cubes.iter().map(|m| group * *m));
        self.world_blocks.clear();
        self.world_blocks.extend(self.output.blocks.iter().map(|m| group * *m));

        self.world_photos.clear();
        self.world_photos.extend(self.output.photos.iter().map(|pose| {
            group
                * Mat4::from_scale_rotation_translation(
                    Vec3::splat(pose.scale),
                    pose.rotation,
                    pose.position,
                )
        }));

        self.world_gallery.clear();
        self.world_gallery.extend(self.gallery.frames().iter().map(|frame| {
            (
                Mat4::from_scale_rotation_translation(
                    Vec3::new(0.8, 1.0, 1.0),
                    frame.rotation,
                    frame.position,
                ),
                frame.texture_index,
            )
        }));
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.step();
        self.assemble();

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let elapsed = self.time.elapsed();
        let view_proj = gpu.projection() * self.rig.view_matrix();
        let group = self.rig.group_transform();
        let materials = self.materials.pulsed(elapsed);

        let frame = RenderFrame {
            view_proj,
            time: elapsed,
            materials: &materials,
            orbs: &self.world_orbs,
            cubes: &self.world_cubes,
            blocks: &self.world_blocks,
            star_core: group * self.star.core_transform(elapsed),
            star_spikes: group * self.star.spikes_transform(elapsed),
            photos: &self.world_photos,
            gallery: &self.world_gallery,
            snow: self.snow.instances(),
        };

        match gpu.render(&frame) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::error!("render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn inject_gesture(&mut self, gesture: Gesture) {
        self.state.apply_gesture(gesture, &mut self.rng);
        self.state.gesture = gesture;
        log::info!("gesture: {} -> {:?}", gesture.as_str(), self.state.mode);
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("Arbor - gesture-driven particle tree")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let gpu_config = GpuConfig {
                orb_capacity: self.output.orbs.len(),
                cube_capacity: self.output.cubes.len(),
                block_capacity: self.output.blocks.len(),
                gallery_capacity: self.gallery.frames().len(),
                snow_capacity: self.snow.len(),
            };
            match pollster::block_on(GpuState::new(
                window,
                &gpu_config,
                &self.photos,
                &self.snowflake,
            )) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    log::error!("{}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = state == ElementState::Pressed;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                // With no tracker attached, a drag plays the role of the
                // hand: same [-1,1]² space, same consumers.
                if self.mouse_pressed && self.source.is_none() {
                    if let Some(window) = &self.window {
                        let size = window.inner_size();
                        if size.width > 0 && size.height > 0 {
                            self.state.hand = Vec2::new(
                                (position.x as f32 / size.width as f32 - 0.5) * 2.0,
                                -(position.y as f32 / size.height as f32 - 0.5) * 2.0,
                            );
                        }
                    }
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.rig.zoom_offset = (self.rig.zoom_offset - scroll * 0.3).clamp(-10.0, 10.0);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Digit1) => self.inject_gesture(Gesture::Fist),
                        PhysicalKey::Code(KeyCode::Digit2) => self.inject_gesture(Gesture::Open),
                        PhysicalKey::Code(KeyCode::Digit3) => self.inject_gesture(Gesture::Pinch),
                        PhysicalKey::Code(KeyCode::Escape) => event_loop.exit(),
                        _ => {}
                    }
                }
            }
            WindowEvent::DroppedFile(path) => {
                log::info!("image dropped: {}", path.display());
                self.state.add_image(path);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(source) = &mut self.source {
            source.stop();
        }
    }
}
