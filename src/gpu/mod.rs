//! Rendering boundary.
//!
//! Everything here is a direct use of wgpu: surface/device setup, two
//! pipelines (lit solids, textured planes) and a set of pre-sized instance
//! buffers that the frame loop rewrites every tick. Nothing in this module
//! decides where anything goes; it draws whatever transforms it is handed.

pub mod mesh;
pub mod shader;

use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::error::GpuError;
use crate::textures::{PhotoSet, TextureData};
use crate::visuals::{Material, MaterialSet};
use crate::Mat4;
use mesh::{Mesh, Vertex};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;
const INSTANCE_STRIDE: u64 = std::mem::size_of::<Mat4>() as u64;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    time: f32,
    _padding: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct MaterialUniforms {
    base_color: [f32; 4],
    emissive: [f32; 4],
}

impl From<&Material> for MaterialUniforms {
    fn from(m: &Material) -> Self {
        Self {
            base_color: [m.base_color.x, m.base_color.y, m.base_color.z, 1.0],
            emissive: [m.emissive.x, m.emissive.y, m.emissive.z, m.emissive_intensity],
        }
    }
}

/// Everything the renderer needs for one frame, borrowed from the caller.
pub struct RenderFrame<'a> {
    pub view_proj: Mat4,
    pub time: f32,
    pub materials: &'a MaterialSet,
    pub orbs: &'a [Mat4],
    pub cubes: &'a [Mat4],
    pub blocks: &'a [Mat4],
    pub star_core: Mat4,
    pub star_spikes: Mat4,
    /// One transform per loaded photo plane.
    pub photos: &'a [Mat4],
    /// Gallery frame transforms with the photo texture each one shows.
    pub gallery: &'a [(Mat4, usize)],
    pub snow: &'a [Mat4],
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    fn new(device: &wgpu::Device, label: &str, mesh: &Mesh) -> Self {
        let vertex = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex,
            index,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// One solid draw: a mesh, a material slot and an instance buffer.
struct SolidBatch {
    mesh: MeshBuffers,
    instances: wgpu::Buffer,
    capacity: u32,
    count: u32,
    material: wgpu::Buffer,
    material_bind_group: wgpu::BindGroup,
}

impl SolidBatch {
    fn new(
        device: &wgpu::Device,
        label: &str,
        mesh: &Mesh,
        capacity: usize,
        material_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let material = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<MaterialUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let material_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: material_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: material.as_entire_binding(),
            }],
        });
        Self {
            mesh: MeshBuffers::new(device, label, mesh),
            instances: create_instance_buffer(device, label, capacity),
            capacity: capacity.max(1) as u32,
            count: 0,
            material,
            material_bind_group,
        }
    }

    fn upload(&mut self, queue: &wgpu::Queue, instances: &[Mat4], material: &Material) {
        self.count = (instances.len() as u32).min(self.capacity);
        if self.count > 0 {
            queue.write_buffer(
                &self.instances,
                0,
                bytemuck::cast_slice(&instances[..self.count as usize]),
            );
        }
        let uniforms = MaterialUniforms::from(material);
        queue.write_buffer(&self.material, 0, bytemuck::bytes_of(&uniforms));
    }

    fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        render_pass.set_bind_group(1, &self.material_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.mesh.vertex.slice(..));
        render_pass.set_vertex_buffer(1, self.instances.slice(..));
        render_pass.set_index_buffer(self.mesh.index.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..self.mesh.index_count, 0, 0..self.count);
    }
}

fn create_instance_buffer(device: &wgpu::Device, label: &str, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: capacity.max(1) as u64 * INSTANCE_STRIDE,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    depth_texture: wgpu::TextureView,

    solid_pipeline: wgpu::RenderPipeline,
    textured_pipeline: wgpu::RenderPipeline,
    frame_uniforms: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    texture_layout: wgpu::BindGroupLayout,

    orbs: SolidBatch,
    cubes: SolidBatch,
    blocks: SolidBatch,
    star_core: SolidBatch,
    star_spikes: SolidBatch,

    plane_quad: MeshBuffers,
    photo_textures: Vec<wgpu::BindGroup>,
    photo_instances: wgpu::Buffer,
    photo_capacity: u32,
    gallery_instances: wgpu::Buffer,
    gallery_capacity: u32,
    snow_texture: wgpu::BindGroup,
    snow_instances: wgpu::Buffer,
    snow_capacity: u32,
}

/// Per-archetype capacities for the instance buffers.
pub struct GpuConfig {
    pub orb_capacity: usize,
    pub cube_capacity: usize,
    pub block_capacity: usize,
    pub gallery_capacity: usize,
    pub snow_capacity: usize,
}

impl GpuState {
    pub async fn new(
        window: Arc<Window>,
        config: &GpuConfig,
        photos: &PhotoSet,
        snowflake: &TextureData,
    ) -> Result<Self, GpuError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|_| GpuError::NoAdapter)?;
        log::info!("GPU adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                trace: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        let depth_texture = create_depth_texture(&device, &surface_config);

        // Bind group layouts: frame uniforms, per-batch material, plane texture.
        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let material_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Material Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let frame_uniforms = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Frame Uniform Buffer"),
            contents: bytemuck::bytes_of(&FrameUniforms {
                view_proj: Mat4::IDENTITY.to_cols_array_2d(),
                time: 0.0,
                _padding: [0.0; 3],
            }),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniforms.as_entire_binding(),
            }],
        });

        let solid_pipeline = create_pipeline(
            &device,
            "Solid Pipeline",
            shader::SOLID_SHADER,
            surface_config.format,
            &[&frame_layout, &material_layout],
        );
        let textured_pipeline = create_pipeline(
            &device,
            "Textured Pipeline",
            shader::TEXTURED_SHADER,
            surface_config.format,
            &[&frame_layout, &texture_layout],
        );

        let orbs = SolidBatch::new(
            &device,
            "Orbs",
            &Mesh::uv_sphere(1.0, 16, 16),
            config.orb_capacity,
            &material_layout,
        );
        let cubes = SolidBatch::new(
            &device,
            "Cubes",
            &Mesh::cube(0.5),
            config.cube_capacity,
            &material_layout,
        );
        let blocks = SolidBatch::new(
            &device,
            "Blocks",
            &Mesh::cube(0.5),
            config.block_capacity,
            &material_layout,
        );
        let star_core = SolidBatch::new(
            &device,
            "Star Core",
            &Mesh::octahedron(1.0),
            1,
            &material_layout,
        );
        let star_spikes = SolidBatch::new(
            &device,
            "Star Spikes",
            &Mesh::octahedron(1.0),
            1,
            &material_layout,
        );

        let plane_quad = MeshBuffers::new(&device, "Plane Quad", &Mesh::quad(1.0, 1.0));
        let photo_textures = photos
            .textures()
            .iter()
            .map(|t| create_plane_texture(&device, &queue, &texture_layout, t))
            .collect::<Vec<_>>();
        let photo_instances = create_instance_buffer(&device, "Photo Instances", photos.len());
        let gallery_instances =
            create_instance_buffer(&device, "Gallery Instances", config.gallery_capacity);
        let snow_texture = create_plane_texture(&device, &queue, &texture_layout, snowflake);
        let snow_instances = create_instance_buffer(&device, "Snow Instances", config.snow_capacity);

        Ok(Self {
            surface,
            device,
            queue,
            config: surface_config,
            depth_texture,
            solid_pipeline,
            textured_pipeline,
            frame_uniforms,
            frame_bind_group,
            texture_layout,
            orbs,
            cubes,
            blocks,
            star_core,
            star_spikes,
            plane_quad,
            photo_textures,
            photo_instances,
            photo_capacity: photos.len().max(1) as u32,
            gallery_instances,
            gallery_capacity: config.gallery_capacity.max(1) as u32,
            snow_texture,
            snow_instances,
            snow_capacity: config.snow_capacity.max(1) as u32,
        })
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.depth_texture = create_depth_texture(&self.device, &self.config);
        }
    }

    /// Perspective projection for the current surface aspect ratio.
    pub fn projection(&self) -> Mat4 {
        let aspect = self.config.width as f32 / self.config.height as f32;
        Mat4::perspective_rh(45.0_f32.to_radians(), aspect, 0.1, 200.0)
    }

    /// Replace the photo planes after the image list changed.
    pub fn set_photos(&mut self, photos: &PhotoSet) {
        self.photo_textures = photos
            .textures()
            .iter()
            .map(|t| create_plane_texture(&self.device, &self.queue, &self.texture_layout, t))
            .collect();
        self.photo_instances =
            create_instance_buffer(&self.device, "Photo Instances", photos.len());
        self.photo_capacity = photos.len().max(1) as u32;
    }

    pub fn render(&mut self, frame: &RenderFrame) -> Result<(), wgpu::SurfaceError> {
        let uniforms = FrameUniforms {
            view_proj: frame.view_proj.to_cols_array_2d(),
            time: frame.time,
            _padding: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.frame_uniforms, 0, bytemuck::bytes_of(&uniforms));

        self.orbs.upload(&self.queue, frame.orbs, &frame.materials.orb);
        self.cubes.upload(&self.queue, frame.cubes, &frame.materials.cube);
        self.blocks.upload(&self.queue, frame.blocks, &frame.materials.block);
        self.star_core
            .upload(&self.queue, &[frame.star_core], &frame.materials.star_core);
        self.star_spikes
            .upload(&self.queue, &[frame.star_spikes], &frame.materials.star_spikes);

        let photo_count = (frame.photos.len() as u32).min(self.photo_capacity);
        if photo_count > 0 {
            self.queue.write_buffer(
                &self.photo_instances,
                0,
                bytemuck::cast_slice(&frame.photos[..photo_count as usize]),
            );
        }
        let gallery_count = (frame.gallery.len() as u32).min(self.gallery_capacity);
        if gallery_count > 0 {
            let mats: Vec<Mat4> = frame.gallery.iter().map(|(m, _)| *m).collect();
            self.queue.write_buffer(
                &self.gallery_instances,
                0,
                bytemuck::cast_slice(&mats[..gallery_count as usize]),
            );
        }
        let snow_count = (frame.snow.len() as u32).min(self.snow_capacity);
        if snow_count > 0 {
            self.queue.write_buffer(
                &self.snow_instances,
                0,
                bytemuck::cast_slice(&frame.snow[..snow_count as usize]),
            );
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.008,
                            b: 0.0,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.solid_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            self.orbs.draw(&mut render_pass);
            self.cubes.draw(&mut render_pass);
            self.blocks.draw(&mut render_pass);
            self.star_core.draw(&mut render_pass);
            self.star_spikes.draw(&mut render_pass);

            render_pass.set_pipeline(&self.textured_pipeline);
            render_pass.set_bind_group(0, &self.frame_bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.plane_quad.vertex.slice(..));
            render_pass.set_index_buffer(self.plane_quad.index.slice(..), wgpu::IndexFormat::Uint16);

            render_pass.set_vertex_buffer(1, self.photo_instances.slice(..));
            for i in 0..photo_count {
                if let Some(texture) = self.photo_textures.get(i as usize) {
                    render_pass.set_bind_group(1, texture, &[]);
                    render_pass.draw_indexed(0..self.plane_quad.index_count, 0, i..i + 1);
                }
            }

            render_pass.set_vertex_buffer(1, self.gallery_instances.slice(..));
            for (i, (_, texture_index)) in frame.gallery.iter().enumerate().take(gallery_count as usize) {
                if let Some(texture) = self.photo_textures.get(texture_index % self.photo_textures.len().max(1)) {
                    render_pass.set_bind_group(1, texture, &[]);
                    render_pass.draw_indexed(0..self.plane_quad.index_count, 0, i as u32..i as u32 + 1);
                }
            }

            render_pass.set_vertex_buffer(1, self.snow_instances.slice(..));
            render_pass.set_bind_group(1, &self.snow_texture, &[]);
            render_pass.draw_indexed(0..self.plane_quad.index_count, 0, 0..snow_count);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    shader_src: &str,
    format: wgpu::TextureFormat,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(shader_src.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts,
        push_constant_ranges: &[],
    });

    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 24,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x2,
            },
        ],
    };
    let instance_layout = wgpu::VertexBufferLayout {
        array_stride: INSTANCE_STRIDE,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 3,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: 16,
                shader_location: 4,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: 32,
                shader_location: 5,
                format: wgpu::VertexFormat::Float32x4,
            },
            wgpu::VertexAttribute {
                offset: 48,
                shader_location: 6,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout, instance_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_plane_texture(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    data: &TextureData,
) -> wgpu::BindGroup {
    let size = wgpu::Extent3d {
        width: data.width,
        height: data.height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Plane Texture"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &data.data,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * data.width),
            rows_per_image: Some(data.height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Plane Sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Plane Texture Bind Group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&sampler),
            },
        ],
    })
}

fn create_depth_texture(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width: config.width,
            height: config.height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
