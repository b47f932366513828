//! WGSL shader sources.
//!
//! Two pipelines share the same instance layout (a model matrix across four
//! vertex attributes): a lit solid shader for the gem meshes and the star,
//! and a textured shader for photo planes, gallery frames and snow.

/// Lit, untextured instanced meshes with an emissive material.
pub const SOLID_SHADER: &str = r#"
struct FrameUniforms {
    view_proj: mat4x4<f32>,
    time: f32,
};

struct MaterialUniforms {
    base_color: vec4<f32>,
    // rgb = emissive color, a = intensity
    emissive: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var<uniform> material: MaterialUniforms;

struct VsIn {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) model_0: vec4<f32>,
    @location(4) model_1: vec4<f32>,
    @location(5) model_2: vec4<f32>,
    @location(6) model_3: vec4<f32>,
};

struct VsOut {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(in: VsIn) -> VsOut {
    let model = mat4x4<f32>(in.model_0, in.model_1, in.model_2, in.model_3);
    let world = model * vec4<f32>(in.position, 1.0);

    var out: VsOut;
    out.clip_position = frame.view_proj * world;
    out.normal = normalize((model * vec4<f32>(in.normal, 0.0)).xyz);
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let key = normalize(vec3<f32>(0.4, 0.8, 0.5));
    let fill = normalize(vec3<f32>(-0.6, -0.4, -0.2));
    let n = normalize(in.normal);

    let diffuse = max(dot(n, key), 0.0) + 0.25 * max(dot(n, fill), 0.0);
    let lit = material.base_color.rgb * (0.2 + 0.8 * diffuse);
    let color = lit + material.emissive.rgb * material.emissive.a;
    return vec4<f32>(color, 1.0);
}
"#;

/// Textured instanced quads (photos, gallery frames, snowflakes).
pub const TEXTURED_SHADER: &str = r#"
struct FrameUniforms {
    view_proj: mat4x4<f32>,
    time: f32,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var plane_texture: texture_2d<f32>;
@group(1) @binding(1)
var plane_sampler: sampler;

struct VsIn {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) model_0: vec4<f32>,
    @location(4) model_1: vec4<f32>,
    @location(5) model_2: vec4<f32>,
    @location(6) model_3: vec4<f32>,
};

struct VsOut {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
};

@vertex
fn vs_main(in: VsIn) -> VsOut {
    let model = mat4x4<f32>(in.model_0, in.model_1, in.model_2, in.model_3);

    var out: VsOut;
    out.clip_position = frame.view_proj * model * vec4<f32>(in.position, 1.0);
    out.uv = in.uv;
    return out;
}

@fragment
fn fs_main(in: VsOut) -> @location(0) vec4<f32> {
    let sample = textureSample(plane_texture, plane_sampler, in.uv);
    if sample.a < 0.02 {
        discard;
    }
    return sample;
}
"#;
