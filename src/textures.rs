//! Photo and procedural texture data.
//!
//! Everything here is plain RGBA pixel buffers; uploading them to the GPU
//! is the renderer's job. Photos come from the uploaded-image list via the
//! `image` crate, and two textures are generated procedurally: the
//! empty-state placeholder photo and the six-fold snowflake sprite.

use crate::error::TextureError;
use crate::Vec2;
use std::f32::consts::PI;
use std::path::Path;

/// Raw RGBA texture data (width * height * 4 bytes).
#[derive(Debug, Clone)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl TextureData {
    /// Create a texture from raw RGBA data.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        assert_eq!(
            data.len(),
            (width * height * 4) as usize,
            "RGBA data size mismatch"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Load a texture from an image file (PNG or JPEG).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TextureError> {
        let img = image::open(path.as_ref())?.into_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            data: img.into_raw(),
            width,
            height,
        })
    }

    /// The empty-state photo shown before any upload: a portrait-ratio
    /// gradient with a warm border, so the photo path always has pixels.
    pub fn placeholder() -> Self {
        const W: u32 = 256;
        const H: u32 = 320;
        let mut data = Vec::with_capacity((W * H * 4) as usize);
        for y in 0..H {
            let t = y as f32 / (H - 1) as f32;
            for x in 0..W {
                let border = x < 8 || y < 8 || x >= W - 8 || y >= H - 8;
                if border {
                    data.extend_from_slice(&[255, 204, 0, 255]);
                } else {
                    let r = (10.0 + 60.0 * t) as u8;
                    let g = (40.0 + 80.0 * t) as u8;
                    let b = (10.0 + 30.0 * t) as u8;
                    data.extend_from_slice(&[r, g, b, 255]);
                }
            }
        }
        Self::from_rgba(data, W, H)
    }

    /// Procedural six-fold snowflake sprite with a glowing hexagonal core.
    ///
    /// Branches are laid out recursively (a trunk with paired sub-branches
    /// at fixed stations) and stroked into the alpha channel; the RGB stays
    /// a cold white so the renderer can tint it.
    pub fn snowflake(size: u32, depth: u32) -> Self {
        let mut alpha = vec![0.0f32; (size * size) as usize];
        let center = Vec2::splat(size as f32 / 2.0);
        let trunk_len = size as f32 * 0.39;
        let trunk_thickness = size as f32 * 0.023;

        let mut segments = Vec::new();
        for branch in 0..6 {
            let angle = branch as f32 * PI / 3.0;
            let dir = Vec2::new(angle.sin(), -angle.cos());
            collect_branches(&mut segments, center, dir, trunk_len, trunk_thickness, depth);
        }
        for segment in &segments {
            stroke(&mut alpha, size, segment);
        }

        // Hexagonal core.
        let hex_radius = size as f32 * 0.1;
        fill_hexagon(&mut alpha, size, center, hex_radius);

        let data = alpha
            .iter()
            .flat_map(|&a| {
                let a8 = (a.clamp(0.0, 1.0) * 255.0) as u8;
                [225, 245, 255, a8]
            })
            .collect();
        Self::from_rgba(data, size, size)
    }
}

struct Segment {
    a: Vec2,
    b: Vec2,
    thickness: f32,
    opacity: f32,
}

/// Recursively gather the segments of one snowflake arm.
fn collect_branches(
    segments: &mut Vec<Segment>,
    origin: Vec2,
    dir: Vec2,
    len: f32,
    thickness: f32,
    depth: u32,
) {
    segments.push(Segment {
        a: origin,
        b: origin + dir * len,
        thickness,
        opacity: 0.9 - depth as f32 * 0.1,
    });

    if depth == 0 {
        return;
    }
    for (i, station) in [0.35f32, 0.65, 0.90].iter().enumerate() {
        let base = origin + dir * (len * station);
        let sub_len = len * 0.4 * (1.0 - i as f32 * 0.15);
        let sub_thickness = thickness * 0.6;
        for side in [-1.0f32, 1.0] {
            let rotated = rotate(dir, side * PI / 3.0);
            collect_branches(segments, base, rotated, sub_len, sub_thickness, depth - 1);
        }
    }
}

fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Stroke one segment into the alpha buffer with 1px antialiasing,
/// visiting only the pixels inside the segment's bounding box.
fn stroke(alpha: &mut [f32], size: u32, segment: &Segment) {
    let half = segment.thickness / 2.0;
    let pad = half + 1.5;
    let min_x = (segment.a.x.min(segment.b.x) - pad).floor().max(0.0) as u32;
    let max_x = ((segment.a.x.max(segment.b.x) + pad).ceil() as u32).min(size.saturating_sub(1));
    let min_y = (segment.a.y.min(segment.b.y) - pad).floor().max(0.0) as u32;
    let max_y = ((segment.a.y.max(segment.b.y) + pad).ceil() as u32).min(size.saturating_sub(1));

    let ab = segment.b - segment.a;
    let len_sq = ab.length_squared().max(1e-6);

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let t = ((p - segment.a).dot(ab) / len_sq).clamp(0.0, 1.0);
            let dist = (p - (segment.a + ab * t)).length();
            let coverage = ((half + 1.0 - dist).clamp(0.0, 1.0)) * segment.opacity;
            let idx = (y * size + x) as usize;
            alpha[idx] = alpha[idx].max(coverage);
        }
    }
}

fn fill_hexagon(alpha: &mut [f32], size: u32, center: Vec2, radius: f32) {
    let pad = radius + 1.0;
    let min = ((center.x - pad).floor().max(0.0)) as u32;
    let max = (((center.x + pad).ceil()) as u32).min(size.saturating_sub(1));

    for y in min..=max {
        for x in min..=max {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
            let angle = p.y.atan2(p.x);
            // Distance to the hexagon edge along this angle.
            let sector = (angle.rem_euclid(PI / 3.0)) - PI / 6.0;
            let edge = radius * (PI / 6.0).cos() / sector.cos();
            let coverage = (edge - p.length() + 1.0).clamp(0.0, 0.9);
            let idx = (y * size + x) as usize;
            alpha[idx] = alpha[idx].max(coverage);
        }
    }
}

/// The ordered photo textures for the current image list.
#[derive(Debug, Clone, Default)]
pub struct PhotoSet {
    textures: Vec<TextureData>,
    /// Whether the set holds the placeholder rather than real uploads.
    placeholder: bool,
}

impl PhotoSet {
    /// Load every image in order. An empty list yields a single
    /// placeholder so one photo plane always renders.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, TextureError> {
        if paths.is_empty() {
            return Ok(Self {
                textures: vec![TextureData::placeholder()],
                placeholder: true,
            });
        }
        let textures = paths
            .iter()
            .map(TextureData::from_file)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            textures,
            placeholder: false,
        })
    }

    /// Number of loaded photo planes.
    #[inline]
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }

    /// Whether the set is the empty-state placeholder.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    #[inline]
    pub fn textures(&self) -> &[TextureData] {
        &self.textures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_dimensions() {
        let tex = TextureData::placeholder();
        assert_eq!(tex.data.len(), (tex.width * tex.height * 4) as usize);
        assert!(tex.height > tex.width, "placeholder should be portrait");
    }

    #[test]
    fn test_empty_photo_set_gets_placeholder() {
        let set = PhotoSet::load::<&str>(&[]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.is_placeholder());
    }

    #[test]
    fn test_missing_file_errors() {
        let result = PhotoSet::load(&["/definitely/not/here.png"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_snowflake_alpha_profile() {
        let tex = TextureData::snowflake(128, 2);
        assert_eq!(tex.data.len(), 128 * 128 * 4);

        let alpha_at = |x: u32, y: u32| tex.data[((y * 128 + x) * 4 + 3) as usize];
        // Opaque core, transparent corner.
        assert!(alpha_at(64, 64) > 128);
        assert!(alpha_at(2, 2) == 0);
        // The vertical trunk is covered above the core.
        assert!(alpha_at(64, 20) > 0);
    }

    #[test]
    fn test_snowflake_sixfold_symmetry() {
        let tex = TextureData::snowflake(128, 1);
        let alpha_at = |x: u32, y: u32| tex.data[((y * 128 + x) * 4 + 3) as usize];
        // A point on the upward arm has a counterpart on the downward arm.
        assert!(alpha_at(64, 30) > 0);
        assert!(alpha_at(64, 97) > 0);
    }
}
