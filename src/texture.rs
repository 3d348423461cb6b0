//! Texel storage and nearest-neighbor UV lookup.

use std::path::Path;

/// A decoded 2D texture sampled by normalized UV coordinates.
pub struct Texture {
    data: Vec<u32>, // packed ARGB texels, row-major from the top-left
    width: u32,
    height: u32,
}

impl Texture {
    /// Decodes a texture from an image file (TGA, PNG, ...).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        let data = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// A 1×1 texture of a single color. Every UV samples the same texel.
    pub fn solid(color: u32) -> Self {
        Self {
            data: vec![color],
            width: 1,
            height: 1,
        }
    }

    /// Samples the nearest texel at (u, v).
    ///
    /// UVs are wrapped into [0, 1) with `rem_euclid` and V is flipped:
    /// OBJ files place the UV origin at the bottom-left while texels are
    /// stored from the top-left.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> u32 {
        let u = u.rem_euclid(1.0);
        let v = (1.0 - v).rem_euclid(1.0);

        let x = ((u * self.width as f32) as u32).min(self.width - 1);
        let y = ((v * self.height as f32) as u32).min(self.height - 1);

        self.data[(y * self.width + x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn solid_texture_samples_same_color_everywhere() {
        let tex = Texture::solid(colors::RED);
        assert_eq!(tex.sample(0.0, 0.0), colors::RED);
        assert_eq!(tex.sample(0.5, 0.5), colors::RED);
        assert_eq!(tex.sample(0.99, 0.01), colors::RED);
    }

    #[test]
    fn out_of_range_uvs_wrap() {
        let tex = Texture::solid(colors::GREEN);
        assert_eq!(tex.sample(1.5, -0.25), colors::GREEN);
    }
}
