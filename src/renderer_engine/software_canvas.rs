use anyhow::{Context, Result};
use image::{Rgba as ImageRgba, RgbaImage};
use itertools::iproduct;
use log::info;
use std::path::Path;

use crate::physic_engine::{Color, Point};
use crate::renderer_engine::{Canvas, CompositeMode, Rgba};

/// Surface de dessin CPU (rendu headless et tests).
///
/// Pixels stockés en RGBA prémultiplié, canaux dans [0, 1]. Le fond est noir
/// transparent ; l'export PNG composite sur noir opaque.
#[derive(Debug, Clone)]
pub struct SoftwareCanvas {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
    mode: CompositeMode,
}

impl SoftwareCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 4]; (width as usize) * (height as usize)],
            mode: CompositeMode::SourceOver,
        }
    }

    pub fn composite_mode(&self) -> CompositeMode {
        self.mode
    }

    /// Pixel prémultiplié en (x, y), `None` hors surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[self.index(x, y)])
    }

    /// Nombre de pixels dont au moins un canal de couleur est non nul.
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .filter(|p| p[0] > 0.0 || p[1] > 0.0 || p[2] > 0.0)
            .count()
    }

    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, _] = self.pixels[self.index(x, y)];
            let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
            ImageRgba([to_u8(r), to_u8(g), to_u8(b), 255])
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .with_context(|| format!("Failed to export frame to '{}'", path.display()))?;
        info!("🖼️ Frame exported to {}", path.display());
        Ok(())
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }

    #[inline]
    fn blend(&mut self, x: u32, y: u32, rgb: [f32; 3], alpha: f32) {
        let idx = self.index(x, y);
        let dst = &mut self.pixels[idx];
        let src = [rgb[0] * alpha, rgb[1] * alpha, rgb[2] * alpha, alpha];
        match self.mode {
            CompositeMode::SourceOver => {
                for c in 0..4 {
                    dst[c] = src[c] + dst[c] * (1.0 - alpha);
                }
            }
            CompositeMode::DestinationOut => {
                for c in dst.iter_mut() {
                    *c *= 1.0 - alpha;
                }
            }
            CompositeMode::Lighter => {
                for c in 0..4 {
                    dst[c] = (dst[c] + src[c]).min(1.0);
                }
            }
        }
    }
}

impl Canvas for SoftwareCanvas {
    fn size(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }

    fn resize(&mut self, width: u32, height: u32) {
        *self = Self {
            mode: self.mode,
            ..Self::new(width, height)
        };
    }

    fn set_composite_mode(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) {
        let clip = |v: f32, max: u32| (v.round().max(0.0) as u32).min(max);
        let (x0, x1) = (clip(x, self.width), clip(x + width, self.width));
        let (y0, y1) = (clip(y, self.height), clip(y + height, self.height));
        let rgb = fill.color.to_unit_rgb();
        let alpha = fill.alpha.clamp(0.0, 1.0);

        for (py, px) in iproduct!(y0..y1, x0..x1) {
            self.blend(px, py, rgb, alpha);
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color, alpha: f32) {
        let delta = to - from;
        // un segment de longueur nulle ne dessine rien, comme un canvas HTML
        if delta.length_squared() == 0.0 || !delta.is_finite() {
            return;
        }

        let steps = delta.abs().max_element().ceil().max(1.0) as usize;
        let rgb = color.to_unit_rgb();
        let alpha = alpha.clamp(0.0, 1.0);
        let mut last = None;

        for i in 0..=steps {
            let p = from + delta * (i as f32 / steps as f32);
            let (px, py) = (p.x.floor(), p.y.floor());
            if px < 0.0 || py < 0.0 || px >= self.width as f32 || py >= self.height as f32 {
                continue;
            }
            let pixel = (px as u32, py as u32);
            // chaque pixel n'est composité qu'une fois par tracé
            if last == Some(pixel) {
                continue;
            }
            last = Some(pixel);
            self.blend(pixel.0, pixel.1, rgb, alpha);
        }
    }
}
