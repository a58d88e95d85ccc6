use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplerError {
    #[error("raster buffer holds {actual} bytes, {width}x{height} RGBA needs {expected}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Borrowed RGBA8 pixel buffer, row-major, as returned by `getImageData`.
#[derive(Clone, Copy, Debug)]
pub struct Raster<'a> {
    width: u32,
    height: u32,
    rgba: &'a [u8],
}

impl<'a> Raster<'a> {
    pub fn new(width: u32, height: u32, rgba: &'a [u8]) -> Result<Self, SamplerError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(SamplerError::BufferSize {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Alpha byte at `(x, y)`; zero outside the raster.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        let index = (y as usize * self.width as usize + x as usize) * 4;
        self.rgba[index + 3]
    }
}

/// Scan the raster on a `stride`-spaced grid and collect every lit point,
/// row by row. A stride of 0 is treated as 1.
pub fn sample_opaque(raster: &Raster<'_>, stride: u32) -> Vec<Vec2> {
    let step = stride.max(1) as usize;
    let mut targets = Vec::new();
    for y in (0..raster.height()).step_by(step) {
        for x in (0..raster.width()).step_by(step) {
            if raster.alpha(x, y) > 0 {
                targets.push(Vec2::new(x as f32, y as f32));
            }
        }
    }
    targets
}

#[inline]
pub fn shuffle_targets<R: Rng + ?Sized>(targets: &mut [Vec2], rng: &mut R) {
    targets.shuffle(rng);
}

/// Lit grid points in random order, ready to be paired with particles.
pub fn sample_targets<R: Rng + ?Sized>(raster: &Raster<'_>, stride: u32, rng: &mut R) -> Vec<Vec2> {
    let mut targets = sample_opaque(raster, stride);
    shuffle_targets(&mut targets, rng);
    targets
}
