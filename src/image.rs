//! Palette-indexed image used as the panel's backing resource.

use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::palette::PALETTE_SIZE;
use crate::traits::ColorIndex;

/// Side length of an image bank in pixels.
pub const IMAGE_SIZE: i32 = 256;

/// Grid used by the demo generator; matches the tile size.
const DEMO_CELL: i32 = 8;

/// A rectangular grid of palette indices.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: i32,
    height: i32,
    pixels: Vec<ColorIndex>,
}

impl std::fmt::Debug for IndexedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Default for IndexedImage {
    fn default() -> Self {
        Self::new(IMAGE_SIZE, IMAGE_SIZE)
    }
}

impl IndexedImage {
    /// Creates an image filled with colour 0.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    /// Wraps an existing pixel buffer in row-major order.
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<ColorIndex>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            bail!("image dimensions must be positive, got {}x{}", width, height);
        }
        let expected = (width * height) as usize;
        if pixels.len() != expected {
            bail!(
                "pixel buffer holds {} entries but a {}x{} image needs {}",
                pixels.len(),
                width,
                height,
                expected
            );
        }
        if let Some(bad) = pixels.iter().find(|&&c| c as usize >= PALETTE_SIZE) {
            bail!("colour index {} is outside the {}-entry palette", bad, PALETTE_SIZE);
        }
        Ok(Self { width, height, pixels })
    }

    /// Builds a 256x256 bank of random 8x8 tiles, reproducible for a given seed.
    ///
    /// Each tile is a two-colour checker or stripe pattern so that panning
    /// and selection are easy to follow on screen.
    pub fn generate_demo(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut image = Self::default();

        for ty in (0..IMAGE_SIZE).step_by(DEMO_CELL as usize) {
            for tx in (0..IMAGE_SIZE).step_by(DEMO_CELL as usize) {
                let fg: ColorIndex = rng.gen_range(0..PALETTE_SIZE as ColorIndex);
                let bg: ColorIndex = rng.gen_range(0..PALETTE_SIZE as ColorIndex);
                let pattern = rng.gen_range(0..3);

                for y in 0..DEMO_CELL {
                    for x in 0..DEMO_CELL {
                        let on = match pattern {
                            0 => (x / 2 + y / 2) % 2 == 0,
                            1 => y % 4 < 2,
                            _ => x == 0 || y == 0,
                        };
                        image.pset(tx + x, ty + y, if on { fg } else { bg });
                    }
                }
            }
        }

        image
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the image.
    pub fn pget(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Sets the pixel at `(x, y)`. Writes outside the image are dropped.
    pub fn pset(&mut self, x: i32, y: i32, col: ColorIndex) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = col;
        }
    }

    /// Row-major view of all pixels.
    pub fn pixels(&self) -> &[ColorIndex] {
        &self.pixels
    }

    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }
}
