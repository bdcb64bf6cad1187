//! Contains logic for what a terrain may look like.

use crate::chunk::Chunk;
use crate::core::{
    BlockId, BLOCK_DIRT, BLOCK_GRASS, BLOCK_SAND, BLOCK_STONE, BLOCK_WATER, CHUNK_HEIGHT,
    CHUNK_WIDTH,
};
use crate::error::WorldError;

/// Represents a type that can fill a freshly created [`Chunk`] with terrain.
///
/// The chunk arrives all-air with a valid origin. Implementations must be
/// deterministic in that origin and must not touch anything but the chunk.
pub trait TerrainGenerator {
    /// Populate block data for `chunk`.
    fn generate(&self, chunk: &mut Chunk);
}

/// Horizontal layers stacked upward from y = 0, identical in every column.
#[derive(Clone, Debug)]
pub struct FlatGenerator {
    layers: Vec<(BlockId, u32)>,
}

impl FlatGenerator {
    /// Build from `(block, thickness)` pairs, bottom first.
    pub fn new(layers: Vec<(BlockId, u32)>) -> Result<Self, WorldError> {
        let total: usize = layers.iter().map(|&(_, t)| t as usize).sum();
        if total > CHUNK_HEIGHT {
            return Err(WorldError::LayersExceedHeight {
                total,
                height: CHUNK_HEIGHT,
            });
        }
        Ok(Self { layers })
    }

    /// Total thickness of all layers, i.e. the first air block.
    pub fn surface_height(&self) -> u32 {
        self.layers.iter().map(|&(_, t)| t).sum()
    }
}

impl Default for FlatGenerator {
    /// Stone up to y = 60, three dirt, one grass.
    fn default() -> Self {
        Self {
            layers: vec![(BLOCK_STONE, 60), (BLOCK_DIRT, 3), (BLOCK_GRASS, 1)],
        }
    }
}

impl TerrainGenerator for FlatGenerator {
    fn generate(&self, chunk: &mut Chunk) {
        let w = CHUNK_WIDTH as u32;
        for z in 0..w {
            for x in 0..w {
                let mut y = 0;
                for &(block, thickness) in &self.layers {
                    chunk.fill_column(x, z, y, y + thickness, block);
                    y += thickness;
                }
            }
        }
    }
}

/// Rolling terrain from a seeded 2D value-noise heightmap.
///
/// Columns below `sea_level` get a sand top and are flooded with water.
#[derive(Clone, Debug)]
pub struct HillsGenerator {
    pub seed: u32,
    /// Height of a column where the noise is zero.
    pub base_height: u32,
    /// Maximum height added on top of `base_height`.
    pub amplitude: u32,
    /// Horizontal distance between noise lattice points, in blocks.
    pub wavelength: u32,
    pub sea_level: u32,
    /// Dirt thickness between stone and the top block.
    pub soil_depth: u32,
}

impl Default for HillsGenerator {
    fn default() -> Self {
        Self {
            seed: 0,
            base_height: 48,
            amplitude: 32,
            wavelength: 32,
            sea_level: 62,
            soil_depth: 3,
        }
    }
}

/// Integer hash of a lattice point, mapped to [0, 1).
fn lattice_value(seed: u32, x: i32, z: i32) -> f32 {
    let mut h = seed
        .wrapping_mul(0x9E37_79B9)
        ^ (x as u32).wrapping_mul(0x85EB_CA6B)
        ^ (z as u32).wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7FEB_352D);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846C_A68B);
    h ^= h >> 16;
    (h >> 8) as f32 / (1u32 << 24) as f32
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

impl HillsGenerator {
    /// Sample the smoothed noise at a world block column, in [0, 1).
    pub fn noise(&self, x: i32, z: i32) -> f32 {
        let l = self.wavelength.clamp(1, i32::MAX as u32) as i32;
        let (cx, cz) = (x.div_euclid(l), z.div_euclid(l));
        let tx = smoothstep(x.rem_euclid(l) as f32 / l as f32);
        let tz = smoothstep(z.rem_euclid(l) as f32 / l as f32);

        let v00 = lattice_value(self.seed, cx, cz);
        // Lattice cells past i32::MAX wrap to the far side
        let (nx, nz) = (cx.wrapping_add(1), cz.wrapping_add(1));
        let v10 = lattice_value(self.seed, nx, cz);
        let v01 = lattice_value(self.seed, cx, nz);
        let v11 = lattice_value(self.seed, nx, nz);

        let a = v00 + (v10 - v00) * tx;
        let b = v01 + (v11 - v01) * tx;
        a + (b - a) * tz
    }

    /// Terrain height (first air block above solid ground) of a world column.
    pub fn height_at(&self, x: i32, z: i32) -> u32 {
        let h = self.base_height as f32 + self.noise(x, z) * self.amplitude as f32;
        (h as u32).clamp(1, CHUNK_HEIGHT as u32)
    }
}

impl TerrainGenerator for HillsGenerator {
    fn generate(&self, chunk: &mut Chunk) {
        let origin = chunk.origin();
        let w = CHUNK_WIDTH as u32;

        for z in 0..w {
            for x in 0..w {
                let height = self.height_at(origin.x + x as i32, origin.z + z as i32);
                let soil_start = height.saturating_sub(self.soil_depth + 1);
                let top = height - 1;

                chunk.fill_column(x, z, 0, soil_start, BLOCK_STONE);
                chunk.fill_column(x, z, soil_start, top, BLOCK_DIRT);

                if height < self.sea_level {
                    chunk.fill_column(x, z, top, height, BLOCK_SAND);
                    chunk.fill_column(x, z, height, self.sea_level, BLOCK_WATER);
                } else {
                    chunk.fill_column(x, z, top, height, BLOCK_GRASS);
                }
            }
        }
    }
}
