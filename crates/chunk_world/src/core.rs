//! Core type definitions shared by the chunk store and generators.

/// Block identifier stored per voxel.
pub type BlockId = u32;

/// Reserved block value for empty space. Also returned for every read
/// that falls outside loaded terrain.
pub const BLOCK_AIR: BlockId = 0;
pub const BLOCK_STONE: BlockId = 1;
pub const BLOCK_DIRT: BlockId = 2;
pub const BLOCK_GRASS: BlockId = 3;
pub const BLOCK_SAND: BlockId = 4;
pub const BLOCK_WATER: BlockId = 5;

/// Chunk extent along X and Z (16).
pub const CHUNK_WIDTH: usize = 16;
/// Chunk extent along Y (256). A chunk spans the full world height.
pub const CHUNK_HEIGHT: usize = 256;
/// Horizontal slice size (CHUNK_WIDTH × CHUNK_WIDTH = 256).
pub const CHUNK_AREA: usize = CHUNK_WIDTH * CHUNK_WIDTH;
/// Total blocks per chunk (65536).
pub const CHUNK_VOLUME: usize = CHUNK_AREA * CHUNK_HEIGHT;

/// Check whether a world-space Y lies inside the vertical extent of a chunk.
#[inline]
pub fn y_in_bounds(y: i32) -> bool {
    y >= 0 && (y as usize) < CHUNK_HEIGHT
}
