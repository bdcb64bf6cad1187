//! Chunk data structure: flat block storage with a remesh flag.

use glam::{IVec3, UVec3};

use crate::core::{BlockId, BLOCK_AIR, CHUNK_AREA, CHUNK_HEIGHT, CHUNK_VOLUME, CHUNK_WIDTH};
use super::coord::ChunkCoord;

/// Fixed-size column of blocks owned by exactly one grid slot.
///
/// Storage is a flat heap array laid out as `(y * WIDTH + z) * WIDTH + x`.
/// A chunk is never cloned; the grid moves it between slots and drops it
/// on eviction.
pub struct Chunk {
    coord: ChunkCoord,
    blocks: Vec<BlockId>,
    dirty: bool,
}

impl Chunk {
    /// Chunk extent along X and Z.
    pub const WIDTH: u32 = CHUNK_WIDTH as u32;
    /// Chunk extent along Y.
    pub const HEIGHT: u32 = CHUNK_HEIGHT as u32;

    /// Create an all-air chunk at the given coordinate.
    ///
    /// New chunks start clean; whoever fills them decides when they need
    /// their first mesh.
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: vec![BLOCK_AIR; CHUNK_VOLUME],
            dirty: false,
        }
    }

    #[inline]
    fn index(local: UVec3) -> usize {
        debug_assert!(
            local.x < Self::WIDTH && local.y < Self::HEIGHT && local.z < Self::WIDTH,
            "local coordinates out of bounds: {local}"
        );
        local.y as usize * CHUNK_AREA + local.z as usize * CHUNK_WIDTH + local.x as usize
    }

    /// Chunk coordinate in chunk-space.
    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// World-space origin (minimum corner) in blocks.
    pub fn origin(&self) -> IVec3 {
        self.coord.origin()
    }

    /// Get the block at local coordinates.
    ///
    /// # Panics
    /// Debug panics if coordinates are out of bounds; callers range-check.
    #[inline]
    pub fn get_block(&self, local: UVec3) -> BlockId {
        self.blocks[Self::index(local)]
    }

    /// Set the block at local coordinates and mark the chunk dirty.
    ///
    /// # Panics
    /// Debug panics if coordinates are out of bounds; callers range-check.
    #[inline]
    pub fn set_block(&mut self, local: UVec3, block: BlockId) {
        self.blocks[Self::index(local)] = block;
        self.dirty = true;
    }

    /// Fill the vertical run `[y_start, y_end)` of one column.
    pub fn fill_column(&mut self, x: u32, z: u32, y_start: u32, y_end: u32, block: BlockId) {
        let y_end = y_end.min(Self::HEIGHT);
        for y in y_start..y_end {
            self.blocks[Self::index(UVec3::new(x, y, z))] = block;
        }
        if y_start < y_end {
            self.dirty = true;
        }
    }

    /// Whether the mesh built from this chunk is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark this chunk as needing a remesh.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clear the remesh flag. Called by the renderer once it has rebuilt
    /// the mesh.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Raw block array, laid out as `(y * WIDTH + z) * WIDTH + x`.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Byte view of the block array for GPU or JS upload.
    pub fn block_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.blocks)
    }

    /// Count the number of non-air blocks in this chunk.
    pub fn solid_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b != BLOCK_AIR).count()
    }

    /// Check if this chunk contains only air.
    pub fn is_empty(&self) -> bool {
        self.blocks.iter().all(|&b| b == BLOCK_AIR)
    }

    /// Heap memory held by block storage.
    pub fn memory_bytes(&self) -> usize {
        self.blocks.len() * std::mem::size_of::<BlockId>()
    }
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("coord", &self.coord)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
