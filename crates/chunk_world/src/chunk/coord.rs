//! Chunk coordinate type for chunk-space addressing.

use glam::{IVec3, UVec3};

use crate::core::CHUNK_WIDTH;

/// Horizontal chunk coordinate in chunk-space (not block-space).
///
/// Chunks are streamed on a 2D grid; every chunk spans the full world
/// height, so there is no vertical component. Coordinates can be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Origin chunk at (0, 0).
    pub const ZERO: ChunkCoord = ChunkCoord { x: 0, z: 0 };

    /// Smallest chunk index holding addressable blocks (contains `i32::MIN`).
    pub const MIN: i32 = i32::MIN.div_euclid(CHUNK_WIDTH as i32);
    /// Largest chunk index holding addressable blocks (contains `i32::MAX`).
    pub const MAX: i32 = i32::MAX.div_euclid(CHUNK_WIDTH as i32);

    /// Create a new chunk coordinate.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Shift by a number of chunks on each horizontal axis.
    pub const fn offset(self, dx: i32, dz: i32) -> Self {
        Self { x: self.x + dx, z: self.z + dz }
    }

    /// Get the 4 horizontally adjacent neighbors.
    ///
    /// Returns neighbors in order: +X, -X, +Z, -Z
    pub fn neighbors(&self) -> [ChunkCoord; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }

    /// Convert a world block position to the chunk containing it.
    ///
    /// Uses Euclidean division so negative blocks land in negative chunks.
    ///
    /// # Example
    /// ```
    /// use chunk_world::chunk::ChunkCoord;
    /// use glam::IVec3;
    ///
    /// assert_eq!(ChunkCoord::from_block(IVec3::new(17, 40, 3)), ChunkCoord::new(1, 0));
    /// assert_eq!(ChunkCoord::from_block(IVec3::new(-1, 0, -16)), ChunkCoord::new(-1, -1));
    /// ```
    pub fn from_block(block: IVec3) -> Self {
        let w = CHUNK_WIDTH as i32;
        ChunkCoord {
            x: block.x.div_euclid(w),
            z: block.z.div_euclid(w),
        }
    }

    /// Convert a world block position to local coordinates within its chunk.
    ///
    /// X and Z use Euclidean remainder. Y is passed through unchanged; the
    /// caller must already have checked it against the chunk height.
    pub fn block_to_local(block: IVec3) -> UVec3 {
        let w = CHUNK_WIDTH as i32;
        UVec3::new(
            block.x.rem_euclid(w) as u32,
            block.y as u32,
            block.z.rem_euclid(w) as u32,
        )
    }

    /// Check whether both axes lie in [`MIN`](Self::MIN)`..=`[`MAX`](Self::MAX).
    pub fn in_world(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.x) && (Self::MIN..=Self::MAX).contains(&self.z)
    }

    /// World-space origin (minimum corner) of this chunk.
    ///
    /// The chunk must satisfy [`in_world`](Self::in_world); every chunk
    /// produced by [`from_block`](Self::from_block) does.
    pub fn origin(&self) -> IVec3 {
        let w = CHUNK_WIDTH as i32;
        IVec3::new(self.x * w, 0, self.z * w)
    }

    /// Chessboard distance in chunks.
    pub fn chebyshev_distance(&self, other: ChunkCoord) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }
}
