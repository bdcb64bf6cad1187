//! Sparse record of player edits that outlives chunk unloads.
//!
//! Edits are kept in one array sorted by world position (x, then y, then z)
//! so that point lookups are a binary search and the edits of a single
//! chunk form a short scan inside the x-range of that chunk.

use std::cmp::Ordering;

use glam::IVec3;

use crate::core::{y_in_bounds, BlockId, CHUNK_WIDTH};
use super::coord::ChunkCoord;

/// A single recorded edit: the block that replaces whatever the generator
/// put at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockEdit {
    pub position: IVec3,
    pub block: BlockId,
}

/// Total order over block positions: lexicographic on x, y, z.
fn position_order(a: IVec3, b: IVec3) -> Ordering {
    a.x.cmp(&b.x)
        .then(a.y.cmp(&b.y))
        .then(a.z.cmp(&b.z))
}

/// Sorted, position-unique set of block edits.
///
/// Entries are never removed. Writing a position again replaces its value.
#[derive(Clone, Debug, Default)]
pub struct ModifiedBlocks {
    edits: Vec<BlockEdit>,
}

impl ModifiedBlocks {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self { edits: Vec::new() }
    }

    fn search(&self, position: IVec3) -> Result<usize, usize> {
        self.edits
            .binary_search_by(|edit| position_order(edit.position, position))
    }

    /// Record `block` at `position`, replacing any earlier edit there.
    ///
    /// Returns the previously recorded block, if any.
    pub fn upsert(&mut self, position: IVec3, block: BlockId) -> Option<BlockId> {
        match self.search(position) {
            Ok(idx) => Some(std::mem::replace(&mut self.edits[idx].block, block)),
            Err(idx) => {
                self.edits.insert(idx, BlockEdit { position, block });
                None
            }
        }
    }

    /// Look up the recorded block at `position`.
    pub fn get(&self, position: IVec3) -> Option<BlockId> {
        self.search(position).ok().map(|idx| self.edits[idx].block)
    }

    /// Edits that fall inside the world-space extent of chunk `coord`.
    ///
    /// Recomputed on every call; the returned iterator only borrows.
    pub fn entries_for(&self, coord: ChunkCoord) -> impl Iterator<Item = &BlockEdit> + '_ {
        // Widened so the far edge of the last chunk before i32::MAX fits
        let width = CHUNK_WIDTH as i64;
        let x_start = coord.x as i64 * width;
        let z_start = coord.z as i64 * width;
        let x_end = x_start + width;
        let z_end = z_start + width;

        let start = self.edits.partition_point(|e| (e.position.x as i64) < x_start);
        let end = self.edits.partition_point(|e| (e.position.x as i64) < x_end);

        self.edits[start..end].iter().filter(move |e| {
            let z = e.position.z as i64;
            y_in_bounds(e.position.y) && z >= z_start && z < z_end
        })
    }

    /// Number of recorded edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Whether no edits have been recorded.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Iterate over all edits in position order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockEdit> {
        self.edits.iter()
    }
}
