//! Boundary tracking for edits that touch a chunk's horizontal faces.

use glam::UVec3;

use crate::core::CHUNK_WIDTH;

/// Flags indicating which horizontal chunk faces a block touches.
///
/// Used to determine which neighbor chunks need to be marked dirty
/// when a block on the boundary is modified. There are no vertical
/// neighbors: chunks span the full world height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryFlags {
    /// Block is on the -X face (local x == 0).
    pub neg_x: bool,
    /// Block is on the +X face (local x == WIDTH - 1).
    pub pos_x: bool,
    /// Block is on the -Z face (local z == 0).
    pub neg_z: bool,
    /// Block is on the +Z face (local z == WIDTH - 1).
    pub pos_z: bool,
}

impl BoundaryFlags {
    /// Compute flags for a local block position.
    pub fn from_local(local: UVec3) -> Self {
        let last = CHUNK_WIDTH as u32 - 1;
        Self {
            neg_x: local.x == 0,
            pos_x: local.x == last,
            neg_z: local.z == 0,
            pos_z: local.z == last,
        }
    }

    /// Check if any boundary flag is set.
    pub fn any(&self) -> bool {
        self.neg_x || self.pos_x || self.neg_z || self.pos_z
    }

    /// Get neighbor chunk offsets that need to be marked dirty.
    ///
    /// Yields offsets as [dx, dz] for each boundary that is set.
    pub fn affected_neighbors(&self) -> impl Iterator<Item = [i32; 2]> {
        [
            (self.neg_x, [-1, 0]),
            (self.pos_x, [1, 0]),
            (self.neg_z, [0, -1]),
            (self.pos_z, [0, 1]),
        ]
        .into_iter()
        .filter_map(|(set, offset)| set.then_some(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interior_has_no_flags() {
        let flags = BoundaryFlags::from_local(UVec3::new(5, 0, 7));
        assert!(!flags.any());
        assert_eq!(flags.affected_neighbors().count(), 0);
    }

    #[test]
    fn corner_touches_two_faces() {
        let flags = BoundaryFlags::from_local(UVec3::new(0, 100, 15));
        assert!(flags.neg_x && flags.pos_z);
        assert!(!flags.pos_x && !flags.neg_z);
        let offsets: Vec<_> = flags.affected_neighbors().collect();
        assert_eq!(offsets, vec![[-1, 0], [0, 1]]);
    }

    #[test]
    fn height_never_counts_as_boundary() {
        let flags = BoundaryFlags::from_local(UVec3::new(8, 255, 8));
        assert!(!flags.any());
    }

    #[test]
    fn opposite_corner_offsets() {
        let flags = BoundaryFlags::from_local(UVec3::new(15, 3, 0));
        let offsets: Vec<_> = flags.affected_neighbors().collect();
        assert_eq!(offsets, vec![[1, 0], [0, -1]]);
    }
}
