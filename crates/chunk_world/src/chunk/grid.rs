//! ChunkGrid - the square window of chunk slots that follows the player.

use glam::IVec3;
use log::{debug, trace};

use crate::core::{y_in_bounds, BlockId, BLOCK_AIR};
use crate::error::WorldError;
use crate::generator::TerrainGenerator;
use super::chunk::Chunk;
use super::coord::ChunkCoord;
use super::overlay::ModifiedBlocks;
use super::state::BoundaryFlags;
use super::stats::{GridDebugInfo, RecenterStats, WorldConfig};

/// Window origin (slot (0, 0)) for a window centred on `center`.
fn window_origin(center: ChunkCoord, render_distance: u32) -> ChunkCoord {
    let r = render_distance as i32;
    center.offset(-r, -r)
}

/// Pull `center` inward so the whole window stays within addressable chunks.
fn clamp_center(center: ChunkCoord, render_distance: u32) -> ChunkCoord {
    let r = render_distance as i32;
    let (lo, hi) = (ChunkCoord::MIN + r, ChunkCoord::MAX - r);
    ChunkCoord::new(center.x.clamp(lo, hi), center.z.clamp(lo, hi))
}

/// Slot index of `coord` in a `size × size` window starting at `first`,
/// or `None` if it lies outside. Slots are stored row-major on z.
fn slot_index(first: ChunkCoord, size: usize, coord: ChunkCoord) -> Option<usize> {
    let dx = coord.x as i64 - first.x as i64;
    let dz = coord.z as i64 - first.z as i64;
    let size = size as i64;
    if (0..size).contains(&dx) && (0..size).contains(&dz) {
        Some((dz * size + dx) as usize)
    } else {
        None
    }
}

fn empty_slots(count: usize) -> Vec<Option<Chunk>> {
    (0..count).map(|_| None).collect()
}

/// Streaming manager for a `chunks_size × chunks_size` window of chunks.
///
/// Handles:
/// - Mapping world positions onto slots via a sliding origin
/// - Recentering: moving chunks that stay in view, dropping the rest
/// - Generating new chunks and replaying recorded edits into them
/// - Dirty marking so the renderer knows what to remesh
///
/// Every loaded slot satisfies `chunk.coord() == first_chunk + slot`.
pub struct ChunkGrid {
    render_distance: u32,
    chunks_size: usize,
    /// Chunk coordinate of slot (0, 0).
    first_chunk: ChunkCoord,
    slots: Vec<Option<Chunk>>,
    overlay: ModifiedBlocks,
    generator: Box<dyn TerrainGenerator>,
}

impl ChunkGrid {
    /// Create a grid centred on chunk (0, 0) and load the whole window.
    pub fn new(
        config: &WorldConfig,
        generator: Box<dyn TerrainGenerator>,
    ) -> Result<Self, WorldError> {
        config.validate()?;
        Ok(Self::with_render_distance(config.render_distance, generator))
    }

    pub(crate) fn with_render_distance(
        render_distance: u32,
        generator: Box<dyn TerrainGenerator>,
    ) -> Self {
        let chunks_size = render_distance as usize * 2 + 1;
        let mut grid = Self {
            render_distance,
            chunks_size,
            first_chunk: window_origin(ChunkCoord::ZERO, render_distance),
            slots: empty_slots(chunks_size * chunks_size),
            overlay: ModifiedBlocks::new(),
            generator,
        };

        let mut stats = RecenterStats::default();
        grid.load_empty_slots(&mut stats);
        debug!(
            "loaded initial {}x{} chunk window around {:?}",
            chunks_size, chunks_size, ChunkCoord::ZERO
        );
        grid
    }

    // ========================================================================
    // Window
    // ========================================================================

    /// Half-width of the window in chunks.
    pub fn render_distance(&self) -> u32 {
        self.render_distance
    }

    /// Side length of the window in chunks.
    pub fn chunks_size(&self) -> usize {
        self.chunks_size
    }

    /// Chunk coordinate held by slot (0, 0).
    pub fn first_chunk(&self) -> ChunkCoord {
        self.first_chunk
    }

    /// Chunk coordinate at the centre of the window.
    pub fn center(&self) -> ChunkCoord {
        let r = self.render_distance as i32;
        self.first_chunk.offset(r, r)
    }

    /// Check if `coord` lies inside the current window.
    pub fn contains(&self, coord: ChunkCoord) -> bool {
        slot_index(self.first_chunk, self.chunks_size, coord).is_some()
    }

    /// Move the window so it is centred on `center`.
    ///
    /// Chunks still in view are moved to their new slot. Chunks that left
    /// the window are dropped. Every slot left empty is generated and has
    /// recorded edits replayed before it becomes visible. Calling this again
    /// with the same centre does nothing. A centre closer than the render
    /// distance to the edge of the block coordinate range is pulled inward.
    pub fn recenter(&mut self, center: ChunkCoord) -> RecenterStats {
        let center = clamp_center(center, self.render_distance);
        let new_first = window_origin(center, self.render_distance);
        if new_first == self.first_chunk {
            return RecenterStats::default();
        }

        let size = self.chunks_size;
        let old_first = std::mem::replace(&mut self.first_chunk, new_first);
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(size * size));
        let mut stats = RecenterStats::default();

        for mut chunk in old_slots.into_iter().flatten() {
            let coord = chunk.coord();
            let Some(idx) = slot_index(new_first, size, coord) else {
                trace!("evicting chunk {:?}", coord);
                stats.evicted += 1;
                continue;
            };

            // A neighbor that just loaded or just unloaded changes which
            // faces along that seam are visible.
            let neighborhood_changed = coord.neighbors().iter().any(|&n| {
                slot_index(old_first, size, n).is_some() != slot_index(new_first, size, n).is_some()
            });
            if neighborhood_changed {
                chunk.mark_dirty();
                stats.marked_dirty += 1;
            }

            self.slots[idx] = Some(chunk);
            stats.moved += 1;
        }

        self.load_empty_slots(&mut stats);

        debug!(
            "recentered on {:?}: {} moved, {} created, {} evicted, {} edits replayed",
            center, stats.moved, stats.created, stats.evicted, stats.edits_replayed
        );
        stats
    }

    /// Generate every empty slot and replay overlay edits into it.
    fn load_empty_slots(&mut self, stats: &mut RecenterStats) {
        let first = self.first_chunk;
        let size = self.chunks_size;

        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }

            let coord = first.offset((idx % size) as i32, (idx / size) as i32);
            let mut chunk = Chunk::new(coord);
            self.generator.generate(&mut chunk);

            for edit in self.overlay.entries_for(coord) {
                chunk.set_block(ChunkCoord::block_to_local(edit.position), edit.block);
                stats.edits_replayed += 1;
            }

            chunk.mark_dirty();
            trace!("created chunk {:?}", coord);
            *slot = Some(chunk);
            stats.created += 1;
        }
    }

    // ========================================================================
    // Chunk Access
    // ========================================================================

    /// Get the loaded chunk at `coord`, if it is inside the window.
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        slot_index(self.first_chunk, self.chunks_size, coord)
            .and_then(|idx| self.slots[idx].as_ref())
    }

    /// Get a mutable reference to the loaded chunk at `coord`.
    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        slot_index(self.first_chunk, self.chunks_size, coord)
            .and_then(|idx| self.slots[idx].as_mut())
    }

    /// Get the chunk owning a world block position.
    ///
    /// Only the horizontal axes are checked against the window.
    pub fn chunk_at(&self, world_pos: IVec3) -> Option<&Chunk> {
        self.chunk(ChunkCoord::from_block(world_pos))
    }

    /// Mutable variant of [`chunk_at`](Self::chunk_at).
    pub fn chunk_at_mut(&mut self, world_pos: IVec3) -> Option<&mut Chunk> {
        self.chunk_mut(ChunkCoord::from_block(world_pos))
    }

    /// Number of loaded chunks.
    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate over loaded chunks in slot order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.slots.iter().flatten()
    }

    /// Iterate mutably over loaded chunks in slot order.
    pub fn chunks_mut(&mut self) -> impl Iterator<Item = &mut Chunk> {
        self.slots.iter_mut().flatten()
    }

    // ========================================================================
    // Block Access
    // ========================================================================

    /// Get the block at a world position.
    ///
    /// Returns [`BLOCK_AIR`] above or below the world and outside the window.
    pub fn get_block(&self, world_pos: IVec3) -> BlockId {
        if !y_in_bounds(world_pos.y) {
            return BLOCK_AIR;
        }
        self.chunk_at(world_pos)
            .map(|chunk| chunk.get_block(ChunkCoord::block_to_local(world_pos)))
            .unwrap_or(BLOCK_AIR)
    }

    /// Write a block into the loaded chunk at `world_pos`.
    ///
    /// Writes outside the window or the world height are dropped. The edit is
    /// not recorded: call [`record_modification`](Self::record_modification)
    /// as well for it to survive the chunk being unloaded.
    pub fn set_block(&mut self, world_pos: IVec3, block: BlockId) {
        if !y_in_bounds(world_pos.y) {
            return;
        }
        let coord = ChunkCoord::from_block(world_pos);
        let local = ChunkCoord::block_to_local(world_pos);
        let Some(chunk) = self.chunk_mut(coord) else {
            return;
        };
        chunk.set_block(local, block);

        // Faces on the far side of the seam may have changed visibility
        for [dx, dz] in BoundaryFlags::from_local(local).affected_neighbors() {
            if let Some(neighbor) = self.chunk_mut(coord.offset(dx, dz)) {
                neighbor.mark_dirty();
            }
        }
    }

    /// Record an edit so it is replayed whenever its chunk is regenerated.
    ///
    /// Returns the previously recorded block at that position, if any.
    pub fn record_modification(&mut self, world_pos: IVec3, block: BlockId) -> Option<BlockId> {
        self.overlay.upsert(world_pos, block)
    }

    /// Recorded edits.
    pub fn overlay(&self) -> &ModifiedBlocks {
        &self.overlay
    }

    // ========================================================================
    // Debug / Inspection
    // ========================================================================

    /// Get summary information about the grid.
    pub fn debug_info(&self) -> GridDebugInfo {
        let mut info = GridDebugInfo {
            total_slots: self.slots.len(),
            overlay_edits: self.overlay.len(),
            ..Default::default()
        };

        for chunk in self.chunks() {
            info.loaded_chunks += 1;
            if chunk.is_dirty() {
                info.dirty_chunks += 1;
            }
            info.block_memory_bytes += chunk.memory_bytes();
        }
        info
    }
}

impl Drop for ChunkGrid {
    fn drop(&mut self) {
        debug!("releasing {} chunks", self.loaded_count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    use glam::UVec3;

    use crate::core::BLOCK_STONE;

    /// Writes a stone floor plus a block at local (1, 1, 1) whose value
    /// encodes the chunk coordinate, and counts how often it ran.
    struct MarkerGenerator {
        calls: Rc<Cell<usize>>,
    }

    fn marker(coord: ChunkCoord) -> BlockId {
        (coord.x + 500).wrapping_mul(1000).wrapping_add(coord.z + 500) as BlockId
    }

    impl TerrainGenerator for MarkerGenerator {
        fn generate(&self, chunk: &mut Chunk) {
            self.calls.set(self.calls.get() + 1);
            for z in 0..Chunk::WIDTH {
                for x in 0..Chunk::WIDTH {
                    chunk.set_block(UVec3::new(x, 0, z), BLOCK_STONE);
                }
            }
            chunk.set_block(UVec3::new(1, 1, 1), marker(chunk.coord()));
        }
    }

    fn grid(render_distance: u32) -> (ChunkGrid, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let generator = MarkerGenerator { calls: Rc::clone(&calls) };
        let config = WorldConfig { render_distance };
        let grid = ChunkGrid::new(&config, Box::new(generator)).unwrap();
        (grid, calls)
    }

    fn mark_all_clean(grid: &mut ChunkGrid) {
        for chunk in grid.chunks_mut() {
            chunk.mark_clean();
        }
    }

    fn marker_at(grid: &ChunkGrid, coord: ChunkCoord) -> BlockId {
        grid.get_block(coord.origin() + IVec3::new(1, 1, 1))
    }

    fn assert_window_covered(grid: &ChunkGrid, center: ChunkCoord) {
        let r = grid.render_distance() as i32;
        for dz in -r..=r {
            for dx in -r..=r {
                let coord = center.offset(dx, dz);
                let chunk = grid.chunk(coord).expect("chunk inside window must be loaded");
                assert_eq!(chunk.coord(), coord);
            }
        }
        assert_eq!(grid.loaded_count(), grid.chunks_size() * grid.chunks_size());
    }

    #[test]
    fn rejects_oversized_render_distance() {
        let config = WorldConfig { render_distance: 100 };
        let generator = MarkerGenerator { calls: Rc::new(Cell::new(0)) };
        assert!(ChunkGrid::new(&config, Box::new(generator)).is_err());
    }

    #[test]
    fn initial_load_covers_window() {
        let (grid, calls) = grid(1);

        assert_eq!(grid.chunks_size(), 3);
        assert_eq!(grid.first_chunk(), ChunkCoord::new(-1, -1));
        assert_eq!(grid.center(), ChunkCoord::ZERO);
        assert_eq!(calls.get(), 9);
        assert_window_covered(&grid, ChunkCoord::ZERO);
        assert!(grid.chunks().all(|c| c.is_dirty()));

        for x in -1..=1 {
            for z in -1..=1 {
                let coord = ChunkCoord::new(x, z);
                assert_eq!(marker_at(&grid, coord), marker(coord));
            }
        }
    }

    #[test]
    fn zero_render_distance_loads_single_chunk() {
        let (grid, calls) = grid(0);
        assert_eq!(grid.loaded_count(), 1);
        assert_eq!(calls.get(), 1);
        assert!(grid.chunk(ChunkCoord::ZERO).is_some());
        assert!(grid.chunk(ChunkCoord::new(1, 0)).is_none());
    }

    #[test]
    fn reads_outside_window_or_height_are_air() {
        let (grid, _) = grid(1);

        assert!(grid.chunk_at(IVec3::new(48, 0, 0)).is_none());
        assert_eq!(grid.get_block(IVec3::new(48, 0, 0)), BLOCK_AIR);
        assert_eq!(grid.get_block(IVec3::new(0, -1, 0)), BLOCK_AIR);
        assert_eq!(grid.get_block(IVec3::new(0, 256, 0)), BLOCK_AIR);
        assert_eq!(grid.get_block(IVec3::new(-16, 0, -16)), BLOCK_STONE);

        // Height is not part of the window test
        assert!(grid.chunk_at(IVec3::new(0, 9000, 0)).is_some());
    }

    #[test]
    fn recenter_same_center_is_noop() {
        let (mut grid, calls) = grid(1);
        mark_all_clean(&mut grid);

        let stats = grid.recenter(ChunkCoord::ZERO);

        assert_eq!(stats, RecenterStats::default());
        assert_eq!(calls.get(), 9);
        assert!(grid.chunks().all(|c| !c.is_dirty()));

        grid.recenter(ChunkCoord::new(3, 3));
        let calls_after_move = calls.get();
        let stats = grid.recenter(ChunkCoord::new(3, 3));
        assert!(!stats.any_change());
        assert_eq!(calls.get(), calls_after_move);
    }

    #[test]
    fn shift_by_one_column() {
        let (mut grid, calls) = grid(1);
        mark_all_clean(&mut grid);

        let stats = grid.recenter(ChunkCoord::new(1, 0));

        assert_eq!(stats.moved, 6);
        assert_eq!(stats.created, 3);
        assert_eq!(stats.evicted, 3);
        assert_eq!(calls.get(), 12);
        assert_eq!(grid.first_chunk(), ChunkCoord::new(0, -1));
        assert_window_covered(&grid, ChunkCoord::new(1, 0));

        for z in -1..=1 {
            // Column x = -1 scrolled out
            assert!(grid.chunk(ChunkCoord::new(-1, z)).is_none());

            // Column x = 2 is new, generated, and needs its first mesh
            let created = ChunkCoord::new(2, z);
            assert_eq!(marker_at(&grid, created), marker(created));
            assert!(grid.chunk(created).unwrap().is_dirty());

            // Column x = 0 lost its -X neighbor; x = 1 gained a +X neighbor
            assert!(grid.chunk(ChunkCoord::new(0, z)).unwrap().is_dirty());
            assert!(grid.chunk(ChunkCoord::new(1, z)).unwrap().is_dirty());
        }
    }

    #[test]
    fn dirty_only_where_neighborhood_changes() {
        let (mut grid, _) = grid(2);
        mark_all_clean(&mut grid);

        let stats = grid.recenter(ChunkCoord::new(1, 0));

        assert_eq!(stats.moved, 20);
        assert_eq!(stats.created, 5);
        assert_eq!(stats.evicted, 5);
        assert_eq!(stats.marked_dirty, 10);

        for z in -2..=2 {
            assert!(grid.chunk(ChunkCoord::new(-1, z)).unwrap().is_dirty());
            assert!(!grid.chunk(ChunkCoord::new(0, z)).unwrap().is_dirty());
            assert!(!grid.chunk(ChunkCoord::new(1, z)).unwrap().is_dirty());
            assert!(grid.chunk(ChunkCoord::new(2, z)).unwrap().is_dirty());
            assert!(grid.chunk(ChunkCoord::new(3, z)).unwrap().is_dirty());
        }
    }

    #[test]
    fn moved_chunks_keep_their_contents() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(20, 40, 3); // chunk (1, 0)
        grid.set_block(pos, 77);

        grid.recenter(ChunkCoord::new(1, 0));

        // Unrecorded, but the chunk was moved rather than regenerated
        assert_eq!(grid.get_block(pos), 77);
    }

    #[test]
    fn window_covered_after_arbitrary_moves() {
        let (mut grid, _) = grid(2);
        let centers = [
            ChunkCoord::new(1, 1),
            ChunkCoord::new(-3, 2),
            ChunkCoord::new(-3, 2),
            ChunkCoord::new(40, -17),
            ChunkCoord::new(41, -15),
            ChunkCoord::new(0, 0),
        ];

        for center in centers {
            grid.recenter(center);
            assert_eq!(grid.center(), center);
            assert_window_covered(&grid, center);
            assert!(grid.loaded_count() <= 25);
        }
    }

    #[test]
    fn far_jump_replaces_every_chunk() {
        let (mut grid, _) = grid(1);

        let stats = grid.recenter(ChunkCoord::new(100, 100));

        assert_eq!(stats.evicted, 9);
        assert_eq!(stats.created, 9);
        assert_eq!(stats.moved, 0);
        for x in -1..=1 {
            for z in -1..=1 {
                assert!(grid.chunk(ChunkCoord::new(x, z)).is_none());
            }
        }
    }

    #[test]
    fn recorded_edit_survives_reload() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(5, 3, 5);

        grid.set_block(pos, 7);
        grid.record_modification(pos, 7);

        grid.recenter(ChunkCoord::new(100, 100));
        assert!(grid.chunk_at(pos).is_none());
        assert_eq!(grid.get_block(pos), BLOCK_AIR);

        let stats = grid.recenter(ChunkCoord::ZERO);
        assert_eq!(stats.edits_replayed, 1);
        assert_eq!(grid.get_block(pos), 7);
    }

    #[test]
    fn recorded_edit_at_max_block_coordinate_survives_reload() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(i32::MAX, 10, 0);
        let owner = ChunkCoord::from_block(pos);

        grid.record_modification(pos, 9);
        let stats = grid.recenter(owner);

        // The window cannot extend past the last chunk, so it stops one short.
        assert_eq!(grid.center(), ChunkCoord::new(ChunkCoord::MAX - 1, 0));
        assert!(grid.contains(owner));
        assert!(!grid.contains(owner.offset(1, 0)));
        assert_eq!(stats.edits_replayed, 1);
        assert_eq!(grid.get_block(pos), 9);
        assert_eq!(marker_at(&grid, owner), marker(owner));

        // Writes and reads on the outermost seam stay in range.
        grid.set_block(pos + IVec3::new(0, 1, 0), 3);
        assert_eq!(grid.get_block(pos + IVec3::new(0, 1, 0)), 3);
    }

    #[test]
    fn recenter_clamps_at_min_block_coordinate() {
        let (mut grid, _) = grid(2);
        let pos = IVec3::new(i32::MIN, 0, i32::MIN);
        let owner = ChunkCoord::from_block(pos);

        grid.record_modification(pos, 6);
        grid.recenter(owner);

        let edge = ChunkCoord::MIN + 2;
        assert_eq!(grid.center(), ChunkCoord::new(edge, edge));
        assert_window_covered(&grid, grid.center());
        assert_eq!(grid.get_block(pos), 6);

        // Requests further out land on the same clamped window.
        assert_eq!(grid.recenter(owner.offset(-1, -1)), RecenterStats::default());
    }

    #[test]
    fn latest_recorded_value_wins() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(-1, 0, -1); // chunk (-1, -1), replaces the floor

        grid.record_modification(pos, 4);
        grid.record_modification(pos, BLOCK_AIR);
        assert_eq!(grid.overlay().len(), 1);

        grid.recenter(ChunkCoord::new(50, 0));
        grid.recenter(ChunkCoord::ZERO);

        assert_eq!(grid.get_block(pos), BLOCK_AIR);
        assert_eq!(grid.get_block(IVec3::new(-2, 0, -1)), BLOCK_STONE);
    }

    #[test]
    fn unrecorded_edit_is_lost_on_reload() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(5, 3, 5);

        grid.set_block(pos, 7);
        assert_eq!(grid.get_block(pos), 7);

        grid.recenter(ChunkCoord::new(100, 100));
        grid.recenter(ChunkCoord::ZERO);

        assert_eq!(grid.get_block(pos), BLOCK_AIR);
    }

    #[test]
    fn recorded_edit_outside_window_applies_when_loaded() {
        let (mut grid, _) = grid(1);
        let pos = IVec3::new(40, 10, 8); // chunk (2, 0), not loaded yet

        grid.set_block(pos, 9);
        assert_eq!(grid.get_block(pos), BLOCK_AIR);
        grid.record_modification(pos, 9);

        grid.recenter(ChunkCoord::new(1, 0));
        assert_eq!(grid.get_block(pos), 9);
    }

    #[test]
    fn writes_to_absent_chunks_are_dropped() {
        let (mut grid, _) = grid(1);

        grid.set_block(IVec3::new(1000, 10, 1000), 3);
        grid.set_block(IVec3::new(0, -5, 0), 3);
        grid.set_block(IVec3::new(0, 256, 0), 3);

        assert_eq!(grid.get_block(IVec3::new(1000, 10, 1000)), BLOCK_AIR);
        assert!(grid.overlay().is_empty());
    }

    #[test]
    fn boundary_edit_marks_neighbor_dirty() {
        let (mut grid, _) = grid(1);
        mark_all_clean(&mut grid);

        grid.set_block(IVec3::new(15, 10, 3), BLOCK_STONE);

        assert!(grid.chunk(ChunkCoord::new(0, 0)).unwrap().is_dirty());
        assert!(grid.chunk(ChunkCoord::new(1, 0)).unwrap().is_dirty());
        assert!(!grid.chunk(ChunkCoord::new(-1, 0)).unwrap().is_dirty());
        assert!(!grid.chunk(ChunkCoord::new(0, 1)).unwrap().is_dirty());
    }

    #[test]
    fn interior_edit_marks_only_owner() {
        let (mut grid, _) = grid(1);
        mark_all_clean(&mut grid);

        grid.set_block(IVec3::new(8, 10, 8), BLOCK_STONE);

        assert_eq!(grid.debug_info().dirty_chunks, 1);
    }

    #[test]
    fn debug_info() {
        let (mut grid, _) = grid(1);
        grid.record_modification(IVec3::new(1, 1, 1), 2);

        let info = grid.debug_info();

        assert_eq!(info.total_slots, 9);
        assert_eq!(info.loaded_chunks, 9);
        assert_eq!(info.dirty_chunks, 9);
        assert_eq!(info.overlay_edits, 1);
        assert_eq!(info.block_memory_bytes, 9 * crate::core::CHUNK_VOLUME * 4);
    }
}
