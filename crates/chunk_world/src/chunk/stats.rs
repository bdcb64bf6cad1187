//! Statistics and configuration structs for chunk streaming.

use crate::error::WorldError;

/// Counters from a single [`recenter`](super::ChunkGrid::recenter) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecenterStats {
    /// Chunks that stayed loaded and moved to a new slot.
    pub moved: usize,
    /// Chunks generated for slots that came into view.
    pub created: usize,
    /// Chunks dropped because they left the window.
    pub evicted: usize,
    /// Moved chunks flagged for remesh because a neighbor appeared or vanished.
    pub marked_dirty: usize,
    /// Overlay edits written into newly created chunks.
    pub edits_replayed: usize,
}

impl RecenterStats {
    /// Check whether the window moved at all.
    pub fn any_change(&self) -> bool {
        self.moved + self.created + self.evicted > 0
    }
}

/// Debug information about grid state.
#[derive(Clone, Debug, Default)]
pub struct GridDebugInfo {
    /// Number of slots in the window.
    pub total_slots: usize,
    /// Slots currently holding a chunk.
    pub loaded_chunks: usize,
    /// Loaded chunks waiting for a remesh.
    pub dirty_chunks: usize,
    /// Edits held by the overlay.
    pub overlay_edits: usize,
    /// Heap memory held by block storage (bytes).
    pub block_memory_bytes: usize,
}

impl GridDebugInfo {
    /// Get block memory usage in megabytes.
    pub fn block_memory_mb(&self) -> f32 {
        self.block_memory_bytes as f32 / (1024.0 * 1024.0)
    }
}

/// Largest supported render distance (a 65 × 65 window).
pub const MAX_RENDER_DISTANCE: u32 = 32;

/// Render distance used when none is configured.
pub const DEFAULT_RENDER_DISTANCE: u32 = 4;

/// Configuration for world streaming.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Half-width of the square window in chunks. The window is
    /// `2 * render_distance + 1` chunks on a side.
    pub render_distance: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            render_distance: DEFAULT_RENDER_DISTANCE,
        }
    }
}

impl WorldConfig {
    pub fn validate(&self) -> Result<(), WorldError> {
        if self.render_distance > MAX_RENDER_DISTANCE {
            return Err(WorldError::RenderDistanceTooLarge {
                requested: self.render_distance,
                max: MAX_RENDER_DISTANCE,
            });
        }
        Ok(())
    }

    /// Side length of the slot window.
    pub fn chunks_size(&self) -> usize {
        self.render_distance as usize * 2 + 1
    }
}
