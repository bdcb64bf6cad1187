//! Chunk streaming for a player-centred voxel world.
//!
//! This module provides:
//! - [`ChunkCoord`]: Horizontal chunk-space coordinates
//! - [`Chunk`]: Flat block storage with a remesh flag
//! - [`ModifiedBlocks`]: Sorted overlay of player edits replayed on reload
//! - [`ChunkGrid`]: The sliding window of chunk slots around the player
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          ChunkGrid                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  first_chunk                  - Coordinate of slot (0, 0)       │
//! │  Vec<Option<Chunk>>           - chunks_size² owned slots        │
//! │  ModifiedBlocks               - Recorded edits, sorted by pos   │
//! │  Box<dyn TerrainGenerator>    - Fills newly created chunks      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Slot Lifecycle
//!
//! ```text
//!              generate + replay edits
//! ┌─────────┐ ───────────────────────▶ ┌──────────┐
//! │  Empty  │                          │  Loaded  │ ──┐ moved in window
//! └─────────┘ ◀─────────────────────── └──────────┘ ◀─┘
//!              scrolled out of window
//! ```
//!
//! # Usage
//!
//! ```
//! use chunk_world::chunk::{ChunkCoord, ChunkGrid, WorldConfig};
//! use chunk_world::generator::FlatGenerator;
//! use glam::IVec3;
//!
//! let config = WorldConfig { render_distance: 1 };
//! let mut grid = ChunkGrid::new(&config, Box::new(FlatGenerator::default())).unwrap();
//!
//! // Edit a block and record it so it survives the chunk unloading
//! let pos = IVec3::new(5, 70, 5);
//! grid.set_block(pos, 7);
//! grid.record_modification(pos, 7);
//!
//! grid.recenter(ChunkCoord::new(50, 50));
//! grid.recenter(ChunkCoord::ZERO);
//! assert_eq!(grid.get_block(pos), 7);
//! ```

pub mod coord;
pub mod state;
pub mod chunk;
pub mod overlay;
pub mod stats;
pub mod grid;

// Re-export primary types
pub use coord::ChunkCoord;
pub use state::BoundaryFlags;
pub use chunk::Chunk;
pub use overlay::{BlockEdit, ModifiedBlocks};
pub use stats::{
    GridDebugInfo, RecenterStats, WorldConfig, DEFAULT_RENDER_DISTANCE, MAX_RENDER_DISTANCE,
};
pub use grid::ChunkGrid;
