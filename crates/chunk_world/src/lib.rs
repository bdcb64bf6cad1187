//! Player-centred chunk streaming for voxel worlds.
//!
//! A square window of chunks follows the player. Chunks that scroll into
//! view are generated on the spot, chunks that scroll out are dropped, and
//! player edits recorded in a sparse overlay are written back whenever
//! their chunk is generated again.
//!
//! # Example
//!
//! ```
//! use chunk_world::{World, WorldConfig, ChunkCoord};
//! use chunk_world::generator::FlatGenerator;
//! use glam::IVec3;
//!
//! let config = WorldConfig { render_distance: 2 };
//! let mut world = World::with_config(&config, Box::new(FlatGenerator::default())).unwrap();
//!
//! world.recenter(ChunkCoord::new(1, 0));
//! assert_eq!(world.grid().loaded_count(), 25);
//! assert_eq!(world.get_block(IVec3::new(40, 0, 0)), chunk_world::BLOCK_STONE);
//! ```

pub mod core;
pub mod error;
pub mod chunk;
pub mod generator;
pub mod player;
pub mod world;

// Re-export primary types
pub use crate::core::{
    BlockId,
    // Constants
    BLOCK_AIR, BLOCK_STONE, BLOCK_DIRT, BLOCK_GRASS, BLOCK_SAND, BLOCK_WATER,
    CHUNK_WIDTH, CHUNK_HEIGHT, CHUNK_AREA, CHUNK_VOLUME,
};
pub use crate::chunk::{Chunk, ChunkCoord, ChunkGrid, ModifiedBlocks, RecenterStats, WorldConfig};
pub use crate::error::WorldError;
pub use crate::generator::{FlatGenerator, HillsGenerator, TerrainGenerator};
pub use crate::player::Player;
pub use crate::world::{ChunkRenderer, World};
