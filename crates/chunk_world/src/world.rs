//! World - owns the chunk grid and the player and drives them each frame.

use glam::IVec3;
use log::info;

use crate::chunk::{Chunk, ChunkCoord, ChunkGrid, RecenterStats, WorldConfig, DEFAULT_RENDER_DISTANCE};
use crate::core::BlockId;
use crate::error::WorldError;
use crate::generator::TerrainGenerator;
use crate::player::Player;

/// Render hook invoked once per loaded chunk.
///
/// Implementations rebuild the mesh when [`Chunk::is_dirty`] is set and
/// then call [`Chunk::mark_clean`]. Chunks may be dropped between frames,
/// so nothing borrowed from a chunk may outlive the call.
pub trait ChunkRenderer {
    fn render_chunk(&mut self, chunk: &mut Chunk);
}

/// A streaming world: one chunk grid plus the player it follows.
///
/// Fields drop in declaration order, so chunks are released before the
/// player.
pub struct World {
    grid: ChunkGrid,
    player: Player,
}

impl World {
    /// Create a world with the default render distance, centred on the
    /// origin.
    pub fn init(generator: Box<dyn TerrainGenerator>) -> Self {
        let world = Self {
            grid: ChunkGrid::with_render_distance(DEFAULT_RENDER_DISTANCE, generator),
            player: Player::new(),
        };
        info!(
            "world created with render distance {}",
            world.grid.render_distance()
        );
        world
    }

    /// Create a world with a custom configuration.
    pub fn with_config(
        config: &WorldConfig,
        generator: Box<dyn TerrainGenerator>,
    ) -> Result<Self, WorldError> {
        let grid = ChunkGrid::new(config, generator)?;
        info!("world created with render distance {}", grid.render_distance());
        Ok(Self {
            grid,
            player: Player::new(),
        })
    }

    pub fn grid(&self) -> &ChunkGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ChunkGrid {
        &mut self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Fixed-step simulation. Never moves the chunk window.
    pub fn tick(&mut self) {
        self.player.tick();
    }

    /// Per-frame update: recentres the grid when the player has entered a
    /// new chunk.
    pub fn update(&mut self) -> RecenterStats {
        match self.player.update() {
            Some(chunk) => self.grid.recenter(chunk),
            None => RecenterStats::default(),
        }
    }

    /// Hand every loaded chunk to the renderer.
    pub fn render<R: ChunkRenderer>(&mut self, renderer: &mut R) {
        for chunk in self.grid.chunks_mut() {
            renderer.render_chunk(chunk);
        }
    }

    /// See [`ChunkGrid::recenter`].
    pub fn recenter(&mut self, center: ChunkCoord) -> RecenterStats {
        self.grid.recenter(center)
    }

    /// See [`ChunkGrid::get_block`].
    pub fn get_block(&self, world_pos: IVec3) -> BlockId {
        self.grid.get_block(world_pos)
    }

    /// See [`ChunkGrid::set_block`]. Does not record the edit.
    pub fn set_block(&mut self, world_pos: IVec3, block: BlockId) {
        self.grid.set_block(world_pos, block);
    }

    /// See [`ChunkGrid::record_modification`].
    pub fn record_modification(&mut self, world_pos: IVec3, block: BlockId) -> Option<BlockId> {
        self.grid.record_modification(world_pos, block)
    }
}
