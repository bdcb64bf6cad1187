//! Minimal player state: where the streaming window should be centred.
//!
//! Camera, input and collision live outside this crate. The host writes
//! `velocity` from input and reads `position` back for the camera.

use glam::{IVec3, Vec3};

use crate::chunk::ChunkCoord;
use crate::core::{BlockId, BLOCK_STONE};

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vec3,
    /// Desired movement direction; normalized before use.
    pub velocity: Vec3,
    /// Blocks moved per tick.
    pub speed: f32,
    /// How far away, in blocks, the player can edit.
    pub reach: f32,
    pub selected_block: BlockId,
    /// Chunk observed on the previous `update`.
    last_chunk: Option<ChunkCoord>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 80.0, 0.0),
            velocity: Vec3::ZERO,
            speed: 0.25,
            reach: 6.0,
            selected_block: BLOCK_STONE,
            last_chunk: None,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block the player is standing in.
    pub fn block_position(&self) -> IVec3 {
        self.position.floor().as_ivec3()
    }

    /// Chunk containing the player.
    pub fn chunk_coord(&self) -> ChunkCoord {
        ChunkCoord::from_block(self.block_position())
    }

    /// Fixed-step simulation: advance along `velocity` at `speed`.
    pub fn tick(&mut self) {
        self.position += self.velocity.normalize_or_zero() * self.speed;
    }

    /// Per-frame update. Returns the new chunk when the player has crossed
    /// into a different chunk since the last call.
    pub fn update(&mut self) -> Option<ChunkCoord> {
        let current = self.chunk_coord();
        if self.last_chunk == Some(current) {
            return None;
        }
        self.last_chunk = Some(current);
        Some(current)
    }

    /// Whether the centre of block `pos` is within `reach`.
    pub fn can_reach(&self, pos: IVec3) -> bool {
        let center = pos.as_vec3() + Vec3::splat(0.5);
        center.distance(self.position) <= self.reach
    }
}
