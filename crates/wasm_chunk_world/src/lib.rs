//! WASM bindings for chunk streaming.
//!
//! Exposes a [`WasmWorld`] that a JavaScript render loop drives once per
//! frame: feed player movement in, read dirty chunks out, upload their
//! blocks, then mark them clean.

use glam::{IVec3, Vec3};
use js_sys::Uint32Array;
use wasm_bindgen::prelude::*;

use chunk_world::{
    BlockId, ChunkCoord, ChunkRenderer, Chunk, HillsGenerator, World, WorldConfig,
};

/// Install the panic hook and route `log` output to the browser console.
///
/// Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[wasm_chunk_world] logger already initialized".into());
    }
}

/// Collects the coordinates of dirty chunks as flat `x, z` pairs.
#[derive(Default)]
struct DirtyCollector {
    coords: Vec<i32>,
}

impl ChunkRenderer for DirtyCollector {
    fn render_chunk(&mut self, chunk: &mut Chunk) {
        if chunk.is_dirty() {
            let coord = chunk.coord();
            self.coords.push(coord.x);
            self.coords.push(coord.z);
        }
    }
}

/// Streaming world handle owned by JavaScript.
#[wasm_bindgen]
pub struct WasmWorld {
    world: World,
}

#[wasm_bindgen]
impl WasmWorld {
    /// Create a world with rolling terrain.
    ///
    /// # Example (JavaScript)
    /// ```javascript
    /// const world = new WasmWorld(4, 1234);
    /// world.set_player_position(8, 90, 8);
    /// world.update();
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(render_distance: u32, seed: u32) -> Result<WasmWorld, JsValue> {
        let config = WorldConfig { render_distance };
        let generator = HillsGenerator {
            seed,
            ..Default::default()
        };
        World::with_config(&config, Box::new(generator))
            .map(|world| WasmWorld { world })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Fixed-step simulation.
    pub fn tick(&mut self) {
        self.world.tick();
    }

    /// Per-frame update. Returns true when the chunk window moved.
    pub fn update(&mut self) -> bool {
        self.world.update().any_change()
    }

    pub fn set_player_velocity(&mut self, x: f32, y: f32, z: f32) {
        self.world.player_mut().velocity = Vec3::new(x, y, z);
    }

    pub fn set_player_position(&mut self, x: f32, y: f32, z: f32) {
        self.world.player_mut().position = Vec3::new(x, y, z);
    }

    /// Player position as `[x, y, z]`.
    pub fn player_position(&self) -> Vec<f32> {
        self.world.player().position.to_array().to_vec()
    }

    /// Move the window explicitly. Returns the number of chunks created.
    pub fn recenter(&mut self, chunk_x: i32, chunk_z: i32) -> usize {
        self.world.recenter(ChunkCoord::new(chunk_x, chunk_z)).created
    }

    pub fn get_block(&self, x: i32, y: i32, z: i32) -> BlockId {
        self.world.get_block(IVec3::new(x, y, z))
    }

    /// Write a block without recording it.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, block: BlockId) {
        self.world.set_block(IVec3::new(x, y, z), block);
    }

    /// Record a block so it is replayed when its chunk reloads.
    pub fn record_modification(&mut self, x: i32, y: i32, z: i32, block: BlockId) {
        self.world.record_modification(IVec3::new(x, y, z), block);
    }

    /// Place the player's selected block (or `block`, if given) at a
    /// position within reach: writes it live and records it.
    ///
    /// Returns false when the position is out of reach.
    pub fn place_block(&mut self, x: i32, y: i32, z: i32, block: Option<BlockId>) -> bool {
        let pos = IVec3::new(x, y, z);
        let player = self.world.player();
        if !player.can_reach(pos) {
            return false;
        }
        let block = block.unwrap_or(player.selected_block);
        self.world.set_block(pos, block);
        self.world.record_modification(pos, block);
        true
    }

    /// Coordinates of chunks needing a remesh, as flat `x, z` pairs.
    pub fn dirty_chunks(&mut self) -> Vec<i32> {
        let mut collector = DirtyCollector::default();
        self.world.render(&mut collector);
        collector.coords
    }

    /// Copy of a loaded chunk's blocks, laid out `(y * 16 + z) * 16 + x`.
    pub fn chunk_blocks(&self, chunk_x: i32, chunk_z: i32) -> Option<Uint32Array> {
        self.world
            .grid()
            .chunk(ChunkCoord::new(chunk_x, chunk_z))
            .map(|chunk| Uint32Array::from(chunk.blocks()))
    }

    /// Clear a chunk's dirty flag after its mesh was rebuilt.
    pub fn mark_chunk_clean(&mut self, chunk_x: i32, chunk_z: i32) {
        if let Some(chunk) = self.world.grid_mut().chunk_mut(ChunkCoord::new(chunk_x, chunk_z)) {
            chunk.mark_clean();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn loaded_chunk_count(&self) -> usize {
        self.world.grid().loaded_count()
    }

    #[wasm_bindgen(getter)]
    pub fn render_distance(&self) -> u32 {
        self.world.grid().render_distance()
    }
}

/// Get the version of the chunk streaming library.
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
