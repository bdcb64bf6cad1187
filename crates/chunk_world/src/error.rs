//! Error types for world construction.

use thiserror::Error;

/// Errors reported while building a world or its generators.
///
/// Runtime reads and writes never fail: out-of-range reads return air and
/// writes into unloaded terrain are dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorldError {
    #[error("render distance {requested} exceeds the maximum of {max}")]
    RenderDistanceTooLarge { requested: u32, max: u32 },

    #[error("generator layers are {total} blocks thick but a chunk is only {height} tall")]
    LayersExceedHeight { total: usize, height: usize },
}
