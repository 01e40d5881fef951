use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("time step must be positive, got {0}")]
    NonPositiveStep(f64),

    #[error("step resolution must be at least one step per second")]
    ZeroResolution,

    #[error("queue capacity must be at least 1")]
    ZeroCapacity,

    #[error("failed to spawn generator thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("generator stopped after {got} of {expected} points")]
    Exhausted { expected: usize, got: usize },

    #[error("empty canvas {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
