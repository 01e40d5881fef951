//! Explicit Euler integration of the inverted Duffing oscillator, with a
//! threaded generator, a sampler that bounds it, and a phase-plane renderer.

pub mod error;
pub mod integrate;
pub mod duffing;
pub mod generator;
pub mod sampler;
pub mod pen;
pub mod plot;
pub mod render;

pub use error::{Error, Result};
pub use duffing::{Parameters, Point, Trajectory, F_HIGH, F_LOW, QUEUE_CAPACITY};
pub use generator::Producer;
pub use plot::Figure;
