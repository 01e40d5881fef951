//! The inverted Duffing oscillator
//!
//! ```text
//! x' = y
//! y' = F cos(t) - 0.5 y + x - x³
//! ```
//!
//! integrated with explicit Euler steps.

use nalgebra::Vector2;
use crate::integrate::{Euler, VectorField};
use crate::error::{Error, Result};

/// forcing amplitude of the lower comparison run
pub const F_LOW: f64 = 0.24;

/// forcing amplitude of the upper comparison run
pub const F_HIGH: f64 = 0.35;

/// how far a generator may run ahead of its consumer
pub const QUEUE_CAPACITY: usize = 400;

/// coefficient of the velocity term
pub const DAMPING: f64 = 0.5;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InvertedDuffing {
    pub forcing: f64
}
impl InvertedDuffing {
    pub fn new(forcing: f64) -> InvertedDuffing {
        InvertedDuffing { forcing }
    }
}
impl VectorField<Vector2<f64>> for InvertedDuffing {
    #[inline]
    fn eval(&self, t: f64, s: Vector2<f64>) -> Vector2<f64> {
        Vector2::new(
            s.y,
            self.forcing * t.cos() - DAMPING * s.y + s.x - s.x.powi(3)
        )
    }
}

/// A point in the phase plane.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,

    /// set when the integration diverged to a non-finite value
    pub blow_up: bool
}
impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point {
            x,
            y,
            blow_up: !(x.is_finite() && y.is_finite())
        }
    }
}
impl From<Vector2<f64>> for Point {
    fn from(v: Vector2<f64>) -> Point {
        Point::new(v.x, v.y)
    }
}

fn check_step(dt: f64) -> Result<()> {
    // written this way round so NaN is rejected too
    if !(dt > 0.0) {
        return Err(Error::NonPositiveStep(dt));
    }
    Ok(())
}

/// Pull based, unbounded trajectory of the oscillator.
///
/// The first point is `(x0, y0)`; each following point is one Euler step
/// further. Use `take` (or the sampler) to bound it.
pub struct Trajectory {
    inner: Euler<Vector2<f64>, InvertedDuffing>
}
impl Trajectory {
    pub fn new(x0: f64, y0: f64, forcing: f64, dt: f64) -> Result<Trajectory> {
        check_step(dt)?;
        Ok(Trajectory {
            inner: Euler::new(0.0, dt, Vector2::new(x0, y0), InvertedDuffing::new(forcing))
        })
    }
}
impl Iterator for Trajectory {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        self.inner.next().map(Point::from)
    }
}

/// Run configuration shared by the generator, sampler and renderer.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Parameters {
    pub forcing:            f64,
    pub x0:                 f64,
    pub y0:                 f64,

    /// seconds to integrate
    pub duration:           u32,

    /// Euler steps per second
    pub steps_per_second:   u32
}
impl Default for Parameters {
    fn default() -> Parameters {
        Parameters {
            forcing:            F_LOW,
            x0:                 0.0,
            y0:                 0.0,
            duration:           100,
            steps_per_second:   1000
        }
    }
}
impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if self.steps_per_second == 0 {
            return Err(Error::ZeroResolution);
        }
        check_step(self.dt())
    }

    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_second as f64
    }

    /// number of points in the sampled trajectory
    pub fn steps(&self) -> usize {
        self.duration as usize * self.steps_per_second as usize
    }

    pub fn with_forcing(self, forcing: f64) -> Parameters {
        Parameters { forcing, ..self }
    }

    pub fn trajectory(&self) -> Result<Trajectory> {
        self.validate()?;
        Trajectory::new(self.x0, self.y0, self.forcing, self.dt())
    }
}
