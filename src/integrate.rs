use std::ops::{Add, Mul};

/// Right-hand side of a first order system `y' = f(t, y)`.
pub trait VectorField<N> {
    fn eval(&self, t: f64, y: N) -> N;
}

impl<N, F> VectorField<N> for F where F: Fn(f64, N) -> N {
    #[inline]
    fn eval(&self, t: f64, y: N) -> N {
        self(t, y)
    }
}

/// Explicit (forward) Euler stepping.
///
/// Yields the initial state first, then one state per step. The sequence
/// never ends; bound it with `take` or pull from it as needed.
pub struct Euler<N, F> {
    f:  F,
    t:  f64,
    y:  N,
    h:  f64
}
impl<N, F> Euler<N, F> {
    pub fn new(t0: f64, dt: f64, y0: N, f: F) -> Euler<N, F> {
        Euler {
            f:  f,
            t:  t0,
            y:  y0,
            h:  dt
        }
    }
}
impl<N, F> Iterator for Euler<N, F> where
    N: Mul<f64, Output=N> + Add<Output=N> + Copy,
    F: VectorField<N>
{
    type Item = N;
    fn next(&mut self) -> Option<N> {
        let t = self.t;
        let y = self.y;

        self.y = y + self.f.eval(t, y) * self.h;
        self.t = t + self.h;

        Some(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_initial_state_first() {
        let mut e = Euler::new(0.0, 0.5, 2.0f64, |_t: f64, y: f64| -y);
        assert_eq!(e.next(), Some(2.0));
        assert_eq!(e.next(), Some(1.0));
        assert_eq!(e.next(), Some(0.5));
    }

    #[test]
    fn field_sees_step_time() {
        // y' = t: each step adds t_n * h
        let e = Euler::new(0.0, 0.5, 0.0f64, |t: f64, _y: f64| t);
        let ys: Vec<f64> = e.take(4).collect();
        assert_eq!(ys, vec![0.0, 0.0, 0.25, 0.75]);
    }

    #[test]
    fn time_advances_with_state() {
        // y' = 1 integrates exactly: y_n = t_n
        let e = Euler::new(0.0, 0.25, 0.0f64, |_t: f64, _y: f64| 1.0);
        let ys: Vec<f64> = e.take(5).collect();
        assert_eq!(ys, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
