//! Pulling finite trajectories out of unbounded point sources.

use tracing::debug;

use crate::duffing::Point;
use crate::error::{Error, Result};

/// Pull exactly `n` points from `source`, in order.
///
/// Nothing more is requested once `n` points have been collected.
pub fn collect<I>(mut source: I, n: usize) -> Result<Vec<Point>>
    where I: Iterator<Item=Point>
{
    let mut points = Vec::with_capacity(n);
    for _ in 0 .. n {
        match source.next() {
            Some(p) => points.push(p),
            None => return Err(Error::Exhausted { expected: n, got: points.len() })
        }
    }
    debug!(n, "collected trajectory");
    Ok(points)
}

/// Pull `n` points from each source in lockstep, low before high for
/// every index. Index `i` of either result is step `i` of its own source.
pub fn collect_paired<L, H>(mut low: L, mut high: H, n: usize)
 -> Result<(Vec<Point>, Vec<Point>)>
    where L: Iterator<Item=Point>, H: Iterator<Item=Point>
{
    let mut points_low = Vec::with_capacity(n);
    let mut points_high = Vec::with_capacity(n);
    for i in 0 .. n {
        let (l, h) = match (low.next(), high.next()) {
            (Some(l), Some(h)) => (l, h),
            _ => return Err(Error::Exhausted { expected: n, got: i })
        };
        points_low.push(l);
        points_high.push(h);
    }
    debug!(n, "collected paired trajectories");
    Ok((points_low, points_high))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(k: f64) -> impl Iterator<Item=Point> {
        (0 ..).map(move |i| Point::new(i as f64, k * i as f64))
    }

    #[test]
    fn takes_exactly_n() {
        let mut pulls = 0;
        let source = line(1.0).inspect(|_| pulls += 1);
        let points = collect(source, 7).unwrap();
        assert_eq!(points.len(), 7);
        assert_eq!(pulls, 7);
        assert_eq!(points[6], Point::new(6.0, 6.0));
    }

    #[test]
    fn zero_is_empty() {
        let mut pulls = 0;
        let points = collect(line(1.0).inspect(|_| pulls += 1), 0).unwrap();
        assert!(points.is_empty());
        assert_eq!(pulls, 0);
    }

    #[test]
    fn short_source() {
        match collect(line(1.0).take(3), 5) {
            Err(Error::Exhausted { expected: 5, got: 3 }) => (),
            other => panic!("unexpected {:?}", other.map(|v| v.len()))
        }
    }

    #[test]
    fn paired_alignment() {
        let (a, b) = collect_paired(line(1.0), line(-2.0), 4).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 4);
        for i in 0 .. 4 {
            assert_eq!(a[i].x, b[i].x);
            assert_eq!(b[i].y, -2.0 * a[i].y);
        }
    }

    #[test]
    fn paired_short_source() {
        let r = collect_paired(line(1.0), line(1.0).take(2), 3);
        assert!(matches!(r, Err(Error::Exhausted { expected: 3, got: 2 })));
    }
}
