extern crate duffing;
#[macro_use]
extern crate approx;
extern crate rand;

use duffing::{sampler, Error, Parameters, Point, Trajectory, F_LOW};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

fn step(p: Point, t: f64, forcing: f64, dt: f64) -> Point {
    Point::new(
        p.x + dt * p.y,
        p.y + dt * (forcing * t.cos() - 0.5 * p.y + p.x - p.x.powi(3))
    )
}

#[test]
fn first_steps_from_rest() {
    let points = sampler::collect(Trajectory::new(0.0, 0.0, 0.24, 0.001).unwrap(), 3).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], Point::new(0.0, 0.0));
    assert_relative_eq!(points[1].x, 0.0);
    assert_relative_eq!(points[1].y, 0.00024, max_relative = 1e-12);

    let expected = step(points[1], 0.001, 0.24, 0.001);
    assert_relative_eq!(points[2].x, expected.x, max_relative = 1e-12);
    assert_relative_eq!(points[2].y, expected.y, max_relative = 1e-12);
}

#[test]
fn recurrence_holds_for_random_starts() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0 .. 20 {
        let x0 = rng.gen_range(-1.5 .. 1.5);
        let y0 = rng.gen_range(-1.5 .. 1.5);
        let forcing = rng.gen_range(0.0 .. 0.5);
        let dt = rng.gen_range(1e-4 .. 1e-2);

        let points: Vec<Point> = Trajectory::new(x0, y0, forcing, dt).unwrap().take(200).collect();
        assert_eq!(points[0], Point::new(x0, y0));

        let mut t = 0.0;
        for w in points.windows(2) {
            let expected = step(w[0], t, forcing, dt);
            assert_relative_eq!(w[1].x, expected.x, epsilon = 1e-12, max_relative = 1e-12);
            assert_relative_eq!(w[1].y, expected.y, epsilon = 1e-12, max_relative = 1e-12);
            t += dt;
        }
    }
}

#[test]
fn deterministic() {
    let a: Vec<Point> = Trajectory::new(0.3, -0.1, F_LOW, 1e-3).unwrap().take(5000).collect();
    let b: Vec<Point> = Trajectory::new(0.3, -0.1, F_LOW, 1e-3).unwrap().take(5000).collect();
    assert_eq!(a, b);
}

#[test]
fn parameters_drive_trajectory() {
    let params = Parameters { x0: 0.5, duration: 2, steps_per_second: 10, ..Parameters::default() };
    let points = sampler::collect(params.trajectory().unwrap(), params.steps()).unwrap();
    assert_eq!(points.len(), 20);
    assert_eq!(points[0], Point::new(0.5, 0.0));
}

#[test]
fn rejects_non_positive_step() {
    assert!(matches!(Trajectory::new(0.0, 0.0, 0.24, 0.0), Err(Error::NonPositiveStep(_))));
}

#[test]
fn divergence_is_flagged_not_stopped() {
    // far outside the wells the cubic term runs away
    let points: Vec<Point> = Trajectory::new(50.0, 0.0, 0.0, 0.1).unwrap().take(50).collect();
    assert_eq!(points.len(), 50);
    assert!(!points[0].blow_up);
    assert!(points.iter().any(|p| p.blow_up));
}
