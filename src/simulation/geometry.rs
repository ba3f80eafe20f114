//! Small 2D helpers shared by organisms and the food field.

use glam::DVec2;
use rand::Rng;

/// Flips each velocity component whose axis coordinate has left `[0, extent]`.
///
/// The position itself is left untouched, so an organism may sit briefly outside
/// the arena before the flipped velocity carries it back.
#[inline]
pub fn reflect_off_bounds(position: DVec2, velocity: &mut DVec2, (width, height): (f64, f64)) {
    if position.x < 0.0 || position.x > width {
        velocity.x = -velocity.x;
    }
    if position.y < 0.0 || position.y > height {
        velocity.y = -velocity.y;
    }
}

/// Uniform point inside `[0, width] x [0, height]`.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, (width, height): (f64, f64)) -> DVec2 {
    DVec2::new(rng.gen_range(0.0..=width), rng.gen_range(0.0..=height))
}

/// Uniform vector with each component in `[-extent, extent]`.
pub fn random_symmetric<R: Rng + ?Sized>(rng: &mut R, extent: f64) -> DVec2 {
    DVec2::new(rng.gen_range(-extent..=extent), rng.gen_range(-extent..=extent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn reflection_only_touches_escaping_axis() {
        let mut velocity = DVec2::new(1.0, -2.0);
        reflect_off_bounds(DVec2::new(800.5, 400.0), &mut velocity, (800.0, 800.0));
        assert_eq!(velocity, DVec2::new(-1.0, -2.0));

        let mut velocity = DVec2::new(1.0, -2.0);
        reflect_off_bounds(DVec2::new(10.0, -0.1), &mut velocity, (800.0, 800.0));
        assert_eq!(velocity, DVec2::new(1.0, 2.0));
    }

    #[test]
    fn edges_are_inside() {
        let mut velocity = DVec2::new(1.0, 1.0);
        reflect_off_bounds(DVec2::new(0.0, 800.0), &mut velocity, (800.0, 800.0));
        assert_eq!(velocity, DVec2::new(1.0, 1.0));
    }

    #[test]
    fn random_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let p = random_point(&mut rng, (50.0, 20.0));
            assert!((0.0..=50.0).contains(&p.x) && (0.0..=20.0).contains(&p.y));
            let v = random_symmetric(&mut rng, 10.0);
            assert!(v.x.abs() <= 10.0 && v.y.abs() <= 10.0);
        }
        assert_eq!(random_symmetric(&mut rng, 0.0), DVec2::ZERO);
    }
}
