use rand::Rng;

const MIN_RADIUS: f64 = 0.5;
const RADIUS_SPREAD: f64 = 1.5;
const MAX_DRIFT: f64 = 0.15;
const MIN_OPACITY: f64 = 0.1;
const OPACITY_SPREAD: f64 = 0.3;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub opacity: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: rng.gen::<f64>() * width,
            y: rng.gen::<f64>() * height,
            radius: rng.gen::<f64>() * RADIUS_SPREAD + MIN_RADIUS,
            dx: rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            dy: rng.gen_range(-MAX_DRIFT..MAX_DRIFT),
            opacity: rng.gen::<f64>() * OPACITY_SPREAD + MIN_OPACITY,
        }
    }
}

/// Drifting dots on a toroidal field. Leaving one edge re-enters at the
/// opposite edge.
#[derive(Clone, Debug)]
pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn spawn<R: Rng>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();

        Self {
            width,
            height,
            particles,
        }
    }

    pub fn from_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            particles,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// New bounds take effect on the next step; particles outside them
    /// wrap back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.dx, self.width);
            particle.y = wrap(particle.y + particle.dy, self.height);
        }
    }
}

fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }

    // rem_euclid can round up to `extent` for tiny negative inputs.
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn still(x: f64, y: f64, dx: f64, dy: f64) -> Particle {
        Particle {
            x,
            y,
            radius: 1.0,
            dx,
            dy,
            opacity: 0.2,
        }
    }

    #[test]
    fn spawned_particles_respect_ranges() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = ParticleField::spawn(&mut rng, 50, 1_280.0, 5_760.0);

        assert_eq!(field.particles().len(), 50);
        for particle in field.particles() {
            assert!((0.0..1_280.0).contains(&particle.x));
            assert!((0.0..5_760.0).contains(&particle.y));
            assert!((0.5..2.0).contains(&particle.radius));
            assert!((-0.15..0.15).contains(&particle.dx));
            assert!((-0.15..0.15).contains(&particle.dy));
            assert!((0.1..0.4).contains(&particle.opacity));
        }
    }

    #[test]
    fn same_seed_spawns_same_field() {
        let first = ParticleField::spawn(&mut SmallRng::seed_from_u64(42), 10, 800.0, 600.0);
        let second = ParticleField::spawn(&mut SmallRng::seed_from_u64(42), 10, 800.0, 600.0);

        assert_eq!(first.particles(), second.particles());
    }

    #[test]
    fn right_edge_wraps_to_left() {
        let mut field = ParticleField::from_particles(100.0, 50.0, vec![still(99.9, 10.0, 0.125, 0.0)]);

        field.step();

        let particle = &field.particles()[0];
        assert!(particle.x < 1.0, "expected wrap to left edge, got {}", particle.x);
        assert_eq!(particle.y, 10.0);
    }

    #[test]
    fn left_edge_wraps_to_right() {
        let mut field = ParticleField::from_particles(100.0, 50.0, vec![still(0.05, 10.0, -0.125, 0.0)]);

        field.step();

        assert!(field.particles()[0].x > 99.0);
    }

    #[test]
    fn vertical_edges_wrap() {
        let mut field = ParticleField::from_particles(
            100.0,
            50.0,
            vec![still(10.0, 49.95, 0.0, 0.125), still(10.0, 0.05, 0.0, -0.125)],
        );

        field.step();

        assert!(field.particles()[0].y < 1.0);
        assert!(field.particles()[1].y > 49.0);
    }

    #[test]
    fn shrinking_field_wraps_particles_back_inside() {
        let mut field = ParticleField::from_particles(1_000.0, 1_000.0, vec![still(900.0, 900.0, 0.0, 0.0)]);

        field.resize(400.0, 400.0);
        field.step();

        let particle = &field.particles()[0];
        assert!(particle.x < 400.0 && particle.y < 400.0);
    }

    #[test]
    fn empty_field_pins_particles_to_origin() {
        let mut field = ParticleField::from_particles(0.0, 0.0, vec![still(5.0, 5.0, 0.1, 0.1)]);

        field.step();

        assert_eq!((field.particles()[0].x, field.particles()[0].y), (0.0, 0.0));
    }

    proptest! {
        #[test]
        fn particles_stay_inside_field(seed in any::<u64>(), steps in 1usize..200) {
            let mut field = ParticleField::spawn(&mut SmallRng::seed_from_u64(seed), 20, 320.0, 240.0);
            for _ in 0..steps {
                field.step();
            }
            for particle in field.particles() {
                prop_assert!(particle.x >= 0.0 && particle.x < 320.0);
                prop_assert!(particle.y >= 0.0 && particle.y < 240.0);
            }
        }
    }
}
