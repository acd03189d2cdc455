use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random perturbation of drawn positions.
pub(crate) struct Jitter {
    rng: StdRng,
}

impl Jitter {
    pub(crate) fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { rng }
    }

    /// Shifts every value by one common offset drawn uniformly from
    /// `[-half_width, half_width]`.
    pub(crate) fn shift(&mut self, values: &mut [f64], half_width: f64) {
        let offset = if half_width > 0.0 {
            self.rng.gen_range(-half_width..=half_width)
        } else {
            0.0
        };
        for x in values {
            *x += offset;
        }
    }

    /// Adds independent normal noise with standard deviation `sd` to each value.
    pub(crate) fn scatter(&mut self, values: &mut [f64], sd: f64) {
        if sd <= 0.0 {
            return;
        }
        for x in values {
            *x += sd * self.standard_normal();
        }
    }

    /// Draws from the standard normal distribution (Box-Muller).
    fn standard_normal(&mut self) -> f64 {
        let u1: f64 = self.rng.gen_range(f64::EPSILON..1.0);
        let u2: f64 = self.rng.gen_range(0.0..1.0);
        (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
    }
}
