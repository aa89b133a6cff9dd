//! Additive zero-mean Gaussian noise

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add i.i.d. `N(0, std_dev^2)` samples elementwise.
///
/// A non-finite `std_dev` cannot form a distribution and leaves the
/// signal untouched; callers gate on `std_dev > 0` before reaching here.
pub fn add_gaussian_noise<R: Rng + ?Sized>(samples: &mut [f64], std_dev: f64, rng: &mut R) {
    let Ok(normal) = Normal::new(0.0, std_dev) else {
        return;
    };
    for s in samples.iter_mut() {
        *s += normal.sample(rng);
    }
}
