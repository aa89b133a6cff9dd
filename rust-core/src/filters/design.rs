//! Digital Butterworth filter design
//!
//! Classical zpk pipeline: analog lowpass prototype poles, frequency
//! pre-warp, lowpass/highpass transform, bilinear transform, then
//! polynomial expansion to transfer-function coefficients.

use super::stage::FilterError;
use num_complex::Complex64;
use std::f64::consts::PI;

/// Filter response shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    LowPass,
    HighPass,
}

impl FilterKind {
    /// Resolve a kind from the shell's dropdown label; unknown labels
    /// fall back to `LowPass`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "High-Pass" | "HighPass" => Self::HighPass,
            _ => Self::LowPass,
        }
    }
}

/// Rational transfer-function coefficients in ascending powers of z^-1,
/// with `a[0]` normalized to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BaCoeffs {
    /// Numerator coefficients
    pub b: Vec<f64>,
    /// Denominator coefficients
    pub a: Vec<f64>,
}

/// Zeros, poles, and gain carried through the design stages.
struct Zpk {
    z: Vec<Complex64>,
    p: Vec<Complex64>,
    k: f64,
}

/// Analog Butterworth lowpass prototype (cutoff 1 rad/s).
///
/// Poles sit evenly on the left half of the unit circle:
/// `s_k = exp(j*pi*(2k + n + 1) / (2n))`.
fn buttap(order: usize) -> Zpk {
    let n = order;
    let p = (0..n)
        .map(|k| {
            let theta = PI * (2 * k + n + 1) as f64 / (2 * n) as f64;
            Complex64::from_polar(1.0, theta)
        })
        .collect();
    Zpk {
        z: Vec::new(),
        p,
        k: 1.0,
    }
}

/// Shift a lowpass prototype to cutoff `wo` (rad/s).
fn lp2lp_zpk(proto: Zpk, wo: f64) -> Zpk {
    let degree = proto.p.len() - proto.z.len();
    Zpk {
        z: proto.z.iter().map(|&z| z * wo).collect(),
        p: proto.p.iter().map(|&p| p * wo).collect(),
        k: proto.k * wo.powi(degree as i32),
    }
}

/// Invert a lowpass prototype into a highpass at cutoff `wo` (rad/s).
fn lp2hp_zpk(proto: Zpk, wo: f64) -> Zpk {
    let degree = proto.p.len() - proto.z.len();

    // k_hp = k * Re(prod(-z) / prod(-p))
    let num: Complex64 = proto.z.iter().map(|&z| -z).product();
    let den: Complex64 = proto.p.iter().map(|&p| -p).product();
    let k = proto.k * (num / den).re;

    let mut z: Vec<Complex64> = proto.z.iter().map(|&z| wo / z).collect();
    let p = proto.p.iter().map(|&p| wo / p).collect();
    // Zeros at infinity migrate to the origin
    z.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));

    Zpk { z, p, k }
}

/// Bilinear transform from the s-plane to the z-plane.
fn bilinear_zpk(analog: Zpk, fs: f64) -> Zpk {
    let fs2 = Complex64::new(2.0 * fs, 0.0);
    let degree = analog.p.len() - analog.z.len();

    let num: Complex64 = analog.z.iter().map(|&z| fs2 - z).product();
    let den: Complex64 = analog.p.iter().map(|&p| fs2 - p).product();
    let k = analog.k * (num / den).re;

    let mut z: Vec<Complex64> = analog.z.iter().map(|&z| (fs2 + z) / (fs2 - z)).collect();
    let p = analog.p.iter().map(|&p| (fs2 + p) / (fs2 - p)).collect();
    // Zeros at infinity land at z = -1
    z.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(degree));

    Zpk { z, p, k }
}

/// Expand a monic polynomial from its roots, descending powers.
fn poly(roots: &[Complex64]) -> Vec<Complex64> {
    let mut c = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        let mut next = vec![Complex64::new(0.0, 0.0); c.len() + 1];
        for (i, &ci) in c.iter().enumerate() {
            next[i] += ci;
            next[i + 1] -= r * ci;
        }
        c = next;
    }
    c
}

/// Collapse zpk form to real (b, a) coefficients.
fn zpk2tf(zpk: &Zpk) -> BaCoeffs {
    let b = poly(&zpk.z).iter().map(|c| zpk.k * c.re).collect();
    let a = poly(&zpk.p).iter().map(|c| c.re).collect();
    BaCoeffs { b, a }
}

/// Design a digital Butterworth filter.
///
/// # Arguments
/// * `order` - Filter order (the pipeline fixes this at 4)
/// * `wn` - Cutoff as a fraction of Nyquist, in (0, 1)
/// * `kind` - Low-pass or high-pass
///
/// # Errors
/// [`FilterError::UnstableDesign`] if the expansion produces non-finite
/// coefficients.
pub fn butter(order: usize, wn: f64, kind: FilterKind) -> Result<BaCoeffs, FilterError> {
    // Sample rate normalized so Nyquist = 1; pre-warp the cutoff so the
    // -3 dB point survives the bilinear transform exactly.
    let fs = 2.0;
    let warped = 2.0 * fs * (PI * wn / fs).tan();

    let proto = buttap(order);
    let analog = match kind {
        FilterKind::LowPass => lp2lp_zpk(proto, warped),
        FilterKind::HighPass => lp2hp_zpk(proto, warped),
    };
    let digital = bilinear_zpk(analog, fs);
    let ba = zpk2tf(&digital);

    if ba.b.iter().chain(ba.a.iter()).all(|c| c.is_finite()) {
        Ok(ba)
    } else {
        Err(FilterError::UnstableDesign)
    }
}
