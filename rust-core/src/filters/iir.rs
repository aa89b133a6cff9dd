//! IIR filter application: `lfilter`, steady-state initial conditions,
//! and zero-phase forward-backward filtering
//!
//! The forward-backward pass cancels the filter's phase response, which
//! matters because the shell overlays original and filtered traces on one
//! time axis; a lagged result would be visibly wrong.

use super::design::BaCoeffs;
use super::stage::FilterError;

/// Normalize by `a[0]` and pad `b`/`a` to equal length.
fn normalize_ba(ba: &BaCoeffs) -> Result<(Vec<f64>, Vec<f64>), FilterError> {
    let a0 = *ba.a.first().ok_or(FilterError::UnstableDesign)?;
    if a0 == 0.0 || !a0.is_finite() {
        return Err(FilterError::UnstableDesign);
    }
    let n = ba.b.len().max(ba.a.len());
    let mut b = vec![0.0; n];
    let mut a = vec![0.0; n];
    for (dst, &src) in b.iter_mut().zip(&ba.b) {
        *dst = src / a0;
    }
    for (dst, &src) in a.iter_mut().zip(&ba.a) {
        *dst = src / a0;
    }
    Ok((b, a))
}

/// Apply a linear filter in direct form II transposed with initial state.
///
/// `b` and `a` must be the same length with `a[0] == 1`; `zi` has length
/// `b.len() - 1`.
fn lfilter(b: &[f64], a: &[f64], x: &[f64], zi: &[f64]) -> Vec<f64> {
    let n = b.len();
    if n == 1 {
        return x.iter().map(|&xn| b[0] * xn).collect();
    }

    let mut z = zi.to_vec();
    let mut y = Vec::with_capacity(x.len());
    for &xn in x {
        let yn = b[0] * xn + z[0];
        for i in 0..n - 2 {
            z[i] = b[i + 1] * xn + z[i + 1] - a[i + 1] * yn;
        }
        z[n - 2] = b[n - 1] * xn - a[n - 1] * yn;
        y.push(yn);
    }
    y
}

/// Solve a dense linear system by Gaussian elimination with partial
/// pivoting. Returns `None` when the matrix is numerically singular.
fn solve_linear(mut m: Vec<Vec<f64>>, mut rhs: Vec<f64>) -> Option<Vec<f64>> {
    let n = rhs.len();
    for col in 0..n {
        let pivot_row = (col..n).max_by(|&i, &j| {
            m[i][col]
                .abs()
                .partial_cmp(&m[j][col].abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })?;
        if m[pivot_row][col].abs() < 1e-12 || !m[pivot_row][col].is_finite() {
            return None;
        }
        m.swap(col, pivot_row);
        rhs.swap(col, pivot_row);

        for row in col + 1..n {
            let factor = m[row][col] / m[col][col];
            for k in col..n {
                m[row][k] -= factor * m[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let mut acc = rhs[row];
        for k in row + 1..n {
            acc -= m[row][k] * x[k];
        }
        x[row] = acc / m[row][row];
    }
    Some(x)
}

/// Steady-state initial conditions for `lfilter` on a step input.
///
/// Solves `(I - A^T) zi = b[1:] - a[1:] * b[0]` where `A` is the
/// companion matrix of `a`, so that filtering a constant signal seeded
/// with `zi * x[0]` starts in steady state.
fn lfilter_zi(b: &[f64], a: &[f64]) -> Result<Vec<f64>, FilterError> {
    let m = b.len() - 1;
    if m == 0 {
        return Ok(Vec::new());
    }

    let mut mat = vec![vec![0.0; m]; m];
    for (i, row) in mat.iter_mut().enumerate() {
        row[0] = if i == 0 { 1.0 } else { 0.0 } + a[i + 1];
        for j in 1..m {
            if i == j {
                row[j] = 1.0;
            } else if i + 1 == j {
                row[j] = -1.0;
            }
        }
    }
    let rhs: Vec<f64> = (0..m).map(|i| b[i + 1] - a[i + 1] * b[0]).collect();

    solve_linear(mat, rhs).ok_or(FilterError::SingularInitialState)
}

/// Apply a filter forward and backward so the net phase shift is zero.
///
/// Edges are handled by odd extension of `3 * max(len(a), len(b))`
/// samples at both ends, each pass seeded with steady-state initial
/// conditions scaled by the edge sample; the padding is trimmed from the
/// result, which always has the input's length.
///
/// # Errors
/// * [`FilterError::InputTooShort`] when the signal cannot host the pad
/// * [`FilterError::UnstableDesign`] for degenerate coefficients
/// * [`FilterError::SingularInitialState`] when steady state is unsolvable
pub fn filtfilt(ba: &BaCoeffs, x: &[f64]) -> Result<Vec<f64>, FilterError> {
    let (b, a) = normalize_ba(ba)?;
    let padlen = 3 * b.len();
    if x.len() <= padlen {
        return Err(FilterError::InputTooShort {
            len: x.len(),
            padlen,
        });
    }

    let zi = lfilter_zi(&b, &a)?;

    // Odd extension: reflect through the edge samples
    let first = x[0];
    let last = x[x.len() - 1];
    let mut ext = Vec::with_capacity(x.len() + 2 * padlen);
    for i in (1..=padlen).rev() {
        ext.push(2.0 * first - x[i]);
    }
    ext.extend_from_slice(x);
    for i in (x.len() - 1 - padlen..x.len() - 1).rev() {
        ext.push(2.0 * last - x[i]);
    }

    let zi_fwd: Vec<f64> = zi.iter().map(|&z| z * ext[0]).collect();
    let y = lfilter(&b, &a, &ext, &zi_fwd);

    let mut rev: Vec<f64> = y.into_iter().rev().collect();
    let zi_bwd: Vec<f64> = zi.iter().map(|&z| z * rev[0]).collect();
    rev = lfilter(&b, &a, &rev, &zi_bwd);
    rev.reverse();

    let out = rev[padlen..padlen + x.len()].to_vec();
    if out.iter().all(|v| v.is_finite()) {
        Ok(out)
    } else {
        Err(FilterError::UnstableDesign)
    }
}
