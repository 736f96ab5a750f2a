//! Window function generators.
//!
//! Every generator takes the window length `n` and a symmetry flag: `sym ==
//! true` yields a symmetric window with period `n - 1` (endpoints included,
//! for FIR design), `sym == false` a periodic window with period `n` (for
//! spectral analysis). Periodic windows are built by computing the symmetric
//! window of length `n + 1` and dropping the redundant endpoint. Lengths of
//! 0 or 1 degenerate to all-ones.
//!
//! Generators that can fail for bad shape parameters return `Option`; the
//! registry substitutes the rectangular fallback for `None`.

use std::f64::consts::PI;

/// All-ones guard for degenerate lengths.
fn trivial(n: usize) -> Option<Vec<f64>> {
    if n <= 1 { Some(vec![1.0; n]) } else { None }
}

/// Length to actually compute, and whether to drop the last sample after.
fn extended(n: usize, sym: bool) -> (usize, bool) {
    if sym { (n, false) } else { (n + 1, true) }
}

fn truncated(mut w: Vec<f64>, needs_trunc: bool) -> Vec<f64> {
    if needs_trunc {
        w.pop();
    }
    w
}

/// Weighted sum of cosine terms over [-pi, pi], the common core of the
/// Blackman family.
pub fn general_cosine(n: usize, a: &[f64], sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let step = 2.0 * PI / (m as f64 - 1.0);
    let w = (0..m)
        .map(|i| {
            let fac = -PI + i as f64 * step;
            a.iter()
                .enumerate()
                .map(|(k, &ak)| ak * (k as f64 * fac).cos())
                .sum()
        })
        .collect();
    truncated(w, needs_trunc)
}

pub fn boxcar(n: usize, _sym: bool) -> Vec<f64> {
    vec![1.0; n]
}

pub fn triang(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let mf = m as f64;
    let half: Vec<f64> = if m % 2 == 0 {
        (1..=m / 2).map(|k| (2.0 * k as f64 - 1.0) / mf).collect()
    } else {
        (1..=m.div_ceil(2))
            .map(|k| 2.0 * k as f64 / (mf + 1.0))
            .collect()
    };
    let mut w = half.clone();
    let skip = m % 2; // odd length: center sample is not repeated
    w.extend(half.iter().rev().skip(skip));
    truncated(w, needs_trunc)
}

pub fn bartlett(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let span = m as f64 - 1.0;
    let w = (0..m)
        .map(|i| {
            let x = i as f64;
            if x <= span / 2.0 {
                2.0 * x / span
            } else {
                2.0 - 2.0 * x / span
            }
        })
        .collect();
    truncated(w, needs_trunc)
}

pub fn barthann(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let w = (0..m)
        .map(|i| {
            let fac = (i as f64 / (m as f64 - 1.0) - 0.5).abs();
            0.62 - 0.48 * fac + 0.38 * (2.0 * PI * fac).cos()
        })
        .collect();
    truncated(w, needs_trunc)
}

pub fn blackman(n: usize, sym: bool) -> Vec<f64> {
    general_cosine(n, &[0.42, 0.50, 0.08], sym)
}

/// Minimum 4-term Blackman-Harris window (about 92 dB sidelobe suppression).
pub fn blackmanharris(n: usize, sym: bool) -> Vec<f64> {
    general_cosine(n, &[0.35875, 0.48829, 0.14128, 0.01168], sym)
}

pub fn nuttall(n: usize, sym: bool) -> Vec<f64> {
    general_cosine(n, &[0.3635819, 0.4891775, 0.1365995, 0.0106411], sym)
}

/// Flat-top window for accurate amplitude readout (negative sidelobe
/// coefficients give it slightly negative samples).
pub fn flattop(n: usize, sym: bool) -> Vec<f64> {
    general_cosine(
        n,
        &[
            0.21557895,
            0.41663158,
            0.277263158,
            0.083578947,
            0.006947368,
        ],
        sym,
    )
}

fn general_hamming(n: usize, alpha: f64, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let w = (0..m)
        .map(|i| alpha - (1.0 - alpha) * (2.0 * PI * i as f64 / (m as f64 - 1.0)).cos())
        .collect();
    truncated(w, needs_trunc)
}

pub fn hamming(n: usize, sym: bool) -> Vec<f64> {
    general_hamming(n, 0.54, sym)
}

pub fn hann(n: usize, sym: bool) -> Vec<f64> {
    general_hamming(n, 0.5, sym)
}

/// Half a cosine period; also known as the sine window.
pub fn cosine(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let w = (0..m)
        .map(|i| (PI / m as f64 * (i as f64 + 0.5)).sin())
        .collect();
    truncated(w, needs_trunc)
}

pub fn bohman(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let mut w: Vec<f64> = (0..m)
        .map(|i| {
            let fac = (-1.0 + 2.0 * i as f64 / (m as f64 - 1.0)).abs();
            (1.0 - fac) * (PI * fac).cos() + (PI * fac).sin() / PI
        })
        .collect();
    // Endpoints are exactly zero by construction.
    w[0] = 0.0;
    w[m - 1] = 0.0;
    truncated(w, needs_trunc)
}

/// 4th-order B-spline window.
pub fn parzen(n: usize, sym: bool) -> Vec<f64> {
    if let Some(w) = trivial(n) {
        return w;
    }
    let (m, needs_trunc) = extended(n, sym);
    let mf = m as f64;
    let w = (0..m)
        .map(|i| {
            let x = (i as f64 - (mf - 1.0) / 2.0).abs();
            let q = x / (mf / 2.0);
            if x <= (mf - 1.0) / 4.0 {
                1.0 - 6.0 * q * q + 6.0 * q * q * q
            } else {
                2.0 * (1.0 - q).powi(3)
            }
        })
        .collect();
    truncated(w, needs_trunc)
}

pub fn gaussian(n: usize, sigma: f64, sym: bool) -> Option<Vec<f64>> {
    if sigma <= 0.0 || !sigma.is_finite() {
        return None;
    }
    if let Some(w) = trivial(n) {
        return Some(w);
    }
    let (m, needs_trunc) = extended(n, sym);
    let w = (0..m)
        .map(|i| {
            let x = i as f64 - (m as f64 - 1.0) / 2.0;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();
    Some(truncated(w, needs_trunc))
}

/// Generalized Gaussian: `p = 1` is Gaussian, `p = 0.5` Laplace-shaped.
pub fn general_gaussian(n: usize, p: f64, sigma: f64, sym: bool) -> Option<Vec<f64>> {
    if sigma <= 0.0 || !sigma.is_finite() || p <= 0.0 || !p.is_finite() {
        return None;
    }
    if let Some(w) = trivial(n) {
        return Some(w);
    }
    let (m, needs_trunc) = extended(n, sym);
    let w = (0..m)
        .map(|i| {
            let x = i as f64 - (m as f64 - 1.0) / 2.0;
            (-0.5 * (x / sigma).abs().powf(2.0 * p)).exp()
        })
        .collect();
    Some(truncated(w, needs_trunc))
}

/// Tapered cosine window: `alpha = 0` is rectangular, `alpha = 1` is Hann.
pub fn tukey(n: usize, alpha: f64, sym: bool) -> Option<Vec<f64>> {
    if !alpha.is_finite() {
        return None;
    }
    if let Some(w) = trivial(n) {
        return Some(w);
    }
    if alpha <= 0.0 {
        return Some(vec![1.0; n]);
    }
    if alpha >= 1.0 {
        return Some(hann(n, sym));
    }
    let (m, needs_trunc) = extended(n, sym);
    let span = m as f64 - 1.0;
    let width = (alpha * span / 2.0).floor() as usize;
    let w = (0..m)
        .map(|i| {
            if i <= width {
                0.5 * (1.0 + (PI * (-1.0 + 2.0 * i as f64 / (alpha * span))).cos())
            } else if i < m - width - 1 {
                1.0
            } else {
                0.5 * (1.0 + (PI * (-2.0 / alpha + 1.0 + 2.0 * i as f64 / (alpha * span))).cos())
            }
        })
        .collect();
    Some(truncated(w, needs_trunc))
}

/// Kaiser window with shape parameter `beta`.
pub fn kaiser(n: usize, beta: f64, sym: bool) -> Option<Vec<f64>> {
    if beta < 0.0 || !beta.is_finite() {
        return None;
    }
    if let Some(w) = trivial(n) {
        return Some(w);
    }
    let (m, needs_trunc) = extended(n, sym);
    let alpha = (m as f64 - 1.0) / 2.0;
    let denom = bessel_i0(beta);
    let w = (0..m)
        .map(|i| {
            let r = (i as f64 - alpha) / alpha;
            bessel_i0(beta * (1.0 - r * r).max(0.0).sqrt()) / denom
        })
        .collect();
    Some(truncated(w, needs_trunc))
}

/// Modified Bessel function of the first kind, order zero, by power series.
/// Converges quickly for the argument range reachable through the clamped
/// Kaiser parameter (beta <= 30).
pub fn bessel_i0(x: f64) -> f64 {
    let half = x.abs() / 2.0;
    let mut term = 1.0;
    let mut sum = 1.0;
    let mut k = 1.0;
    while k < 1000.0 {
        term *= (half / k) * (half / k);
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
        k += 1.0;
    }
    sum
}

/// Dolph-Chebyshev window: minimal main lobe width for `at` dB of equiripple
/// sidelobe attenuation. Computed from the Chebyshev polynomial in the
/// frequency domain and transformed back with a direct DFT.
pub fn chebwin(n: usize, at: f64, sym: bool) -> Option<Vec<f64>> {
    if !at.is_finite() || at <= 0.0 {
        return None;
    }
    if let Some(w) = trivial(n) {
        return Some(w);
    }
    let (m, needs_trunc) = extended(n, sym);
    let mf = m as f64;
    let order = mf - 1.0;
    let beta = ((1.0 / order) * 10f64.powf(at.abs() / 20.0).acosh()).cosh();

    // Chebyshev polynomial of degree `order` sampled around the circle.
    let p: Vec<f64> = (0..m)
        .map(|k| {
            let x = beta * (PI * k as f64 / mf).cos();
            if x > 1.0 {
                (order * x.acosh()).cosh()
            } else if x < -1.0 {
                (2.0 * (m % 2) as f64 - 1.0) * (order * (-x).acosh()).cosh()
            } else {
                (order * x.acos()).cos()
            }
        })
        .collect();

    // Inverse transform; direct evaluation of the real part is enough since
    // the spectrum is real (odd m) or made conjugate-even by the half-bin
    // phase shift (even m).
    let half = if m % 2 == 1 { m.div_ceil(2) } else { m / 2 + 1 };
    let time: Vec<f64> = (0..half)
        .map(|i| {
            (0..m)
                .map(|k| {
                    let kf = k as f64;
                    if m % 2 == 1 {
                        p[k] * (2.0 * PI * kf * i as f64 / mf).cos()
                    } else {
                        p[k] * (PI * kf * (1.0 - 2.0 * i as f64) / mf).cos()
                    }
                })
                .sum()
        })
        .collect();

    // Mirror the half back to a full symmetric window.
    let mut w: Vec<f64> = time[1..].iter().rev().copied().collect();
    if m % 2 == 1 {
        w.extend(&time);
    } else {
        w.extend(&time[1..]);
    }

    let peak = w.iter().cloned().fold(f64::MIN, f64::max);
    for v in &mut w {
        *v /= peak;
    }
    Some(truncated(w, needs_trunc))
}
