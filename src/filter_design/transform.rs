//! Frequency transforms between the analog lowpass prototype and the final
//! digital filter, all operating on zero/pole/gain form.

use num_complex::Complex64;

use crate::filter_design::zpk::Zpk;

/// Sample rate used for the bilinear transform; edges are prewarped against it.
pub const BILINEAR_FS: f64 = 2.0;

/// Prewarp a Nyquist-normalized digital edge (0, 1) to its analog frequency.
pub fn prewarp(wn: f64, fs: f64) -> f64 {
    2.0 * fs * (std::f64::consts::PI * wn / fs).tan()
}

/// Shift a lowpass prototype to cutoff `wo`.
pub fn lp2lp_zpk(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = zpk.degree();
    Zpk {
        zeros: zpk.zeros.iter().map(|z| z * wo).collect(),
        poles: zpk.poles.iter().map(|p| p * wo).collect(),
        gain: zpk.gain * wo.powi(degree as i32),
    }
}

/// Transform a lowpass prototype to a highpass filter with cutoff `wo`.
pub fn lp2hp_zpk(zpk: &Zpk, wo: f64) -> Zpk {
    let degree = zpk.degree();
    let wo = Complex64::new(wo, 0.0);

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|z| wo / z).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|p| wo / p).collect();
    // Relative degree becomes zeros at the origin.
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    let gain = zpk.gain * (neg_prod(&zpk.zeros) / neg_prod(&zpk.poles)).re;
    Zpk { zeros, poles, gain }
}

/// Transform a lowpass prototype to a bandpass filter centered on `wo` with
/// bandwidth `bw`.
pub fn lp2bp_zpk(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = zpk.degree();
    let mut zeros = split_roots(&zpk.zeros, wo, bw, false);
    let poles = split_roots(&zpk.poles, wo, bw, false);
    zeros.extend(std::iter::repeat_n(Complex64::new(0.0, 0.0), degree));

    Zpk {
        zeros,
        poles,
        gain: zpk.gain * bw.powi(degree as i32),
    }
}

/// Transform a lowpass prototype to a bandstop filter centered on `wo` with
/// stopband width `bw`.
pub fn lp2bs_zpk(zpk: &Zpk, wo: f64, bw: f64) -> Zpk {
    let degree = zpk.degree();
    let mut zeros = split_roots(&zpk.zeros, wo, bw, true);
    let poles = split_roots(&zpk.poles, wo, bw, true);
    // Relative degree becomes conjugate zero pairs at +/- j*wo.
    for _ in 0..degree {
        zeros.push(Complex64::new(0.0, wo));
        zeros.push(Complex64::new(0.0, -wo));
    }

    let gain = zpk.gain * (neg_prod(&zpk.zeros) / neg_prod(&zpk.poles)).re;
    Zpk { zeros, poles, gain }
}

/// Map an analog filter to the z-plane via the bilinear transform.
pub fn bilinear_zpk(zpk: &Zpk, fs: f64) -> Zpk {
    let degree = zpk.degree();
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let mut zeros: Vec<Complex64> = zpk.zeros.iter().map(|z| (fs2 + z) / (fs2 - z)).collect();
    let poles: Vec<Complex64> = zpk.poles.iter().map(|p| (fs2 + p) / (fs2 - p)).collect();
    // Zeros at infinity land at Nyquist (z = -1).
    zeros.extend(std::iter::repeat_n(Complex64::new(-1.0, 0.0), degree));

    let num: Complex64 = zpk.zeros.iter().map(|z| fs2 - z).product();
    let den: Complex64 = zpk.poles.iter().map(|p| fs2 - p).product();
    Zpk {
        zeros,
        poles,
        gain: zpk.gain * (num / den).re,
    }
}

/// Band transform of a root set: each lowpass root splits into a pair via
/// `r/2 ± sqrt((r/2)^2 - wo^2)` (bandpass scales by `bw/2` first, bandstop
/// inverts into `(bw/2)/r` first).
fn split_roots(roots: &[Complex64], wo: f64, bw: f64, invert: bool) -> Vec<Complex64> {
    let scale = Complex64::new(bw / 2.0, 0.0);
    let wo2 = Complex64::new(wo * wo, 0.0);
    let mut out = Vec::with_capacity(roots.len() * 2);
    for &r in roots {
        let s = if invert { scale / r } else { r * scale };
        let disc = (s * s - wo2).sqrt();
        out.push(s + disc);
    }
    for &r in roots {
        let s = if invert { scale / r } else { r * scale };
        let disc = (s * s - wo2).sqrt();
        out.push(s - disc);
    }
    out
}

fn neg_prod(roots: &[Complex64]) -> Complex64 {
    roots.iter().map(|r| -r).product()
}
