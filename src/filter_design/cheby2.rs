//! Chebyshev Type II ("inverse Chebyshev") filter design: equiripple
//! stopband, monotonic passband. Minimum-order estimation and coefficient
//! synthesis are closed-form; the other classical families (Butterworth,
//! Chebyshev I, elliptic, Bessel) follow the same parameter-mapping pattern
//! with a different analog prototype.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::error::{DesignError, Result};
use crate::filter_design::spec::{
    BandType, Coefficients, FilterResult, FilterSpec, Representation,
};
use crate::filter_design::transform::{
    BILINEAR_FS, bilinear_zpk, lp2bp_zpk, lp2bs_zpk, lp2hp_zpk, lp2lp_zpk, prewarp,
};
use crate::filter_design::zpk::Zpk;

/// Stateless Chebyshev II designer. The output representation is fixed at
/// construction; every call is referentially transparent.
#[derive(Debug, Clone, Copy)]
pub struct Cheby2Designer {
    representation: Representation,
}

impl Cheby2Designer {
    pub fn new(representation: Representation) -> Self {
        Self { representation }
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// Design a filter from a specification record.
    ///
    /// A present, positive `order` selects the fixed-order path; an absent or
    /// zero order requests the minimum order meeting both the ripple and
    /// attenuation targets.
    ///
    /// # Errors
    /// Returns `DesignError::Specification` for inconsistent specifications
    /// (checked before any numeric work) and `DesignError::Numeric` if the
    /// analytic formulas degenerate.
    pub fn design(&self, spec: &FilterSpec) -> Result<FilterResult> {
        match spec.order {
            Some(order) if order > 0 => self.design_fixed_order(spec, order),
            _ => self.design_minimum_order(spec),
        }
    }

    /// Fixed-order path: synthesize directly at the requested stopband
    /// edge(s) and attenuation. The passband corner follows from the order.
    pub fn design_fixed_order(&self, spec: &FilterSpec, order: usize) -> Result<FilterResult> {
        spec.validate(false)?;

        // (0, 0.5) of f_S -> (0, 1) of Nyquist, the convention of the
        // transfer-function formulas below.
        let wn: Vec<f64> = spec.stopband_edges.iter().map(|f| f * 2.0).collect();
        let zpk = cheby2_zpk(order, spec.stopband_attenuation_db, &wn, spec.band_type)?;

        Ok(FilterResult {
            order,
            coefficients: self.package(zpk),
            resolved_edges: None,
        })
    }

    /// Minimum-order path: estimate the smallest order satisfying the
    /// passband-ripple and stopband-attenuation targets, then synthesize at
    /// the *computed* corner frequencies, which generally overshoot the
    /// requested stopband edges.
    pub fn design_minimum_order(&self, spec: &FilterSpec) -> Result<FilterResult> {
        spec.validate(true)?;

        let wp: Vec<f64> = spec.passband_edges.iter().map(|f| f * 2.0).collect();
        let ws: Vec<f64> = spec.stopband_edges.iter().map(|f| f * 2.0).collect();
        let (order, wn) = cheby2_order(
            &wp,
            &ws,
            spec.passband_ripple_db,
            spec.stopband_attenuation_db,
            spec.band_type,
        )?;
        let zpk = cheby2_zpk(order, spec.stopband_attenuation_db, &wn, spec.band_type)?;

        Ok(FilterResult {
            order,
            coefficients: self.package(zpk),
            // Back to the fraction-of-f_S convention for the caller.
            resolved_edges: Some(wn.iter().map(|f| f / 2.0).collect()),
        })
    }

    fn package(&self, zpk: Zpk) -> Coefficients {
        match self.representation {
            Representation::Ba => {
                let (b, a) = zpk.to_ba();
                Coefficients::Ba { b, a }
            }
            Representation::Sos => Coefficients::Sos(zpk.to_sos()),
            Representation::Zpk => Coefficients::Zpk(zpk),
        }
    }
}

/// Analog Chebyshev II lowpass prototype: unit stopband edge, `rs` dB of
/// equiripple stopband attenuation.
fn cheb2ap(order: usize, rs: f64) -> Zpk {
    let n = order as f64;
    let de = 1.0 / (10f64.powf(0.1 * rs) - 1.0).sqrt();
    let mu = (1.0 / de).asinh() / n;

    let m: Vec<i64> = (1 - order as i64..order as i64).step_by(2).collect();

    // Zeros sit on the imaginary axis; an odd order has no zero at infinity's
    // mirror (m == 0 is skipped).
    let zeros: Vec<Complex64> = m
        .iter()
        .filter(|&&k| k != 0)
        .map(|&k| Complex64::new(0.0, 1.0 / (k as f64 * PI / (2.0 * n)).sin()))
        .collect();

    let poles: Vec<Complex64> = m
        .iter()
        .map(|&k| {
            let theta = PI * k as f64 / (2.0 * n);
            let p = -Complex64::new(0.0, theta).exp();
            let p = Complex64::new(mu.sinh() * p.re, mu.cosh() * p.im);
            p.inv()
        })
        .collect();

    let num: Complex64 = zeros.iter().map(|z| -z).product();
    let den: Complex64 = poles.iter().map(|p| -p).product();
    Zpk {
        gain: (den / num).re,
        zeros,
        poles,
    }
}

/// Synthesize a digital Chebyshev II filter of the given order at
/// Nyquist-normalized edge(s) `wn`.
fn cheby2_zpk(order: usize, rs: f64, wn: &[f64], band_type: BandType) -> Result<Zpk> {
    if order == 0 {
        return Err(DesignError::Specification(
            "filter order must be at least 1".into(),
        ));
    }
    if wn.len() != band_type.edge_count() {
        return Err(DesignError::Specification(format!(
            "{:?} needs {} corner frequencies, got {}",
            band_type,
            band_type.edge_count(),
            wn.len()
        )));
    }
    for &w in wn {
        if !w.is_finite() || w <= 0.0 || w >= 1.0 {
            return Err(DesignError::Specification(format!(
                "corner frequency {} outside Nyquist-normalized range (0, 1)",
                w
            )));
        }
    }

    let proto = cheb2ap(order, rs);
    let warped: Vec<f64> = wn.iter().map(|&w| prewarp(w, BILINEAR_FS)).collect();

    let analog = match band_type {
        BandType::Lowpass => lp2lp_zpk(&proto, warped[0]),
        BandType::Highpass => lp2hp_zpk(&proto, warped[0]),
        BandType::Bandpass => {
            let bw = warped[1] - warped[0];
            let wo = (warped[0] * warped[1]).sqrt();
            lp2bp_zpk(&proto, wo, bw)
        }
        BandType::Bandstop => {
            let bw = warped[1] - warped[0];
            let wo = (warped[0] * warped[1]).sqrt();
            lp2bs_zpk(&proto, wo, bw)
        }
    };
    let digital = bilinear_zpk(&analog, BILINEAR_FS);

    if !digital.gain.is_finite()
        || digital.poles.iter().any(|p| !p.re.is_finite() || !p.im.is_finite())
    {
        return Err(DesignError::Numeric(format!(
            "coefficient synthesis diverged for order {} at {:?}",
            order, wn
        )));
    }
    Ok(digital)
}

/// Minimum order and achieved stopband corner(s) for a Chebyshev II design,
/// solved from the inverse Chebyshev polynomial relation.
///
/// `wp`/`ws` are Nyquist-normalized; the returned corners are too. For band
/// filters the binding side of the two-sided constraint determines the order,
/// so the other side ends up over-satisfied.
fn cheby2_order(
    wp: &[f64],
    ws: &[f64],
    gpass: f64,
    gstop: f64,
    band_type: BandType,
) -> Result<(usize, Vec<f64>)> {
    // Prewarp to the analog domain the design formulas live in.
    let passb: Vec<f64> = wp.iter().map(|&w| (PI * w / 2.0).tan()).collect();
    let stopb: Vec<f64> = ws.iter().map(|&w| (PI * w / 2.0).tan()).collect();

    // Selectivity of the equivalent lowpass prototype.
    let nat = match band_type {
        BandType::Lowpass => stopb[0] / passb[0],
        BandType::Highpass => passb[0] / stopb[0],
        BandType::Bandstop => stopb
            .iter()
            .map(|&s| (s * (passb[0] - passb[1]) / (s * s - passb[0] * passb[1])).abs())
            .fold(f64::INFINITY, f64::min),
        BandType::Bandpass => stopb
            .iter()
            .map(|&s| ((s * s - passb[0] * passb[1]) / (s * (passb[0] - passb[1]))).abs())
            .fold(f64::INFINITY, f64::min),
    };
    if !nat.is_finite() || nat <= 1.0 {
        return Err(DesignError::Numeric(format!(
            "degenerate transition band (selectivity {nat})"
        )));
    }

    let gstop_lin = 10f64.powf(0.1 * gstop);
    let gpass_lin = 10f64.powf(0.1 * gpass);
    let depth = ((gstop_lin - 1.0) / (gpass_lin - 1.0)).sqrt();

    let order = (depth.acosh() / nat.acosh()).ceil();
    if !order.is_finite() || order < 1.0 {
        return Err(DesignError::Numeric(format!(
            "order estimate failed (attenuation depth {depth}, selectivity {nat})"
        )));
    }
    let order_f = order;
    let order = order as usize;

    // Frequency (prototype units) where the achieved response first reaches
    // the stopband target, mapped back through the band transform.
    let new_freq = 1.0 / (depth.acosh() / order_f).cosh();
    let corners = match band_type {
        BandType::Lowpass => vec![passb[0] / new_freq],
        BandType::Highpass => vec![passb[0] * new_freq],
        BandType::Bandstop => {
            let c0 = new_freq / 2.0 * (passb[0] - passb[1])
                + (new_freq * new_freq * (passb[1] - passb[0]).powi(2) / 4.0
                    + passb[1] * passb[0])
                    .sqrt();
            vec![c0, passb[1] * passb[0] / c0]
        }
        BandType::Bandpass => {
            let c0 = (passb[0] - passb[1]) / (2.0 * new_freq)
                + ((passb[1] - passb[0]).powi(2) / (4.0 * new_freq * new_freq)
                    + passb[0] * passb[1])
                    .sqrt();
            vec![c0, passb[0] * passb[1] / c0]
        }
    };

    // Unwarp back to digital frequencies.
    let mut wn: Vec<f64> = corners.iter().map(|&c| (2.0 / PI) * c.atan()).collect();
    wn.sort_by(f64::total_cmp);
    Ok((order, wn))
}
