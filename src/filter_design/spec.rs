use serde::{Deserialize, Serialize};

use crate::error::{DesignError, Result};
use crate::filter_design::zpk::Zpk;

/// Frequency response type of a filter design request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandType {
    Lowpass,
    Highpass,
    Bandpass,
    Bandstop,
}

impl BandType {
    /// Number of band edges per side (passband / stopband) for this response.
    pub fn edge_count(self) -> usize {
        match self {
            BandType::Lowpass | BandType::Highpass => 1,
            BandType::Bandpass | BandType::Bandstop => 2,
        }
    }
}

/// Output representation of a designed filter.
///
/// Fixed per designer instance, not per call: a host that filters with
/// second-order sections configures its designer once and every result
/// comes back in that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Representation {
    /// Numerator / denominator polynomial coefficients.
    #[default]
    Ba,
    /// Zeros, poles and gain.
    Zpk,
    /// Cascaded second-order sections.
    Sos,
}

/// One biquad stage of a cascaded filter, `b` over `a` with `a[0] == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SosSection {
    pub b: [f64; 3],
    pub a: [f64; 3],
}

/// Filter coefficients in the representation the designer was configured for.
#[derive(Debug, Clone)]
pub enum Coefficients {
    Ba { b: Vec<f64>, a: Vec<f64> },
    Zpk(Zpk),
    Sos(Vec<SosSection>),
}

/// Inputs to a single filter design call.
///
/// All edge frequencies are fractions of the sampling rate in (0, 0.5).
/// `order = None` (or `Some(0)`) requests a minimum-order design, which needs
/// both passband and stopband edges; a fixed-order design only evaluates the
/// stopband edge(s), matching the Chebyshev II parametrization where the
/// passband corner is controlled indirectly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    pub order: Option<usize>,
    pub band_type: BandType,
    pub passband_edges: Vec<f64>,
    pub stopband_edges: Vec<f64>,
    pub passband_ripple_db: f64,
    pub stopband_attenuation_db: f64,
}

impl FilterSpec {
    /// Validate the specification before any numeric work.
    ///
    /// # Errors
    /// Returns `DesignError::Specification` for non-positive ripple or
    /// attenuation targets, edge counts not matching the band type, edges
    /// outside (0, 0.5), band ordering inconsistent with the band type, or a
    /// minimum-order request whose attenuation target does not exceed its
    /// ripple target (unsatisfiable at any finite order).
    pub fn validate(&self, minimum_order: bool) -> Result<()> {
        if !(self.passband_ripple_db > 0.0) || !self.passband_ripple_db.is_finite() {
            return Err(DesignError::Specification(format!(
                "passband ripple must be a positive number of dB, got {}",
                self.passband_ripple_db
            )));
        }
        if !(self.stopband_attenuation_db > 0.0) || !self.stopband_attenuation_db.is_finite() {
            return Err(DesignError::Specification(format!(
                "stopband attenuation must be a positive number of dB, got {}",
                self.stopband_attenuation_db
            )));
        }

        check_edges("stopband", &self.stopband_edges, self.band_type)?;

        if !minimum_order {
            return Ok(());
        }

        check_edges("passband", &self.passband_edges, self.band_type)?;

        if self.stopband_attenuation_db <= self.passband_ripple_db {
            return Err(DesignError::Specification(format!(
                "stopband attenuation ({} dB) must exceed passband ripple ({} dB); \
                 no finite order satisfies this spec",
                self.stopband_attenuation_db, self.passband_ripple_db
            )));
        }

        let pb = &self.passband_edges;
        let sb = &self.stopband_edges;
        let ordered = match self.band_type {
            BandType::Lowpass => pb[0] < sb[0],
            BandType::Highpass => sb[0] < pb[0],
            BandType::Bandpass => sb[0] < pb[0] && pb[1] < sb[1],
            BandType::Bandstop => pb[0] < sb[0] && sb[1] < pb[1],
        };
        if !ordered {
            return Err(DesignError::Specification(format!(
                "band edges are ordered inconsistently with {:?}: passband {:?}, stopband {:?}",
                self.band_type, pb, sb
            )));
        }
        Ok(())
    }
}

fn check_edges(side: &str, edges: &[f64], band_type: BandType) -> Result<()> {
    let expected = band_type.edge_count();
    if edges.len() != expected {
        return Err(DesignError::Specification(format!(
            "{:?} needs {} {} edge(s), got {}",
            band_type,
            expected,
            side,
            edges.len()
        )));
    }
    for &f in edges {
        if !f.is_finite() || f <= 0.0 || f >= 0.5 {
            return Err(DesignError::Specification(format!(
                "{} edge {} outside the normalized range (0, 0.5)",
                side, f
            )));
        }
    }
    if edges.len() == 2 && edges[0] >= edges[1] {
        return Err(DesignError::Specification(format!(
            "{} edges must be strictly ascending, got {:?}",
            side, edges
        )));
    }
    Ok(())
}

/// Output of a single design call, owned by the caller.
#[derive(Debug, Clone)]
pub struct FilterResult {
    /// Resolved filter order (echoes the request or the computed minimum).
    pub order: usize,
    pub coefficients: Coefficients,
    /// Corner frequencies actually achieved by a minimum-order design, as
    /// fractions of the sampling rate. `None` for fixed-order designs, where
    /// the requested edges are met exactly.
    pub resolved_edges: Option<Vec<f64>>,
}
