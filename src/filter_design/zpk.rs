use num_complex::Complex64;

use crate::filter_design::spec::SosSection;

/// A filter as zeros, poles and gain.
///
/// Zeros and poles of a real-coefficient filter always occur in conjugate
/// pairs (plus real singletons), so polynomial expansion yields real
/// coefficients up to rounding; the imaginary residue is discarded.
#[derive(Debug, Clone)]
pub struct Zpk {
    pub zeros: Vec<Complex64>,
    pub poles: Vec<Complex64>,
    pub gain: f64,
}

impl Zpk {
    /// Relative degree of the transfer function (poles minus zeros).
    pub fn degree(&self) -> usize {
        self.poles.len().saturating_sub(self.zeros.len())
    }

    /// Expand to transfer-function form `(b, a)`, descending powers of z.
    pub fn to_ba(&self) -> (Vec<f64>, Vec<f64>) {
        let b = poly_from_roots(&self.zeros)
            .iter()
            .map(|c| (c * self.gain).re)
            .collect();
        let a = poly_from_roots(&self.poles).iter().map(|c| c.re).collect();
        (b, a)
    }

    /// Convert to cascaded second-order sections.
    ///
    /// Conjugate pairs are kept together, pole pairs are processed from the
    /// least to the most resonant so the section closest to the unit circle
    /// comes last, and each pole pair is matched with its nearest remaining
    /// zero pair. The overall gain is folded into the first section.
    pub fn to_sos(&self) -> Vec<SosSection> {
        if self.poles.is_empty() && self.zeros.is_empty() {
            return vec![SosSection {
                b: [self.gain, 0.0, 0.0],
                a: [1.0, 0.0, 0.0],
            }];
        }

        // Equalize counts; surplus pole slots get zeros at the origin.
        let mut zeros = self.zeros.clone();
        let mut poles = self.poles.clone();
        while zeros.len() < poles.len() {
            zeros.push(Complex64::new(0.0, 0.0));
        }
        while poles.len() < zeros.len() {
            poles.push(Complex64::new(0.0, 0.0));
        }

        let mut zero_groups = group_conjugates(&zeros);
        let mut pole_groups = group_conjugates(&poles);

        // Farthest from the unit circle first.
        pole_groups.sort_by(|a, b| {
            let da = (group_radius(a) - 1.0).abs();
            let db = (group_radius(b) - 1.0).abs();
            db.total_cmp(&da)
        });

        let mut sections = Vec::with_capacity(pole_groups.len());
        for pg in &pole_groups {
            let zg = take_nearest_group(&mut zero_groups, group_center(pg));
            sections.push(make_section(&zg, pg));
        }
        // Any zero groups left over (more zero pairs than pole pairs) become
        // poleless sections.
        for zg in &zero_groups {
            sections.push(make_section(zg, &[]));
        }

        if let Some(first) = sections.first_mut() {
            for b in &mut first.b {
                *b *= self.gain;
            }
        }
        sections
    }
}

/// Coefficients (descending powers, leading 1) of `Π (x - r_i)`.
pub fn poly_from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for &r in roots {
        coeffs.push(Complex64::new(0.0, 0.0));
        for i in (1..coeffs.len()).rev() {
            let prev = coeffs[i - 1];
            coeffs[i] = coeffs[i] - r * prev;
        }
    }
    coeffs
}

const CONJ_TOL: f64 = 1e-10;

/// Split roots into conjugate pairs and real pairs/singletons.
///
/// Real roots are paired together (sorted by value) so that as many sections
/// as possible are full biquads; an odd count leaves one singleton group.
fn group_conjugates(roots: &[Complex64]) -> Vec<Vec<Complex64>> {
    let mut reals: Vec<Complex64> = Vec::new();
    let mut upper: Vec<Complex64> = Vec::new();
    for &r in roots {
        if r.im.abs() <= CONJ_TOL * r.norm().max(1.0) {
            reals.push(Complex64::new(r.re, 0.0));
        } else if r.im > 0.0 {
            upper.push(r);
        }
        // Lower-half roots are implied by their upper-half conjugates.
    }
    reals.sort_by(|a, b| a.re.total_cmp(&b.re));

    let mut groups: Vec<Vec<Complex64>> = upper.iter().map(|&r| vec![r, r.conj()]).collect();
    let mut it = reals.chunks_exact(2);
    for pair in &mut it {
        groups.push(pair.to_vec());
    }
    if let [single] = it.remainder() {
        groups.push(vec![*single]);
    }
    groups
}

fn group_radius(group: &[Complex64]) -> f64 {
    group.iter().map(|r| r.norm()).fold(0.0, f64::max)
}

fn group_center(group: &[Complex64]) -> Complex64 {
    match group.first() {
        Some(&r) => r,
        None => Complex64::new(0.0, 0.0),
    }
}

fn take_nearest_group(groups: &mut Vec<Vec<Complex64>>, target: Complex64) -> Vec<Complex64> {
    if groups.is_empty() {
        return Vec::new();
    }
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, g) in groups.iter().enumerate() {
        let d = (group_center(g) - target).norm();
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    groups.swap_remove(best)
}

fn make_section(zeros: &[Complex64], poles: &[Complex64]) -> SosSection {
    let b = pad3(&poly_from_roots(zeros));
    let a = pad3(&poly_from_roots(poles));
    SosSection { b, a }
}

fn pad3(coeffs: &[Complex64]) -> [f64; 3] {
    let mut out = [0.0; 3];
    for (slot, c) in out.iter_mut().zip(coeffs) {
        *slot = c.re;
    }
    out
}
