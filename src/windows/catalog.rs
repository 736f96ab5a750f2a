//! Built-in window catalog.
//!
//! Static, process-wide metadata: each family maps directly to its generator
//! function, so resolving a name never involves runtime lookup beyond this
//! table. Parameter defaults and bounds follow the ranges useful in
//! interactive spectral analysis.

use crate::windows::cosine_sum;
use crate::windows::generators;
use crate::windows::registry::{ParamSpec, WindowDescriptor};

fn w_boxcar(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::boxcar(n, sym))
}

fn w_barthann(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::barthann(n, sym))
}

fn w_bartlett(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::bartlett(n, sym))
}

fn w_blackman(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::blackman(n, sym))
}

fn w_blackmanharris(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::blackmanharris(n, sym))
}

fn w_blackmanharris5(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(cosine_sum::blackmanharris5(n, sym))
}

fn w_blackmanharris7(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(cosine_sum::blackmanharris7(n, sym))
}

fn w_blackmanharris9(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(cosine_sum::blackmanharris9(n, sym))
}

fn w_bohman(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::bohman(n, sym))
}

fn w_cosine(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::cosine(n, sym))
}

fn w_chebwin(n: usize, sym: bool, p: &[f64]) -> Option<Vec<f64>> {
    generators::chebwin(n, *p.first()?, sym)
}

fn w_flattop(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::flattop(n, sym))
}

fn w_gauss(n: usize, sym: bool, p: &[f64]) -> Option<Vec<f64>> {
    generators::gaussian(n, *p.first()?, sym)
}

fn w_general_gaussian(n: usize, sym: bool, p: &[f64]) -> Option<Vec<f64>> {
    generators::general_gaussian(n, *p.first()?, *p.get(1)?, sym)
}

fn w_hamming(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::hamming(n, sym))
}

fn w_hann(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::hann(n, sym))
}

fn w_kaiser(n: usize, sym: bool, p: &[f64]) -> Option<Vec<f64>> {
    generators::kaiser(n, *p.first()?, sym)
}

fn w_nuttall(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::nuttall(n, sym))
}

fn w_parzen(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::parzen(n, sym))
}

fn w_triang(n: usize, sym: bool, _p: &[f64]) -> Option<Vec<f64>> {
    Some(generators::triang(n, sym))
}

fn w_tukey(n: usize, sym: bool, p: &[f64]) -> Option<Vec<f64>> {
    generators::tukey(n, *p.first()?, sym)
}

/// Descriptor substituted when a registry is built without the default
/// family.
pub(crate) static FALLBACK: WindowDescriptor = WindowDescriptor::new("Rectangular", &[], w_boxcar);

pub(crate) static CATALOG: &[WindowDescriptor] = &[
    WindowDescriptor::new("Barthann", &[], w_barthann),
    WindowDescriptor::new("Bartlett", &[], w_bartlett),
    WindowDescriptor::new("Blackman", &[], w_blackman),
    WindowDescriptor::new("Blackmanharris", &[], w_blackmanharris),
    WindowDescriptor::new("Blackmanharris_5", &[], w_blackmanharris5),
    WindowDescriptor::new("Blackmanharris_7", &[], w_blackmanharris7),
    WindowDescriptor::new("Blackmanharris_9", &[], w_blackmanharris9),
    WindowDescriptor::new("Bohman", &[], w_bohman),
    WindowDescriptor::new("Boxcar", &[], w_boxcar),
    WindowDescriptor::new("Cosine", &[], w_cosine),
    WindowDescriptor::new(
        "Dolph-Chebyshev",
        &[ParamSpec {
            name: "a",
            default: 80.0,
            min: 45.0,
            max: 300.0,
        }],
        w_chebwin,
    ),
    WindowDescriptor::new("Flattop", &[], w_flattop),
    WindowDescriptor::new(
        "Gauss",
        &[ParamSpec {
            name: "sigma",
            default: 5.0,
            min: 0.0,
            max: 100.0,
        }],
        w_gauss,
    ),
    WindowDescriptor::new(
        "General Gaussian",
        &[
            ParamSpec {
                name: "p",
                default: 1.5,
                min: 0.0,
                max: 20.0,
            },
            ParamSpec {
                name: "sigma",
                default: 5.0,
                min: 0.0,
                max: 100.0,
            },
        ],
        w_general_gaussian,
    ),
    WindowDescriptor::new("Hamming", &[], w_hamming),
    WindowDescriptor::new("Hann", &[], w_hann),
    WindowDescriptor::new(
        "Kaiser",
        &[ParamSpec {
            name: "beta",
            default: 10.0,
            min: 0.0,
            max: 30.0,
        }],
        w_kaiser,
    ),
    WindowDescriptor::new("Nuttall", &[], w_nuttall),
    WindowDescriptor::new("Parzen", &[], w_parzen),
    WindowDescriptor::new("Rectangular", &[], w_boxcar),
    WindowDescriptor::new("Triangular", &[], w_triang),
    WindowDescriptor::new(
        "Tukey",
        &[ParamSpec {
            name: "alpha",
            default: 0.25,
            min: 0.0,
            max: 1.0,
        }],
        w_tukey,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_catalog_contains_default_family() {
        assert!(CATALOG.iter().any(|d| d.name() == "Rectangular"));
    }

    #[test]
    fn test_every_family_computes_with_defaults() {
        let registry = crate::windows::WindowRegistry::new();
        for d in CATALOG {
            let params = d.default_params();
            let out = registry.compute(d, 32, true, &params).unwrap();
            assert_eq!(out.samples.len(), 32);
            assert!(!out.is_fallback(), "{} fell back", d.name());
        }
    }
}
