use std::f64::consts::PI;

use passband::{WindowRegistry, WindowState};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Magnitude of the DTFT of `w` at angular frequency `theta`, in dB relative
/// to the DC response.
fn spectrum_db(w: &[f64], theta: f64) -> f64 {
    let (mut re, mut im) = (0.0, 0.0);
    for (k, &s) in w.iter().enumerate() {
        let phase = theta * k as f64;
        re += s * phase.cos();
        im -= s * phase.sin();
    }
    let dc: f64 = w.iter().sum();
    10.0 * ((re * re + im * im) / (dc * dc)).log10()
}

#[test]
fn test_full_catalog_length_and_dc_gain() {
    init_logging();
    let registry = WindowRegistry::new();
    for name in registry.list_available(None) {
        let descriptor = registry.resolve(&name);
        let params = descriptor.default_params();
        for n in [1usize, 8, 64, 1024] {
            for sym in [true, false] {
                let out = registry.compute(descriptor, n, sym, &params).unwrap();
                assert_eq!(out.samples.len(), n, "{} length at n = {}", name, n);
                assert!(
                    !out.is_fallback(),
                    "{} fell back at n = {}, sym = {}",
                    name,
                    n,
                    sym
                );
                // Returned samples are scaled for unit coherent gain.
                let mean = out.samples.iter().sum::<f64>() / n as f64;
                assert!(
                    (mean - 1.0).abs() < 1e-9,
                    "{} mean {} at n = {}, sym = {}",
                    name,
                    mean,
                    n,
                    sym
                );
                assert!(out.samples.iter().all(|s| s.is_finite()));
                assert!(out.coherent_gain.is_finite() && out.coherent_gain > 0.0);
                assert!(out.enbw >= 1.0 - 1e-9, "{} enbw {}", name, out.enbw);
            }
        }
    }
}

#[test]
fn test_unknown_family_resolves_to_default() {
    init_logging();
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Nonexistent");
    assert_eq!(descriptor.name(), "Rectangular");

    let out = registry.compute(descriptor, 16, true, &[]).unwrap();
    assert!(out.samples.iter().all(|&s| s == 1.0));
}

#[test]
fn test_list_available_subset_is_sorted_and_filtered() {
    let registry = WindowRegistry::new();
    let names = registry.list_available(Some(&["Kaiser", "Hann", "Nonexistent", "Boxcar"]));
    assert_eq!(names, vec!["Boxcar", "Hann", "Kaiser"]);

    let all = registry.list_available(None);
    assert!(
        all.windows(2)
            .all(|p| p[0].to_lowercase() < p[1].to_lowercase()),
        "catalog not sorted"
    );
    assert!(all.iter().any(|&n| n == "Rectangular"));
}

#[test]
fn test_kaiser_beta_clamps_to_declared_maximum() {
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Kaiser");
    let clamped = registry.compute(descriptor, 128, true, &[1000.0]).unwrap();
    let at_max = registry.compute(descriptor, 128, true, &[30.0]).unwrap();
    assert_eq!(clamped.samples, at_max.samples);
    assert!(!clamped.is_fallback());
}

#[test]
fn test_degenerate_parameter_falls_back_to_rectangular() {
    init_logging();
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Gauss");
    // sigma = 0 is inside the declared range but the generator cannot
    // evaluate it.
    let out = registry.compute(descriptor, 32, true, &[0.0]).unwrap();
    assert!(out.is_fallback());
    assert!(out.samples.iter().all(|&s| s == 1.0));
    assert!((out.coherent_gain - 1.0).abs() < 1e-12);
    assert!((out.enbw - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_length_is_rejected() {
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Hann");
    assert!(registry.compute(descriptor, 0, true, &[]).is_err());
}

#[test]
fn test_periodic_hann_statistics() {
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Hann");
    let out = registry.compute(descriptor, 512, false, &[]).unwrap();
    assert!((out.coherent_gain - 0.5).abs() < 1e-12);
    assert!((out.enbw - 1.5).abs() < 1e-12);
}

#[test]
fn test_blackmanharris5_sidelobe_floor() {
    // The 5-term coefficient set is designed for a peak sidelobe near
    // -125 dB. Scan the spectrum past the main lobe on a dense grid.
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Blackmanharris_5");
    let n = 1024usize;
    let out = registry.compute(descriptor, n, false, &[]).unwrap();

    // Main lobe of a 5-term cosine sum ends at the bin-5 null; everything
    // past it is sidelobe.
    let theta_start = 2.0 * PI * 5.0 / n as f64;
    let steps = 4096usize;
    let mut peak = f64::NEG_INFINITY;
    for i in 0..=steps {
        let theta = theta_start + (PI - theta_start) * i as f64 / steps as f64;
        peak = peak.max(spectrum_db(&out.samples, theta));
    }
    assert!(peak < -124.0, "peak sidelobe {:.2} dB too high", peak);
    assert!(peak > -128.0, "peak sidelobe {:.2} dB suspiciously low", peak);
}

#[test]
fn test_blackmanharris5_enbw_regression() {
    let registry = WindowRegistry::new();
    let descriptor = registry.resolve("Blackmanharris_5");
    let out = registry.compute(descriptor, 4096, false, &[]).unwrap();
    assert!(
        (out.enbw - 2.21535).abs() < 1e-3,
        "enbw {} drifted",
        out.enbw
    );
}

#[test]
fn test_state_roundtrip_over_registry() {
    init_logging();
    let registry = WindowRegistry::new();
    let mut state = WindowState::new(&registry, "Kaiser");
    assert_eq!(state.family(), "Kaiser");
    assert_eq!(state.params(), &[10.0]);

    let first = state.window(&registry, 256, false).unwrap().samples.clone();
    assert_eq!(first.len(), 256);

    state.set_param(&registry, 0, 5.0).unwrap();
    let second = state.window(&registry, 256, false).unwrap().samples.clone();
    assert_ne!(first, second);

    state.select_family(&registry, "Blackman");
    let blackman = state.window(&registry, 256, false).unwrap();
    assert!((blackman.coherent_gain - 0.42).abs() < 1e-12);
}

#[test]
fn test_subset_registry_keeps_default_family() {
    init_logging();
    let registry = WindowRegistry::with_families(&["Hann", "Kaiser"]);
    let names = registry.list_available(None);
    assert!(names.iter().any(|&n| n == "Rectangular"));
    assert!(names.iter().any(|&n| n == "Hann"));
    assert!(names.iter().any(|&n| n == "Kaiser"));
    assert_eq!(registry.resolve("Flattop").name(), "Rectangular");
}
