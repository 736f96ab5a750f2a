use std::f64::consts::PI;

use num_complex::Complex64;

use passband::{
    BandType, Cheby2Designer, Coefficients, DesignError, FilterSpec, Representation,
};

fn lp_min_spec() -> FilterSpec {
    FilterSpec {
        order: None,
        band_type: BandType::Lowpass,
        passband_edges: vec![0.2],
        stopband_edges: vec![0.3],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    }
}

/// Magnitude response in dB of a (b, a) filter at frequency `f` (fraction of
/// the sampling rate).
fn response_db(b: &[f64], a: &[f64], f: f64) -> f64 {
    let omega = 2.0 * PI * f;
    let z = Complex64::new(0.0, -omega).exp();
    let eval = |coeffs: &[f64]| -> Complex64 {
        coeffs
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    };
    20.0 * (eval(b) / eval(a)).norm().log10()
}

#[test]
fn test_fixed_order_design_is_deterministic() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let spec = FilterSpec {
        order: Some(5),
        band_type: BandType::Lowpass,
        passband_edges: vec![],
        stopband_edges: vec![0.3],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };

    let first = designer.design(&spec).unwrap();
    let second = designer.design(&spec).unwrap();
    assert_eq!(first.order, 5);
    match (&first.coefficients, &second.coefficients) {
        (Coefficients::Ba { b: b1, a: a1 }, Coefficients::Ba { b: b2, a: a2 }) => {
            assert_eq!(b1, b2, "numerator differs between identical calls");
            assert_eq!(a1, a2, "denominator differs between identical calls");
            assert_eq!(b1.len(), 6);
            assert_eq!(a1.len(), 6);
        }
        other => panic!("expected ba coefficients, got {:?}", other),
    }
}

#[test]
fn test_minimum_order_is_tight() {
    // Boundary property: the computed order meets the attenuation target at
    // the requested stopband edge, one order less does not. Evaluated with
    // the analytic Chebyshev attenuation formula on prewarped edges.
    let designer = Cheby2Designer::new(Representation::Ba);
    let result = designer.design(&lp_min_spec()).unwrap();

    let passb = (PI * 0.2).tan(); // 0.2 * 2 Nyquist-normalized, prewarped
    let stopb = (PI * 0.3).tan();
    let nat = stopb / passb;
    let gpass = 10f64.powf(0.1 * 1.0) - 1.0;
    let attenuation_db = |order: usize| {
        let t = (order as f64 * nat.acosh()).cosh();
        10.0 * (1.0 + gpass * t * t).log10()
    };

    assert!(
        attenuation_db(result.order) >= 40.0,
        "order {} only reaches {:.2} dB",
        result.order,
        attenuation_db(result.order)
    );
    assert!(
        attenuation_db(result.order - 1) < 40.0,
        "order {} would already reach {:.2} dB",
        result.order - 1,
        attenuation_db(result.order - 1)
    );
}

#[test]
fn test_minimum_order_meets_spec_in_frequency_response() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let result = designer.design(&lp_min_spec()).unwrap();
    let (b, a) = match &result.coefficients {
        Coefficients::Ba { b, a } => (b.clone(), a.clone()),
        other => panic!("expected ba coefficients, got {:?}", other),
    };

    // Attenuation target holds at the requested stopband edge and beyond.
    for f in [0.3, 0.35, 0.4, 0.45] {
        let db = response_db(&b, &a, f);
        assert!(db <= -40.0 + 1e-6, "only {:.2} dB at f = {}", db, f);
    }
    // Ripple target holds in the passband.
    for f in [0.01, 0.1, 0.2] {
        let db = response_db(&b, &a, f);
        assert!(db >= -1.0 - 1e-6, "{:.3} dB dip at f = {}", db, f);
        assert!(db <= 1e-6, "{:.3} dB gain at f = {}", db, f);
    }
}

#[test]
fn test_minimum_order_propagates_resolved_edges() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let result = designer.design(&lp_min_spec()).unwrap();

    let resolved = result.resolved_edges.expect("minimum order resolves edges");
    assert_eq!(resolved.len(), 1);
    // The achieved corner sits inside the requested transition band.
    assert!(
        resolved[0] > 0.2 && resolved[0] <= 0.3,
        "resolved edge {} outside (0.2, 0.3]",
        resolved[0]
    );

    // Re-running as a fixed-order design at the resolved edge reproduces the
    // minimum-order filter.
    let fixed = FilterSpec {
        order: Some(result.order),
        band_type: BandType::Lowpass,
        passband_edges: vec![],
        stopband_edges: resolved,
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };
    let refit = designer.design(&fixed).unwrap();
    match (&result.coefficients, &refit.coefficients) {
        (Coefficients::Ba { b: b1, a: a1 }, Coefficients::Ba { b: b2, a: a2 }) => {
            for (x, y) in b1.iter().zip(b2).chain(a1.iter().zip(a2)) {
                assert!((x - y).abs() < 1e-12, "{} != {}", x, y);
            }
        }
        other => panic!("expected ba coefficients, got {:?}", other),
    }
}

#[test]
fn test_reversed_edges_fail_before_any_numerics() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let mut spec = lp_min_spec();
    spec.passband_edges = vec![0.3];
    spec.stopband_edges = vec![0.2];

    match designer.design(&spec) {
        Err(DesignError::Specification(msg)) => {
            assert!(msg.contains("ordered"), "unexpected message: {}", msg);
        }
        other => panic!("expected specification error, got {:?}", other),
    }
}

#[test]
fn test_unsatisfiable_spec_is_rejected() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let mut spec = lp_min_spec();
    spec.stopband_attenuation_db = 0.5; // below the 1 dB ripple target
    assert!(matches!(
        designer.design(&spec),
        Err(DesignError::Specification(_))
    ));
}

#[test]
fn test_highpass_minimum_order() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let spec = FilterSpec {
        order: None,
        band_type: BandType::Highpass,
        passband_edges: vec![0.3],
        stopband_edges: vec![0.2],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };
    let result = designer.design(&spec).unwrap();
    let (b, a) = match &result.coefficients {
        Coefficients::Ba { b, a } => (b.clone(), a.clone()),
        other => panic!("expected ba coefficients, got {:?}", other),
    };
    assert!(response_db(&b, &a, 0.2) <= -40.0 + 1e-6);
    assert!(response_db(&b, &a, 0.45) >= -1.0 - 1e-6);
}

#[test]
fn test_bandpass_minimum_order_satisfies_both_stopbands() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let spec = FilterSpec {
        order: None,
        band_type: BandType::Bandpass,
        passband_edges: vec![0.15, 0.25],
        stopband_edges: vec![0.1, 0.3],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };
    let result = designer.design(&spec).unwrap();
    let resolved = result.resolved_edges.expect("resolved edges");
    assert_eq!(resolved.len(), 2);
    assert!(resolved[0] < resolved[1]);

    let (b, a) = match &result.coefficients {
        Coefficients::Ba { b, a } => (b.clone(), a.clone()),
        other => panic!("expected ba coefficients, got {:?}", other),
    };
    // Both stopbands reach the target; one side may be over-satisfied.
    assert!(response_db(&b, &a, 0.1) <= -40.0 + 1e-6);
    assert!(response_db(&b, &a, 0.3) <= -40.0 + 1e-6);
    // Band center passes.
    assert!(response_db(&b, &a, 0.2) >= -1.0 - 1e-6);
}

#[test]
fn test_bandstop_fixed_order() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let spec = FilterSpec {
        order: Some(4),
        band_type: BandType::Bandstop,
        passband_edges: vec![],
        stopband_edges: vec![0.2, 0.3],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };
    let result = designer.design(&spec).unwrap();
    let (b, a) = match &result.coefficients {
        Coefficients::Ba { b, a } => (b.clone(), a.clone()),
        other => panic!("expected ba coefficients, got {:?}", other),
    };
    // Order doubles for band filters.
    assert_eq!(a.len(), 9);
    // The stopband edges are where the response first drops to -40 dB.
    assert!(response_db(&b, &a, 0.2) <= -40.0 + 1e-6);
    assert!(response_db(&b, &a, 0.3) <= -40.0 + 1e-6);
    assert!(response_db(&b, &a, 0.05) >= -3.0);
    assert!(response_db(&b, &a, 0.45) >= -3.0);
}

#[test]
fn test_sos_representation_shape() {
    let designer = Cheby2Designer::new(Representation::Sos);
    let spec = FilterSpec {
        order: Some(5),
        band_type: BandType::Lowpass,
        passband_edges: vec![],
        stopband_edges: vec![0.3],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 40.0,
    };
    let result = designer.design(&spec).unwrap();
    match &result.coefficients {
        Coefficients::Sos(sections) => {
            assert_eq!(sections.len(), 3, "order 5 should cascade into 3 sections");
            for s in sections {
                assert!((s.a[0] - 1.0).abs() < 1e-12, "sections must be monic");
            }
            // Cascaded DC gain matches the lowpass unity response.
            let dc: f64 = sections
                .iter()
                .map(|s| (s.b[0] + s.b[1] + s.b[2]) / (s.a[0] + s.a[1] + s.a[2]))
                .product();
            assert!((dc - 1.0).abs() < 1e-9, "cascade DC gain {}", dc);
        }
        other => panic!("expected sos coefficients, got {:?}", other),
    }
}

#[test]
fn test_lowpass_dc_gain_is_unity() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let spec = FilterSpec {
        order: Some(6),
        band_type: BandType::Lowpass,
        passband_edges: vec![],
        stopband_edges: vec![0.25],
        passband_ripple_db: 1.0,
        stopband_attenuation_db: 50.0,
    };
    let result = designer.design(&spec).unwrap();
    let (b, a) = match &result.coefficients {
        Coefficients::Ba { b, a } => (b.clone(), a.clone()),
        other => panic!("expected ba coefficients, got {:?}", other),
    };
    let db = response_db(&b, &a, 0.0);
    assert!(db.abs() < 1e-9, "DC gain {:.3e} dB", db);
}

#[test]
fn test_order_zero_requests_minimum_order() {
    let designer = Cheby2Designer::new(Representation::Ba);
    let mut spec = lp_min_spec();
    spec.order = Some(0);
    let result = designer.design(&spec).unwrap();
    assert!(result.order >= 1);
    assert!(result.resolved_edges.is_some());
}
