//! High-order cosine-sum windows.
//!
//! The coefficient sets are the minimum-sidelobe cosine-sum windows tabulated
//! by Albrecht ("A Family of Cosine-Sum Windows for High-Resolution
//! Measurements", ICASSP 2001; "Tailoring of Minimum Sidelobe Cosine-Sum
//! Windows", Open Signal Processing Journal 2010). They are literal
//! constants, not derived here: the exact values are what defines each
//! window's sidelobe floor.

use std::f64::consts::PI;

/// 5-term cosine sum, 125.427 dB, NBW 2.21535 bins, 9.81016 dB gain.
pub const BLACKMANHARRIS_5_TERM: [f64; 5] = [
    3.232153788877343e-1,
    -4.714921439576260e-1,
    1.755341299601972e-1,
    -2.849699010614994e-2,
    1.261357088292677e-3,
];

/// 7-term cosine sum, 180.468 dB, NBW 2.63025 bins, 11.33355 dB gain.
pub const BLACKMANHARRIS_7_TERM: [f64; 7] = [
    2.712203605850388e-1,
    -4.334446123274422e-1,
    2.180041228929303e-1,
    -6.578534329560609e-2,
    1.076186730534183e-2,
    -7.700127105808265e-4,
    1.368088305992921e-5,
];

/// 9-term cosine sum, 234.734 dB, NBW 2.98588 bins, 12.45267 dB gain.
pub const BLACKMANHARRIS_9_TERM: [f64; 9] = [
    2.384331152777942e-1,
    -4.005545348643820e-1,
    2.358242530472107e-1,
    -9.527918858383112e-2,
    2.537395516617152e-2,
    -4.152432907505835e-3,
    3.685604163298180e-4,
    -1.384355593917030e-5,
    1.161808358932861e-7,
];

/// Synthesize a cosine-sum window `w[n] = a[0] + sum a[j]*cos(j*n*2*pi/L)`
/// with `L = N - 1` (symmetric) or `L = N` (periodic).
pub fn cosine_sum(n: usize, sym: bool, a: &[f64]) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let l = if sym { n - 1 } else { n } as f64;
    (0..n)
        .map(|i| {
            let x = i as f64 * 2.0 * PI / l;
            a.iter()
                .enumerate()
                .map(|(j, &aj)| aj * (j as f64 * x).cos())
                .sum()
        })
        .collect()
}

/// 5-term Blackman-Harris window (sidelobes below -125 dB).
pub fn blackmanharris5(n: usize, sym: bool) -> Vec<f64> {
    cosine_sum(n, sym, &BLACKMANHARRIS_5_TERM)
}

/// 7-term Blackman-Harris window (sidelobes below -180 dB).
pub fn blackmanharris7(n: usize, sym: bool) -> Vec<f64> {
    cosine_sum(n, sym, &BLACKMANHARRIS_7_TERM)
}

/// 9-term Blackman-Harris window (sidelobes below -230 dB).
pub fn blackmanharris9(n: usize, sym: bool) -> Vec<f64> {
    cosine_sum(n, sym, &BLACKMANHARRIS_9_TERM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_periodic_window_wraps_cleanly() {
        // A periodic cosine-sum window repeats with period N: sample N would
        // equal sample 0.
        let n = 64;
        let w = blackmanharris5(n, false);
        let wrap: f64 = BLACKMANHARRIS_5_TERM.iter().sum();
        assert_relative_eq!(w[0], wrap, epsilon = 1e-15);
    }

    #[test]
    fn test_symmetric_window_is_symmetric() {
        for w in [
            blackmanharris5(65, true),
            blackmanharris7(65, true),
            blackmanharris9(65, true),
        ] {
            for i in 0..w.len() {
                assert_relative_eq!(w[i], w[w.len() - 1 - i], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_endpoint_value_matches_alternating_sum() {
        // At x = 0 the window equals the plain sum of coefficients; these
        // near-zero edge values are what buys the deep sidelobe floor.
        let w = blackmanharris7(129, true);
        let edge: f64 = BLACKMANHARRIS_7_TERM.iter().sum();
        assert_relative_eq!(w[0], edge, epsilon = 1e-15);
        assert!(w[0].abs() < 1e-4);
    }

    #[test]
    fn test_peak_near_center() {
        let w = blackmanharris9(129, true);
        let peak: f64 = BLACKMANHARRIS_9_TERM
            .iter()
            .enumerate()
            .map(|(j, a)| if j % 2 == 0 { *a } else { -a })
            .sum();
        // Center sample x = pi: cos(j*pi) alternates sign.
        assert_relative_eq!(w[64], peak, epsilon = 1e-12);
    }

    #[test]
    fn test_degenerate_length() {
        assert_eq!(blackmanharris5(1, true), vec![1.0]);
        assert_eq!(blackmanharris5(0, false), Vec::<f64>::new());
    }
}
