use crate::error::{DesignError, Result};
use crate::windows::catalog;

/// Signature shared by every window generator in the catalog: length,
/// symmetry flag, shape parameters (already clamped). `None` signals a
/// generator failure, which the registry converts into the rectangular
/// fallback rather than an error.
pub type WindowFn = fn(n: usize, sym: bool, params: &[f64]) -> Option<Vec<f64>>;

/// Declared range and default of one window shape parameter. Out-of-range
/// values are clamped, not rejected: the parameter path is fed by live
/// interactive input.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
}

impl ParamSpec {
    pub fn clamp_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }
}

/// Immutable metadata for one window family: unique key, parameter specs and
/// the generator implementing it. Process-wide static data; per-session
/// mutable state lives in [`WindowState`](crate::windows::WindowState).
#[derive(Debug, Clone, Copy)]
pub struct WindowDescriptor {
    name: &'static str,
    params: &'static [ParamSpec],
    generator: WindowFn,
}

impl WindowDescriptor {
    pub const fn new(
        name: &'static str,
        params: &'static [ParamSpec],
        generator: WindowFn,
    ) -> Self {
        Self {
            name,
            params,
            generator,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    /// Default parameter values, in declaration order.
    pub fn default_params(&self) -> Vec<f64> {
        self.params.iter().map(|p| p.default).collect()
    }
}

/// A gain-normalized window and the statistics of its raw form.
#[derive(Debug, Clone)]
pub struct ComputedWindow {
    /// Window samples rescaled to unity DC response (sum == N).
    pub samples: Vec<f64>,
    /// DC average of the raw window, `sum(w) / N`.
    pub coherent_gain: f64,
    /// Equivalent noise bandwidth in bins, `N * sum(w^2) / sum(w)^2`.
    pub enbw: f64,
    /// Set when the generator failed and a rectangular window was
    /// substituted; carries the reason for the diagnostics channel.
    pub fallback: Option<String>,
}

impl ComputedWindow {
    pub fn is_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Name of the family substituted whenever resolution or computation fails.
pub const DEFAULT_FAMILY: &str = "Rectangular";

/// Catalog of window families available to one consumer.
///
/// Read-only after construction; resolution never fails (unknown names fall
/// back to [`DEFAULT_FAMILY`]) and computation never propagates generator
/// failures, because both sit on the hot path of interactive editing.
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    descriptors: Vec<WindowDescriptor>,
}

impl WindowRegistry {
    /// Registry holding every window family in the built-in catalog.
    pub fn new() -> Self {
        Self {
            descriptors: catalog::CATALOG.to_vec(),
        }
    }

    /// Registry restricted to the named subset of the built-in catalog.
    /// Names without a catalog entry are dropped with a warning. The
    /// fallback family is always retained.
    pub fn with_families(names: &[&str]) -> Self {
        let mut descriptors: Vec<WindowDescriptor> = Vec::new();
        for &name in names {
            match catalog::CATALOG.iter().find(|d| d.name() == name) {
                Some(d) => descriptors.push(*d),
                None => log::warn!("Ignoring window name {name:?}: not in the catalog."),
            }
        }
        Self::from_descriptors(descriptors)
    }

    /// Registry from explicit descriptors, e.g. user-defined windows. The
    /// fallback family is appended if missing so resolution stays total.
    pub fn from_descriptors(mut descriptors: Vec<WindowDescriptor>) -> Self {
        if !descriptors.iter().any(|d| d.name() == DEFAULT_FAMILY) {
            descriptors.push(catalog::FALLBACK);
        }
        Self { descriptors }
    }

    /// All family names, case-insensitively sorted. With a filter, only the
    /// intersection is returned; requested names missing from the registry
    /// are dropped with a warning.
    pub fn list_available(&self, names_filter: Option<&[&str]>) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = match names_filter {
            None => self.descriptors.iter().map(|d| d.name()).collect(),
            Some(wanted) => {
                for &w in wanted {
                    if !self.descriptors.iter().any(|d| d.name() == w) {
                        log::warn!("Ignoring window name {w:?}: not in this registry.");
                    }
                }
                self.descriptors
                    .iter()
                    .map(|d| d.name())
                    .filter(|n| wanted.contains(n))
                    .collect()
            }
        };
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names
    }

    /// Exact lookup of a family name. Never fails: an unknown name resolves
    /// to the fallback family with a diagnostic.
    pub fn resolve(&self, name: &str) -> &WindowDescriptor {
        if let Some(d) = self.descriptors.iter().find(|d| d.name() == name) {
            return d;
        }
        log::warn!("Unknown window name {name:?}, using rectangular window instead.");
        match self.descriptors.iter().find(|d| d.name() == DEFAULT_FAMILY) {
            Some(d) => d,
            None => &catalog::FALLBACK,
        }
    }

    /// Compute a gain-normalized window of length `n`.
    ///
    /// Parameters are clamped into their declared ranges. A failing
    /// generator is replaced by the rectangular window and reported through
    /// the log and the `fallback` field, never as an error.
    ///
    /// # Errors
    /// `DesignError::Precondition` for `n == 0` or a parameter count not
    /// matching the descriptor (checked before clamping).
    pub fn compute(
        &self,
        descriptor: &WindowDescriptor,
        n: usize,
        sym: bool,
        params: &[f64],
    ) -> Result<ComputedWindow> {
        if n == 0 {
            return Err(DesignError::Precondition(
                "window length must be at least 1".into(),
            ));
        }
        if params.len() != descriptor.params().len() {
            return Err(DesignError::Precondition(format!(
                "window {:?} takes {} parameter(s), got {}",
                descriptor.name(),
                descriptor.params().len(),
                params.len()
            )));
        }

        let clamped: Vec<f64> = descriptor
            .params()
            .iter()
            .zip(params)
            .map(|(spec, &v)| spec.clamp_value(v))
            .collect();

        let (mut raw, mut fallback) = match (descriptor.generator)(n, sym, &clamped) {
            Some(w) if w.len() == n && w.iter().all(|v| v.is_finite()) => (w, None),
            Some(w) => {
                let reason = format!(
                    "window function {:?} returned {} non-finite or missized sample(s) for N = {}",
                    descriptor.name(),
                    w.len(),
                    n
                );
                log::error!("{reason}");
                (Vec::new(), Some(reason))
            }
            None => {
                let reason = format!(
                    "window function {:?} failed for N = {}, params {:?}",
                    descriptor.name(),
                    n,
                    clamped
                );
                log::error!("{reason}");
                (Vec::new(), Some(reason))
            }
        };
        if fallback.is_some() {
            log::warn!("Falling back to rectangular window.");
            raw = vec![1.0; n];
        }

        let sum: f64 = raw.iter().sum();
        if sum.abs() < f64::MIN_POSITIVE {
            // A zero-DC window cannot be gain normalized.
            let reason = format!(
                "window {:?} has zero DC gain, falling back to rectangular window",
                descriptor.name()
            );
            log::error!("{reason}");
            raw = vec![1.0; n];
            fallback = Some(reason);
        }

        let sum: f64 = raw.iter().sum();
        let sum_sq: f64 = raw.iter().map(|v| v * v).sum();
        let coherent_gain = sum / n as f64;
        let enbw = n as f64 * sum_sq / (sum * sum);
        let samples = raw.iter().map(|v| v / coherent_gain).collect();

        Ok(ComputedWindow {
            samples,
            coherent_gain,
            enbw,
            fallback,
        })
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}
