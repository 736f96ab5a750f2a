use crate::error::{DesignError, Result};
use crate::windows::registry::{ComputedWindow, WindowRegistry};

/// Per-consumer window selection and memo.
///
/// Owns the mutable side of window handling: the selected family, its
/// current (clamped) parameter values, and the most recently computed window.
/// The registry itself stays immutable and shared. One `WindowState` belongs
/// to one consumer; embedding in a concurrent host requires external
/// serialization.
#[derive(Debug, Clone)]
pub struct WindowState {
    family: String,
    params: Vec<f64>,
    cache: Option<CacheEntry>,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    n: usize,
    sym: bool,
    window: ComputedWindow,
}

impl WindowState {
    /// State initialized to the given family (falling back like
    /// [`WindowRegistry::resolve`]) with default parameter values.
    pub fn new(registry: &WindowRegistry, family: &str) -> Self {
        let descriptor = registry.resolve(family);
        Self {
            family: descriptor.name().to_string(),
            params: descriptor.default_params(),
            cache: None,
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Switch the active family. Unknown names fall back to the default
    /// family. Parameters reset to the new family's defaults and the cached
    /// window is invalidated; re-selecting the current family is a no-op.
    pub fn select_family(&mut self, registry: &WindowRegistry, name: &str) {
        let descriptor = registry.resolve(name);
        if descriptor.name() == self.family {
            return;
        }
        self.family = descriptor.name().to_string();
        self.params = descriptor.default_params();
        self.cache = None;
    }

    /// Set one shape parameter, clamped into its declared range, and return
    /// the value actually stored. Invalidates the cached window.
    ///
    /// # Errors
    /// `DesignError::Precondition` if the family has no parameter at `index`.
    pub fn set_param(&mut self, registry: &WindowRegistry, index: usize, value: f64) -> Result<f64> {
        let descriptor = registry.resolve(&self.family);
        let (spec, slot) = match (descriptor.params().get(index), self.params.get_mut(index)) {
            (Some(spec), Some(slot)) => (spec, slot),
            _ => {
                return Err(DesignError::Precondition(format!(
                    "window {:?} has no parameter {}",
                    self.family, index
                )));
            }
        };
        let clamped = spec.clamp_value(value);
        if clamped != *slot {
            *slot = clamped;
            self.cache = None;
        }
        Ok(clamped)
    }

    /// The window for the current family and parameters at length `n`.
    ///
    /// Returns the memoized result when family, parameters, `n` and symmetry
    /// are unchanged since the last call; otherwise recomputes through the
    /// registry. The memo is purely a cost optimization and never changes
    /// the returned values.
    pub fn window(
        &mut self,
        registry: &WindowRegistry,
        n: usize,
        sym: bool,
    ) -> Result<&ComputedWindow> {
        let hit = matches!(&self.cache, Some(c) if c.n == n && c.sym == sym);
        if !hit {
            let descriptor = registry.resolve(&self.family);
            let window = registry.compute(descriptor, n, sym, &self.params)?;
            return Ok(&self.cache.insert(CacheEntry { n, sym, window }).window);
        }
        match &self.cache {
            Some(c) => Ok(&c.window),
            // Unreachable: a hit requires a populated cache.
            None => Err(DesignError::Precondition("window cache is empty".into())),
        }
    }

    /// Coherent gain of the last computed window, if any.
    pub fn coherent_gain(&self) -> Option<f64> {
        self.cache.as_ref().map(|c| c.window.coherent_gain)
    }

    /// Equivalent noise bandwidth of the last computed window, if any.
    pub fn enbw(&self) -> Option<f64> {
        self.cache.as_ref().map(|c| c.window.enbw)
    }
}
