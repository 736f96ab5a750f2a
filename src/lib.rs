pub mod error;
pub mod filter_design;
pub mod windows;

pub use error::{DesignError, Result};
pub use filter_design::{
    BandType, Cheby2Designer, Coefficients, FilterResult, FilterSpec, Representation,
};
pub use windows::{ComputedWindow, WindowDescriptor, WindowRegistry, WindowState};
