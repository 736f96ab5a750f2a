pub mod cheby2;
pub mod spec;
pub mod transform;
pub mod zpk;

pub use cheby2::Cheby2Designer;
pub use spec::{BandType, Coefficients, FilterResult, FilterSpec, Representation, SosSection};
pub use zpk::Zpk;
