use thiserror::Error;

#[derive(Error, Debug)]
pub enum DesignError {
    /// The filter specification is contradictory or out of range.
    /// Raised before any coefficient computation starts.
    #[error("Invalid filter specification: {0}")]
    Specification(String),

    /// A caller-side precondition was violated (degenerate window length,
    /// parameter arity mismatch).
    #[error("Precondition violated: {0}")]
    Precondition(String),

    /// An analytic formula produced a non-finite intermediate value.
    #[error("Numeric failure during design: {0}")]
    Numeric(String),
}

pub type Result<T> = std::result::Result<T, DesignError>;
