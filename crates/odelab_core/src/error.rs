use thiserror::Error;

pub type OdeResult<T> = Result<T, OdeError>;

/// Errors raised by the fixed-step integrators.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OdeError {
    /// A stage derivative evaluated to a non-finite value: the right-hand
    /// side was queried outside its domain (e.g. ln of a non-positive
    /// argument). The run is aborted with no partial trajectory; retrying
    /// with the same inputs would fail at the same point.
    #[error("derivative is undefined at (x, y) = ({x}, {y})")]
    DomainViolation { x: f64, y: f64 },
}
