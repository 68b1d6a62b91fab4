use thiserror::Error;

/// Top-level error type for the planegeo kernel.
#[derive(Debug, Error)]
pub enum PlanegeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

/// Errors raised by primitive construction and geometric queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("{query} is undefined at {value}")]
    UndefinedAt { query: &'static str, value: f64 },

    #[error("invalid format: {0}")]
    Format(String),
}

/// Errors raised while mapping labeled input into a construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstructionError {
    #[error("unknown label: {0}")]
    UnknownLabel(String),

    #[error("label already in use: {0}")]
    DuplicateLabel(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("{command} expects {expected}, got {found}")]
    Arity {
        command: String,
        expected: &'static str,
        found: usize,
    },

    #[error("{label} is not a {expected}")]
    WrongKind {
        label: String,
        expected: &'static str,
    },

    #[error("not a number: {0}")]
    InvalidNumber(String),
}

/// Convenience type alias for results using [`PlanegeoError`].
pub type Result<T> = std::result::Result<T, PlanegeoError>;
