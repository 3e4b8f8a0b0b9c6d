use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdfError {
    #[error("vector divided by zero")]
    DivisionByZero,
    #[error("invalid {kind}: {field} must be positive and finite, got {value}")]
    InvalidPrimitive {
        kind: &'static str,
        field: &'static str,
        value: f32,
    },
    #[error("scene is full ({capacity} primitives)")]
    CapacityExceeded { capacity: usize },
}
