use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplexError {
    /// Construction precondition: both components must be finite
    #[error("complex value components must be finite, got real = {real}, imag = {imag}")]
    NonFinite { real: String, imag: String },
    #[error("adding {rhs} to {lhs} overflows")]
    Overflow { lhs: String, rhs: String },
    #[error("can not parse `{input}` as a complex value: {reason}")]
    Parse { input: String, reason: String },
}
