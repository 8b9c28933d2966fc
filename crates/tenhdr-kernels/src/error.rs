//! Error types for kernel operations

use thiserror::Error;

/// Error type for kernel operations
///
/// Every variant names the kernel that rejected its input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// Operand dimensions do not agree
    #[error("{operation}: dimension mismatch - expected {expected:?}, got {actual:?}. {context}")]
    DimensionMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: String,
    },

    /// Mode index outside the factor set or tensor
    #[error("{operation}: invalid mode {mode}, must be < {n_modes}")]
    InvalidMode {
        operation: String,
        mode: usize,
        n_modes: usize,
    },

    /// Factor matrices with differing numbers of columns
    #[error("{operation}: rank mismatch at factor {factor_index}: expected rank {expected_rank}, got {actual_rank}")]
    RankMismatch {
        operation: String,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    },

    /// Required input was empty
    #[error("{operation}: empty input not allowed for parameter '{parameter}'")]
    EmptyInput { operation: String, parameter: String },

    /// Element-wise operands with different shapes
    #[error("{operation}: incompatible shapes {shape_a:?} and {shape_b:?}")]
    IncompatibleShapes {
        operation: String,
        shape_a: Vec<usize>,
        shape_b: Vec<usize>,
    },

    /// Failure reported by a lower layer (reshape, matricization)
    #[error("{operation}: {message}")]
    OperationError { operation: String, message: String },
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl KernelError {
    pub fn dimension_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        context: impl Into<String>,
    ) -> Self {
        KernelError::DimensionMismatch {
            operation: operation.into(),
            expected,
            actual,
            context: context.into(),
        }
    }

    pub fn invalid_mode(operation: impl Into<String>, mode: usize, n_modes: usize) -> Self {
        KernelError::InvalidMode {
            operation: operation.into(),
            mode,
            n_modes,
        }
    }

    pub fn rank_mismatch(
        operation: impl Into<String>,
        expected_rank: usize,
        actual_rank: usize,
        factor_index: usize,
    ) -> Self {
        KernelError::RankMismatch {
            operation: operation.into(),
            expected_rank,
            actual_rank,
            factor_index,
        }
    }

    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        KernelError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    pub fn incompatible_shapes(
        operation: impl Into<String>,
        shape_a: &[usize],
        shape_b: &[usize],
    ) -> Self {
        KernelError::IncompatibleShapes {
            operation: operation.into(),
            shape_a: shape_a.to_vec(),
            shape_b: shape_b.to_vec(),
        }
    }

    pub fn operation_error(operation: impl Into<String>, message: impl Into<String>) -> Self {
        KernelError::OperationError {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
