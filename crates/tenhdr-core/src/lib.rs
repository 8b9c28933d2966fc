//! # tenhdr-core
//!
//! Foundational types shared by the TenHDR crates:
//!
//! - [`Scalar`]: real and complex element types with compile-time conjugation
//! - [`ArrayContext`]: shape, element type and device of any array, plus
//!   template-based allocation ([`ones_like_context`], [`zeros_like_context`])
//! - Dense helpers: [`tensor_from_vec`] and mode-n matricization ([`unfold`])
//!
//! ## SciRS2 Integration
//!
//! Arrays come from `scirs2_core::ndarray_ext`, numeric traits from
//! `scirs2_core::numeric` and complex numbers from `scirs2_core::num_complex`.
//!
//! ```
//! use scirs2_core::ndarray_ext::Array2;
//! use tenhdr_core::{ones_like_context, ArrayContext, DType};
//!
//! let factor = Array2::<f64>::zeros((5, 3));
//! let acc = ones_like_context(&factor, (3, 3));
//! assert_eq!(acc.dtype(), DType::F64);
//! ```

#![deny(warnings)]

pub mod context;
pub mod dense;
pub mod scalar;

pub use context::{ones_like_context, zeros_like_context, ArrayContext, Context, Device};
pub use dense::{tensor_from_vec, unfold};
pub use scalar::{DType, Scalar};
