//! # TenHDR - CP-ALS Auxiliary Quantities
//!
//! The two per-iteration helpers of a CP-ALS loop that never rebuild the
//! dense tensor:
//!
//! - the Hadamard product of factor Gram matrices used as the coefficient
//!   matrix of a mode update ([`decomp::pseudo_inverse`])
//! - the reconstruction error from a cached MTTKRP ([`decomp::estimate_error`])
//!
//! This is the **meta crate** that re-exports all TenHDR components.
//!
//! ## Quick Start
//!
//! ```
//! use tenhdr::prelude::*;
//! use scirs2_core::ndarray_ext::array;
//!
//! let cp = CpTensor::from_factors(vec![
//!     array![[1.0f64, 2.0], [0.0, 1.0], [3.0, -1.0]],
//!     array![[0.5f64, 1.0], [1.0, 0.0], [2.0, 2.0], [-1.0, 0.5]],
//! ])?;
//!
//! // Updating mode 0 only involves the Gram matrix of the second factor
//! let v = pseudo_inverse(&cp.factors, 0)?;
//! assert_eq!(v, gram(&cp.factors[1].view()));
//!
//! // A tensor equal to its CP model has zero error
//! let tensor = cp.reconstruct()?;
//! let m = mttkrp(&tensor.view(), &cp.factor_views(), 1)?;
//! let err = estimate_error(&cp, &m.view(), frobenius_norm_sq(&tensor.view()))?;
//! assert!(err < 1e-5);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core ([`core`])
//!
//! The [`core::Scalar`] trait for real and complex element types, and the
//! [`core::ArrayContext`] trait for allocating arrays like an existing one.
//!
//! ```
//! use tenhdr::core::{ArrayContext, DType};
//! use scirs2_core::ndarray_ext::Array2;
//! use scirs2_core::num_complex::Complex;
//!
//! let a = Array2::<Complex<f64>>::zeros((4, 2));
//! assert_eq!(a.dtype(), DType::Complex64);
//! assert_eq!(a.context().to_string(), "complex128@cpu");
//! ```
//!
//! ### Kernels ([`kernels`])
//!
//! Gram, Hadamard, Khatri-Rao, MTTKRP and reductions.
//!
//! ### Decomposition helpers ([`decomp`])
//!
//! [`decomp::CpTensor`], [`decomp::cp_norm`], [`decomp::pseudo_inverse`] and
//! the error estimate with its [`decomp::ErrorEstimateConfig`].

#![deny(warnings)]

pub use tenhdr_core as core;
pub use tenhdr_decomp as decomp;
pub use tenhdr_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use tenhdr::prelude::*;
    //! use scirs2_core::ndarray_ext::Array2;
    //!
    //! let factors = vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 2))];
    //! let v = pseudo_inverse(&factors, 1).unwrap();
    //! assert_eq!(v[[0, 0]], 3.0);
    //! ```

    // Core types
    pub use crate::core::{ArrayContext, Context, DType, Device, Scalar};

    // Kernels
    pub use crate::kernels::{
        frobenius_norm_sq, gram, hadamard, hadamard_inplace, inner_product, khatri_rao, mttkrp,
    };

    // CP-ALS helpers
    pub use crate::decomp::{
        cp_norm, estimate_error, estimate_error_with, pseudo_inverse, relative_error, CpError,
        CpTensor, ErrorEstimateConfig, ResidualGuard,
    };
}
