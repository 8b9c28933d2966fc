//! # tenhdr-decomp - CP-ALS Auxiliary Quantities
//!
//! The two quantities a CP-ALS sweep needs besides the MTTKRP itself.
//!
//! ### Pseudo-inverse
//!
//! The coefficient matrix of the mode-n least-squares update:
//!
//! ```text
//! V = ∘_{k≠n} (Uₖᴴ Uₖ)
//! ```
//!
//! See [`pseudo_inverse`].
//!
//! ### Reconstruction error
//!
//! The error ‖X − X̂‖ obtained from cached quantities, without rebuilding X̂:
//!
//! ```text
//! ‖X − X̂‖² = ‖X‖² + ‖X̂‖² − 2 Re⟨X, X̂⟩
//! ```
//!
//! See [`estimate_error`], [`estimate_error_with`] and [`ErrorEstimateConfig`]
//! for the handling of negative radicands.
//!
//! ## Quick Start
//!
//! ```
//! use scirs2_core::ndarray_ext::array;
//! use tenhdr_decomp::{estimate_error, pseudo_inverse, relative_error, CpTensor};
//! use tenhdr_kernels::{frobenius_norm_sq, mttkrp};
//!
//! let tensor = array![[1.0f64, 2.0, 0.0], [0.5, 1.0, 3.0]].into_dyn();
//! let cp = CpTensor::from_factors(vec![
//!     array![[1.0f64, 0.0], [0.5, 1.0]],
//!     array![[1.0f64, 0.0], [2.0, 0.0], [0.0, 3.0]],
//! ])?;
//!
//! // Coefficient matrix for updating mode 0
//! let v = pseudo_inverse(&cp.factors, 0)?;
//! assert_eq!(v.shape(), &[2, 2]);
//!
//! // Error of the current model
//! let norm_tensor = frobenius_norm_sq(&tensor.view());
//! let m = mttkrp(&tensor.view(), &cp.factor_views(), 1)?;
//! let err = estimate_error(&cp, &m.view(), norm_tensor)?;
//! assert!(relative_error(err, norm_tensor) < 1e-6);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Complexity
//!
//! | Operation | Time | Space |
//! |-----------|------|-------|
//! | `pseudo_inverse` | O(Σₖ Iₖ R²) | O(R²) |
//! | `cp_norm` | O(Σₖ Iₖ R²) | O(R²) |
//! | `estimate_error` | O(Σₖ Iₖ R²) | O(R²) |

#![deny(warnings)]

pub mod cp;
pub mod estimate;
pub mod pseudo_inverse;


pub use cp::*;
pub use estimate::*;
pub use pseudo_inverse::*;
