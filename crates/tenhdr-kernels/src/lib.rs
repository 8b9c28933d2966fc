//! # tenhdr-kernels
//!
//! Tensor kernels behind the CP-ALS auxiliary quantities:
//!
//! - **Gram matrix** ([`gram`]): Aᴴ A for a factor matrix
//! - **Hadamard product** ([`hadamard`], [`hadamard_inplace`]): element-wise product
//! - **Khatri-Rao product** ([`khatri_rao`], [`khatri_rao_except`]): column-wise Kronecker product
//! - **MTTKRP** ([`mttkrp`]): matricized tensor times Khatri-Rao product
//! - **Reductions** ([`frobenius_norm_sq`], [`inner_product`], [`column_inner_products`])
//!
//! All kernels are generic over [`tenhdr_core::Scalar`], so real and complex
//! factors go through the same code; conjugation compiles away for real types.
//! Shape problems are reported as [`KernelError`] values instead of panics.
//!
//! ## Quick Start
//!
//! ```rust
//! use scirs2_core::ndarray_ext::{Array, Array2};
//! use tenhdr_kernels::{gram, hadamard, mttkrp};
//!
//! let a = Array2::<f64>::ones((10, 4));
//! let b = Array2::<f64>::ones((8, 4));
//! let g = hadamard(&gram(&a.view()).view(), &gram(&b.view()).view()).unwrap();
//! assert_eq!(g[[0, 1]], 80.0);
//!
//! let tensor = Array::<f64, _>::ones(vec![3, 4, 5]);
//! let factors = vec![
//!     Array2::<f64>::ones((3, 2)),
//!     Array2::<f64>::ones((4, 2)),
//!     Array2::<f64>::ones((5, 2)),
//! ];
//! let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
//! let v = mttkrp(&tensor.view(), &views, 2).unwrap();
//! assert_eq!(v.shape(), &[5, 2]);
//! ```
//!
//! ## SciRS2 Integration
//!
//! Arrays come from `scirs2_core::ndarray_ext`; complex numbers from
//! `scirs2_core::num_complex`.

#![deny(warnings)]

pub mod error;
pub mod gram;
pub mod hadamard;
pub mod khatri_rao;
pub mod mttkrp;
pub mod reductions;


pub use error::{KernelError, KernelResult};
pub use gram::*;
pub use hadamard::*;
pub use khatri_rao::*;
pub use mttkrp::*;
pub use reductions::*;
