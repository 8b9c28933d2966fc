//! CP tensors (Canonical Polyadic / CANDECOMP/PARAFAC)
//!
//! A CP tensor represents
//!
//! X̂ ≈ Σᵣ λᵣ (u₁ᵣ ∘ u₂ᵣ ∘ ... ∘ uₙᵣ)
//!
//! Where:
//! - R is the CP rank
//! - λᵣ are the optional component weights
//! - uᵢᵣ are the columns of the factor matrices Uᵢ ∈ 𝔽^(Iᵢ×R)
//!
//! The norm of a CP tensor is computed from the factor Gram matrices, in
//! O(N·I·R²) instead of O(∏ Iᵢ).

use anyhow::Result;
use scirs2_core::ndarray_ext::{Array, Array1, Array2, ArrayView2, IxDyn};
use scirs2_core::numeric::{Float, Zero};
use tenhdr_core::{ones_like_context, Scalar};
use tenhdr_kernels::{common_rank, gram, hadamard_inplace, KernelError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CpError {
    #[error("Kernel error: {0}")]
    Kernel(#[from] KernelError),

    #[error("CP tensor has no factor matrices")]
    EmptyFactors,

    #[error("Invalid mode {mode} for {n_modes} factor matrices")]
    InvalidMode { mode: usize, n_modes: usize },

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(f64),

    #[error("Negative residual {radicand} exceeds tolerance {threshold}")]
    NegativeResidual { radicand: f64, threshold: f64 },
}

/// CP tensor: optional weights and one factor matrix per mode
///
/// Fields are public like the decomposition results that produce them; every
/// operation in this crate validates the invariants before using them.
#[derive(Debug, Clone)]
pub struct CpTensor<T> {
    /// Weights for each rank-1 component; `None` means unit weights
    pub weights: Option<Array1<T>>,

    /// Factor matrices, one for each mode, each of shape (Iₙ, R)
    pub factors: Vec<Array2<T>>,
}

impl<T: Scalar> CpTensor<T> {
    /// Create a validated CP tensor
    ///
    /// # Errors
    ///
    /// - no factor matrices
    /// - factor matrices with differing numbers of columns
    /// - a weight vector whose length differs from the rank
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{array, Array2};
    /// use tenhdr_decomp::CpTensor;
    ///
    /// let cp = CpTensor::new(
    ///     Some(array![2.0f64, 0.5]),
    ///     vec![Array2::<f64>::ones((3, 2)), Array2::<f64>::ones((4, 2))],
    /// )
    /// .unwrap();
    /// assert_eq!(cp.rank(), 2);
    /// assert_eq!(cp.shape(), vec![3, 4]);
    /// ```
    pub fn new(weights: Option<Array1<T>>, factors: Vec<Array2<T>>) -> Result<Self, CpError> {
        let cp = Self { weights, factors };
        cp.validate()?;
        Ok(cp)
    }

    /// CP tensor with unit weights
    pub fn from_factors(factors: Vec<Array2<T>>) -> Result<Self, CpError> {
        Self::new(None, factors)
    }

    /// Check the CP invariants and return the rank
    pub fn validate(&self) -> Result<usize, CpError> {
        if self.factors.is_empty() {
            return Err(CpError::EmptyFactors);
        }

        let rank = common_rank("cp_tensor", &self.factor_views())?;

        if let Some(weights) = &self.weights {
            if weights.len() != rank {
                return Err(CpError::ShapeMismatch(format!(
                    "{} weights for rank {}",
                    weights.len(),
                    rank
                )));
            }
        }

        Ok(rank)
    }

    /// Number of rank-1 components (0 for an empty factor set)
    pub fn rank(&self) -> usize {
        self.factors.first().map_or(0, |f| f.ncols())
    }

    /// Number of modes
    pub fn n_modes(&self) -> usize {
        self.factors.len()
    }

    /// Shape of the represented tensor
    pub fn shape(&self) -> Vec<usize> {
        self.factors.iter().map(|f| f.nrows()).collect()
    }

    /// Borrowed views of the factor matrices
    pub fn factor_views(&self) -> Vec<ArrayView2<'_, T>> {
        self.factors.iter().map(|f| f.view()).collect()
    }

    /// Component weights, with ones in place of missing weights
    pub fn weights_or_ones(&self) -> Array1<T> {
        match &self.weights {
            Some(w) => w.clone(),
            None => Array1::from_elem(self.rank(), T::one()),
        }
    }

    /// Reconstruct the dense tensor
    ///
    /// Computes X̂ = Σᵣ λᵣ (u₁ᵣ ∘ u₂ᵣ ∘ ... ∘ uₙᵣ). Meant for verification and
    /// small tensors; the estimates in this crate never call it.
    ///
    /// # Complexity
    ///
    /// Time: O(R × N × ∏ᵢ Iᵢ)
    /// Space: O(∏ᵢ Iᵢ)
    pub fn reconstruct(&self) -> Result<Array<T, IxDyn>> {
        let rank = self.validate()?;
        let shape = self.shape();
        let weights = self.weights_or_ones();
        let n_modes = shape.len();

        let total_size: usize = shape.iter().product();
        let mut data = vec![T::zero(); total_size];

        for r in 0..rank {
            for (idx, value) in data.iter_mut().enumerate() {
                let mut term = weights[r];
                let mut remaining = idx;

                // Linear index to multi-index, last mode fastest
                for mode in (0..n_modes).rev() {
                    let mode_idx = remaining % shape[mode];
                    remaining /= shape[mode];
                    term *= self.factors[mode][[mode_idx, r]];
                }

                *value += term;
            }
        }

        Ok(Array::from_shape_vec(IxDyn(&shape), data)?)
    }
}

/// Frobenius norm of a CP tensor without reconstructing it
///
/// ‖X̂‖² = Σ_{s,r} conj(λₛ) λᵣ ∏ₙ (Uₙᴴ Uₙ)[s,r]
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_decomp::{cp_norm, CpTensor};
///
/// // Rank-1 tensor [1, 2] ∘ [3, 4]: norm = √5 · 5
/// let cp =
///     CpTensor::from_factors(vec![array![[1.0f64], [2.0]], array![[3.0f64], [4.0]]]).unwrap();
/// assert!((cp_norm(&cp).unwrap() - 5.0 * 5.0f64.sqrt()).abs() < 1e-12);
/// ```
pub fn cp_norm<T: Scalar>(cp: &CpTensor<T>) -> Result<T::Real, CpError> {
    let rank = cp.validate()?;
    let weights = cp.weights_or_ones();

    let mut acc = ones_like_context(&cp.factors[0], (rank, rank));
    for s in 0..rank {
        for r in 0..rank {
            acc[[s, r]] = weights[s].conj() * weights[r];
        }
    }

    for factor in &cp.factors {
        hadamard_inplace(&mut acc.view_mut(), &gram(&factor.view()).view())?;
    }

    // Hermitian sum: the imaginary parts cancel
    let norm_sq = acc.iter().fold(T::zero(), |sum, &x| sum + x).re();
    Ok(norm_sq.max(<T::Real as Zero>::zero()).sqrt())
}
