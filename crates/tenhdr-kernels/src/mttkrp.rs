//! MTTKRP (Matricized Tensor Times Khatri-Rao Product)
//!
//! For a tensor X and factor matrices {U₁, ..., Uₙ} the mode-n MTTKRP is
//!
//! V = X_(n) · conj(U₁ ⊙ ... ⊙ Uₙ₋₁ ⊙ Uₙ₊₁ ⊙ ... ⊙ U_N)
//!
//! where X_(n) is the mode-n matricization and ⊙ the Khatri-Rao product.
//! Conjugation is a no-op for real scalars. With this convention
//! `Σ V ∘ conj(Uₙ)` is the inner product ⟨X, X̂⟩ with the CP reconstruction
//! X̂, which is what the error estimate in `tenhdr-decomp` relies on.

use crate::error::{KernelError, KernelResult};
use crate::gram::common_rank;
use crate::khatri_rao::khatri_rao_except;
use scirs2_core::ndarray_ext::{Array2, ArrayView, ArrayView2, IxDyn};
use tenhdr_core::{unfold, zeros_like_context, Scalar};

/// Compute the mode-`mode` MTTKRP of `tensor` with `factors`
///
/// # Errors
///
/// - `mode` out of bounds
/// - number of factors different from the tensor order
/// - factors with differing ranks, or row counts that differ from the mode sizes
/// - tensors with a single mode (there is no Khatri-Rao product to form)
///
/// # Complexity
///
/// Time: O(I_mode × R × ∏ᵢ≠mode Iᵢ)
/// Space: O(R × ∏ᵢ≠mode Iᵢ)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::{Array, Array2};
/// use tenhdr_kernels::mttkrp;
///
/// let tensor = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap();
/// let u1 = Array2::<f64>::ones((2, 2));
/// let u2 = Array2::<f64>::ones((3, 2));
/// let u3 = Array2::<f64>::ones((4, 2));
///
/// let v = mttkrp(&tensor.view(), &[u1.view(), u2.view(), u3.view()], 1).unwrap();
/// assert_eq!(v.shape(), &[3, 2]);
/// ```
pub fn mttkrp<T: Scalar>(
    tensor: &ArrayView<T, IxDyn>,
    factors: &[ArrayView2<T>],
    mode: usize,
) -> KernelResult<Array2<T>> {
    let shape = tensor.shape();
    let n_modes = shape.len();

    if mode >= n_modes {
        return Err(KernelError::invalid_mode("mttkrp", mode, n_modes));
    }

    if factors.len() != n_modes {
        return Err(KernelError::dimension_mismatch(
            "mttkrp",
            vec![n_modes],
            vec![factors.len()],
            "one factor matrix per tensor mode is required",
        ));
    }

    let rank = common_rank("mttkrp", factors)?;

    for (i, factor) in factors.iter().enumerate() {
        if factor.nrows() != shape[i] {
            return Err(KernelError::dimension_mismatch(
                "mttkrp",
                vec![shape[i], rank],
                factor.shape().to_vec(),
                format!("factor {} must have one row per index of mode {}", i, i),
            ));
        }
    }

    let unfolded =
        unfold(tensor, mode).map_err(|e| KernelError::operation_error("mttkrp", e.to_string()))?;
    let kr = khatri_rao_except(factors, mode)?;

    let mode_size = shape[mode];
    let mut result = zeros_like_context(&factors[mode], (mode_size, rank));

    for i in 0..mode_size {
        let row = unfolded.row(i);
        for r in 0..rank {
            let mut sum = T::zero();
            for (j, &x) in row.iter().enumerate() {
                sum += x * kr[[j, r]].conj();
            }
            result[[i, r]] = sum;
        }
    }

    Ok(result)
}
