//! Coefficient matrix of a CP-ALS mode update
//!
//! Updating factor n with the others fixed solves
//!
//! Uₙ · V = MTTKRP(n),   V = ∘_{k≠n} (Uₖᴴ Uₖ)
//!
//! where ∘ is the Hadamard product. V is the Gram matrix of the Khatri-Rao
//! product of the other factors, obtained here without ever forming that
//! product: only R × R matrices are combined.

use crate::cp::CpError;
use scirs2_core::ndarray_ext::Array2;
use tenhdr_core::{ones_like_context, Scalar};
use tenhdr_kernels::{common_rank, gram, hadamard_inplace};

/// Build the Hadamard product of the Gram matrices of all factors except `target_mode`
///
/// The accumulator starts as an R × R matrix of ones (the identity of the
/// element-wise product) allocated with the element type and device of the
/// first factor. The result is Hermitian positive semi-definite.
///
/// A single factor with `target_mode = 0` yields the all-ones matrix.
///
/// # Errors
///
/// - [`CpError::EmptyFactors`] for an empty factor set
/// - [`CpError::InvalidMode`] if `target_mode` is out of range
/// - [`CpError::Kernel`] wrapping a rank mismatch between factors
///
/// # Complexity
///
/// Time: O(Σₖ≠ₙ Iₖ × R²)
/// Space: O(R²)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_decomp::pseudo_inverse;
///
/// let a = array![[1.0f64, 0.0], [0.0, 1.0], [1.0, 1.0]];
/// let b = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0], [0.0, 1.0]];
///
/// // Only the Gram matrix of `b` contributes
/// let v = pseudo_inverse(&[a, b], 0).unwrap();
/// assert_eq!(v, array![[35.0f64, 44.0], [44.0, 57.0]]);
/// ```
pub fn pseudo_inverse<T: Scalar>(
    factors: &[Array2<T>],
    target_mode: usize,
) -> Result<Array2<T>, CpError> {
    let first = factors.first().ok_or(CpError::EmptyFactors)?;

    if target_mode >= factors.len() {
        return Err(CpError::InvalidMode {
            mode: target_mode,
            n_modes: factors.len(),
        });
    }

    let views: Vec<_> = factors.iter().map(|f| f.view()).collect();
    let rank = common_rank("pseudo_inverse", &views)?;

    let mut acc = ones_like_context(first, (rank, rank));

    for (mode, factor) in views.iter().enumerate() {
        if mode == target_mode {
            continue;
        }
        hadamard_inplace(&mut acc.view_mut(), &gram(factor).view())?;
    }

    Ok(acc)
}
