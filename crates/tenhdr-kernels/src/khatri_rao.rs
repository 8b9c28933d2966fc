//! Khatri-Rao product (column-wise Kronecker product)
//!
//! For A (I × K) and B (J × K) the product A ⊙ B has shape (I·J × K); column k
//! is the Kronecker product of column k of A and column k of B, with the row
//! index of A varying slowest.

use crate::error::{KernelError, KernelResult};
use crate::gram::common_rank;
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use tenhdr_core::{zeros_like_context, Scalar};

/// Compute the Khatri-Rao product of two matrices
///
/// # Complexity
///
/// Time: O(I · J · K)
/// Space: O(I · J · K)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::khatri_rao;
///
/// let a = array![[1.0f64, 2.0], [3.0, 4.0]];
/// let b = array![[5.0f64, 6.0], [7.0, 8.0]];
/// let c = khatri_rao(&a.view(), &b.view()).unwrap();
/// assert_eq!(c.shape(), &[4, 2]);
///
/// // First column: [1*5, 1*7, 3*5, 3*7]
/// assert_eq!(c[[0, 0]], 5.0);
/// assert_eq!(c[[1, 0]], 7.0);
/// assert_eq!(c[[2, 0]], 15.0);
/// assert_eq!(c[[3, 0]], 21.0);
/// ```
pub fn khatri_rao<T: Scalar>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> KernelResult<Array2<T>> {
    let (i, k) = a.dim();
    let (j, k_b) = b.dim();

    if k != k_b {
        return Err(KernelError::rank_mismatch("khatri_rao", k, k_b, 1));
    }

    let mut result = zeros_like_context(a, (i * j, k));

    for col in 0..k {
        for (row_a, &a_val) in a.column(col).iter().enumerate() {
            for (row_b, &b_val) in b.column(col).iter().enumerate() {
                result[[row_a * j + row_b, col]] = a_val * b_val;
            }
        }
    }

    Ok(result)
}

/// Khatri-Rao product of every factor except `skip_mode`, in forward order
///
/// The row order matches the column order of [`tenhdr_core::unfold`] for the
/// same mode, so `unfold(X, n) · khatri_rao_except(factors, n)` is the MTTKRP.
pub fn khatri_rao_except<T: Scalar>(
    factors: &[ArrayView2<T>],
    skip_mode: usize,
) -> KernelResult<Array2<T>> {
    common_rank("khatri_rao_except", factors)?;
    if skip_mode >= factors.len() {
        return Err(KernelError::invalid_mode(
            "khatri_rao_except",
            skip_mode,
            factors.len(),
        ));
    }

    let mut remaining = factors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != skip_mode)
        .map(|(_, f)| f);

    let first = remaining.next().ok_or_else(|| {
        KernelError::empty_input("khatri_rao_except", "factors other than the skipped mode")
    })?;

    remaining.try_fold(first.to_owned(), |acc, factor| {
        khatri_rao(&acc.view(), factor)
    })
}
