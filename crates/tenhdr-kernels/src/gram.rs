//! Gram matrices of factor matrices
//!
//! For a factor A (I × R) the Gram matrix is G = Aᴴ A (R × R), holding the
//! pairwise inner products of the columns of A. It is Hermitian (symmetric for
//! real scalars) and positive semi-definite.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array2, ArrayView2};
use tenhdr_core::{zeros_like_context, Scalar};

/// Compute the Gram matrix Aᴴ A
///
/// Only the upper triangle is accumulated; the lower triangle is its conjugate.
///
/// # Complexity
///
/// Time: O(I × R²)
/// Space: O(R²)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::gram;
///
/// let a = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let g = gram(&a.view());
/// assert_eq!(g[[0, 0]], 35.0); // 1² + 3² + 5²
/// assert_eq!(g[[0, 1]], 44.0); // 1·2 + 3·4 + 5·6
/// assert_eq!(g[[1, 0]], 44.0);
/// assert_eq!(g[[1, 1]], 56.0);
/// ```
pub fn gram<T: Scalar>(factor: &ArrayView2<T>) -> Array2<T> {
    let (rows, cols) = factor.dim();
    let mut g = zeros_like_context(factor, (cols, cols));

    for p in 0..cols {
        for q in p..cols {
            let mut sum = T::zero();
            for k in 0..rows {
                sum += factor[[k, p]].conj() * factor[[k, q]];
            }
            g[[p, q]] = sum;
            if p != q {
                g[[q, p]] = sum.conj();
            }
        }
    }

    g
}

/// Check that a factor set is non-empty and shares one rank
///
/// Returns the common number of columns.
pub fn common_rank<T>(operation: &str, factors: &[ArrayView2<T>]) -> KernelResult<usize> {
    let first = factors
        .first()
        .ok_or_else(|| KernelError::empty_input(operation, "factors"))?;
    let rank = first.ncols();

    for (i, factor) in factors.iter().enumerate().skip(1) {
        if factor.ncols() != rank {
            return Err(KernelError::rank_mismatch(
                operation,
                rank,
                factor.ncols(),
                i,
            ));
        }
    }

    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::array;
    use scirs2_core::num_complex::Complex;

    #[test]
    fn test_gram_real() {
        let factor = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let g = gram(&factor.view());

        assert_eq!(g.shape(), &[2, 2]);
        assert!((g[[0, 0]] - 35.0).abs() < 1e-12);
        assert!((g[[1, 1]] - 56.0).abs() < 1e-12);
        assert_eq!(g[[0, 1]], g[[1, 0]]);
    }

    #[test]
    fn test_gram_matches_transpose_product() {
        let factor = array![
            [0.5f64, -1.0, 2.0],
            [1.5, 0.25, -0.75],
            [2.0, 1.0, 0.0],
            [-1.0, 3.0, 1.0]
        ];
        let g = gram(&factor.view());
        let expected = factor.t().dot(&factor);

        for (a, b) in g.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_gram_complex_is_hermitian() {
        let factor = array![
            [Complex::new(1.0f64, 1.0), Complex::new(0.0, 2.0)],
            [Complex::new(2.0, -1.0), Complex::new(1.0, 0.0)]
        ];
        let g = gram(&factor.view());

        // Diagonal holds squared column norms
        assert!((g[[0, 0]].re - 7.0).abs() < 1e-12);
        assert!(g[[0, 0]].im.abs() < 1e-12);
        assert!((g[[1, 1]].re - 5.0).abs() < 1e-12);

        // G[0,1] = conj(1+i)·2i + conj(2-i)·1 = (1-i)·2i + (2+i) = 4 + 3i
        assert!((g[[0, 1]] - Complex::new(4.0, 3.0)).norm() < 1e-12);
        assert!((g[[1, 0]] - Complex::new(4.0, -3.0)).norm() < 1e-12);
    }

    #[test]
    fn test_common_rank() {
        let a = array![[1.0f64, 2.0], [3.0, 4.0]];
        let b = array![[1.0f64, 2.0]];
        let c = array![[1.0f64, 2.0, 3.0]];

        assert_eq!(common_rank("test", &[a.view(), b.view()]).unwrap(), 2);
        assert!(matches!(
            common_rank("test", &[a.view(), c.view()]),
            Err(KernelError::RankMismatch { factor_index: 1, .. })
        ));
        assert!(matches!(
            common_rank::<f64>("test", &[]),
            Err(KernelError::EmptyInput { .. })
        ));
    }
}
