//! Hadamard (element-wise) product
//!
//! For matrices A and B of the same shape, C = A ∘ B where c_ij = a_ij · b_ij.
//! In CP-ALS it combines per-mode Gram matrices into the coefficient matrix of
//! a mode update without forming any Khatri-Rao product.

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray_ext::{Array2, ArrayView2, ArrayViewMut2, Zip};
use tenhdr_core::Scalar;

/// Compute the Hadamard product of two matrices
///
/// # Errors
///
/// Returns [`KernelError::IncompatibleShapes`] if the shapes differ.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::hadamard;
///
/// let a = array![[1.0f64, 2.0], [3.0, 4.0]];
/// let b = array![[5.0f64, 6.0], [7.0, 8.0]];
/// let c = hadamard(&a.view(), &b.view()).unwrap();
/// assert_eq!(c, array![[5.0f64, 12.0], [21.0, 32.0]]);
/// ```
pub fn hadamard<T: Scalar>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> KernelResult<Array2<T>> {
    if a.shape() != b.shape() {
        return Err(KernelError::incompatible_shapes(
            "hadamard",
            a.shape(),
            b.shape(),
        ));
    }

    Ok(Zip::from(a).and(b).map_collect(|&x, &y| x * y))
}

/// In-place Hadamard product: `a ← a ∘ b`
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::hadamard_inplace;
///
/// let mut a = array![[1.0f64, 2.0], [3.0, 4.0]];
/// let b = array![[5.0f64, 6.0], [7.0, 8.0]];
/// hadamard_inplace(&mut a.view_mut(), &b.view()).unwrap();
/// assert_eq!(a[[0, 1]], 12.0);
/// ```
pub fn hadamard_inplace<T: Scalar>(
    a: &mut ArrayViewMut2<T>,
    b: &ArrayView2<T>,
) -> KernelResult<()> {
    if a.shape() != b.shape() {
        return Err(KernelError::incompatible_shapes(
            "hadamard_inplace",
            a.shape(),
            b.shape(),
        ));
    }

    Zip::from(a).and(b).for_each(|x, &y| *x *= y);
    Ok(())
}
