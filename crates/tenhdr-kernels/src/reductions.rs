//! Reductions producing the real quantities of the CP error identity

use crate::error::{KernelError, KernelResult};
use scirs2_core::ndarray::Dimension;
use scirs2_core::ndarray_ext::{Array1, ArrayView, ArrayView2, Zip};
use tenhdr_core::Scalar;

/// Squared Frobenius norm ‖X‖² = Σ |x|²
///
/// This is the `norm_tensor` a CP-ALS loop computes once per decomposition.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::frobenius_norm_sq;
///
/// let a = array![[1.0f64, 2.0], [2.0, 4.0]];
/// assert_eq!(frobenius_norm_sq(&a.view()), 25.0);
/// ```
pub fn frobenius_norm_sq<T, D>(tensor: &ArrayView<T, D>) -> T::Real
where
    T: Scalar,
    D: Dimension,
{
    tensor.iter().map(|x| x.abs_sqr()).sum()
}

/// Column-wise inner products cᵣ = Σᵢ a[i,r] · conj(b[i,r])
///
/// # Errors
///
/// Returns [`KernelError::IncompatibleShapes`] if the shapes differ.
pub fn column_inner_products<T: Scalar>(
    a: &ArrayView2<T>,
    b: &ArrayView2<T>,
) -> KernelResult<Array1<T>> {
    if a.shape() != b.shape() {
        return Err(KernelError::incompatible_shapes(
            "column_inner_products",
            a.shape(),
            b.shape(),
        ));
    }

    let mut sums = Array1::from_elem(a.ncols(), T::zero());
    for (r, sum) in sums.iter_mut().enumerate() {
        for (&x, &y) in a.column(r).iter().zip(b.column(r).iter()) {
            *sum += x * y.conj();
        }
    }

    Ok(sums)
}

/// Real part of the Frobenius inner product: Re Σ a ∘ conj(b)
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_kernels::inner_product;
///
/// let a = array![[1.0f64, 2.0], [3.0, 4.0]];
/// let b = array![[1.0f64, 0.0], [0.0, 1.0]];
/// assert_eq!(inner_product(&a.view(), &b.view()).unwrap(), 5.0);
/// ```
pub fn inner_product<T: Scalar>(a: &ArrayView2<T>, b: &ArrayView2<T>) -> KernelResult<T::Real> {
    if a.shape() != b.shape() {
        return Err(KernelError::incompatible_shapes(
            "inner_product",
            a.shape(),
            b.shape(),
        ));
    }

    let mut total = T::zero();
    Zip::from(a).and(b).for_each(|&x, &y| total += x * y.conj());
    Ok(total.re())
}
