//! Dense tensor helpers
//!
//! TenHDR works on plain `scirs2_core` dynamic-rank arrays. This module holds
//! the few shape operations the kernels need on top of them.

use anyhow::Result;
use scirs2_core::ndarray_ext::{Array, Array2, ArrayView, IxDyn};

/// Build a dynamic-rank tensor from row-major data
///
/// # Examples
///
/// ```
/// use tenhdr_core::tensor_from_vec;
///
/// let t = tensor_from_vec((0..24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
/// assert_eq!(t.shape(), &[2, 3, 4]);
/// assert_eq!(t[[1, 2, 3]], 23.0);
/// ```
pub fn tensor_from_vec<T>(data: Vec<T>, shape: &[usize]) -> Result<Array<T, IxDyn>> {
    let expected: usize = shape.iter().product();
    if data.len() != expected {
        anyhow::bail!(
            "Data length {} does not match shape {:?} ({} elements)",
            data.len(),
            shape,
            expected
        );
    }
    Ok(Array::from_shape_vec(IxDyn(shape), data)?)
}

/// Mode-`mode` matricization
///
/// Row `i` of the result holds every element whose `mode` index is `i`. The
/// remaining modes are laid out in increasing order, the first of them varying
/// slowest, which matches the row order of a forward Khatri-Rao product.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array;
/// use tenhdr_core::unfold;
///
/// let t = Array::from_shape_vec(vec![2, 3, 4], (0..24).map(|x| x as f64).collect()).unwrap();
/// let m = unfold(&t.view(), 1).unwrap();
/// assert_eq!(m.shape(), &[3, 8]);
/// assert_eq!(m[[1, 0]], 4.0);
/// ```
pub fn unfold<T>(tensor: &ArrayView<T, IxDyn>, mode: usize) -> Result<Array2<T>>
where
    T: Clone,
{
    let shape = tensor.shape();
    if mode >= shape.len() {
        anyhow::bail!(
            "Mode {} out of bounds for tensor with {} modes",
            mode,
            shape.len()
        );
    }

    let mode_size = shape[mode];
    let other_size: usize = shape
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != mode)
        .map(|(_, &s)| s)
        .product();

    let mut perm = Vec::with_capacity(shape.len());
    perm.push(mode);
    perm.extend((0..shape.len()).filter(|&i| i != mode));

    let permuted = tensor.clone().permuted_axes(IxDyn(&perm));
    let contiguous = permuted.as_standard_layout().into_owned();
    Ok(contiguous.into_shape_with_order((mode_size, other_size))?)
}
