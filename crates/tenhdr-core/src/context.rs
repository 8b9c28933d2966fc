//! Array contexts: element type and storage location of an array
//!
//! Kernels never guess where a new array should live. They read the
//! [`Context`] of an input array and allocate the output with the same
//! element type on the same device through [`ones_like_context`] or
//! [`zeros_like_context`].

use crate::scalar::{DType, Scalar};
use scirs2_core::ndarray::{ArrayBase, Data, Dimension};
use scirs2_core::ndarray_ext::Array2;
use std::fmt;

/// Storage location of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Device {
    /// Host memory
    #[default]
    Cpu,
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => f.write_str("cpu"),
        }
    }
}

/// Element type and device of an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Context {
    pub dtype: DType,
    pub device: Device,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.dtype, self.device)
    }
}

/// Array-like value with a shape, an element type and a device
///
/// Implemented for every `scirs2_core` array (owned arrays and views).
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::Array2;
/// use tenhdr_core::{ArrayContext, DType, Device};
///
/// let a = Array2::<f64>::zeros((3, 2));
/// assert_eq!(a.dims(), &[3, 2]);
/// assert_eq!(a.dtype(), DType::F64);
/// assert_eq!(a.device(), Device::Cpu);
/// ```
pub trait ArrayContext {
    type Elem: Scalar;

    /// Extent of every axis
    fn dims(&self) -> &[usize];

    /// Element type tag
    fn dtype(&self) -> DType {
        <Self::Elem as Scalar>::DTYPE
    }

    /// Storage location
    fn device(&self) -> Device;

    /// Element type and device together
    fn context(&self) -> Context {
        Context {
            dtype: self.dtype(),
            device: self.device(),
        }
    }
}

impl<S, D, T> ArrayContext for ArrayBase<S, D>
where
    S: Data<Elem = T>,
    D: Dimension,
    T: Scalar,
{
    type Elem = T;

    fn dims(&self) -> &[usize] {
        self.shape()
    }

    fn device(&self) -> Device {
        Device::Cpu
    }
}

/// Allocate a matrix of ones compatible with `template`
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_core::ones_like_context;
///
/// let factor = array![[1.0f64, 2.0], [3.0, 4.0], [5.0, 6.0]];
/// let acc = ones_like_context(&factor, (2, 2));
/// assert_eq!(acc.shape(), &[2, 2]);
/// assert!(acc.iter().all(|&x| x == 1.0));
/// ```
pub fn ones_like_context<C>(template: &C, shape: (usize, usize)) -> Array2<C::Elem>
where
    C: ArrayContext + ?Sized,
{
    match template.device() {
        Device::Cpu => Array2::from_elem(shape, <C::Elem as scirs2_core::numeric::One>::one()),
    }
}

/// Allocate a matrix of zeros compatible with `template`
pub fn zeros_like_context<C>(template: &C, shape: (usize, usize)) -> Array2<C::Elem>
where
    C: ArrayContext + ?Sized,
{
    match template.device() {
        Device::Cpu => Array2::from_elem(shape, <C::Elem as scirs2_core::numeric::Zero>::zero()),
    }
}
