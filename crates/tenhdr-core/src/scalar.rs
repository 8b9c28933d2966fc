//! Element types accepted by TenHDR kernels
//!
//! Real and complex element types share one trait so that conjugation is
//! resolved at compile time: `conj` is the identity for `f32`/`f64` and a sign
//! flip of the imaginary part for `Complex<f32>`/`Complex<f64>`.
//!
//! Quantities that are always real (norms, inner-product real parts, error
//! estimates) are expressed in the associated `Scalar::Real` type.

use scirs2_core::num_complex::Complex;
use scirs2_core::numeric::{Float, Num, NumAssign};
use std::fmt;
use std::iter::Sum;

/// Runtime tag for a scalar element type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DType {
    F32,
    F64,
    Complex32,
    Complex64,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::Complex32 => "complex64",
            DType::Complex64 => "complex128",
        };
        f.write_str(name)
    }
}

/// Element type of factor matrices, MTTKRP results and dense tensors
///
/// # Examples
///
/// ```
/// use scirs2_core::num_complex::Complex;
/// use tenhdr_core::Scalar;
///
/// assert_eq!(2.5f64.conj(), 2.5);
///
/// let z = Complex::new(1.0f64, -2.0);
/// assert_eq!(z.conj(), Complex::new(1.0, 2.0));
/// assert_eq!(z.abs_sqr(), 5.0);
/// ```
pub trait Scalar: Copy + Num + NumAssign + Send + Sync + fmt::Debug + 'static {
    /// Real counterpart (`f64` for both `f64` and `Complex<f64>`)
    type Real: Float + NumAssign + Sum + Send + Sync + fmt::Debug + fmt::Display + 'static;

    /// Runtime tag of this type
    const DTYPE: DType;

    /// Complex conjugate (identity for real types)
    fn conj(self) -> Self;

    /// Real part
    fn re(self) -> Self::Real;

    /// Squared modulus `|x|²`
    fn abs_sqr(self) -> Self::Real;
}

macro_rules! impl_real_scalar {
    ($t:ty, $dtype:expr) => {
        impl Scalar for $t {
            type Real = $t;

            const DTYPE: DType = $dtype;

            #[inline]
            fn conj(self) -> Self {
                self
            }

            #[inline]
            fn re(self) -> Self::Real {
                self
            }

            #[inline]
            fn abs_sqr(self) -> Self::Real {
                self * self
            }
        }
    };
}

macro_rules! impl_complex_scalar {
    ($t:ty, $dtype:expr) => {
        impl Scalar for Complex<$t> {
            type Real = $t;

            const DTYPE: DType = $dtype;

            #[inline]
            fn conj(self) -> Self {
                Complex::new(self.re, -self.im)
            }

            #[inline]
            fn re(self) -> Self::Real {
                self.re
            }

            #[inline]
            fn abs_sqr(self) -> Self::Real {
                self.re * self.re + self.im * self.im
            }
        }
    };
}

impl_real_scalar!(f32, DType::F32);
impl_real_scalar!(f64, DType::F64);
impl_complex_scalar!(f32, DType::Complex32);
impl_complex_scalar!(f64, DType::Complex64);
