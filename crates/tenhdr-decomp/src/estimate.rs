//! Reconstruction error of a CP model from a cached MTTKRP
//!
//! ‖X − X̂‖² = ‖X‖² + ‖X̂‖² − 2 Re⟨X, X̂⟩
//!
//! ‖X‖² is computed once per decomposition, ‖X̂‖ comes from the factor Gram
//! matrices ([`cp_norm`]) and ⟨X, X̂⟩ from the MTTKRP of the last mode, which
//! the ALS sweep has just computed anyway:
//!
//! ⟨X, X̂⟩ = Σᵣ conj(λᵣ) Σᵢ MTTKRP[i,r] · conj(U_N[i,r])
//!
//! No term touches more than O(I·R) or O(R²) values.

use crate::cp::{cp_norm, CpError, CpTensor};
use scirs2_core::ndarray_ext::ArrayView2;
use scirs2_core::numeric::{Float, NumCast, One, ToPrimitive, Zero};
use tenhdr_core::Scalar;
use tenhdr_kernels::column_inner_products;

/// Treatment of a negative radicand `‖X‖² + ‖X̂‖² − 2 Re⟨X, X̂⟩`
///
/// A negative radicand is floating-point cancellation when the fit is nearly
/// perfect, or a sign error upstream when it is large.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResidualGuard {
    /// `sqrt(|radicand|)`
    #[default]
    Absolute,
    /// `sqrt(max(radicand, 0))`
    Clamp,
    /// Clamp within tolerance, fail with [`CpError::NegativeResidual`] beyond it
    Strict,
}

/// Configuration of the error estimate
///
/// # Examples
///
/// ```
/// use tenhdr_decomp::{ErrorEstimateConfig, ResidualGuard};
///
/// let config = ErrorEstimateConfig::default()
///     .with_guard(ResidualGuard::Strict)
///     .with_tolerance(1e-6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorEstimateConfig {
    /// Treatment of negative radicands
    pub guard: ResidualGuard,

    /// Relative tolerance for negative radicands
    ///
    /// Scaled by `max(|‖X‖² + ‖X̂‖²|, 1)`. Negative radicands within it are
    /// treated as cancellation noise.
    pub tolerance: f64,
}

impl Default for ErrorEstimateConfig {
    fn default() -> Self {
        Self {
            guard: ResidualGuard::Absolute,
            tolerance: 1e-8,
        }
    }
}

impl ErrorEstimateConfig {
    /// Strict guard with the default tolerance
    pub fn strict() -> Self {
        Self {
            guard: ResidualGuard::Strict,
            ..Default::default()
        }
    }

    pub fn with_guard(mut self, guard: ResidualGuard) -> Self {
        self.guard = guard;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> Result<(), CpError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(CpError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// The terms of the error identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorTerms<R> {
    /// ‖X‖² as supplied by the caller
    pub norm_tensor: R,
    /// ‖X̂‖
    pub factors_norm: R,
    /// Re⟨X, X̂⟩
    pub iprod: R,
    /// ‖X‖² + ‖X̂‖² − 2 Re⟨X, X̂⟩
    pub radicand: R,
}

/// Compute the terms of the error identity without applying any guard
///
/// # Errors
///
/// - invalid CP tensor (empty, rank mismatch, weight length)
/// - `mttkrp` shape different from the last factor's shape
pub fn error_terms<T: Scalar>(
    cp: &CpTensor<T>,
    mttkrp: &ArrayView2<T>,
    norm_tensor: T::Real,
) -> Result<ErrorTerms<T::Real>, CpError> {
    let factors_norm = cp_norm(cp)?;

    let last = cp.factors.last().ok_or(CpError::EmptyFactors)?;
    if mttkrp.shape() != last.shape() {
        return Err(CpError::ShapeMismatch(format!(
            "MTTKRP has shape {:?}, last factor has shape {:?}",
            mttkrp.shape(),
            last.shape()
        )));
    }

    let per_component = column_inner_products(mttkrp, &last.view())?;
    let iprod = match &cp.weights {
        Some(weights) => per_component
            .iter()
            .zip(weights.iter())
            .fold(T::zero(), |acc, (&c, &w)| acc + w.conj() * c),
        None => per_component.iter().fold(T::zero(), |acc, &c| acc + c),
    }
    .re();

    let two = <T::Real as One>::one() + <T::Real as One>::one();
    let radicand = norm_tensor + factors_norm * factors_norm - two * iprod;

    Ok(ErrorTerms {
        norm_tensor,
        factors_norm,
        iprod,
        radicand,
    })
}

/// Estimate the reconstruction error ‖X − X̂‖ with the default configuration
///
/// `norm_tensor` is the **squared** Frobenius norm ‖X‖² of the decomposed
/// tensor and `mttkrp` the MTTKRP of the last mode computed with the current
/// factors. A negative radicand goes through the absolute value, so the
/// result is always a real, non-negative number.
///
/// # Examples
///
/// ```
/// use scirs2_core::ndarray_ext::array;
/// use tenhdr_decomp::{estimate_error, CpTensor};
/// use tenhdr_kernels::{frobenius_norm_sq, mttkrp};
///
/// let cp = CpTensor::from_factors(vec![
///     array![[1.0f64, 0.5], [0.0, 1.0]],
///     array![[2.0f64, 1.0], [1.0, -1.0], [0.5, 0.5]],
/// ])?;
/// let tensor = cp.reconstruct()?;
///
/// let views = cp.factor_views();
/// let m = mttkrp(&tensor.view(), &views, 1)?;
/// let err = estimate_error(&cp, &m.view(), frobenius_norm_sq(&tensor.view()))?;
/// assert!(err < 1e-5);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn estimate_error<T: Scalar>(
    cp: &CpTensor<T>,
    mttkrp: &ArrayView2<T>,
    norm_tensor: T::Real,
) -> Result<T::Real, CpError> {
    estimate_error_with(cp, mttkrp, norm_tensor, &ErrorEstimateConfig::default())
}

/// Estimate the reconstruction error ‖X − X̂‖ with an explicit configuration
pub fn estimate_error_with<T: Scalar>(
    cp: &CpTensor<T>,
    mttkrp: &ArrayView2<T>,
    norm_tensor: T::Real,
    config: &ErrorEstimateConfig,
) -> Result<T::Real, CpError> {
    config.validate()?;
    let terms = error_terms(cp, mttkrp, norm_tensor)?;
    let zero = <T::Real as Zero>::zero();
    let radicand = terms.radicand;

    log::debug!(
        "CP error terms: norm_tensor={} factors_norm={} iprod={} radicand={}",
        terms.norm_tensor,
        terms.factors_norm,
        terms.iprod,
        radicand
    );

    if radicand < zero {
        let scale = (terms.norm_tensor + terms.factors_norm * terms.factors_norm)
            .abs()
            .max(<T::Real as One>::one());
        let tolerance = <T::Real as NumCast>::from(config.tolerance)
            .ok_or(CpError::InvalidTolerance(config.tolerance))?;
        let threshold = tolerance * scale;

        if -radicand > threshold {
            match config.guard {
                ResidualGuard::Strict => {
                    return Err(CpError::NegativeResidual {
                        radicand: ToPrimitive::to_f64(&radicand).unwrap_or(f64::NAN),
                        threshold: ToPrimitive::to_f64(&threshold).unwrap_or(f64::NAN),
                    });
                }
                ResidualGuard::Absolute | ResidualGuard::Clamp => {
                    log::warn!(
                        "Negative CP error radicand {} exceeds tolerance {} ({:?} guard applied)",
                        radicand,
                        threshold,
                        config.guard
                    );
                }
            }
        }
    }

    let guarded = match config.guard {
        ResidualGuard::Absolute => radicand.abs(),
        ResidualGuard::Clamp | ResidualGuard::Strict => radicand.max(zero),
    };

    Ok(guarded.sqrt())
}

/// Normalize an error estimate by ‖X‖
///
/// `norm_tensor` is the squared norm passed to [`estimate_error`]. A zero (or
/// negative) `norm_tensor` leaves `error` unnormalized.
///
/// # Examples
///
/// ```
/// use tenhdr_decomp::relative_error;
///
/// assert_eq!(relative_error(2.0f64, 16.0), 0.5);
/// assert_eq!(relative_error(2.0f64, 0.0), 2.0);
/// ```
pub fn relative_error<R: Float>(error: R, norm_tensor: R) -> R {
    if norm_tensor > R::zero() {
        error / norm_tensor.sqrt()
    } else {
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::{array, Array2};
    use scirs2_core::num_complex::Complex;
    use tenhdr_kernels::{frobenius_norm_sq, mttkrp};

    fn cp_rank2() -> CpTensor<f64> {
        CpTensor::from_factors(vec![
            array![[1.0f64, 0.5], [0.0, 1.0], [2.0, -1.0]],
            array![[1.0f64, 1.0], [0.5, -0.5], [0.0, 2.0]],
            array![[0.3f64, 1.0], [1.0, 0.0], [-1.0, 0.5]],
        ])
        .unwrap()
    }

    #[test]
    fn test_perfect_fit_is_zero() {
        let cp = cp_rank2();
        let tensor = cp.reconstruct().unwrap();
        let m = mttkrp(&tensor.view(), &cp.factor_views(), 2).unwrap();

        let err = estimate_error(&cp, &m.view(), frobenius_norm_sq(&tensor.view())).unwrap();
        assert!(err < 1e-5, "error = {}", err);
    }

    #[test]
    fn test_terms_perfect_fit() {
        let cp = cp_rank2();
        let tensor = cp.reconstruct().unwrap();
        let m = mttkrp(&tensor.view(), &cp.factor_views(), 2).unwrap();
        let norm_sq = frobenius_norm_sq(&tensor.view());

        let terms = error_terms(&cp, &m.view(), norm_sq).unwrap();
        assert!((terms.iprod - norm_sq).abs() < 1e-10);
        assert!((terms.factors_norm * terms.factors_norm - norm_sq).abs() < 1e-10);
    }

    #[test]
    fn test_weighted_matches_explicit() {
        let mut cp = cp_rank2();
        cp.weights = Some(array![2.0f64, -0.5]);

        let tensor = Array2::from_shape_fn((9, 3), |(i, k)| ((i * 3 + k) as f64 * 0.37).sin())
            .into_shape_with_order(vec![3, 3, 3])
            .unwrap();
        let m = mttkrp(&tensor.view(), &cp.factor_views(), 2).unwrap();

        let estimate = estimate_error(&cp, &m.view(), frobenius_norm_sq(&tensor.view())).unwrap();
        let explicit = frobenius_norm_sq(&(&tensor - &cp.reconstruct().unwrap()).view()).sqrt();
        assert!((estimate - explicit).abs() < 1e-8);
    }

    #[test]
    fn test_complex_matches_explicit() {
        let cp = CpTensor::from_factors(vec![
            array![
                [Complex::new(1.0f64, 0.5), Complex::new(0.0, 1.0)],
                [Complex::new(-0.5, 0.0), Complex::new(1.0, -1.0)]
            ],
            array![
                [Complex::new(0.3f64, 0.0), Complex::new(0.0, -2.0)],
                [Complex::new(1.0, 1.0), Complex::new(0.5, 0.5)],
                [Complex::new(0.0, 0.7), Complex::new(1.0, 0.0)]
            ],
        ])
        .unwrap();
        let tensor = array![
            [Complex::new(1.0f64, 0.0), Complex::new(0.0, 1.0), Complex::new(2.0, -1.0)],
            [Complex::new(0.5, 0.5), Complex::new(-1.0, 0.0), Complex::new(0.0, 0.0)]
        ]
        .into_dyn();
        let m = mttkrp(&tensor.view(), &cp.factor_views(), 1).unwrap();

        let estimate = estimate_error(&cp, &m.view(), frobenius_norm_sq(&tensor.view())).unwrap();
        let explicit = frobenius_norm_sq(&(&tensor - &cp.reconstruct().unwrap()).view()).sqrt();
        assert!((estimate - explicit).abs() < 1e-8);
    }

    #[test]
    fn test_negative_radicand_guards() {
        // norm_tensor + ‖X̂‖² − 2·iprod with iprod far too large
        let cp = CpTensor::from_factors(vec![array![[1.0f64]], array![[1.0f64]]]).unwrap();
        let m = array![[10.0f64]];

        // 1 + 1 − 20 = −18
        let abs = estimate_error(&cp, &m.view(), 1.0).unwrap();
        assert!((abs - 18.0f64.sqrt()).abs() < 1e-12);

        let clamp = ErrorEstimateConfig::default().with_guard(ResidualGuard::Clamp);
        assert_eq!(estimate_error_with(&cp, &m.view(), 1.0, &clamp).unwrap(), 0.0);

        let strict = ErrorEstimateConfig::strict();
        let err = estimate_error_with(&cp, &m.view(), 1.0, &strict).unwrap_err();
        assert!(matches!(err, CpError::NegativeResidual { radicand, .. } if radicand == -18.0));
    }

    #[test]
    fn test_strict_tolerates_cancellation_noise() {
        let cp = CpTensor::from_factors(vec![array![[1.0f64]], array![[1.0f64]]]).unwrap();
        // 1 + 1 − 2·(1 + 1e-12) is a tiny negative radicand
        let m = array![[1.0f64 + 1e-12]];

        let err = estimate_error_with(&cp, &m.view(), 1.0, &ErrorEstimateConfig::strict()).unwrap();
        assert_eq!(err, 0.0);
    }

    #[test]
    fn test_invalid_tolerance() {
        let cp = CpTensor::from_factors(vec![array![[1.0f64]], array![[1.0f64]]]).unwrap();
        let m = array![[1.0f64]];
        let config = ErrorEstimateConfig::default().with_tolerance(-1.0);

        assert!(matches!(
            estimate_error_with(&cp, &m.view(), 1.0, &config),
            Err(CpError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_mttkrp_shape_mismatch() {
        let cp = cp_rank2();
        let m = Array2::<f64>::zeros((4, 2));
        assert!(matches!(
            estimate_error(&cp, &m.view(), 1.0),
            Err(CpError::ShapeMismatch(_))
        ));
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(3.0f64, 9.0), 1.0);
        assert_eq!(relative_error(0.0f64, 0.0), 0.0);
    }
}
