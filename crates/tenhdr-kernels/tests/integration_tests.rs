//! Integration tests for tenhdr-kernels with tenhdr-core
//!
//! These tests chain the kernels the way one CP-ALS mode update does.

use scirs2_core::ndarray_ext::{array, Array, Array2, IxDyn};
use tenhdr_core::{tensor_from_vec, unfold};
use tenhdr_kernels::{
    frobenius_norm_sq, gram, hadamard, inner_product, khatri_rao, khatri_rao_except, mttkrp,
};

/// Dense rank-R tensor Σᵣ a[:,r] ∘ b[:,r] ∘ c[:,r]
fn rank_r_tensor(a: &Array2<f64>, b: &Array2<f64>, c: &Array2<f64>) -> Array<f64, IxDyn> {
    let (i, j, k) = (a.nrows(), b.nrows(), c.nrows());
    Array::from_shape_fn(IxDyn(&[i, j, k]), |idx| {
        (0..a.ncols())
            .map(|r| a[[idx[0], r]] * b[[idx[1], r]] * c[[idx[2], r]])
            .sum()
    })
}

#[test]
fn test_mttkrp_equals_unfold_times_khatri_rao() {
    let tensor = tensor_from_vec((1..=24).map(|x| x as f64).collect(), &[2, 3, 4]).unwrap();
    let u0 = array![[1.0f64, 0.5], [0.5, 1.0]];
    let u1 = array![[1.0f64, 0.0], [0.0, 1.0], [0.5, 0.5]];
    let u2 = array![[1.0f64, 0.0], [0.0, 1.0], [0.5, 0.5], [0.25, 0.75]];
    let factors = [u0.view(), u1.view(), u2.view()];

    for mode in 0..3 {
        let v = mttkrp(&tensor.view(), &factors, mode).unwrap();
        let expected = unfold(&tensor.view(), mode)
            .unwrap()
            .dot(&khatri_rao_except(&factors, mode).unwrap());

        assert_eq!(v.shape(), expected.shape());
        for (x, y) in v.iter().zip(expected.iter()) {
            assert!((x - y).abs() < 1e-10, "mode {}: {} vs {}", mode, x, y);
        }
    }
}

#[test]
fn test_gram_hadamard_matches_khatri_rao_gram() {
    let a = array![[1.0f64, 2.0], [0.5, -1.0], [3.0, 0.0]];
    let b = array![[0.0f64, 1.0], [2.0, 1.0]];

    let via_kr = gram(&khatri_rao(&a.view(), &b.view()).unwrap().view());
    let via_hadamard = hadamard(&gram(&a.view()).view(), &gram(&b.view()).view()).unwrap();

    for (x, y) in via_kr.iter().zip(via_hadamard.iter()) {
        assert!((x - y).abs() < 1e-12);
    }
}

#[test]
fn test_error_identity_from_kernels() {
    // Perfect rank-2 tensor: ‖X‖² + ‖X̂‖² − 2⟨X, X̂⟩ = 0
    let a = array![[1.0f64, 0.5], [0.0, 1.0], [2.0, -1.0]];
    let b = array![[1.0f64, 1.0], [0.5, -0.5], [0.0, 2.0]];
    let c = array![[0.3f64, 1.0], [1.0, 0.0], [-1.0, 0.5]];
    let tensor = rank_r_tensor(&a, &b, &c);
    let factors = [a.view(), b.view(), c.view()];

    let norm_sq = frobenius_norm_sq(&tensor.view());
    let m = mttkrp(&tensor.view(), &factors, 2).unwrap();
    let iprod = inner_product(&m.view(), &c.view()).unwrap();

    let g = hadamard(
        &hadamard(&gram(&a.view()).view(), &gram(&b.view()).view())
            .unwrap()
            .view(),
        &gram(&c.view()).view(),
    )
    .unwrap();
    let recon_norm_sq: f64 = g.sum();

    assert!((norm_sq - iprod).abs() < 1e-10);
    assert!((norm_sq + recon_norm_sq - 2.0 * iprod).abs() < 1e-9);
}
