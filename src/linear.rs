use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::{PerceptronErr, Result};

/// Computes the weighted sum of a single example: the dot product of
/// `features` and `weights` plus `bias`.
///
/// # Arguments
/// * `features` - One example, length `n_features`.
/// * `weights` - The weight vector, length `n_features`.
/// * `bias` - The scalar added to the dot product.
///
/// # Returns
/// The weighted sum, or a `SizeMismatch` error when the feature and weight
/// lengths differ.
pub fn weighted_sum(
    features: ArrayView1<f32>,
    weights: ArrayView1<f32>,
    bias: f32,
) -> Result<f32> {
    if features.len() != weights.len() {
        return Err(PerceptronErr::SizeMismatch {
            a: "features",
            b: "weights",
            got: features.len(),
            expected: weights.len(),
        });
    }

    Ok(features.dot(&weights) + bias)
}

/// Computes the weighted sums of a batch of examples, one per row of `x`,
/// with `bias` broadcast across all rows. This is the batch shape of
/// [`weighted_sum`]; the two are the only supported input shapes.
///
/// # Arguments
/// * `x` - The examples, shape `(m_examples, n_features)`.
/// * `weights` - The weight vector, length `n_features`.
/// * `bias` - The scalar added to every row's dot product.
///
/// # Returns
/// One weighted sum per row, or a `SizeMismatch` error when the column count
/// of `x` differs from the weight length.
pub fn weighted_sums(
    x: ArrayView2<f32>,
    weights: ArrayView1<f32>,
    bias: f32,
) -> Result<Array1<f32>> {
    if x.ncols() != weights.len() {
        return Err(PerceptronErr::SizeMismatch {
            a: "features",
            b: "weights",
            got: x.ncols(),
            expected: weights.len(),
        });
    }

    Ok(x.dot(&weights) + bias)
}
