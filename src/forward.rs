use log::debug;
use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::{Result, activations::sigmoid, init::Bias, linear::weighted_sum};

/// The default decision threshold.
pub const DEFAULT_THRESHOLD: f32 = 0.5;

/// The outcome of a forward pass: three sequences index-aligned with the
/// input rows.
#[derive(Debug)]
pub struct PredictionResult {
    /// The binary decision for each example.
    pub predictions: Array1<u8>,
    /// The raw weighted sum for each example, before activation.
    pub weighted_sums: Array1<f32>,
    /// The sigmoid probability for each example.
    pub sigmoids: Array1<f32>,
}

/// Runs the forward pass over every row of `x` in order: weighted sum,
/// sigmoid, then the binary decision. A row is classified positive only when
/// its probability is *strictly greater* than `threshold`; a tie at exactly
/// `threshold` predicts 0.
///
/// # Arguments
/// * `x` - The examples, shape `(m_examples, n_features)`.
/// * `weights` - The weight vector, length `n_features`.
/// * `bias` - The bias term, in either of its shapes.
/// * `threshold` - The decision boundary.
///
/// # Returns
/// The predictions, weighted sums and probabilities for every row, or a
/// `SizeMismatch` error when a row's length differs from the weight length.
pub fn forward_prop(
    x: ArrayView2<f32>,
    weights: ArrayView1<f32>,
    bias: &Bias,
    threshold: f32,
) -> Result<PredictionResult> {
    let m_examples = x.nrows();

    let mut predictions = Array1::zeros(m_examples);
    let mut weighted_sums = Array1::zeros(m_examples);
    let mut sigmoids = Array1::zeros(m_examples);

    for (i, example) in x.rows().into_iter().enumerate() {
        let z = weighted_sum(example, weights, bias.value())?;
        let p = sigmoid(z);

        weighted_sums[i] = z;
        sigmoids[i] = p;
        predictions[i] = u8::from(p > threshold);
    }

    debug!(m_examples = m_examples, threshold = threshold; "forward pass complete");

    Ok(PredictionResult {
        predictions,
        weighted_sums,
        sigmoids,
    })
}

/// [`forward_prop`] with the default 0.5 threshold.
pub fn forward_prop_default(
    x: ArrayView2<f32>,
    weights: ArrayView1<f32>,
    bias: &Bias,
) -> Result<PredictionResult> {
    forward_prop(x, weights, bias, DEFAULT_THRESHOLD)
}
