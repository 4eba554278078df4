use ndarray::{Array, ArrayView, Dimension};

/// The logistic function, `1 / (1 + e^(-z))`.
///
/// Maps finite reals into `(0, 1)`; extreme magnitudes saturate to 0 or 1
/// under IEEE arithmetic, nothing guards against that.
pub fn sigmoid(z: f32) -> f32 {
    1. / (1. + (-z).exp())
}

/// Applies [`sigmoid`] element-wise. The output shape is identical to the
/// input shape, for any dimensionality.
pub fn sigmoid_map<D: Dimension>(x: ArrayView<'_, f32, D>) -> Array<f32, D> {
    x.mapv(sigmoid)
}
