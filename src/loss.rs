use ndarray::Array1;

/// Computes the per-example cross-entropy between true binary labels and
/// predicted probabilities, using the base-10 logarithm:
/// `-(y * log10(p) + (1 - y) * log10(1 - p))`.
///
/// Probabilities of exactly 0 or 1 are not guarded: the IEEE `log10` result
/// flows through, so the affected entries come out infinite (or NaN where a
/// zero coefficient multiplies an infinite term). Losses are non-negative for
/// probabilities strictly inside `(0, 1)`.
pub fn cross_entropy(y: &[u8], sigmoids: &[f32]) -> Array1<f32> {
    y.iter()
        .zip(sigmoids)
        .map(|(&yi, &p)| {
            let yi = f32::from(yi);

            -(yi * p.log10() + (1. - yi) * (1. - p).log10())
        })
        .collect()
}
