use ndarray::Array1;

use crate::rng::RandomSource;

/// The bias term of the linear unit, in one of its two shapes: an exact zero,
/// or a single random value when random-bias initialization was requested.
/// Both shapes reach the weighted sum through [`Bias::value`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bias {
    Zero,
    Random(f32),
}

impl Bias {
    /// The scalar added to every weighted sum.
    pub fn value(&self) -> f32 {
        match self {
            Bias::Zero => 0.,
            Bias::Random(b) => *b,
        }
    }
}

/// Initializes the weights and bias of a single linear unit.
///
/// Weights are `n_features` uniform reals in `[0, 1)`. With `random_bias` the
/// bias is one more uniform real taken from the *same* stream right after the
/// weights; otherwise it is exactly zero. Consumers that rely on seeded
/// reproducibility must replicate this draw order.
///
/// # Arguments
/// * `n_features` - The number of inputs of the unit.
/// * `random_bias` - Whether to draw the bias instead of zeroing it.
/// * `seed` - A seed for reproducibility; `None` draws from OS entropy.
///
/// # Returns
/// The weight vector and the bias.
pub fn network_init(
    n_features: usize,
    random_bias: bool,
    seed: Option<u64>,
) -> (Array1<f32>, Bias) {
    let mut source = RandomSource::new(seed);

    let weights = source.uniform_vec(n_features);
    let bias = if random_bias {
        Bias::Random(source.uniform_vec(1)[0])
    } else {
        Bias::Zero
    };

    (weights, bias)
}
