use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::rng::RandomSource;

/// A labeled synthetic dataset: one row of features per example plus one
/// binary target per row. Immutable once built.
pub struct Dataset {
    features: Array2<f32>,
    targets: Array1<u8>,
}

impl Dataset {
    /// A view of the feature matrix, shape `(n_examples, n_features)`.
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// A view of the binary targets, one per example.
    pub fn targets(&self) -> ArrayView1<'_, u8> {
        self.targets.view()
    }

    pub fn n_examples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// The declared name of feature column `i`: `x0` through `x(n-1)`.
    /// Column order is positional and part of the dataset's contract.
    pub fn feature_name(i: usize) -> String {
        format!("x{i}")
    }
}

/// Generates a synthetic dataset of uniform `[0, 1)` features and binary
/// targets drawn from `{0, 1}`.
///
/// Both draws come from one stream seeded by `seed`: the feature matrix
/// first, the targets right after. Sizes are not validated; zero examples or
/// features yield an empty dataset.
///
/// # Arguments
/// * `m_examples` - The number of examples to generate.
/// * `n_features` - The number of features per example.
/// * `seed` - A seed for reproducibility; `None` draws from OS entropy.
///
/// # Returns
/// The generated `Dataset`.
pub fn generate_data(m_examples: usize, n_features: usize, seed: Option<u64>) -> Dataset {
    let mut source = RandomSource::new(seed);

    let features = source.uniform_matrix(m_examples, n_features);
    let targets = source.choice(&[0, 1], m_examples);

    debug!(m_examples = m_examples, n_features = n_features; "generated synthetic dataset");

    Dataset { features, targets }
}
