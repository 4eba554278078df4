use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::StandardUniform;

/// A caller-owned stream of reproducible pseudorandom draws.
///
/// The same seed always reproduces the same stream; without a seed the stream
/// starts from OS entropy. Every draw advances the stream monotonically, so
/// the order of calls is part of any reproducibility contract built on top.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Creates a new `RandomSource`.
    ///
    /// # Arguments
    /// * `seed` - A seed for the generator; `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self { rng }
    }

    /// Draws a `rows` x `cols` matrix of uniform reals in `[0, 1)`. Zero rows
    /// or columns give an empty matrix.
    pub fn uniform_matrix(&mut self, rows: usize, cols: usize) -> Array2<f32> {
        Array2::random_using((rows, cols), StandardUniform, &mut self.rng)
    }

    /// Draws `len` uniform reals in `[0, 1)`.
    pub fn uniform_vec(&mut self, len: usize) -> Array1<f32> {
        Array1::random_using(len, StandardUniform, &mut self.rng)
    }

    /// Draws `len` values uniformly from the finite set `options`.
    pub fn choice(&mut self, options: &[u8], len: usize) -> Array1<u8> {
        (0..len)
            .map(|_| options[self.rng.random_range(0..options.len())])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = RandomSource::new(Some(42));
        let mut b = RandomSource::new(Some(42));

        assert_eq!(a.uniform_matrix(4, 3), b.uniform_matrix(4, 3));
        assert_eq!(a.choice(&[0, 1], 16), b.choice(&[0, 1], 16));
    }

    #[test]
    fn uniform_draws_in_unit_interval() {
        let mut source = RandomSource::new(Some(7));

        let m = source.uniform_matrix(10, 10);
        assert!(m.iter().all(|&v| (0. ..1.).contains(&v)));
    }

    #[test]
    fn choice_stays_in_set() {
        let mut source = RandomSource::new(Some(7));

        let v = source.choice(&[0, 1], 100);
        assert!(v.iter().all(|&l| l == 0 || l == 1));
    }

    #[test]
    fn empty_shapes() {
        let mut source = RandomSource::new(Some(1));

        assert_eq!(source.uniform_matrix(0, 5).dim(), (0, 5));
        assert_eq!(source.uniform_vec(0).len(), 0);
        assert_eq!(source.choice(&[0, 1], 0).len(), 0);
    }
}
