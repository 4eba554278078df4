pub mod activations;
pub mod dataset;
pub mod error;
pub mod forward;
pub mod init;
pub mod linear;
pub mod loss;
pub mod metrics;
pub mod rng;

pub use error::{PerceptronErr, Result};
