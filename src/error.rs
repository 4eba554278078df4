use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire perceptron crate.
pub type Result<T> = std::result::Result<T, PerceptronErr>;

/// The perceptron crate's error type.
#[derive(Debug, PartialEq, Eq)]
pub enum PerceptronErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
}

impl Display for PerceptronErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PerceptronErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
        };

        write!(f, "{s}")
    }
}

impl Error for PerceptronErr {}
