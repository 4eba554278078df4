use ndarray::Array2;

/// Computes the 2x2 confusion matrix of true versus predicted binary labels,
/// laid out as:
///
/// ```text
/// [[true positives,  false negatives],
///  [false positives, true negatives]]
/// ```
///
/// `y` and `y_hat` are paired in lockstep; when their lengths differ, pairing
/// stops at the shorter sequence and the extra tail is silently ignored.
pub fn confusion_matrix(y: &[u8], y_hat: &[u8]) -> Array2<u32> {
    let mut matrix = Array2::zeros((2, 2));

    for (&yi, &yh) in y.iter().zip(y_hat) {
        match (yi, yi == yh) {
            (1, true) => matrix[[0, 0]] += 1,
            (1, false) => matrix[[0, 1]] += 1,
            (0, true) => matrix[[1, 1]] += 1,
            _ => matrix[[1, 0]] += 1,
        }
    }

    matrix
}
