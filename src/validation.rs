use num_traits::Float;

use crate::error::ClusteringError;

/// Checks the shape of a point set against an active dimension mask before
/// clustering touches it: the set must hold at least `min_points` points,
/// every point must have the same dimensionality, every coordinate must be
/// finite and every mask entry must name a dimension the points actually
/// have. The first violated constraint is reported; nothing is clamped or
/// repaired.
pub(crate) fn validate_points<T: Float>(
    data: &[Vec<T>],
    mask: &[usize],
    min_points: usize,
) -> Result<(), ClusteringError> {
    if data.is_empty() {
        return Err(ClusteringError::EmptyDataset);
    }
    if data.len() < min_points {
        return Err(ClusteringError::TooFewPoints(format!(
            "{} provided, at least {min_points} required",
            data.len()
        )));
    }
    let dims_0th = data[0].len();
    for (n, datapoint) in data.iter().enumerate() {
        for element in datapoint {
            if !element.is_finite() {
                return Err(ClusteringError::NonFiniteCoordinate(format!(
                    "{n}th vector contains non-finite element(s)"
                )));
            }
        }
        let dims_nth = datapoint.len();
        if dims_nth != dims_0th {
            return Err(ClusteringError::WrongDimension(format!(
                "0th data point has {dims_0th} dimensions, but {n}th has {dims_nth}"
            )));
        }
    }
    for &dimension in mask {
        if dimension >= dims_0th {
            return Err(ClusteringError::WrongDimension(format!(
                "active mask names dimension {dimension}, but points have only {dims_0th}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_input() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(validate_points(&data, &[0, 1], 2).is_ok());
    }

    #[test]
    fn rejects_empty_dataset() {
        let data: Vec<Vec<f64>> = Vec::new();
        let result = validate_points(&data, &[0], 2);
        assert!(matches!(result, Err(ClusteringError::EmptyDataset)));
    }

    #[test]
    fn rejects_too_few_points() {
        let data = vec![vec![1.0, 2.0]];
        let result = validate_points(&data, &[0], 2);
        assert!(matches!(result, Err(ClusteringError::TooFewPoints(..))));
    }

    #[test]
    fn rejects_mismatched_dimensions() {
        let data = vec![vec![1.0, 2.0], vec![3.0]];
        let result = validate_points(&data, &[0], 2);
        assert!(matches!(result, Err(ClusteringError::WrongDimension(..))));
    }

    #[test]
    fn rejects_non_finite_coordinates() {
        let data = vec![vec![1.0, f64::NAN], vec![3.0, 4.0]];
        let result = validate_points(&data, &[0], 2);
        assert!(matches!(result, Err(ClusteringError::NonFiniteCoordinate(..))));
        let data = vec![vec![1.0, f64::INFINITY], vec![3.0, 4.0]];
        let result = validate_points(&data, &[0], 2);
        assert!(matches!(result, Err(ClusteringError::NonFiniteCoordinate(..))));
    }

    #[test]
    fn rejects_mask_beyond_dimensionality() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let result = validate_points(&data, &[0, 2], 2);
        assert!(matches!(result, Err(ClusteringError::WrongDimension(..))));
    }
}
