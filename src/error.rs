use std::error::Error;
use std::fmt::{Display, Formatter};

/// Possible errors that arise due to issues with clustering input data or
/// from operations performed against a structure in the wrong state.
#[derive(Debug, Clone)]
pub enum ClusteringError {
    /// The input data set contains no points.
    EmptyDataset,
    /// The input data set contains fewer points than the operation requires.
    TooFewPoints(String),
    /// Input vectors have mismatched dimensions, or the active dimension
    /// mask refers to a dimension the data does not have.
    WrongDimension(String),
    /// A coordinate of an input vector is infinite or NaN.
    NonFiniteCoordinate(String),
    /// A cluster count of zero was requested.
    ZeroClusterCount,
    /// More distinct indices were requested than the sampling range holds.
    SampleCountExceedsRange(String),
    /// The sampling range is empty or inverted.
    EmptyRange(String),
    /// A merge node was constructed with a splitting number that does not
    /// precede its children's splitting numbers.
    InvalidSplittingNumber(String),
    /// The minimum of a distance matrix with fewer than two live indices
    /// was queried.
    EmptyMatrix,
}

impl Error for ClusteringError {}

impl Display for ClusteringError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ClusteringError::EmptyDataset => String::from("The dataset provided is empty"),
            ClusteringError::TooFewPoints(msg) => {
                format!("Too few data points for clustering: {msg}")
            }
            ClusteringError::WrongDimension(msg) => {
                format!("Input vectors have mismatched dimensions: {msg}")
            }
            ClusteringError::NonFiniteCoordinate(msg) => {
                format!("Non finite coordinate: {msg}")
            }
            ClusteringError::ZeroClusterCount => {
                String::from("The requested cluster count must be at least one")
            }
            ClusteringError::SampleCountExceedsRange(msg) => {
                format!("Requested sample count exceeds the available range: {msg}")
            }
            ClusteringError::EmptyRange(msg) => {
                format!("Requested sampling range is empty or inverted: {msg}")
            }
            ClusteringError::InvalidSplittingNumber(msg) => {
                format!("Splitting number does not precede its children: {msg}")
            }
            ClusteringError::EmptyMatrix => {
                String::from("The distance matrix has fewer than two live indices")
            }
        };
        write!(f, "{message}")
    }
}
