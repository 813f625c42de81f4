//! Error types for path editing and drawing.

use core::fmt;

/// Errors that may occur when editing or combining paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The contour index (after resolving negative indices) does not name an
    /// existing contour.
    ContourIndexOutOfBounds(isize),
    /// The point index is outside the range of the addressed contour.
    ContourPointIndexOutOfBounds(usize),
    /// The paths have a different number of coordinates.
    IncompatibleCoordinates { expected: usize, found: usize },
    /// The contour at this index differs in size or closedness.
    IncompatibleContours(usize),
    /// The point at this index has a different curve type.
    IncompatiblePointType(usize),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ContourIndexOutOfBounds(ix) => write!(f, "contour index out of bounds: {ix}"),
            Self::ContourPointIndexOutOfBounds(ix) => {
                write!(f, "contour point index out of bounds: {ix}")
            }
            Self::IncompatibleCoordinates { expected, found } => write!(
                f,
                "Number of coordinates ({found}) does not match the expected count ({expected})"
            ),
            Self::IncompatibleContours(ix) => {
                write!(f, "Contour at index {ix} is not compatible")
            }
            Self::IncompatiblePointType(ix) => {
                write!(f, "Point type at index {ix} is not compatible")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Errors that can occur when expanding a path into drawing commands.
///
/// All indices are global point indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawError {
    /// Expected a quadratic off-curve or on-curve point at this index.
    ExpectedQuadOrOnCurve(usize),
    /// Expected a cubic off-curve point at this index.
    ExpectedCubic(usize),
    /// Expected an on-curve point at this index to end a cubic segment.
    ExpectedOnCurve(usize),
}

impl fmt::Display for DrawError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ExpectedQuadOrOnCurve(ix) => write!(
                f,
                "Expected quadratic off-curve or on-curve point at index {ix}"
            ),
            Self::ExpectedCubic(ix) => write!(f, "Expected cubic off-curve point at index {ix}"),
            Self::ExpectedOnCurve(ix) => write!(f, "Expected on-curve point at index {ix}"),
        }
    }
}

impl std::error::Error for DrawError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_messages() {
        assert_eq!(
            PathError::ContourIndexOutOfBounds(1).to_string(),
            "contour index out of bounds: 1"
        );
        assert_eq!(
            PathError::ContourPointIndexOutOfBounds(5).to_string(),
            "contour point index out of bounds: 5"
        );
    }
}
