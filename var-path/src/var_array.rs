//! Flat coordinate storage with itemwise arithmetic.

use core::ops::{Deref, DerefMut, Range};

use crate::PathError;

/// A flat buffer of interleaved `x, y` coordinates.
///
/// Buffers of equal length can be added and subtracted itemwise, and any
/// buffer can be scaled. These are the building blocks for blending the
/// coordinates of compatible outlines.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct VarArray(Vec<f64>);

impl VarArray {
    /// Creates a new, empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer with room for `capacity` coordinates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends a single coordinate pair.
    pub fn push_point(&mut self, x: f64, y: f64) {
        self.0.extend([x, y]);
    }

    /// Inserts a coordinate pair so that it becomes point `point_index`.
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is greater than the number of points.
    pub fn insert_point(&mut self, point_index: usize, x: f64, y: f64) {
        self.insert_points(point_index, [(x, y)]);
    }

    /// Inserts a sequence of coordinate pairs so that the first becomes
    /// point `point_index`.
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is greater than the number of points.
    pub fn insert_points(
        &mut self,
        point_index: usize,
        points: impl IntoIterator<Item = (f64, f64)>,
    ) {
        let ix = point_index * 2;
        self.0
            .splice(ix..ix, points.into_iter().flat_map(|(x, y)| [x, y]));
    }

    /// Removes the coordinate pair of point `point_index`.
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is out of bounds.
    pub fn remove_point(&mut self, point_index: usize) {
        self.remove_points(point_index..point_index + 1);
    }

    /// Removes the coordinate pairs of all points in the given range.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn remove_points(&mut self, points: Range<usize>) {
        self.0.drain(points.start * 2..points.end * 2);
    }

    /// Returns the coordinate pair of point `point_index`, if present.
    pub fn point(&self, point_index: usize) -> Option<(f64, f64)> {
        let ix = point_index.checked_mul(2)?;
        let xy = self.0.get(ix..ix + 2)?;
        Some((xy[0], xy[1]))
    }

    /// Returns an iterator over all coordinate pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + Clone + '_ {
        self.0.chunks_exact(2).map(|xy| (xy[0], xy[1]))
    }

    /// Returns a new buffer holding the itemwise sum of `self` and `other`.
    pub fn add_itemwise(&self, other: &VarArray) -> Result<VarArray, PathError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns a new buffer holding the itemwise difference of `self` and
    /// `other`.
    pub fn sub_itemwise(&self, other: &VarArray) -> Result<VarArray, PathError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns a new buffer with every coordinate multiplied by `factor`.
    pub fn mul_scalar(&self, factor: f64) -> VarArray {
        self.0.iter().map(|v| v * factor).collect()
    }

    /// Returns the inner vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    fn zip_with(
        &self,
        other: &VarArray,
        mut op: impl FnMut(f64, f64) -> f64,
    ) -> Result<VarArray, PathError> {
        if self.len() != other.len() {
            return Err(PathError::IncompatibleCoordinates {
                expected: self.len(),
                found: other.len(),
            });
        }
        Ok(self
            .0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| op(*a, *b))
            .collect())
    }
}

impl Deref for VarArray {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for VarArray {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<f64>> for VarArray {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[f64; N]> for VarArray {
    fn from(value: [f64; N]) -> Self {
        Self(value.into())
    }
}

impl From<VarArray> for Vec<f64> {
    fn from(value: VarArray) -> Self {
        value.0
    }
}

impl FromIterator<f64> for VarArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<f64> for VarArray {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn itemwise_arithmetic() {
        let a = VarArray::from([0.0, 1.0, 2.0, 3.0]);
        let b = VarArray::from([10.0, 20.0, 30.0, 40.0]);
        assert_eq!(*a.add_itemwise(&b).unwrap(), [10.0, 21.0, 32.0, 43.0]);
        assert_eq!(*b.sub_itemwise(&a).unwrap(), [10.0, 19.0, 28.0, 37.0]);
        assert_eq!(*a.mul_scalar(0.5), [0.0, 0.5, 1.0, 1.5]);
    }

    #[test]
    fn mismatched_lengths() {
        let a = VarArray::from([0.0, 1.0]);
        let b = VarArray::from([0.0, 1.0, 2.0, 3.0]);
        assert_eq!(
            a.add_itemwise(&b),
            Err(PathError::IncompatibleCoordinates {
                expected: 2,
                found: 4
            })
        );
    }

    #[test]
    fn point_editing() {
        let mut coords = VarArray::from([0.0, 0.0, 10.0, 10.0]);
        coords.insert_point(1, 5.0, 6.0);
        assert_eq!(*coords, [0.0, 0.0, 5.0, 6.0, 10.0, 10.0]);
        assert_eq!(coords.point(1), Some((5.0, 6.0)));
        assert_eq!(coords.point(3), None);
        coords.remove_point(0);
        assert_eq!(
            coords.points().collect::<Vec<_>>(),
            [(5.0, 6.0), (10.0, 10.0)]
        );
        coords.push_point(1.0, 2.0);
        assert_eq!(coords.len(), 6);
        coords.insert_points(0, [(7.0, 7.0), (8.0, 8.0)]);
        assert_eq!(coords.point(1), Some((8.0, 8.0)));
        coords.remove_points(1..4);
        assert_eq!(*coords, [7.0, 7.0, 1.0, 2.0]);
    }
}
