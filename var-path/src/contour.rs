//! Contour descriptors and mapping between global and contour-relative
//! point indices.

use core::ops::Range;

use crate::PathError;

/// Describes a single contour of a path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContourInfo {
    /// Global index of the last point of the contour (inclusive).
    pub end_point: usize,
    /// True if the contour connects its last point back to its first.
    pub is_closed: bool,
}

impl ContourInfo {
    pub const fn new(end_point: usize, is_closed: bool) -> Self {
        Self {
            end_point,
            is_closed,
        }
    }
}

/// Returns the index of the contour containing the point at `point_index`.
pub(crate) fn contour_index(contours: &[ContourInfo], point_index: usize) -> Option<usize> {
    // end points are strictly increasing
    let ix = contours.partition_point(|contour| contour.end_point < point_index);
    (ix < contours.len()).then_some(ix)
}

/// Maps a possibly negative contour index to a concrete one, with `-1`
/// naming the last contour.
pub(crate) fn resolve_contour_index(
    contours: &[ContourInfo],
    contour_index: isize,
) -> Result<usize, PathError> {
    let len = contours.len() as isize;
    let resolved = if contour_index < 0 {
        contour_index + len
    } else {
        contour_index
    };
    if (0..len).contains(&resolved) {
        Ok(resolved as usize)
    } else {
        Err(PathError::ContourIndexOutOfBounds(resolved))
    }
}

/// Returns the global index of the first point of the given contour.
///
/// `contour_index` must already be resolved.
pub(crate) fn start_point(contours: &[ContourInfo], contour_index: usize) -> usize {
    match contour_index {
        0 => 0,
        _ => contours[contour_index - 1].end_point + 1,
    }
}

/// Returns the range of global point indices covered by the given contour.
///
/// `contour_index` must already be resolved.
pub(crate) fn point_range(contours: &[ContourInfo], contour_index: usize) -> Range<usize> {
    start_point(contours, contour_index)..contours[contour_index].end_point + 1
}

/// Iterator over the point ranges and closedness of each contour, in order.
pub(crate) fn ranges(
    contours: &[ContourInfo],
) -> impl Iterator<Item = (Range<usize>, bool)> + '_ {
    let mut start = 0;
    contours.iter().map(move |contour| {
        let range = start..contour.end_point + 1;
        start = range.end;
        (range, contour.is_closed)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contours() -> Vec<ContourInfo> {
        [3, 13, 15, 20]
            .into_iter()
            .map(|end_point| ContourInfo::new(end_point, true))
            .collect()
    }

    #[test]
    fn find_contour_for_point() {
        let contours = contours();
        let expected = [
            (0, Some(0)),
            (3, Some(0)),
            (4, Some(1)),
            (5, Some(1)),
            (13, Some(1)),
            (14, Some(2)),
            (15, Some(2)),
            (16, Some(3)),
            (20, Some(3)),
            (21, None),
            (usize::MAX, None),
        ];
        for (point_index, contour) in expected {
            assert_eq!(
                contour_index(&contours, point_index),
                contour,
                "point {point_index}"
            );
        }
        assert_eq!(contour_index(&[], 0), None);
    }

    #[test]
    fn resolve_negative_indices() {
        let contours = contours();
        assert_eq!(resolve_contour_index(&contours, 0), Ok(0));
        assert_eq!(resolve_contour_index(&contours, -1), Ok(3));
        assert_eq!(resolve_contour_index(&contours, -4), Ok(0));
        assert_eq!(
            resolve_contour_index(&contours, -5),
            Err(PathError::ContourIndexOutOfBounds(-1))
        );
        assert_eq!(
            resolve_contour_index(&contours, 4),
            Err(PathError::ContourIndexOutOfBounds(4))
        );
        assert_eq!(
            resolve_contour_index(&[], -1),
            Err(PathError::ContourIndexOutOfBounds(-1))
        );
    }

    #[test]
    fn contour_ranges() {
        let contours = contours();
        assert_eq!(point_range(&contours, 0), 0..4);
        assert_eq!(point_range(&contours, 2), 14..16);
        assert_eq!(start_point(&contours, 3), 16);
        let all = ranges(&contours).map(|(r, _)| r).collect::<Vec<_>>();
        assert_eq!(all, [0..4, 4..14, 14..16, 16..21]);
    }
}
