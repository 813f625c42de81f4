//! Axis-aligned bounds of path control points.

/// Minimum and maximum extents of a rectangular region.
#[derive(Copy, Clone, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox<T> {
    /// Left edge.
    pub x_min: T,
    /// Bottom edge, since font coordinates are y-up.
    pub y_min: T,
    /// Right edge.
    pub x_max: T,
    /// Top edge.
    pub y_max: T,
}

impl BoundingBox<f64> {
    /// Computes the bounds of a sequence of points, or `None` if the
    /// sequence is empty.
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut points = points.into_iter();
        let (x, y) = points.next()?;
        let mut bbox = Self {
            x_min: x,
            y_min: y,
            x_max: x,
            y_max: y,
        };
        for (x, y) in points {
            bbox.x_min = bbox.x_min.min(x);
            bbox.y_min = bbox.y_min.min(y);
            bbox.x_max = bbox.x_max.max(x);
            bbox.y_max = bbox.y_max.max(y);
        }
        Some(bbox)
    }

    /// Horizontal extent, `x_max - x_min`.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Vertical extent, `y_max - y_min`.
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl From<BoundingBox<f64>> for kurbo::Rect {
    fn from(value: BoundingBox<f64>) -> Self {
        kurbo::Rect::new(value.x_min, value.y_min, value.x_max, value.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_points() {
        let bbox = BoundingBox::from_points([(10.0, -5.0), (-2.0, 7.0), (3.0, 3.0)]).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                x_min: -2.0,
                y_min: -5.0,
                x_max: 10.0,
                y_max: 7.0
            }
        );
        assert_eq!(bbox.width(), 12.0);
        assert_eq!(bbox.height(), 12.0);
        assert_eq!(
            kurbo::Rect::from(bbox),
            kurbo::Rect::new(-2.0, -5.0, 10.0, 7.0)
        );
    }

    #[test]
    fn no_points_no_bounds() {
        assert_eq!(BoundingBox::from_points(core::iter::empty()), None);
    }
}
