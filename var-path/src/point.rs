//! Point roles and the materialized point view.

/// The curve role of a point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PointType {
    /// The outline passes through this point.
    #[default]
    OnCurve = 0,
    /// A quadratic control point. Consecutive quadratic controls have an
    /// implied on-curve point at their midpoint.
    OffCurveQuad = 1,
    /// A cubic control point. These always come in pairs between two
    /// on-curve points.
    OffCurveCubic = 2,
}

/// Flags describing the properties of a point: its curve role and whether
/// it is smooth.
///
/// The smooth flag only has meaning for on-curve points but is stored for
/// every point.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointFlags {
    pub point_type: PointType,
    pub smooth: bool,
}

impl PointFlags {
    // Packed layout used by font editors: the low three bits hold the curve
    // role, bit 3 holds the smooth flag.
    const TYPE_MASK: u8 = 0x07;
    const SMOOTH: u8 = 0x08;

    /// Creates a new on curve point flag.
    pub const fn on_curve() -> Self {
        Self::new(PointType::OnCurve)
    }

    /// Creates a new off curve quadratic point flag.
    pub const fn off_curve_quad() -> Self {
        Self::new(PointType::OffCurveQuad)
    }

    /// Creates a new off curve cubic point flag.
    pub const fn off_curve_cubic() -> Self {
        Self::new(PointType::OffCurveCubic)
    }

    const fn new(point_type: PointType) -> Self {
        Self {
            point_type,
            smooth: false,
        }
    }

    /// Returns a copy with the smooth flag set to `smooth`.
    pub const fn with_smooth(self, smooth: bool) -> Self {
        Self {
            point_type: self.point_type,
            smooth,
        }
    }

    /// Returns true if this is an on curve point.
    #[inline]
    pub const fn is_on_curve(self) -> bool {
        matches!(self.point_type, PointType::OnCurve)
    }

    /// Returns true if this is an off curve quadratic point.
    #[inline]
    pub const fn is_off_curve_quad(self) -> bool {
        matches!(self.point_type, PointType::OffCurveQuad)
    }

    /// Returns true if this is an off curve cubic point.
    #[inline]
    pub const fn is_off_curve_cubic(self) -> bool {
        matches!(self.point_type, PointType::OffCurveCubic)
    }

    /// Returns true if this is a quadratic or cubic control point.
    pub const fn is_off_curve(self) -> bool {
        !self.is_on_curve()
    }

    /// Creates point flags from the packed byte representation.
    ///
    /// Returns `None` if the curve role bits don't name a known role.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        let point_type = match bits & Self::TYPE_MASK {
            0 => PointType::OnCurve,
            1 => PointType::OffCurveQuad,
            2 => PointType::OffCurveCubic,
            _ => return None,
        };
        Some(Self {
            point_type,
            smooth: bits & Self::SMOOTH != 0,
        })
    }

    /// Returns the packed byte representation.
    pub const fn to_bits(self) -> u8 {
        let smooth = if self.smooth { Self::SMOOTH } else { 0 };
        self.point_type as u8 | smooth
    }
}

impl From<PointType> for PointFlags {
    fn from(value: PointType) -> Self {
        Self::new(value)
    }
}

/// A single point of a path, along with its curve role and smooth flag.
///
/// Paths don't store these directly; they are produced on demand by
/// accessors and iterators and consumed by the editing methods.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
    pub point_type: PointType,
    pub smooth: bool,
}

impl PathPoint {
    /// Creates a new point from its coordinates and flags.
    pub const fn new(x: f64, y: f64, flags: PointFlags) -> Self {
        Self {
            x,
            y,
            point_type: flags.point_type,
            smooth: flags.smooth,
        }
    }

    /// Creates a new on-curve point.
    pub const fn on_curve(x: f64, y: f64) -> Self {
        Self::new(x, y, PointFlags::on_curve())
    }

    /// Creates a new quadratic off-curve point.
    pub const fn off_curve_quad(x: f64, y: f64) -> Self {
        Self::new(x, y, PointFlags::off_curve_quad())
    }

    /// Creates a new cubic off-curve point.
    pub const fn off_curve_cubic(x: f64, y: f64) -> Self {
        Self::new(x, y, PointFlags::off_curve_cubic())
    }

    /// Returns a copy marked as smooth.
    pub const fn smooth(self) -> Self {
        Self {
            smooth: true,
            ..self
        }
    }

    /// Returns the curve role and smooth flag of this point.
    pub const fn flags(&self) -> PointFlags {
        PointFlags {
            point_type: self.point_type,
            smooth: self.smooth,
        }
    }
}

impl From<PathPoint> for kurbo::Point {
    fn from(value: PathPoint) -> Self {
        kurbo::Point::new(value.x, value.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_bits() {
        for flags in [
            PointFlags::on_curve(),
            PointFlags::off_curve_quad(),
            PointFlags::off_curve_cubic(),
            PointFlags::on_curve().with_smooth(true),
        ] {
            assert_eq!(PointFlags::from_bits(flags.to_bits()), Some(flags));
        }
        assert_eq!(PointFlags::on_curve().with_smooth(true).to_bits(), 0x08);
        assert_eq!(PointFlags::off_curve_cubic().to_bits(), 0x02);
        assert_eq!(PointFlags::from_bits(0x03), None);
        assert_eq!(PointFlags::from_bits(0x07), None);
    }

    #[test]
    fn predicates() {
        let quad = PointFlags::off_curve_quad();
        assert!(quad.is_off_curve_quad());
        assert!(quad.is_off_curve());
        assert!(!quad.is_on_curve());
        assert!(!quad.is_off_curve_cubic());
        assert!(PointFlags::default().is_on_curve());
    }

    #[test]
    fn point_view() {
        let point = PathPoint::off_curve_cubic(1.0, 2.0);
        assert_eq!(point.flags(), PointFlags::off_curve_cubic());
        assert!(point.smooth().smooth);
        assert_eq!(kurbo::Point::from(point), kurbo::Point::new(1.0, 2.0));
    }
}
