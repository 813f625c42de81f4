//! Expansion of the compact point representation into drawing commands.

use core::ops::Range;

use crate::{contour, ContourInfo, DrawError, OutlinePen, PointFlags};

/// Expands every contour of an outline described by coordinates, flags and
/// contour descriptors and invokes the appropriate callback on the given pen
/// for each resulting segment.
///
/// Contours are drawn in storage order. Each contour begins at its first
/// on-curve point, or at the implied midpoint of its last and first points
/// when it has no on-curve points at all.
pub(crate) fn draw(
    coords: &[f64],
    flags: &[PointFlags],
    contours: &[ContourInfo],
    pen: &mut impl OutlinePen,
) -> Result<(), DrawError> {
    for (range, is_closed) in contour::ranges(contours) {
        if range.is_empty() {
            continue;
        }
        let points = ContourPoints { coords, flags };
        match range.clone().find(|ix| flags[*ix].is_on_curve()) {
            Some(start_ix) => points.draw_contour(range, start_ix, is_closed, pen)?,
            None => points.draw_blob(range, pen)?,
        }
    }
    Ok(())
}

/// Combination of point coordinates and flags.
#[derive(Copy, Clone, Default, Debug)]
struct ContourPoint {
    x: f64,
    y: f64,
    flags: PointFlags,
}

impl ContourPoint {
    fn midpoint(self, other: Self) -> ContourPoint {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            flags: other.flags,
        }
    }
}

#[derive(Copy, Clone)]
struct ContourPoints<'a> {
    coords: &'a [f64],
    flags: &'a [PointFlags],
}

impl ContourPoints<'_> {
    fn get(&self, ix: usize) -> ContourPoint {
        ContourPoint {
            x: self.coords[ix * 2],
            y: self.coords[ix * 2 + 1],
            flags: self.flags[ix],
        }
    }

    /// Draws a contour that has at least one on-curve point, starting at
    /// `start_ix`.
    fn draw_contour(
        &self,
        range: Range<usize>,
        start_ix: usize,
        is_closed: bool,
        pen: &mut impl OutlinePen,
    ) -> Result<(), DrawError> {
        let start_point = self.get(start_ix);
        pen.move_to(start_point.x, start_point.y);
        let mut state = PendingState::default();
        if is_closed {
            // wrap around to the points preceding the start
            for ix in (start_ix + 1..range.end).chain(range.start..start_ix) {
                state.emit(ix, self.get(ix), pen)?;
            }
            return state.finish(start_ix, start_point, pen);
        }
        // off-curve points after the last on-curve have nothing to end on
        let end_ix = (start_ix..range.end)
            .rev()
            .find(|ix| self.flags[*ix].is_on_curve())
            .unwrap_or(start_ix);
        for ix in start_ix + 1..=end_ix {
            state.emit(ix, self.get(ix), pen)?;
        }
        if end_ix + 1 != range.end || start_ix != range.start {
            log::trace!("open contour {range:?} has dangling off-curve points");
        }
        Ok(())
    }

    /// Draws a contour consisting entirely of quadratic off-curve points.
    ///
    /// These have no natural start so we begin at the implied on-curve
    /// point between the last and first points. Such a contour is always
    /// drawn closed.
    fn draw_blob(&self, range: Range<usize>, pen: &mut impl OutlinePen) -> Result<(), DrawError> {
        let first_point = self.get(range.start);
        // We don't accept an off curve cubic as the first point
        if first_point.flags.is_off_curve_cubic() {
            return Err(DrawError::ExpectedQuadOrOnCurve(range.start));
        }
        let mut start_point = self.get(range.end - 1).midpoint(first_point);
        start_point.flags = PointFlags::on_curve();
        pen.move_to(start_point.x, start_point.y);
        let mut state = PendingState::default();
        for ix in range.clone() {
            state.emit(ix, self.get(ix), pen)?;
        }
        state.finish(range.start, start_point, pen)
    }
}

#[derive(Copy, Clone, Default)]
enum PendingState {
    /// No pending points.
    #[default]
    Empty,
    /// Pending off-curve quad point.
    PendingQuad(ContourPoint),
    /// Single pending off-curve cubic point.
    PendingCubic(ContourPoint),
    /// Two pending off-curve cubic points.
    TwoPendingCubics(ContourPoint, ContourPoint),
}

impl PendingState {
    #[inline(always)]
    fn emit(
        &mut self,
        ix: usize,
        point: ContourPoint,
        pen: &mut impl OutlinePen,
    ) -> Result<(), DrawError> {
        let flags = point.flags;
        match *self {
            Self::Empty => {
                if flags.is_off_curve_quad() {
                    *self = Self::PendingQuad(point);
                } else if flags.is_off_curve_cubic() {
                    *self = Self::PendingCubic(point);
                } else {
                    pen.line_to(point.x, point.y);
                }
            }
            Self::PendingQuad(quad) => {
                if flags.is_off_curve_quad() {
                    let p = quad.midpoint(point);
                    pen.quad_to(quad.x, quad.y, p.x, p.y);
                    *self = Self::PendingQuad(point);
                } else if flags.is_off_curve_cubic() {
                    return Err(DrawError::ExpectedQuadOrOnCurve(ix));
                } else {
                    pen.quad_to(quad.x, quad.y, point.x, point.y);
                    *self = Self::Empty;
                }
            }
            Self::PendingCubic(cubic) => {
                if flags.is_off_curve_cubic() {
                    *self = Self::TwoPendingCubics(cubic, point);
                } else {
                    return Err(DrawError::ExpectedCubic(ix));
                }
            }
            Self::TwoPendingCubics(c0, c1) => {
                if flags.is_off_curve() {
                    return Err(DrawError::ExpectedOnCurve(ix));
                }
                pen.curve_to(c0.x, c0.y, c1.x, c1.y, point.x, point.y);
                *self = Self::Empty;
            }
        }
        Ok(())
    }

    /// Draws the final segment back to the start point and closes the
    /// subpath.
    fn finish(
        mut self,
        start_ix: usize,
        mut start_point: ContourPoint,
        pen: &mut impl OutlinePen,
    ) -> Result<(), DrawError> {
        // We always want to end with an explicit on-curve
        start_point.flags = PointFlags::on_curve();
        self.emit(start_ix, start_point, pen)?;
        pen.close();
        Ok(())
    }
}
