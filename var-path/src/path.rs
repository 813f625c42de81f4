//! The editable outline type.

use core::ops::Range;

use kurbo::{Affine, BezPath};

use crate::{
    contour, draw, BoundingBox, ContourInfo, DrawError, OutlinePen, PathError, PathPoint,
    PointFlags, PointType, VarArray,
};

/// A glyph outline made of contours of on-curve and off-curve points.
///
/// Storage is split over three parallel buffers:
///
/// * `coordinates` holds `2 * n` interleaved `x, y` values for `n` points
/// * `point_flags` holds the curve role and smooth flag of each point
/// * `contour_info` holds one descriptor per contour, with strictly
///   increasing end points that together cover every point exactly once
///
/// The fields are public so that outlines produced elsewhere can be adopted
/// without copying, but the invariants above are not checked at runtime.
///
/// Methods that address a contour take an `isize` contour index, where
/// negative values count from the end: `-1` names the last contour.
///
/// Cloning produces an independent deep copy.
#[derive(Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarPath {
    pub coordinates: VarArray,
    pub point_flags: Vec<PointFlags>,
    pub contour_info: Vec<ContourInfo>,
}

impl VarPath {
    /// Creates a new, empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from existing buffers.
    pub fn from_parts(
        coordinates: impl Into<VarArray>,
        point_flags: Vec<PointFlags>,
        contour_info: Vec<ContourInfo>,
    ) -> Self {
        let coordinates = coordinates.into();
        debug_assert_eq!(coordinates.len(), point_flags.len() * 2);
        Self {
            coordinates,
            point_flags,
            contour_info,
        }
    }

    /// Returns the total number of points in all contours.
    pub fn num_points(&self) -> usize {
        self.point_flags.len()
    }

    /// Returns the number of contours in the path.
    pub fn num_contours(&self) -> usize {
        self.contour_info.len()
    }

    /// Returns true if the path has no points.
    pub fn is_empty(&self) -> bool {
        self.point_flags.is_empty()
    }

    /// Returns the index of the contour containing the point at
    /// `point_index`, or `None` if no contour contains it.
    pub fn contour_index(&self, point_index: usize) -> Option<usize> {
        contour::contour_index(&self.contour_info, point_index)
    }

    /// Returns the range of global point indices of the given contour.
    pub fn contour_range(&self, contour_index: isize) -> Result<Range<usize>, PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        Ok(contour::point_range(&self.contour_info, contour_index))
    }

    /// Returns the global index of the first point of the given contour.
    pub fn contour_start_point(&self, contour_index: isize) -> Result<usize, PathError> {
        self.contour_range(contour_index).map(|range| range.start)
    }

    /// Returns the point at the given global index, or `None` if the index
    /// is out of bounds.
    pub fn point(&self, index: usize) -> Option<PathPoint> {
        let flags = *self.point_flags.get(index)?;
        let (x, y) = self.coordinates.point(index)?;
        Some(PathPoint::new(x, y, flags))
    }

    /// Returns an iterator over all points, in storage order.
    pub fn iter_points(&self) -> impl Iterator<Item = PathPoint> + Clone + '_ {
        self.coordinates
            .points()
            .zip(self.point_flags.iter())
            .map(|((x, y), flags)| PathPoint::new(x, y, *flags))
    }

    /// Returns an iterator over the points of a single contour.
    pub fn iter_contour_points(
        &self,
        contour_index: isize,
    ) -> Result<impl Iterator<Item = PathPoint> + Clone + '_, PathError> {
        let range = self.contour_range(contour_index)?;
        Ok(self.iter_points().skip(range.start).take(range.len()))
    }

    /// Returns the bounding box of all stored coordinates, including
    /// off-curve points.
    ///
    /// Returns `None` if the path has no points.
    pub fn control_bounds(&self) -> Option<BoundingBox<f64>> {
        BoundingBox::from_points(self.coordinates.points())
    }

    /// Sets the coordinates of the point at `index`, leaving its flags
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_point_position(&mut self, index: usize, x: f64, y: f64) {
        self.coordinates[index * 2] = x;
        self.coordinates[index * 2 + 1] = y;
    }

    /// Replaces the coordinates and flags of the point at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_point(&mut self, index: usize, point: PathPoint) {
        self.set_point_position(index, point.x, point.y);
        self.point_flags[index] = point.flags();
    }

    /// Sets the curve role of the point at `index`, preserving its smooth
    /// flag.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_point_type(&mut self, index: usize, point_type: PointType) {
        self.point_flags[index].point_type = point_type;
    }

    /// Inserts a point into a contour.
    ///
    /// `contour_point_index` is relative to the start of the contour; zero
    /// inserts before the first point and the contour's point count appends
    /// after the last.
    pub fn insert_point(
        &mut self,
        contour_index: isize,
        contour_point_index: usize,
        point: PathPoint,
    ) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        let range = contour::point_range(&self.contour_info, contour_index);
        if contour_point_index > range.len() {
            return Err(PathError::ContourPointIndexOutOfBounds(contour_point_index));
        }
        let point_index = range.start + contour_point_index;
        self.coordinates.insert_point(point_index, point.x, point.y);
        self.point_flags.insert(point_index, point.flags());
        for contour in &mut self.contour_info[contour_index..] {
            contour.end_point += 1;
        }
        Ok(())
    }

    /// Appends a point to the end of a contour.
    pub fn append_point(
        &mut self,
        contour_index: isize,
        point: PathPoint,
    ) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        let num_points = contour::point_range(&self.contour_info, contour_index).len();
        self.insert_point(contour_index as isize, num_points, point)
    }

    /// Removes a point from a contour.
    ///
    /// Removing the only point of a contour removes the contour as well.
    pub fn delete_point(
        &mut self,
        contour_index: isize,
        contour_point_index: usize,
    ) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        let range = contour::point_range(&self.contour_info, contour_index);
        if contour_point_index >= range.len() {
            return Err(PathError::ContourPointIndexOutOfBounds(contour_point_index));
        }
        let point_index = range.start + contour_point_index;
        self.coordinates.remove_point(point_index);
        self.point_flags.remove(point_index);
        if range.len() == 1 {
            log::debug!("removing contour {contour_index} after deleting its last point");
            self.contour_info.remove(contour_index);
        }
        // either this contour or, if it was removed, its successor
        for contour in &mut self.contour_info[contour_index..] {
            contour.end_point -= 1;
        }
        Ok(())
    }

    /// Inserts a new contour so that it becomes contour `contour_index`.
    ///
    /// An index equal to the number of contours appends. Inserting an empty
    /// sequence of points does nothing.
    pub fn insert_contour(
        &mut self,
        contour_index: usize,
        points: impl IntoIterator<Item = PathPoint>,
        is_closed: bool,
    ) -> Result<(), PathError> {
        if contour_index > self.num_contours() {
            return Err(PathError::ContourIndexOutOfBounds(contour_index as isize));
        }
        let start = match self.contour_info.get(contour_index) {
            Some(_) => contour::start_point(&self.contour_info, contour_index),
            None => self.num_points(),
        };
        let points = points.into_iter().collect::<Vec<_>>();
        if points.is_empty() {
            return Ok(());
        }
        let count = points.len();
        self.coordinates
            .insert_points(start, points.iter().map(|p| (p.x, p.y)));
        self.point_flags
            .splice(start..start, points.iter().map(PathPoint::flags));
        for contour in &mut self.contour_info[contour_index..] {
            contour.end_point += count;
        }
        self.contour_info.insert(
            contour_index,
            ContourInfo::new(start + count - 1, is_closed),
        );
        Ok(())
    }

    /// Appends a new contour after all existing contours.
    pub fn append_contour(&mut self, points: impl IntoIterator<Item = PathPoint>, is_closed: bool) {
        let start = self.num_points();
        for point in points {
            self.push_point(point.x, point.y, point.flags());
        }
        if self.num_points() > start {
            self.contour_info
                .push(ContourInfo::new(self.num_points() - 1, is_closed));
        }
    }

    /// Removes a contour and all of its points.
    pub fn delete_contour(&mut self, contour_index: isize) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        let range = contour::point_range(&self.contour_info, contour_index);
        let count = range.len();
        self.coordinates.remove_points(range.clone());
        self.point_flags.drain(range);
        self.contour_info.remove(contour_index);
        for contour in &mut self.contour_info[contour_index..] {
            contour.end_point -= count;
        }
        Ok(())
    }

    /// Marks a contour as open or closed.
    pub fn set_contour_closed(
        &mut self,
        contour_index: isize,
        is_closed: bool,
    ) -> Result<(), PathError> {
        let contour_index = self.resolve_contour_index(contour_index)?;
        self.contour_info[contour_index].is_closed = is_closed;
        Ok(())
    }

    /// Begins a new open contour at (x, y).
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.contour_info
            .push(ContourInfo::new(self.num_points(), false));
        self.push_point(x, y, PointFlags::on_curve());
    }

    /// Appends an on-curve point to the current contour.
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.pen_point(x, y, PointFlags::on_curve());
    }

    /// Appends a quadratic segment with a single control point.
    pub fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.qcurve_to(&[(cx0, cy0)], x, y);
    }

    /// Appends a run of quadratic control points followed by an on-curve
    /// point.
    ///
    /// Every control is stored as is; the on-curve points implied between
    /// consecutive controls are only materialized when drawing.
    pub fn qcurve_to(&mut self, off_curves: &[(f64, f64)], x: f64, y: f64) {
        for (cx, cy) in off_curves {
            self.pen_point(*cx, *cy, PointFlags::off_curve_quad());
        }
        self.pen_point(x, y, PointFlags::on_curve());
    }

    /// Appends a cubic segment: two cubic control points followed by an
    /// on-curve point.
    pub fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.pen_point(cx0, cy0, PointFlags::off_curve_cubic());
        self.pen_point(cx1, cy1, PointFlags::off_curve_cubic());
        self.pen_point(x, y, PointFlags::on_curve());
    }

    /// Closes the current contour. Subsequent drawing calls begin a new
    /// contour.
    pub fn close_path(&mut self) {
        match self.contour_info.last_mut() {
            Some(contour) => contour.is_closed = true,
            None => log::warn!("close_path called on a path without contours"),
        }
    }

    /// Returns a new path with coordinates that are the itemwise sum of the
    /// coordinates of `self` and `other`.
    ///
    /// The paths must have the same structure: the same contours and the
    /// same point types.
    pub fn add_itemwise(&self, other: &VarPath) -> Result<VarPath, PathError> {
        self.check_compatible(other)?;
        Ok(self.with_coordinates(self.coordinates.add_itemwise(&other.coordinates)?))
    }

    /// Returns a new path with coordinates that are the itemwise difference
    /// of the coordinates of `self` and `other`.
    ///
    /// The paths must have the same structure: the same contours and the
    /// same point types.
    pub fn sub_itemwise(&self, other: &VarPath) -> Result<VarPath, PathError> {
        self.check_compatible(other)?;
        Ok(self.with_coordinates(self.coordinates.sub_itemwise(&other.coordinates)?))
    }

    /// Returns a new path with every coordinate multiplied by `factor`.
    pub fn mul_scalar(&self, factor: f64) -> VarPath {
        self.with_coordinates(self.coordinates.mul_scalar(factor))
    }

    /// Linearly interpolates between `self` (at `t = 0`) and `other`
    /// (at `t = 1`).
    pub fn interpolate(&self, other: &VarPath, t: f64) -> Result<VarPath, PathError> {
        let delta = other.sub_itemwise(self)?;
        self.add_itemwise(&delta.mul_scalar(t))
    }

    /// Returns a new path with every point mapped through `transform`.
    pub fn transformed(&self, transform: Affine) -> VarPath {
        let coordinates = self
            .coordinates
            .points()
            .flat_map(|(x, y)| {
                let point = transform * kurbo::Point::new(x, y);
                [point.x, point.y]
            })
            .collect();
        self.with_coordinates(coordinates)
    }

    /// Returns a new path containing the contours of `self` followed by the
    /// contours of `other`.
    pub fn concat(&self, other: &VarPath) -> VarPath {
        let offset = self.num_points();
        let mut result = self.clone();
        result.coordinates.extend(other.coordinates.iter().copied());
        result.point_flags.extend_from_slice(&other.point_flags);
        result
            .contour_info
            .extend(other.contour_info.iter().map(|contour| {
                ContourInfo::new(contour.end_point + offset, contour.is_closed)
            }));
        result
    }

    /// Expands the path into drawing commands, invoking the appropriate
    /// callback on `pen` for each.
    ///
    /// Each contour starts with a move to its first on-curve point.
    /// Consecutive quadratic control points are separated by implied
    /// on-curve points at their midpoints, cubic control points must come
    /// in pairs. Closed contours wrap around to the start and end with a
    /// close command; open contours do not, and any off-curve points that
    /// would need the wrap are left undrawn.
    pub fn draw(&self, pen: &mut impl OutlinePen) -> Result<(), DrawError> {
        draw::draw(
            &self.coordinates,
            &self.point_flags,
            &self.contour_info,
            pen,
        )
    }

    /// Expands the path into a [`BezPath`].
    pub fn to_bez_path(&self) -> Result<BezPath, DrawError> {
        let mut path = BezPath::new();
        self.draw(&mut path)?;
        Ok(path)
    }

    fn resolve_contour_index(&self, contour_index: isize) -> Result<usize, PathError> {
        contour::resolve_contour_index(&self.contour_info, contour_index)
    }

    fn with_coordinates(&self, coordinates: VarArray) -> VarPath {
        VarPath {
            coordinates,
            point_flags: self.point_flags.clone(),
            contour_info: self.contour_info.clone(),
        }
    }

    fn check_compatible(&self, other: &VarPath) -> Result<(), PathError> {
        if self.coordinates.len() != other.coordinates.len() {
            return Err(PathError::IncompatibleCoordinates {
                expected: self.coordinates.len(),
                found: other.coordinates.len(),
            });
        }
        if let Some(ix) = self
            .contour_info
            .iter()
            .zip(&other.contour_info)
            .position(|(a, b)| a != b)
        {
            return Err(PathError::IncompatibleContours(ix));
        }
        if self.num_contours() != other.num_contours() {
            return Err(PathError::IncompatibleContours(
                self.num_contours().min(other.num_contours()),
            ));
        }
        if let Some(ix) = self
            .point_flags
            .iter()
            .zip(&other.point_flags)
            .position(|(a, b)| a.point_type != b.point_type)
        {
            return Err(PathError::IncompatiblePointType(ix));
        }
        Ok(())
    }

    fn push_point(&mut self, x: f64, y: f64, flags: PointFlags) {
        self.coordinates.push_point(x, y);
        self.point_flags.push(flags);
    }

    /// Appends a point to the current open contour, starting a new one if
    /// there is none.
    fn pen_point(&mut self, x: f64, y: f64, flags: PointFlags) {
        let end_point = self.num_points();
        match self.contour_info.last_mut() {
            Some(contour) if !contour.is_closed => contour.end_point = end_point,
            _ => self.contour_info.push(ContourInfo::new(end_point, false)),
        }
        self.push_point(x, y, flags);
    }
}

impl OutlinePen for VarPath {
    fn move_to(&mut self, x: f64, y: f64) {
        VarPath::move_to(self, x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        VarPath::line_to(self, x, y)
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        VarPath::quad_to(self, cx0, cy0, x, y)
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        VarPath::curve_to(self, cx0, cy0, cx1, cy1, x, y)
    }

    fn close(&mut self) {
        self.close_path()
    }
}
