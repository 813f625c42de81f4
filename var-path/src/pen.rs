//! Types for collecting the output when drawing a path.

/// Interface for accepting a sequence of path commands.
///
/// This is the only capability [`VarPath::draw`](crate::VarPath::draw)
/// requires of a rendering backend.
pub trait OutlinePen {
    /// Emit a command to begin a new subpath at (x, y).
    fn move_to(&mut self, x: f64, y: f64);

    /// Emit a line segment from the current point to (x, y).
    fn line_to(&mut self, x: f64, y: f64);

    /// Emit a quadratic bezier segment from the current point with a control
    /// point at (cx0, cy0) and ending at (x, y).
    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64);

    /// Emit a cubic bezier segment from the current point with control
    /// points at (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64);

    /// Emit a command to close the current subpath.
    fn close(&mut self);
}

/// Single element of a path.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub enum PathElement {
    /// Begin a new subpath at (x, y).
    MoveTo { x: f64, y: f64 },
    /// Draw a line from the current point to (x, y).
    LineTo { x: f64, y: f64 },
    /// Draw a quadratic bezier from the current point with a control point at
    /// (cx0, cy0) and ending at (x, y).
    QuadTo { cx0: f64, cy0: f64, x: f64, y: f64 },
    /// Draw a cubic bezier from the current point with control points at
    /// (cx0, cy0) and (cx1, cy1) and ending at (x, y).
    CurveTo {
        cx0: f64,
        cy0: f64,
        cx1: f64,
        cy1: f64,
        x: f64,
        y: f64,
    },
    /// Close the current subpath.
    Close,
}

impl OutlinePen for Vec<PathElement> {
    fn move_to(&mut self, x: f64, y: f64) {
        self.push(PathElement::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.push(PathElement::LineTo { x, y })
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.push(PathElement::QuadTo { cx0, cy0, x, y })
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.push(PathElement::CurveTo {
            cx0,
            cy0,
            cx1,
            cy1,
            x,
            y,
        })
    }

    fn close(&mut self) {
        self.push(PathElement::Close)
    }
}

impl OutlinePen for kurbo::BezPath {
    fn move_to(&mut self, x: f64, y: f64) {
        kurbo::BezPath::move_to(self, (x, y))
    }

    fn line_to(&mut self, x: f64, y: f64) {
        kurbo::BezPath::line_to(self, (x, y))
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        kurbo::BezPath::quad_to(self, (cx0, cy0), (x, y))
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        kurbo::BezPath::curve_to(self, (cx0, cy0), (cx1, cy1), (x, y))
    }

    fn close(&mut self) {
        self.close_path()
    }
}

/// Pen that drops all drawing output into the ether.
pub struct NullPen;

impl OutlinePen for NullPen {
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn line_to(&mut self, _x: f64, _y: f64) {}
    fn quad_to(&mut self, _cx0: f64, _cy0: f64, _x: f64, _y: f64) {}
    fn curve_to(&mut self, _cx0: f64, _cy0: f64, _cx1: f64, _cy1: f64, _x: f64, _y: f64) {}
    fn close(&mut self) {}
}

/// Test pen that renders commands as SVG path data, one token per command.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct SvgPen(Vec<String>);

#[cfg(test)]
impl SvgPen {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl OutlinePen for SvgPen {
    fn move_to(&mut self, x: f64, y: f64) {
        self.0.push(format!("M{x},{y}"));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.0.push(format!("L{x},{y}"));
    }

    fn quad_to(&mut self, cx0: f64, cy0: f64, x: f64, y: f64) {
        self.0.push(format!("Q{cx0},{cy0} {x},{y}"));
    }

    fn curve_to(&mut self, cx0: f64, cy0: f64, cx1: f64, cy1: f64, x: f64, y: f64) {
        self.0.push(format!("C{cx0},{cy0} {cx1},{cy1} {x},{y}"));
    }

    fn close(&mut self) {
        self.0.push("Z".into());
    }
}

#[cfg(test)]
impl std::fmt::Display for SvgPen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw_sample(pen: &mut impl OutlinePen) {
        pen.move_to(1.0, 2.45556);
        pen.line_to(1.2, 4.0);
        pen.quad_to(2.0345, 3.56789, -0.157, -425.07);
        pen.curve_to(-37.0010, 4.5, 2.0, 1.0, -0.5, -0.25);
        pen.close();
    }

    #[test]
    fn svg_pen() {
        let mut pen = SvgPen::new();
        draw_sample(&mut pen);
        assert_eq!(
            pen.to_string(),
            "M1,2.45556 L1.2,4 Q2.0345,3.56789 -0.157,-425.07 C-37.001,4.5 2,1 -0.5,-0.25 Z"
        );
    }

    #[test]
    fn bez_path_pen() {
        let mut path = kurbo::BezPath::new();
        draw_sample(&mut path);
        let elements = path.elements();
        assert_eq!(elements.len(), 5);
        assert_eq!(
            elements[1],
            kurbo::PathEl::LineTo(kurbo::Point::new(1.2, 4.0))
        );
        assert_eq!(elements[4], kurbo::PathEl::ClosePath);
    }

    #[test]
    fn recording_pen() {
        let mut elements: Vec<PathElement> = Vec::new();
        draw_sample(&mut elements);
        assert_eq!(elements[0], PathElement::MoveTo { x: 1.0, y: 2.45556 });
        assert_eq!(elements.last(), Some(&PathElement::Close));
    }
}
