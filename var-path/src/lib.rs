//! Editable glyph outlines for variable font tooling.
//!
//! A [`VarPath`] stores the points of a glyph outline in three flat buffers:
//! interleaved coordinates, a [`PointFlags`] tag per point and a list of
//! [`ContourInfo`] descriptors. Points may be on-curve, quadratic off-curve
//! (TrueType style, with implied on-curve points between consecutive
//! controls) or cubic off-curve, and may be freely mixed within one outline.
//!
//! The compact form is expanded into explicit drawing commands with
//! [`VarPath::draw`], which feeds any [`OutlinePen`]. Paths that share the
//! same structure can be combined with itemwise arithmetic, which is how
//! instances of a variable glyph are blended:
//!
//! ```
//! use var_path::{PathElement, VarPath};
//!
//! let mut light = VarPath::new();
//! light.move_to(0.0, 0.0);
//! light.line_to(0.0, 100.0);
//! light.line_to(100.0, 100.0);
//! light.close_path();
//!
//! let bold = light.mul_scalar(2.0);
//! let regular = light.interpolate(&bold, 0.5).unwrap();
//!
//! let mut commands: Vec<PathElement> = Vec::new();
//! regular.draw(&mut commands).unwrap();
//! assert_eq!(commands[1], PathElement::LineTo { x: 0.0, y: 150.0 });
//! ```

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bbox;
mod contour;
mod draw;
mod error;
mod path;
mod pen;
mod point;
mod var_array;

pub use bbox::BoundingBox;
pub use contour::ContourInfo;
pub use error::{DrawError, PathError};
pub use path::VarPath;
pub use pen::{NullPen, OutlinePen, PathElement};
pub use point::{PathPoint, PointFlags, PointType};
pub use var_array::VarArray;

/// Re-export of the geometry crate used for transforms and path conversion.
pub use kurbo;
