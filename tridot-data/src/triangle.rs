//! Triangles built from three points.
//!
//! Every measurement is derived from the three edge lengths, which are in
//! turn computed with [`Coordinates::distance_to`]. Vertex order fixes the
//! edge pairing: edge1 = dot1–dot2, edge2 = dot2–dot3, edge3 = dot3–dot1.
//!
//! No geometric validation happens at construction. Collinear or coincident
//! vertices are accepted and show up as a zero (or NaN) area.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::coords::Coordinates;
use crate::error::{GeometryError, Result};
use crate::point::Point3D;

/// How [`Triangle3D::area_with_policy`] reports a negative Heron radicand.
///
/// Rounding can push `s * (s - a) * (s - b) * (s - c)` slightly below zero
/// for nearly degenerate triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaPolicy {
    /// Report an area of exactly `0.0`.
    #[default]
    Clamp,
    /// Report `f64::NAN`.
    NotANumber,
    /// Fail with [`GeometryError::NegativeRadicand`].
    Strict,
}

impl fmt::Display for AreaPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaPolicy::Clamp => f.write_str("clamp"),
            AreaPolicy::NotANumber => f.write_str("nan"),
            AreaPolicy::Strict => f.write_str("strict"),
        }
    }
}

impl FromStr for AreaPolicy {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clamp" => Ok(AreaPolicy::Clamp),
            "nan" => Ok(AreaPolicy::NotANumber),
            "strict" => Ok(AreaPolicy::Strict),
            _ => Err(GeometryError::UnknownAreaPolicy(s.to_string())),
        }
    }
}

/// A triangle defined by three ordered vertices.
///
/// `P` defaults to an owned [`Point3D`]; use `Triangle3D<&Point3D>` to
/// borrow existing points instead of copying them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3D<P = Point3D> {
    dot1: P,
    dot2: P,
    dot3: P,
}

impl<P: Coordinates> Triangle3D<P> {
    /// Create a triangle from three vertices, in order.
    pub fn new(dot1: P, dot2: P, dot3: P) -> Self {
        Self { dot1, dot2, dot3 }
    }

    pub fn dot1(&self) -> &P {
        &self.dot1
    }

    pub fn dot2(&self) -> &P {
        &self.dot2
    }

    pub fn dot3(&self) -> &P {
        &self.dot3
    }

    /// All three vertices, in order.
    pub fn vertices(&self) -> [&P; 3] {
        [&self.dot1, &self.dot2, &self.dot3]
    }

    /// Edge lengths `[dot1–dot2, dot2–dot3, dot3–dot1]`.
    pub fn edges(&self) -> [f64; 3] {
        let edge1 = self.dot1.distance_to(&self.dot2);
        let edge2 = self.dot2.distance_to(&self.dot3);
        let edge3 = self.dot3.distance_to(&self.dot1);
        trace!(edge1, edge2, edge3, "computed triangle edges");
        [edge1, edge2, edge3]
    }

    /// Sum of the three edge lengths.
    pub fn calculate_perimeter(&self) -> f64 {
        let [edge1, edge2, edge3] = self.edges();
        edge1 + edge2 + edge3
    }

    /// Half the perimeter.
    pub fn semi_perimeter(&self) -> f64 {
        self.calculate_perimeter() / 2.0
    }

    /// Area via Heron's formula, clamping a negative radicand to zero.
    ///
    /// NaN coordinates still produce a NaN area. See
    /// [`area_with_policy`](Self::area_with_policy) for the other policies.
    pub fn calculate_area(&self) -> f64 {
        heron_area(self.edges(), AreaPolicy::Clamp).unwrap_or(0.0)
    }

    /// Area via Heron's formula, reporting a negative radicand per `policy`.
    pub fn area_with_policy(&self, policy: AreaPolicy) -> Result<f64> {
        heron_area(self.edges(), policy)
    }

    /// Whether the area is NaN or no larger than `tolerance`.
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        let area = self.calculate_area();
        area.is_nan() || area <= tolerance
    }
}

impl<P: Coordinates> TryFrom<Vec<P>> for Triangle3D<P> {
    type Error = GeometryError;

    fn try_from(points: Vec<P>) -> Result<Self> {
        let count = points.len();
        let [dot1, dot2, dot3]: [P; 3] = points
            .try_into()
            .map_err(|_| GeometryError::VertexCount { count })?;
        Ok(Self::new(dot1, dot2, dot3))
    }
}

fn heron_area([edge1, edge2, edge3]: [f64; 3], policy: AreaPolicy) -> Result<f64> {
    let s = (edge1 + edge2 + edge3) / 2.0;
    let radicand = s * (s - edge1) * (s - edge2) * (s - edge3);

    // NaN input stays NaN
    if radicand >= 0.0 || radicand.is_nan() {
        return Ok(radicand.sqrt());
    }

    match policy {
        AreaPolicy::Clamp => {
            debug!(radicand, "clamping negative Heron radicand to zero");
            Ok(0.0)
        }
        AreaPolicy::NotANumber => {
            debug!(radicand, "negative Heron radicand reported as NaN");
            Ok(f64::NAN)
        }
        AreaPolicy::Strict => {
            warn!(radicand, "negative Heron radicand rejected");
            Err(GeometryError::NegativeRadicand { radicand })
        }
    }
}
