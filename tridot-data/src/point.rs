//! Labeled points in 3D space.
//!
//! A [`Point3D`] is plain data: three `f64` coordinates and an optional
//! label. No validation is applied, so NaN and infinite coordinates are
//! accepted and propagate through every measurement.

use std::fmt;
use std::str::FromStr;

use glam::DVec3;

use crate::coords::{Axis, Coordinates, Labeled};
use crate::error::{GeometryError, Operand, Result};

/// A point in 3D space with an optional label.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Point3D {
    x: f64,
    y: f64,
    z: f64,
    label: Option<String>,
}

impl Point3D {
    /// Create an unlabeled point.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            label: None,
        }
    }

    /// Create a labeled point.
    pub fn labeled(x: f64, y: f64, z: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            z,
            label: Some(label.into()),
        }
    }

    /// Return a copy of this point carrying `label`.
    pub fn with_label(self, label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..self
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn position(&self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance to `other`.
    ///
    /// Only the coordinates of `other` are read; its label (if any) is
    /// ignored. The result is never negative for finite input and is
    /// exactly zero for identical coordinates.
    pub fn distance_to<P: Coordinates + ?Sized>(&self, other: &P) -> f64 {
        Coordinates::distance_to(self, other)
    }

    /// Componentwise sum of this point and `other`, labeled `"<self>+<other>"`.
    ///
    /// Neither operand is modified. Both operands must carry a label; the
    /// receiver is checked first.
    pub fn add_vector<P: Labeled + ?Sized>(&self, other: &P) -> Result<Point3D> {
        let left = self.label().ok_or(GeometryError::MissingLabel {
            operand: Operand::Left,
        })?;
        let right = other.label().ok_or(GeometryError::MissingLabel {
            operand: Operand::Right,
        })?;

        let sum = self.position() + other.position();
        Ok(Point3D::labeled(sum.x, sum.y, sum.z, format!("{left}+{right}")))
    }
}

impl Coordinates for Point3D {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }
}

impl Labeled for Point3D {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl From<DVec3> for Point3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            f.write_str(label)?;
        }
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Parses `x,y,z`, `(x,y,z)` or `label(x,y,z)`.
impl FromStr for Point3D {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (label, body) = match s.find('(') {
            Some(open) => {
                let body = s[open + 1..]
                    .strip_suffix(')')
                    .ok_or_else(|| GeometryError::MalformedPoint(s.to_string()))?;
                let label = s[..open].trim();
                (Some(label).filter(|l| !l.is_empty()), body)
            }
            None if s.contains(')') => return Err(GeometryError::MalformedPoint(s.to_string())),
            None => (None, s),
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() > 3 {
            return Err(GeometryError::TooManyCoordinates { count: parts.len() });
        }

        let mut coords = [0.0; 3];
        for (slot, axis) in coords.iter_mut().zip(Axis::ALL) {
            let part = parts
                .get(axis as usize)
                .copied()
                .filter(|p| !p.is_empty())
                .ok_or(GeometryError::MissingCoordinate { axis })?;
            *slot = part
                .parse::<f64>()
                .map_err(|_| GeometryError::InvalidCoordinate {
                    axis,
                    value: part.to_string(),
                })?;
        }

        let [x, y, z] = coords;
        Ok(match label {
            Some(label) => Point3D::labeled(x, y, z, label),
            None => Point3D::new(x, y, z),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn sample_points() -> Vec<Point3D> {
        vec![
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 2.0, 3.0),
            Point3D::new(-4.5, 0.25, 7.0),
            Point3D::new(1e6, -1e6, 0.5),
            Point3D::new(-0.001, 0.002, -0.003),
            Point3D::labeled(3.0, 4.0, 12.0, "far"),
        ]
    }

    #[test]
    fn test_point_creation() {
        let p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.position(), DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(p.label(), None);

        let q = Point3D::labeled(1.0, 2.0, 3.0, "Q");
        assert_eq!(q.label(), Some("Q"));
    }

    #[test]
    fn test_default_is_unlabeled_origin() {
        let p = Point3D::default();
        assert_eq!(p.position(), DVec3::ZERO);
        assert_eq!(p.label(), None);
    }

    #[test]
    fn test_non_finite_coordinates_accepted() {
        let p = Point3D::new(f64::NAN, f64::INFINITY, 0.0);
        assert!(p.x().is_nan());
        assert!(p.y().is_infinite());
        assert!(p.distance_to(&Point3D::default()).is_nan());
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for p in sample_points() {
            assert_eq!(p.distance_to(&p), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                assert!((a.distance_to(b) - b.distance_to(a)).abs() <= TOLERANCE);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = sample_points();
        for a in &points {
            for b in &points {
                for c in &points {
                    let direct = a.distance_to(c);
                    let detour = a.distance_to(b) + b.distance_to(c);
                    assert!(direct <= detour + TOLERANCE * detour.max(1.0));
                }
            }
        }
    }

    #[test]
    fn test_distance_known_value() {
        let a = Point3D::new(0.0, 0.0, 0.0);
        let b = Point3D::new(3.0, 4.0, 12.0);
        assert_eq!(a.distance_to(&b), 13.0);
    }

    #[test]
    fn test_distance_ignores_label() {
        let a = Point3D::labeled(1.0, 1.0, 1.0, "A");
        let b = Point3D::new(1.0, 1.0, 2.0);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&b), 1.0);
    }

    #[test]
    fn test_distance_to_structural_values() {
        let a = Point3D::new(1.0, 0.0, 0.0);
        assert_eq!(a.distance_to(&[1.0, 0.0, 2.0]), 2.0);
        assert_eq!(a.distance_to(&(4.0, 0.0, 0.0)), 3.0);
        assert_eq!(a.distance_to(&DVec3::new(1.0, 5.0, 0.0)), 5.0);
    }

    #[test]
    fn test_add_vector_label_and_coordinates() {
        let a = Point3D::labeled(1.0, 2.0, 3.0, "A");
        let b = Point3D::labeled(10.0, 20.0, 30.0, "B");

        let sum = a.add_vector(&b).unwrap();
        assert_eq!(sum.label(), Some("A+B"));
        assert_eq!(sum.position(), DVec3::new(11.0, 22.0, 33.0));

        // operands untouched
        assert_eq!(a, Point3D::labeled(1.0, 2.0, 3.0, "A"));
        assert_eq!(b, Point3D::labeled(10.0, 20.0, 30.0, "B"));
    }

    #[test]
    fn test_add_vector_commutes_in_coordinates_only() {
        let a = Point3D::labeled(0.5, -1.5, 2.0, "A");
        let b = Point3D::labeled(-3.0, 4.25, 8.0, "B");

        let ab = a.add_vector(&b).unwrap();
        let ba = b.add_vector(&a).unwrap();
        assert_eq!(ab.position(), ba.position());
        assert_eq!(ab.label(), Some("A+B"));
        assert_eq!(ba.label(), Some("B+A"));
    }

    #[test]
    fn test_add_vector_missing_labels() {
        let labeled = Point3D::labeled(1.0, 1.0, 1.0, "A");
        let bare = Point3D::new(1.0, 1.0, 1.0);

        assert_eq!(
            bare.add_vector(&labeled),
            Err(GeometryError::MissingLabel {
                operand: Operand::Left
            })
        );
        assert_eq!(
            labeled.add_vector(&bare),
            Err(GeometryError::MissingLabel {
                operand: Operand::Right
            })
        );
        assert_eq!(
            bare.add_vector(&bare),
            Err(GeometryError::MissingLabel {
                operand: Operand::Left
            })
        );
    }

    #[test]
    fn test_add_vector_chains_labels() {
        let a = Point3D::labeled(1.0, 0.0, 0.0, "A");
        let b = Point3D::labeled(0.0, 1.0, 0.0, "B");
        let c = Point3D::labeled(0.0, 0.0, 1.0, "C");

        let abc = a.add_vector(&b).and_then(|ab| ab.add_vector(&c)).unwrap();
        assert_eq!(abc.label(), Some("A+B+C"));
        assert_eq!(abc.position(), DVec3::ONE);
    }

    #[test]
    fn test_with_label_keeps_coordinates() {
        let p = Point3D::new(1.0, 2.0, 3.0).with_label("P");
        assert_eq!(p, Point3D::labeled(1.0, 2.0, 3.0, "P"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point3D::new(1.0, 2.5, -3.0).to_string(), "(1, 2.5, -3)");
        assert_eq!(Point3D::labeled(0.0, 0.0, 1.0, "A").to_string(), "A(0, 0, 1)");
    }

    #[test]
    fn test_parse_forms() {
        let bare: Point3D = "1, 2, 3".parse().unwrap();
        assert_eq!(bare, Point3D::new(1.0, 2.0, 3.0));

        let parens: Point3D = "(1,2,3)".parse().unwrap();
        assert_eq!(parens, Point3D::new(1.0, 2.0, 3.0));

        let labeled: Point3D = " A( -1.5, 0, 2e3 ) ".parse().unwrap();
        assert_eq!(labeled, Point3D::labeled(-1.5, 0.0, 2000.0, "A"));
    }

    #[test]
    fn test_parse_display_output() {
        let p = Point3D::labeled(0.5, -2.0, 7.0, "P");
        let parsed: Point3D = p.to_string().parse().unwrap();
        assert_eq!(parsed, p);
    }

    #[test]
    fn test_parse_missing_coordinate() {
        assert_eq!(
            "1,2".parse::<Point3D>(),
            Err(GeometryError::MissingCoordinate { axis: Axis::Z })
        );
        assert_eq!(
            "A()".parse::<Point3D>(),
            Err(GeometryError::MissingCoordinate { axis: Axis::X })
        );
        assert_eq!(
            "1,,3".parse::<Point3D>(),
            Err(GeometryError::MissingCoordinate { axis: Axis::Y })
        );
    }

    #[test]
    fn test_parse_invalid_input() {
        assert_eq!(
            "1,two,3".parse::<Point3D>(),
            Err(GeometryError::InvalidCoordinate {
                axis: Axis::Y,
                value: "two".to_string()
            })
        );
        assert_eq!(
            "1,2,3,4".parse::<Point3D>(),
            Err(GeometryError::TooManyCoordinates { count: 4 })
        );
        assert!(matches!(
            "A(1,2,3".parse::<Point3D>(),
            Err(GeometryError::MalformedPoint(_))
        ));
        assert!(matches!(
            "1,2,3)".parse::<Point3D>(),
            Err(GeometryError::MalformedPoint(_))
        ));
    }
}
