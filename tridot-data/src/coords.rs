//! Structural traits for anything that exposes 3D coordinates.
//!
//! Measurements accept any [`Coordinates`] value rather than a concrete point
//! type, so raw arrays, tuples and `glam` vectors can be measured against a
//! [`Point3D`](crate::Point3D) directly.

use std::fmt;

use glam::DVec3;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in coordinate order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

/// A value with numeric `x`, `y` and `z` coordinates.
pub trait Coordinates {
    fn x(&self) -> f64;

    fn y(&self) -> f64;

    fn z(&self) -> f64;

    /// The coordinates as a `glam` vector.
    fn position(&self) -> DVec3 {
        DVec3::new(self.x(), self.y(), self.z())
    }

    /// Euclidean distance to `other`.
    fn distance_to<P: Coordinates + ?Sized>(&self, other: &P) -> f64 {
        self.position().distance(other.position())
    }
}

/// A value with coordinates and an optional textual label.
pub trait Labeled: Coordinates {
    fn label(&self) -> Option<&str>;
}

impl<T: Coordinates + ?Sized> Coordinates for &T {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }

    fn z(&self) -> f64 {
        (**self).z()
    }

    fn position(&self) -> DVec3 {
        (**self).position()
    }
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn label(&self) -> Option<&str> {
        (**self).label()
    }
}

impl Coordinates for DVec3 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> f64 {
        self.z
    }

    fn position(&self) -> DVec3 {
        *self
    }
}

impl Coordinates for [f64; 3] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn z(&self) -> f64 {
        self[2]
    }
}

impl Coordinates for (f64, f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn z(&self) -> f64 {
        self.2
    }
}
