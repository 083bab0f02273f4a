//! Tridot Data Crate
//!
//! Labeled points in 3D space and triangles built from them, with distance,
//! perimeter and area measurements. This crate is CPU-only and holds no
//! state: every value is constructed once and never mutated.
//!
//! ## Example
//!
//! ```
//! use tridot_data::{Point3D, Triangle3D};
//!
//! let a = Point3D::labeled(0.0, 0.0, 0.0, "A");
//! let b = Point3D::labeled(3.0, 0.0, 0.0, "B");
//! let c = Point3D::labeled(0.0, 4.0, 0.0, "C");
//!
//! assert_eq!(a.distance_to(&b), 3.0);
//!
//! let triangle = Triangle3D::new(&a, &b, &c);
//! assert_eq!(triangle.calculate_perimeter(), 12.0);
//! assert_eq!(triangle.calculate_area(), 6.0);
//!
//! let sum = a.add_vector(&b).unwrap();
//! assert_eq!(sum.label(), Some("A+B"));
//! ```

pub mod coords;
pub mod error;
pub mod point;
pub mod triangle;

pub use coords::{Axis, Coordinates, Labeled};
pub use error::{GeometryError, Operand, Result};
pub use point::Point3D;
pub use triangle::{AreaPolicy, Triangle3D};
