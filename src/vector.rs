//! A two-dimensional vector with addition and scalar multiplication.

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt;
use core::ops::{Add, Mul};

use crate::error::VectorError;

/// A vector in the plane.
///
/// The default vector is the origin. Arithmetic never mutates its operands;
/// every operation returns a new vector.
///
/// ```
/// use datamodel::Vector;
///
/// let v = Vector::new(2.0, 4.0) + Vector::new(2.0, 1.0);
/// assert_eq!(v.to_string(), "Vector(4, 5)");
/// assert_eq!((Vector::new(3.0, 4.0) * 3.0).magnitude(), 15.0);
/// ```
///
/// Only scalar multiplication is defined:
///
/// ```compile_fail
/// use datamodel::Vector;
///
/// let v = Vector::new(3.0, 4.0);
/// let _ = v * v;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Vector {
    /// Creates a vector from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns whether the vector has a nonzero magnitude.
    ///
    /// Only the origin is falsy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// Multiplies both coordinates by `scalar`.
    #[must_use]
    pub fn scale(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Multiplies by an operand whose kind is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::UnsupportedOperation`] if the operand is a
    /// vector.
    ///
    /// ```
    /// use datamodel::{Vector, VectorError};
    ///
    /// let v = Vector::new(3.0, 4.0);
    /// assert_eq!(v.try_mul(3), Ok(Vector::new(9.0, 12.0)));
    /// assert_eq!(v.try_mul(v), Err(VectorError::UnsupportedOperation));
    /// ```
    pub fn try_mul(&self, operand: impl Into<Operand>) -> Result<Self, VectorError> {
        match operand.into() {
            Operand::Scalar(scalar) => Ok(self.scale(scalar)),
            Operand::Vector(_) => Err(VectorError::UnsupportedOperation),
        }
    }

    /// Returns the display form, `Vector(x, y)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(not(feature = "std"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    fn add(self, other: &Vector) -> Vector {
        *self + *other
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

/// Right-hand side of a multiplication checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A real number.
    Scalar(f64),
    /// Another vector, which cannot be multiplied by.
    Vector(Vector),
}

impl From<f64> for Operand {
    fn from(scalar: f64) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<i32> for Operand {
    fn from(scalar: i32) -> Self {
        Self::Scalar(f64::from(scalar))
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Self::Vector(v)
    }
}
