//! # Cartesian Coordinate Module
//!
//! This module provides the Euclidean representation of a 3D point.
//!
//! ## Design Philosophy
//!
//! `CartesianCoordinate` is an immutable value object: every constructor and
//! component-replacing builder validates the finiteness invariant up front,
//! so a value that exists is always safe to compute with. "Mutation" never
//! changes a value in place; it produces a new (possibly pooled) value with
//! one component replaced.
//!
//! ## Role as Common Representation
//!
//! Cartesian space is the normalization target for the shared distance and
//! equality algorithms because:
//! - The Euclidean metric is direct, with no singularities at the poles
//! - Component-wise comparison with an absolute tolerance is well defined
//! - Conversion from spherical space is total for every valid input
//!
//! ## Examples
//!
//! ```rust
//! use locus::CartesianCoordinate;
//!
//! let coord = CartesianCoordinate::new(3.0, 4.0, 0.0)?;
//! assert_eq!(coord.magnitude(), 5.0);
//!
//! // NaN and infinite components are rejected, never stored.
//! assert!(CartesianCoordinate::new(f64::NAN, 0.0, 0.0).is_err());
//! # Ok::<(), locus::LocusError>(())
//! ```

use std::sync::Arc;

use nalgebra::Vector3;

use crate::coordinates::{guard, nearly_equal, Coordinate, SphericCoordinate};
use crate::pool::{component_bits, Canonical, InterningPool};
use crate::{LocusError, Result};

/// A point in 3D Euclidean space
///
/// # Invariant
///
/// All three components are finite (neither NaN nor infinite). The invariant
/// is established at construction and can never be broken afterwards because
/// the value is immutable.
///
/// # Storage Strategy
///
/// - Each component stored as `f64`, exactly as provided
/// - No internal normalization or conversion artifacts
/// - `Copy` value semantics; interned sharing is layered on top by
///   [`InterningPool`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianCoordinate {
    /// X-component (horizontal position)
    x: f64,
    /// Y-component (vertical position)
    y: f64,
    /// Z-component (depth position)
    z: f64,
}

impl CartesianCoordinate {
    /// Creates a new Cartesian coordinate
    ///
    /// # Errors
    ///
    /// Returns [`LocusError::InvalidValue`] if any component is NaN or
    /// infinite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0)?;
    /// assert_eq!(coord.x(), 1.0);
    /// assert_eq!(coord.y(), 2.0);
    /// assert_eq!(coord.z(), 3.0);
    /// # Ok::<(), locus::LocusError>(())
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self> {
        guard::check_finite("x", x)?;
        guard::check_finite("y", y)?;
        guard::check_finite("z", z)?;
        Ok(CartesianCoordinate { x, y, z })
    }

    /// X-component
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-component
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-component
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean distance from the origin
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(3.0, 4.0, 0.0)?;
    /// assert_eq!(coord.magnitude(), 5.0);
    /// # Ok::<(), locus::LocusError>(())
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a new interned value with the X-component replaced
    ///
    /// The replacement is validated like [`new`](Self::new) and the result is
    /// deduplicated through `pool`.
    pub fn with_x(&self, x: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(x, self.y, self.z)?))
    }

    /// Returns a new interned value with the Y-component replaced
    pub fn with_y(&self, y: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(self.x, y, self.z)?))
    }

    /// Returns a new interned value with the Z-component replaced
    pub fn with_z(&self, z: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(self.x, self.y, z)?))
    }

    /// Converts to a nalgebra `Vector3` for linear algebra operations
    ///
    /// ```rust
    /// use locus::CartesianCoordinate;
    ///
    /// let coord = CartesianCoordinate::new(1.0, 2.0, 3.0)?;
    /// let vec = coord.to_vector3();
    /// assert_eq!(vec.norm(), coord.magnitude());
    /// # Ok::<(), locus::LocusError>(())
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a coordinate from a nalgebra `Vector3`
    ///
    /// # Errors
    ///
    /// Returns [`LocusError::InvalidValue`] if any vector component is
    /// non-finite.
    pub fn from_vector3(vec: Vector3<f64>) -> Result<Self> {
        Self::new(vec.x, vec.y, vec.z)
    }
}

/// The origin `(0, 0, 0)`
impl Default for CartesianCoordinate {
    fn default() -> Self {
        CartesianCoordinate {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

impl Coordinate for CartesianCoordinate {
    fn as_cartesian(&self) -> Result<CartesianCoordinate> {
        Ok(*self)
    }

    /// Converts to the spherical representation
    ///
    /// The zero vector maps to the canonical zero spherical value, avoiding
    /// the division by zero that latitude and longitude would otherwise need.
    ///
    /// Verified postcondition: converting the result back to Cartesian space
    /// reproduces this point within [`EPSILON`](crate::coordinates::EPSILON);
    /// a result that cannot satisfy that (or that fails the spherical
    /// invariant) is rejected with [`LocusError::ConversionFailure`] instead
    /// of being returned corrupt.
    fn as_spheric(&self) -> Result<SphericCoordinate> {
        let radius = self.magnitude();
        if !radius.is_finite() {
            return Err(LocusError::ConversionFailure(format!(
                "magnitude of ({}, {}, {}) overflows f64",
                self.x, self.y, self.z
            )));
        }
        if radius == 0.0 {
            return Ok(SphericCoordinate::default());
        }

        // Clamp against rounding pushing z/radius marginally outside [-1, 1]
        let latitude = (self.z / radius).clamp(-1.0, 1.0).acos();
        let longitude = self.y.atan2(self.x);

        let spheric = SphericCoordinate::new(radius, latitude, longitude).map_err(|err| {
            LocusError::ConversionFailure(format!(
                "spherical image of ({}, {}, {}) rejected: {err}",
                self.x, self.y, self.z
            ))
        })?;

        // Postcondition: the round trip must reproduce this point. Only this
        // direction checks it; checking both would recurse endlessly.
        let back = spheric.as_cartesian()?;
        if !(nearly_equal(back.x, self.x)
            && nearly_equal(back.y, self.y)
            && nearly_equal(back.z, self.z))
        {
            return Err(LocusError::ConversionFailure(format!(
                "round trip of ({}, {}, {}) through spherical space drifted to ({}, {}, {})",
                self.x, self.y, self.z, back.x, back.y, back.z
            )));
        }

        Ok(spheric)
    }
}

impl Canonical for CartesianCoordinate {
    type Key = [u64; 3];

    fn canonical_key(&self) -> Self::Key {
        [
            component_bits(self.x),
            component_bits(self.y),
            component_bits(self.z),
        ]
    }
}
