//! # Spherical Coordinate Module
//!
//! This module provides the spherical representation of a 3D point: a radius
//! plus two angles.
//!
//! ## Angle Convention
//!
//! - **latitude** is the polar angle measured from the positive Z axis, in
//!   `[0, PI]` — `0` points along +Z, `PI` along -Z
//! - **longitude** is the azimuthal angle in the X-Y plane, in `[-PI, PI]`,
//!   measured from +X toward +Y
//!
//! ## Degenerate Radius
//!
//! A radius of `0` collapses both angles: every `(0, lat, lon)` names the
//! same point. Conversions therefore map the origin to the canonical zero
//! value `(0, 0, 0)`, and the spherical→Cartesian→spherical round trip is
//! only angle-preserving for radius > 0.
//!
//! ## Examples
//!
//! ```rust
//! use locus::{Coordinate, SphericCoordinate};
//! use std::f64::consts::{FRAC_PI_2, PI};
//!
//! // A point on the equator of a unit sphere, at longitude PI
//! let coord = SphericCoordinate::new(1.0, FRAC_PI_2, PI)?;
//! let cart = coord.as_cartesian()?;
//! assert!((cart.x() + 1.0).abs() < 1e-12);
//!
//! // Range invariants are enforced, never clamped.
//! assert!(SphericCoordinate::new(-1.0, 0.0, 0.0).is_err());
//! # Ok::<(), locus::LocusError>(())
//! ```

use std::f64::consts::PI;
use std::sync::Arc;

use crate::coordinates::{guard, CartesianCoordinate, Coordinate};
use crate::pool::{component_bits, Canonical, InterningPool};
use crate::{LocusError, Result};

/// A point in 3D space described by radius and two angles
///
/// # Invariant
///
/// `radius >= 0`, `0 <= latitude <= PI`, `-PI <= longitude <= PI`, all three
/// finite. Established at construction; the value is immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericCoordinate {
    /// Distance to the origin, `>= 0`
    radius: f64,
    /// Polar angle from +Z, in `[0, PI]`
    latitude: f64,
    /// Azimuthal angle, in `[-PI, PI]`
    longitude: f64,
}

impl SphericCoordinate {
    /// Creates a new spherical coordinate
    ///
    /// # Errors
    ///
    /// Returns [`LocusError::InvalidValue`] if the radius is negative, the
    /// latitude lies outside `[0, PI]`, the longitude lies outside
    /// `[-PI, PI]`, or any argument is non-finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use locus::SphericCoordinate;
    /// use std::f64::consts::FRAC_PI_4;
    ///
    /// let coord = SphericCoordinate::new(0.1, FRAC_PI_4, -1.2)?;
    /// assert_eq!(coord.radius(), 0.1);
    /// assert_eq!(coord.latitude(), FRAC_PI_4);
    /// assert_eq!(coord.longitude(), -1.2);
    /// # Ok::<(), locus::LocusError>(())
    /// ```
    pub fn new(radius: f64, latitude: f64, longitude: f64) -> Result<Self> {
        guard::check_non_negative("radius", radius)?;
        guard::check_in_range("latitude", latitude, 0.0, PI)?;
        guard::check_in_range("longitude", longitude, -PI, PI)?;
        Ok(SphericCoordinate {
            radius,
            latitude,
            longitude,
        })
    }

    /// Distance to the origin
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polar angle from the positive Z axis
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Azimuthal angle in the X-Y plane
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Great-circle distance between two spherical points
    ///
    /// Computes the central angle
    /// `acos(sin(lat1)*sin(lat2) + cos(lat1)*cos(lat2)*cos(|lon1 - lon2|))`
    /// (the acos argument clamped against rounding) and scales it by the
    /// **larger** of the two radii.
    ///
    /// Using the larger sphere when the radii differ makes this an
    /// approximation rather than a metric; it is exact only when both points
    /// lie on the same sphere.
    ///
    /// ```rust
    /// use locus::SphericCoordinate;
    /// use std::f64::consts::{FRAC_PI_2, PI};
    ///
    /// // Central angle of PI/2 on a sphere of radius 2
    /// let a = SphericCoordinate::new(2.0, 0.0, 0.0)?;
    /// let b = SphericCoordinate::new(2.0, FRAC_PI_2, 0.0)?;
    /// assert!((a.great_circle_distance(&b) - PI).abs() < 1e-12);
    /// # Ok::<(), locus::LocusError>(())
    /// ```
    pub fn great_circle_distance(&self, other: &SphericCoordinate) -> f64 {
        let cos_angle = self.latitude.sin() * other.latitude.sin()
            + self.latitude.cos()
                * other.latitude.cos()
                * (self.longitude - other.longitude).abs().cos();
        let central_angle = cos_angle.clamp(-1.0, 1.0).acos();

        central_angle * self.radius.max(other.radius)
    }

    /// Returns a new interned value with the radius replaced
    ///
    /// The replacement is validated like [`new`](Self::new) and the result is
    /// deduplicated through `pool`.
    pub fn with_radius(&self, radius: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(radius, self.latitude, self.longitude)?))
    }

    /// Returns a new interned value with the latitude replaced
    pub fn with_latitude(&self, latitude: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(self.radius, latitude, self.longitude)?))
    }

    /// Returns a new interned value with the longitude replaced
    pub fn with_longitude(&self, longitude: f64, pool: &InterningPool<Self>) -> Result<Arc<Self>> {
        Ok(pool.intern(Self::new(self.radius, self.latitude, longitude)?))
    }
}

/// The canonical zero value `(0, 0, 0)`
impl Default for SphericCoordinate {
    fn default() -> Self {
        SphericCoordinate {
            radius: 0.0,
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl Coordinate for SphericCoordinate {
    /// Converts to the Cartesian representation
    ///
    /// `x = r*sin(lat)*cos(lon)`, `y = r*sin(lat)*sin(lon)`,
    /// `z = r*cos(lat)`. A result that fails Cartesian finiteness is
    /// rejected with [`LocusError::ConversionFailure`].
    fn as_cartesian(&self) -> Result<CartesianCoordinate> {
        let sin_lat = self.latitude.sin();
        let x = self.radius * sin_lat * self.longitude.cos();
        let y = self.radius * sin_lat * self.longitude.sin();
        let z = self.radius * self.latitude.cos();

        CartesianCoordinate::new(x, y, z).map_err(|err| {
            LocusError::ConversionFailure(format!(
                "cartesian image of (r={}, lat={}, lon={}) rejected: {err}",
                self.radius, self.latitude, self.longitude
            ))
        })
    }

    fn as_spheric(&self) -> Result<SphericCoordinate> {
        Ok(*self)
    }
}

impl Canonical for SphericCoordinate {
    type Key = [u64; 3];

    fn canonical_key(&self) -> Self::Key {
        [
            component_bits(self.radius),
            component_bits(self.latitude),
            component_bits(self.longitude),
        ]
    }
}
