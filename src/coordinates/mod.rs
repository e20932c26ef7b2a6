//! Coordinate representations and the shared capability they satisfy.
//!
//! The [`Coordinate`] trait exposes exactly two required operations — convert
//! to Cartesian, convert to spherical — and builds every shared algorithm
//! (distance, equality) on top of them, so the math lives in one place
//! instead of once per representation.

use std::fmt;

use crate::Result;

pub mod cartesian;
pub mod guard;
pub mod spheric;

pub use cartesian::CartesianCoordinate;
pub use spheric::SphericCoordinate;

/// Absolute tolerance for coordinate equality comparisons.
pub const EPSILON: f64 = 1e-4;

/// Compares two components with the crate-wide absolute tolerance.
pub(crate) fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Capability shared by every 3D point representation.
///
/// Implementors provide only the two conversions; distance and equality are
/// supplied as default algorithms expressed purely in terms of those
/// conversions. Both algorithms work across representations: any coordinate
/// can be compared against any other regardless of concrete type.
///
/// # Absent arguments
///
/// Distance against `None` is `+∞` ("unknown distance is infinite") and
/// equality against `None` is `false`. Neither is an error; missing data is
/// deliberately distinguished from invalid data, which surfaces as
/// [`LocusError`](crate::LocusError).
///
/// # Errors
///
/// The default methods return `Err(ConversionFailure)` only when normalizing
/// one side to the common representation fails, which requires numerically
/// degenerate input (for example component overflow during magnitude
/// computation).
///
/// ```rust
/// use locus::{CartesianCoordinate, Coordinate, SphericCoordinate};
///
/// let cart = CartesianCoordinate::new(0.0, 0.0, 2.0)?;
/// let spheric = SphericCoordinate::new(2.0, 0.0, 0.0)?;
///
/// // The same point on the polar axis, in either representation.
/// assert!(cart.is_equal(Some(&spheric))?);
/// assert!(cart.distance(Some(&spheric))? < 1e-12);
/// assert_eq!(cart.distance(None)?, f64::INFINITY);
/// # Ok::<(), locus::LocusError>(())
/// ```
pub trait Coordinate: fmt::Debug + Send + Sync {
    /// Normalizes this point to the Cartesian representation.
    fn as_cartesian(&self) -> Result<CartesianCoordinate>;

    /// Normalizes this point to the spherical representation.
    fn as_spheric(&self) -> Result<SphericCoordinate>;

    /// Direct distance between this point and `other`.
    ///
    /// The default metric, identical to [`cartesian_distance`].
    ///
    /// [`cartesian_distance`]: Coordinate::cartesian_distance
    fn distance(&self, other: Option<&dyn Coordinate>) -> Result<f64> {
        self.cartesian_distance(other)
    }

    /// Euclidean distance after normalizing both sides to Cartesian space.
    fn cartesian_distance(&self, other: Option<&dyn Coordinate>) -> Result<f64> {
        let other = match other {
            Some(other) => other,
            None => return Ok(f64::INFINITY),
        };
        let own = self.as_cartesian()?;
        let other = other.as_cartesian()?;

        let dx = own.x() - other.x();
        let dy = own.y() - other.y();
        let dz = own.z() - other.z();
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }

    /// Great-circle distance after normalizing both sides to spherical space.
    ///
    /// When the radii differ the larger sphere is used; see
    /// [`SphericCoordinate::great_circle_distance`] for the exact law.
    fn spheric_distance(&self, other: Option<&dyn Coordinate>) -> Result<f64> {
        let other = match other {
            Some(other) => other,
            None => return Ok(f64::INFINITY),
        };
        let own = self.as_spheric()?;
        let other = other.as_spheric()?;
        Ok(own.great_circle_distance(&other))
    }

    /// Position equality with absolute tolerance [`EPSILON`], compared in
    /// Cartesian space.
    fn is_equal(&self, other: Option<&dyn Coordinate>) -> Result<bool> {
        let other = match other {
            Some(other) => other,
            None => return Ok(false),
        };
        let own = self.as_cartesian()?;
        let other = other.as_cartesian()?;

        Ok(nearly_equal(own.x(), other.x())
            && nearly_equal(own.y(), other.y())
            && nearly_equal(own.z(), other.z()))
    }
}
