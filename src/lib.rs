//! Locus: interned 3D coordinate value objects
//!
//! This crate provides two interchangeable representations of a point in 3D
//! space — [`CartesianCoordinate`] and [`SphericCoordinate`] — a shared
//! [`Coordinate`] capability that computes distances and equality across
//! representations, and a thread-safe [`InterningPool`] that guarantees at
//! most one live shared instance per distinct coordinate value.
//!
//! ```rust
//! use locus::{CartesianCoordinate, Coordinate, InterningPool};
//!
//! let pool = InterningPool::<CartesianCoordinate>::new();
//! let origin = pool.create(0.0, 0.0, 0.0)?;
//! let nearby = pool.create(0.1, -0.2, 0.3)?;
//!
//! let distance = origin.distance(Some(nearby.as_ref()))?;
//! assert!((distance - 0.374166).abs() < 1e-4);
//! # Ok::<(), locus::LocusError>(())
//! ```

use thiserror::Error;

pub mod coordinates;
pub mod location;
pub mod pool;

// Re-export commonly used types
pub use coordinates::cartesian::CartesianCoordinate;
pub use coordinates::spheric::SphericCoordinate;
pub use coordinates::Coordinate;
pub use location::Location;
pub use pool::{Canonical, InterningPool};

/// Main error type for the locus library
#[derive(Debug, Error)]
pub enum LocusError {
    /// A constructor or mutator argument violates a representation's range
    /// or finiteness invariant. Never silently clamped.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// A conversion produced a result that fails the target representation's
    /// invariant. Surfaced instead of returning a corrupt value.
    #[error("conversion failure: {0}")]
    ConversionFailure(String),
}

/// Result type for locus operations
pub type Result<T> = std::result::Result<T, LocusError>;
