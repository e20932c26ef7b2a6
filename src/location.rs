//! A named place: binds a human-readable name to a coordinate.

use std::sync::Arc;

use crate::coordinates::Coordinate;
use crate::Result;

/// A location ties a name to a point in space
///
/// The name may be empty but always exists. The coordinate is held as a
/// shared reference to any [`Coordinate`] representation; a location never
/// owns the coordinate's lifetime beyond its own reference.
///
/// ```rust
/// use locus::{InterningPool, CartesianCoordinate, Location};
///
/// let pool = InterningPool::<CartesianCoordinate>::new();
/// let home = Location::new("home", pool.create(0.1, -0.2, 0.3)?);
/// let origin = Location::new("origin", pool.create(0.0, 0.0, 0.0)?);
///
/// assert!((home.distance_to(&origin)? - 0.374166).abs() < 1e-4);
/// # Ok::<(), locus::LocusError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Location {
    name: String,
    coordinate: Arc<dyn Coordinate>,
}

impl Location {
    /// Creates a location from a name and a shared coordinate
    pub fn new(name: impl Into<String>, coordinate: Arc<dyn Coordinate>) -> Self {
        Location {
            name: name.into(),
            coordinate,
        }
    }

    /// Name of the location
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The location's coordinate
    pub fn coordinate(&self) -> &Arc<dyn Coordinate> {
        &self.coordinate
    }

    /// Renames the location
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Moves the location to a different coordinate
    pub fn set_coordinate(&mut self, coordinate: Arc<dyn Coordinate>) {
        self.coordinate = coordinate;
    }

    /// Direct distance between two locations
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        self.coordinate.distance(Some(other.coordinate.as_ref()))
    }

    /// Whether two locations share name and position
    ///
    /// Positions are compared under the coordinate tolerance law, across
    /// representations.
    pub fn is_equal(&self, other: &Location) -> Result<bool> {
        if self.name != other.name {
            return Ok(false);
        }
        self.coordinate.is_equal(Some(other.coordinate.as_ref()))
    }
}
