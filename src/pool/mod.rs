//! # Interning Pool Module
//!
//! A thread-safe flyweight cache for coordinate values: at most one live
//! shared instance exists per distinct value, per pool.
//!
//! ## Design Philosophy
//!
//! Pools are explicitly owned and injectable — construct one with
//! [`InterningPool::new`], hand it to whatever needs deduplicated values,
//! and drop it when done. For callers that want ambient process-wide sharing
//! the [`cartesian`] and [`spheric`] accessors expose two lazily initialized
//! default pools, one per coordinate kind. The kinds never share a pool.
//!
//! ## Concurrency
//!
//! The lookup-or-insert sequence is the single shared-mutation point. It
//! runs through the concurrent map's entry API, which holds the shard lock
//! across the entire "look up, then insert if absent" sequence — two
//! concurrent requests for the same value observe exactly one canonical
//! instance. [`release`](InterningPool::release) takes the same shard lock
//! and is therefore mutually exclusive with `intern` for the same value.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use locus::{CartesianCoordinate, InterningPool};
//!
//! let pool = InterningPool::<CartesianCoordinate>::new();
//! let first = pool.create(1.0, 2.0, 3.0)?;
//! let second = pool.create(1.0, 2.0, 3.0)?;
//!
//! // Same shared instance, not merely an equal value
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! // Releasing forgets the canonical instance but never invalidates holders
//! assert!(pool.release(&first));
//! let third = pool.create(1.0, 2.0, 3.0)?;
//! assert!(!Arc::ptr_eq(&first, &third));
//! # Ok::<(), locus::LocusError>(())
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::coordinates::{CartesianCoordinate, SphericCoordinate};
use crate::Result;

// Process-wide default pools, one per coordinate kind
static CARTESIAN_POOL: Lazy<InterningPool<CartesianCoordinate>> = Lazy::new(InterningPool::new);
static SPHERIC_POOL: Lazy<InterningPool<SphericCoordinate>> = Lazy::new(InterningPool::new);

/// The process-wide default pool for Cartesian coordinates
pub fn cartesian() -> &'static InterningPool<CartesianCoordinate> {
    &CARTESIAN_POOL
}

/// The process-wide default pool for spherical coordinates
pub fn spheric() -> &'static InterningPool<SphericCoordinate> {
    &SPHERIC_POOL
}

/// Maps an `f64` component to the bit pattern used for structural identity.
///
/// `-0.0` is folded into `0.0` so the two zeros intern to the same instance;
/// every other value keeps its exact bits.
pub(crate) fn component_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// Structural identity for poolable values.
///
/// The key must capture the entire observable state of the value: two values
/// are deduplicated into one shared instance exactly when their keys are
/// equal.
pub trait Canonical {
    /// Hashable identity of a value.
    type Key: Eq + Hash;

    /// Computes this value's structural identity.
    fn canonical_key(&self) -> Self::Key;
}

/// Thread-safe flyweight cache mapping each distinct value to its single
/// shared instance
///
/// One pool instance serves one concrete coordinate kind; pools are
/// independent and never cross-reference each other's entries.
pub struct InterningPool<T: Canonical> {
    entries: DashMap<T::Key, Arc<T>>,
}

impl<T: Canonical + fmt::Debug> InterningPool<T> {
    /// Creates an empty pool
    pub fn new() -> Self {
        InterningPool {
            entries: DashMap::new(),
        }
    }

    /// Returns the shared instance for `candidate`'s value
    ///
    /// If an equal value is already pooled the candidate is discarded and
    /// the existing instance returned; otherwise the candidate becomes the
    /// canonical instance. The lookup-or-insert sequence is atomic: under
    /// concurrent calls with equal values exactly one candidate wins and is
    /// observed by all callers.
    pub fn intern(&self, candidate: T) -> Arc<T> {
        match self.entries.entry(candidate.canonical_key()) {
            Entry::Occupied(entry) => {
                trace!("pool hit for {:?}, discarding candidate", candidate);
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                debug!("pool miss, interning {:?}", candidate);
                Arc::clone(&entry.insert(Arc::new(candidate)))
            }
        }
    }

    /// Removes the mapping for `value`'s structural identity, if present
    ///
    /// Returns whether a removal occurred. Outstanding references stay
    /// valid; only future [`intern`](Self::intern) calls are affected, which
    /// will promote a fresh candidate to canonical.
    pub fn release(&self, value: &T) -> bool {
        let removed = self.entries.remove(&value.canonical_key()).is_some();
        if removed {
            debug!("released {:?} from pool", value);
        }
        removed
    }

    /// Whether a value equal to `value` is currently pooled
    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains_key(&value.canonical_key())
    }

    /// Number of distinct values currently pooled
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool holds no values
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Canonical + fmt::Debug> Default for InterningPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Canonical + fmt::Debug> fmt::Debug for InterningPool<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterningPool")
            .field("len", &self.len())
            .finish()
    }
}

impl InterningPool<CartesianCoordinate> {
    /// Validates `(x, y, z)` and returns the shared instance for that point
    ///
    /// # Errors
    ///
    /// Returns [`LocusError::InvalidValue`](crate::LocusError::InvalidValue)
    /// if any component is NaN or infinite; nothing is interned in that
    /// case.
    pub fn create(&self, x: f64, y: f64, z: f64) -> Result<Arc<CartesianCoordinate>> {
        Ok(self.intern(CartesianCoordinate::new(x, y, z)?))
    }
}

impl InterningPool<SphericCoordinate> {
    /// Validates `(radius, latitude, longitude)` and returns the shared
    /// instance for that point
    ///
    /// # Errors
    ///
    /// Returns [`LocusError::InvalidValue`](crate::LocusError::InvalidValue)
    /// if the arguments violate the spherical range invariants; nothing is
    /// interned in that case.
    pub fn create(
        &self,
        radius: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Arc<SphericCoordinate>> {
        Ok(self.intern(SphericCoordinate::new(radius, latitude, longitude)?))
    }
}
