//! End-to-end tests across representations, the shared distance/equality
//! algorithms and the interning pool.

use std::sync::{Arc, Barrier};
use std::thread;

use approx::assert_abs_diff_eq;
use locus::{CartesianCoordinate, Coordinate, InterningPool, Location, SphericCoordinate};

const TOLERANCE: f64 = 1e-4;

#[test]
fn known_euclidean_distances() {
    let pool = InterningPool::<CartesianCoordinate>::new();
    let origin = pool.create(0.0, 0.0, 0.0).unwrap();
    let close = pool.create(0.1, -0.2, 0.3).unwrap();
    let far = pool.create(1000.0, 2000.0, -3000.0).unwrap();

    let short = origin.distance(Some(close.as_ref())).unwrap();
    assert_abs_diff_eq!(short, 0.374166, epsilon = TOLERANCE);

    let long = close.distance(Some(far.as_ref())).unwrap();
    assert_abs_diff_eq!(long, 3741.978105, epsilon = TOLERANCE);

    // Symmetric in both directions
    let reverse = far.distance(Some(close.as_ref())).unwrap();
    assert_abs_diff_eq!(long, reverse, epsilon = TOLERANCE);
}

#[test]
fn berlin_to_tokyo_great_circle() {
    // Great-circle example at Earth radius, from the orthodrome article
    let earth_radius = 6370.0; // km
    let pool = InterningPool::<SphericCoordinate>::new();
    let berlin = pool
        .create(earth_radius, 52.517_f64.to_radians(), 13.40_f64.to_radians())
        .unwrap();
    let tokyo = pool
        .create(
            earth_radius,
            35.70_f64.to_radians(),
            139.767_f64.to_radians(),
        )
        .unwrap();

    let distance = berlin.spheric_distance(Some(tokyo.as_ref())).unwrap();
    assert_abs_diff_eq!(distance, 8918.0, epsilon = 2.0);

    // The result is invariant under converting either endpoint to Cartesian
    // space first; the shared algorithm normalizes back to spherical.
    let berlin_cart = berlin.as_cartesian().unwrap();
    let tokyo_cart = tokyo.as_cartesian().unwrap();

    let mixed = berlin.spheric_distance(Some(&tokyo_cart)).unwrap();
    assert_abs_diff_eq!(distance, mixed, epsilon = 2.0);

    let mixed = tokyo_cart.spheric_distance(Some(berlin.as_ref())).unwrap();
    assert_abs_diff_eq!(distance, mixed, epsilon = 2.0);

    let both = tokyo_cart.spheric_distance(Some(&berlin_cart)).unwrap();
    assert_abs_diff_eq!(distance, both, epsilon = 2.0);
}

#[test]
fn distance_to_origin_equals_radius() {
    let pool = InterningPool::<SphericCoordinate>::new();
    let coord = pool.create(1000.0, 0.33, -1.2).unwrap();
    let origin = pool.create(0.0, 0.0, 0.0).unwrap();

    let distance = coord.distance(Some(origin.as_ref())).unwrap();
    assert_abs_diff_eq!(distance, 1000.0, epsilon = TOLERANCE);
}

#[test]
fn round_trips_preserve_position_across_pools() {
    let cartesian_pool = InterningPool::<CartesianCoordinate>::new();
    let coord = cartesian_pool.create(0.1, -0.2, 0.3).unwrap();

    let spheric = coord.as_spheric().unwrap();
    let back = spheric.as_cartesian().unwrap();
    assert!(coord.is_equal(Some(&back)).unwrap());

    // Interning the round-tripped value does not collide with the original
    // unless the bits match exactly; both stay position-equal regardless.
    let reinterned = cartesian_pool.intern(back);
    assert!(reinterned.is_equal(Some(coord.as_ref())).unwrap());
}

#[test]
fn concurrent_interning_is_exactly_once() {
    let pool = Arc::new(InterningPool::<CartesianCoordinate>::new());
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Line all threads up so the lookup-or-insert races for real
                barrier.wait();
                (0..100)
                    .map(|_| pool.create(1.0, 2.0, 3.0).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut shared: Vec<Arc<CartesianCoordinate>> = Vec::new();
    for handle in handles {
        shared.extend(handle.join().unwrap());
    }

    // Every caller observed the single canonical instance
    let canonical = &shared[0];
    assert!(shared.iter().all(|coord| Arc::ptr_eq(coord, canonical)));
    assert_eq!(pool.len(), 1);
}

#[test]
fn concurrent_intern_and_release_stay_consistent() {
    let pool = Arc::new(InterningPool::<SphericCoordinate>::new());
    let threads = 4;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|worker| {
            let pool = Arc::clone(&pool);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..200 {
                    let coord = pool.create(1.0, 0.5, 0.5).unwrap();
                    assert_eq!(coord.radius(), 1.0);
                    if worker == 0 {
                        // Releasing races against interns on other threads;
                        // either outcome is fine, the pool must not corrupt.
                        pool.release(&coord);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    assert!(pool.len() <= 1);
}

#[test]
fn released_values_remain_usable() {
    let pool = InterningPool::<CartesianCoordinate>::new();
    let coord = pool.create(0.1, -0.2, 0.3).unwrap();

    assert!(pool.release(&coord));
    assert!(!pool.release(&coord));

    // Outstanding holders keep a fully functional immutable value
    let spheric = coord.as_spheric().unwrap();
    assert!(coord.is_equal(Some(&spheric)).unwrap());

    let replacement = pool.create(0.1, -0.2, 0.3).unwrap();
    assert!(!Arc::ptr_eq(&coord, &replacement));
    assert!(coord.is_equal(Some(replacement.as_ref())).unwrap());
}

#[test]
fn locations_compose_the_value_objects() {
    let pool = InterningPool::<SphericCoordinate>::new();
    let earth_radius = 6370.0;
    let berlin = Location::new(
        "Berlin",
        pool.create(earth_radius, 52.517_f64.to_radians(), 13.40_f64.to_radians())
            .unwrap(),
    );
    let tokyo = Location::new(
        "Tokyo",
        pool.create(
            earth_radius,
            35.70_f64.to_radians(),
            139.767_f64.to_radians(),
        )
        .unwrap(),
    );

    assert!(!berlin.is_equal(&tokyo).unwrap());
    let chord = berlin.distance_to(&tokyo).unwrap();
    // The straight-line chord is shorter than the surface path
    assert!(chord > 0.0 && chord < 8918.0);
}
