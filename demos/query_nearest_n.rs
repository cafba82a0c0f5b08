//! Find the N nearest points to an indexed point, bounded along the index axis.
//!
//! The index projects every point onto one coordinate. `max_distance` cuts the
//! search off along that coordinate only; distances used for ranking are true 2D
//! squared distances. Results are sorted by distance (closest first) and start
//! with the query point itself whenever `n` is not `Some(0)`.

use axdex::prelude::*;

fn main() {
    let mut index = Axdex::with_capacity_and_axis(6, Axis::X);

    let origin = index.insert(Point2D::new(0.0, 0.0)); // Point 0
    index.insert(Point2D::new(1.0, 0.0)); // Point 1: distance 1 from origin
    index.insert(Point2D::new(0.0, 1.0)); // Point 2: distance 1 from origin
    index.insert(Point2D::new(1.0, 1.0)); // Point 3: distance sqrt(2) from origin
    index.insert(Point2D::new(3.0, 3.0)); // Point 4: distance sqrt(18) from origin
    index.insert(Point2D::new(10.0, 10.0)); // Point 5: distance sqrt(200) from origin

    println!("=== Query Nearest N Example ===\n");

    // Query 1: n = 1 only ever returns the query point
    println!("Query 1: 1 nearest point to point 0:");
    let mut results = Vec::new();
    index.query_nearest_n(origin, Some(1), f64::INFINITY, &mut results).unwrap();
    println!("  Result: {:?}", results);
    assert_eq!(results, vec![origin]);
    println!("  ✓ Correct!\n");

    // Query 2: 3 nearest; points 1 and 2 are equidistant
    println!("Query 2: 3 nearest points to point 0:");
    results.clear();
    index.query_nearest_n(origin, Some(3), f64::INFINITY, &mut results).unwrap();
    println!("  Result: {:?}", results);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], origin);
    assert!(results[1..].contains(&1) && results[1..].contains(&2));
    println!("  ✓ Correct!\n");

    // Query 3: every point, but only within 1.5 along X
    println!("Query 3: all points within 1.5 of point 0 along X:");
    results.clear();
    index.query_nearest_n(origin, None, 1.5, &mut results).unwrap();
    println!("  Result: {:?}", results);
    assert_eq!(results.len(), 4, "Points 4 and 5 lie beyond the cutoff");
    println!("  ✓ Correct!\n");

    // Query 4: more neighbors than points
    println!("Query 4: 100 nearest points (only 6 exist):");
    let found = index.nearest_n_with_distances(4, Some(100), f64::INFINITY).unwrap();
    for (id, distance_sqr) in &found {
        println!("  id {id}: distance {:.3}", distance_sqr.sqrt());
    }
    assert_eq!(found.len(), 6);
    println!("  ✓ Correct!\n");

    // The index is frozen now
    match index.try_insert(Point2D::new(5.0, 5.0)) {
        Err(err) => println!("Insert after querying rejected: {err}"),
        Ok(id) => unreachable!("frozen index accepted point {id}"),
    }
}
