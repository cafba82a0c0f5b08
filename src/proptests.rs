//! Property-based tests for Axdex queries over random point sets

#[cfg(test)]
mod proptests {
    use crate::{Axdex, Axis, Point, Point2D};
    use proptest::prelude::*;

    fn points_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((-50.0_f64..50.0, -50.0_f64..50.0), 1..120)
    }

    fn build(points: &[(f64, f64)], axis: Axis) -> Axdex<Point2D> {
        points.iter().fold(Axdex::with_capacity_and_axis(points.len(), axis), |mut index, &p| {
            index.insert(Point2D::from(p));
            index
        })
    }

    proptest! {
        /// Results never exceed n, start with the query point and are sorted by distance.
        #[test]
        fn prop_results_bounded_and_sorted(
            points in points_strategy(),
            pick in any::<prop::sample::Index>(),
            n in 1_usize..30,
            max_distance in 0.0_f64..100.0,
            use_y in any::<bool>()
        ) {
            let axis = if use_y { Axis::Y } else { Axis::X };
            let index = build(&points, axis);
            let id = pick.index(points.len());

            let found = index.nearest_n_with_distances(id, Some(n), max_distance).unwrap();
            prop_assert!(found.len() <= n);
            prop_assert_eq!(found[0], (id, 0.0));
            prop_assert!(found.windows(2).all(|w| w[0].1 <= w[1].1));

            let origin = axis.value(&index.points()[id]);
            for &(other, _) in &found {
                prop_assert!((axis.value(&index.points()[other]) - origin).abs() <= max_distance);
            }
        }

        /// The k-th returned distance matches the k-th smallest distance within the cutoff.
        #[test]
        fn prop_exact_against_scan(
            points in points_strategy(),
            pick in any::<prop::sample::Index>(),
            n in 0_usize..40,
            max_distance in 0.0_f64..100.0
        ) {
            let index = build(&points, Axis::X);
            let id = pick.index(points.len());
            let source = Point2D::from(points[id]);

            let mut expected: Vec<f64> = points
                .iter()
                .filter(|q| (q.0 - source.x).abs() <= max_distance)
                .map(|&q| Point2D::from(q).distance_sqr(&source))
                .collect();
            expected.sort_by(|a, b| a.total_cmp(b));
            expected.truncate(n);

            let found: Vec<f64> = index
                .nearest_n_with_distances(id, Some(n), max_distance)
                .unwrap()
                .into_iter()
                .map(|(_, d)| d)
                .collect();
            prop_assert_eq!(found, expected);
        }

        /// Same arguments against the same frozen index give the same answer.
        #[test]
        fn prop_queries_idempotent(
            points in points_strategy(),
            pick in any::<prop::sample::Index>(),
            n in 1_usize..30
        ) {
            let index = build(&points, Axis::X);
            let id = pick.index(points.len());

            let mut first = Vec::new();
            let mut second = Vec::new();
            index.query_nearest_n(id, Some(n), f64::INFINITY, &mut first).unwrap();
            index.query_nearest_n(id, Some(n), f64::INFINITY, &mut second).unwrap();
            prop_assert_eq!(first, second);
        }

        /// n = 1 always yields exactly the query point.
        #[test]
        fn prop_n_one_is_self(
            points in points_strategy(),
            pick in any::<prop::sample::Index>(),
            max_distance in 0.0_f64..100.0
        ) {
            let index = build(&points, Axis::Y);
            let id = pick.index(points.len());
            let mut results = Vec::new();
            index.query_nearest_n(id, Some(1), max_distance, &mut results).unwrap();
            prop_assert_eq!(results, vec![id]);
        }
    }
}
