#[cfg(test)]
mod ball_predicate_tests {
    use crate::spatial::{math::vector::V3c, Cube};

    fn unit_cube() -> Cube {
        Cube {
            center: V3c::unit(0.),
            extent: 1.,
        }
    }

    #[test]
    fn test_contains_ball() {
        let cube = unit_cube();
        assert!(cube.contains_ball(&V3c::unit(0.), 0.5));
        // The cube is closed, a ball reaching exactly to the faces still fits
        assert!(cube.contains_ball(&V3c::unit(0.), 1.));
        assert!(!cube.contains_ball(&V3c::unit(0.), 1.0001));
        assert!(!cube.contains_ball(&V3c::new(0.5, 0., 0.), 0.6));
        assert!(cube.contains_ball(&V3c::new(0.5, 0., 0.), 0.5));
    }

    #[test]
    fn test_inside_ball() {
        let cube = unit_cube();
        // The farthest corner is at squared distance 3 from the center, the comparison
        // against the squared radius is strict
        assert!(!cube.inside_ball(&V3c::unit(0.), 3.));
        assert!(cube.inside_ball(&V3c::unit(0.), 3.0001));
        assert!(cube.inside_ball(&V3c::unit(1.), 12.0001));
        assert!(!cube.inside_ball(&V3c::unit(1.), 12.));
    }

    #[test]
    fn test_overlaps_ball_face_region() {
        let cube = unit_cube();
        let query = V3c::new(1.5, 0., 0.);
        assert!(cube.overlaps_ball(&query, 0.6, 0.36));
        // Ball stops exactly at the face; offset on two axes is below the extent,
        // so the face region check accepts it
        assert!(cube.overlaps_ball(&query, 0.5, 0.25));
        assert!(!cube.overlaps_ball(&query, 0.4, 0.16));
    }

    #[test]
    fn test_overlaps_ball_corner_region() {
        let cube = unit_cube();
        let query = V3c::unit(2.);
        // Corner (1,1,1) sits at squared distance 3 from the query; touching it
        // exactly is not an overlap
        let touching = 3.0_f32.sqrt();
        assert!(!cube.overlaps_ball(&query, touching, 3.));
        assert!(cube.overlaps_ball(&query, 1.8, 3.24));
        assert!(!cube.overlaps_ball(&query, 1.7, 2.89));
    }

    #[test]
    fn test_overlaps_ball_far_out() {
        let cube = unit_cube();
        assert!(!cube.overlaps_ball(&V3c::new(3., 0., 0.), 0.5, 0.25));
        assert!(!cube.overlaps_ball(&V3c::new(0., -4., 0.), 2.9, 8.41));
    }

    #[test]
    fn test_overlaps_ball_query_inside_cube() {
        let cube = unit_cube();
        assert!(cube.overlaps_ball(&V3c::unit(0.), 0.1, 0.01));
        assert!(cube.overlaps_ball(&V3c::new(0.9, -0.9, 0.), 0.01, 0.0001));
    }

    #[test]
    fn test_child_bounds_for() {
        let cube = Cube {
            center: V3c::unit(2.),
            extent: 2.,
        };
        let low = cube.child_bounds_for(0);
        assert!(low.extent == 1.);
        assert!(low.center == V3c::unit(1.));
        let high = cube.child_bounds_for(7);
        assert!(high.center == V3c::unit(3.));
        let mixed = cube.child_bounds_for(1);
        assert!(mixed.center == V3c::new(3., 1., 1.));
    }
}
