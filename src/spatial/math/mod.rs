pub mod vector;

use crate::spatial::math::vector::V3c;

///####################################################################################
/// Octant
///####################################################################################

/// Signed per-axis direction from an octants center towards the center of one child
pub(crate) fn offset_region(octant: u8) -> V3c<f32> {
    match octant {
        0 => V3c::new(-1., -1., -1.),
        1 => V3c::new(1., -1., -1.),
        2 => V3c::new(-1., 1., -1.),
        3 => V3c::new(1., 1., -1.),
        4 => V3c::new(-1., -1., 1.),
        5 => V3c::new(1., -1., 1.),
        6 => V3c::new(-1., 1., 1.),
        7 => V3c::new(1., 1., 1.),
        _ => panic!("Invalid octant hash provided for spatial reference!"),
    }
}

/// Each octant is separated into 8 child regions based on the position of points relative
/// to the octants center. The hash function assigns an index for each child region, so the
/// child slots can be addressed in a well defined manner: bit 0 is set for x, bit 1 for y
/// and bit 2 for z, whenever the points coordinate is strictly greater than the centers.
/// A point lying exactly on a separating plane hashes to the low side.
pub fn hash_region(point: &V3c<f32>, center: &V3c<f32>) -> u8 {
    // The below is rewritten to be branchless
    // (if point.x > center.x { 1 } else { 0 })
    //     + if point.y > center.y { 2 } else { 0 }
    //     + if point.z > center.z { 4 } else { 0 }
    (point.x > center.x) as u8
        + (point.y > center.y) as u8 * 2
        + (point.z > center.z) as u8 * 4
}
