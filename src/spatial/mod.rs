pub mod math;

mod tests;

use crate::spatial::math::{offset_region, vector::V3c};

/// Axis-aligned cube given by its center and half of its side length.
/// Octants of the tree cover the cube with closed faces, so a point lying exactly
/// on a face still belongs to the cube.
#[derive(Default, Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Cube {
    pub center: V3c<f32>,
    pub extent: f32,
}

impl Cube {
    /// Creates the bounds of the child occupying the given region of this cube
    pub(crate) fn child_bounds_for(&self, octant: u8) -> Cube {
        let child_extent = 0.5 * self.extent;
        Cube {
            center: self.center + offset_region(octant) * child_extent,
            extent: child_extent,
        }
    }

    /// True if the closed ball around `query` with `radius` lies completely inside the cube.
    /// The farthest face must still be at least `radius` away from the query on every axis.
    pub(crate) fn contains_ball(&self, query: &V3c<f32>, radius: f32) -> bool {
        let offset = (*query - self.center).abs();
        if offset.x + radius > self.extent {
            return false;
        }
        if offset.y + radius > self.extent {
            return false;
        }
        if offset.z + radius > self.extent {
            return false;
        }
        true
    }

    /// True if the cube lies completely inside the ball around `query` with the given
    /// squared radius, i.e. the corner farthest from the query is strictly inside the ball.
    pub(crate) fn inside_ball(&self, query: &V3c<f32>, sq_radius: f32) -> bool {
        let corner = (*query - self.center).abs() + V3c::unit(self.extent);
        corner.dot(&corner) < sq_radius
    }

    /// True if the ball around `query` and the cube intersect.
    /// A ball exactly touching a corner of the cube does not count as an overlap.
    pub(crate) fn overlaps_ball(&self, query: &V3c<f32>, radius: f32, sq_radius: f32) -> bool {
        let offset = (*query - self.center).abs();
        let max_distance = radius + self.extent;

        // Completely outside, the ball can not even reach the enclosing region
        if offset.x > max_distance || offset.y > max_distance || offset.z > max_distance {
            return false;
        }

        let num_less_extent = (offset.x < self.extent) as u8
            + (offset.y < self.extent) as u8
            + (offset.z < self.extent) as u8;

        // Inside the surface region of the cube on at least two axes, the ball penetrates a face
        if num_less_extent > 1 {
            return true;
        }

        // Edge or corner region, check the distance to the closest edge/corner
        let edge_offset = V3c::new(
            (offset.x - self.extent).max(0.),
            (offset.y - self.extent).max(0.),
            (offset.z - self.extent).max(0.),
        );
        edge_offset.dot(&edge_offset) < sq_radius
    }
}
