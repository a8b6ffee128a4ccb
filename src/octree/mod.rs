pub mod detail;
pub mod search;
pub mod types;

pub use crate::spatial::math::vector::V3c;
pub use types::{CloudPoint, Octree, OctreeError, OctreeParams, OctreeStats};

use crate::octree::types::{Octant, PointStore};

impl<'a, P> Octree<'a, P>
where
    P: CloudPoint + Clone,
{
    /// Creates an empty octree with the given parameters.
    /// A bucket size of zero or a negative minimum extent would never let the
    /// subdivision terminate, so both are rejected here.
    pub fn new(params: OctreeParams) -> Result<Self, OctreeError> {
        if params.bucket_size == 0 {
            return Err(OctreeError::InvalidBucketSize(params.bucket_size));
        }
        if !(params.min_extent >= 0.) {
            return Err(OctreeError::InvalidMinExtent(params.min_extent));
        }
        Ok(Self {
            params,
            ..Default::default()
        })
    }

    /// Builds the tree over all points of the given container.
    /// Any previously built tree is released first; the container is borrowed or
    /// deep-copied depending on `OctreeParams::copy_points`.
    pub fn initialize(&mut self, points: &'a [P]) {
        self.clear();
        if points.is_empty() {
            return;
        }
        self.store = if self.params.copy_points {
            PointStore::Owned(points.to_vec())
        } else {
            PointStore::Borrowed(points)
        };

        let size = points.len() as u32;
        self.successors = (1..=size).collect();
        let bounds = self.bounds_of(0..size);
        self.root = Some(self.create_octant(bounds.center, bounds.extent, 0, size - 1, size));
    }

    /// Builds the tree over the subset of points named by `indices`, in that order,
    /// leaving every other index of the container inactive. The caller is responsible
    /// for the indices being valid and free of duplicates.
    pub fn initialize_with_indices(&mut self, points: &'a [P], indices: &[u32]) {
        self.clear();
        if indices.is_empty() {
            return;
        }
        self.store = if self.params.copy_points {
            PointStore::Owned(points.to_vec())
        } else {
            PointStore::Borrowed(points)
        };

        // Imprint the callers order into the successor array before partitioning
        self.successors = (1..=points.len() as u32).collect();
        for pair in indices.windows(2) {
            self.successors[pair[0] as usize] = pair[1];
        }

        let bounds = self.bounds_of(indices.iter().copied());
        let start = indices[0];
        let end = indices[indices.len() - 1];
        self.root = Some(self.create_octant(
            bounds.center,
            bounds.extent,
            start,
            end,
            indices.len() as u32,
        ));
    }

    /// Releases the tree, the successor array and the owned point copy if there was one
    pub fn clear(&mut self) {
        self.root = None;
        self.store = PointStore::default();
        self.successors = Vec::new();
        self.enumerated_paths.clear();
    }

    /// Number of active points the tree was built over; for subset builds this is the
    /// subset size, not the container size
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, |root| root.size as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Walks the tree and gathers shape counters, mostly useful for tuning `bucket_size`
    pub fn stats(&self) -> OctreeStats {
        let mut stats = OctreeStats::default();
        if let Some(root) = &self.root {
            Self::gather_stats(root, 0, &mut stats);
        }
        stats
    }

    fn gather_stats(octant: &Octant, depth: u32, stats: &mut OctreeStats) {
        stats.octant_count += 1;
        stats.max_depth = stats.max_depth.max(depth);
        if octant.is_leaf {
            stats.leaf_count += 1;
            stats.max_leaf_size = stats.max_leaf_size.max(octant.size);
        } else {
            for child in octant.children.iter().flatten() {
                Self::gather_stats(child, depth + 1, stats);
            }
        }
    }
}
