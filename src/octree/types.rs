use crate::spatial::{math::vector::V3c, Cube};

/// Read access to the three coordinates of a point, addressed by axis index 0,1,2.
/// The octree never stores coordinates of its own, it only ever reads them back
/// through this trait.
pub trait CloudPoint {
    fn coordinate(&self, axis: usize) -> f32;

    fn position(&self) -> V3c<f32> {
        V3c::new(self.coordinate(0), self.coordinate(1), self.coordinate(2))
    }
}

impl CloudPoint for V3c<f32> {
    fn coordinate(&self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("Invalid axis index for 3 dimensional point!"),
        }
    }

    fn position(&self) -> V3c<f32> {
        *self
    }
}

impl CloudPoint for [f32; 3] {
    fn coordinate(&self, axis: usize) -> f32 {
        self[axis]
    }

    fn position(&self) -> V3c<f32> {
        V3c::from(*self)
    }
}

/// error types during usage or creation of the octree
#[derive(Debug)]
pub enum OctreeError {
    InvalidBucketSize(u32),
    InvalidMinExtent(f32),
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct OctreeParams {
    /// Octants with at most this many points are not subdivided further
    pub bucket_size: u32,
    /// If set, the octree keeps its own copy of the point container instead of borrowing it
    pub copy_points: bool,
    /// Octants with a half-side of at most twice this value are not subdivided further;
    /// zero disables the cutoff
    pub min_extent: f32,
}

impl Default for OctreeParams {
    fn default() -> Self {
        Self {
            bucket_size: 32,
            copy_points: false,
            min_extent: 0.,
        }
    }
}

/// Counters describing the shape of a built tree, gathered by walking it
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OctreeStats {
    pub octant_count: usize,
    pub leaf_count: usize,
    pub max_depth: u32,
    pub max_leaf_size: u32,
}

/// The point container is either borrowed from the caller for the lifetime of the tree,
/// or deep-copied at build time, decided by `OctreeParams::copy_points`.
pub(in crate::octree) enum PointStore<'a, P: Clone> {
    Borrowed(&'a [P]),
    Owned(Vec<P>),
}

impl<P: Clone> Default for PointStore<'_, P> {
    fn default() -> Self {
        PointStore::Borrowed(&[])
    }
}

impl<P: Clone> PointStore<'_, P> {
    pub(in crate::octree) fn points(&self) -> &[P] {
        match self {
            PointStore::Borrowed(points) => points,
            PointStore::Owned(points) => points,
        }
    }
}

/// One node of the tree. The points belonging to the octant form a singly-linked run
/// inside the successor array, starting at `start` and reachable in `size` steps;
/// `end` is the last index of the run. Children are addressed by the region hash
/// of their center relative to `bounds.center`.
pub(in crate::octree) struct Octant {
    pub(in crate::octree) bounds: Cube,
    pub(in crate::octree) start: u32,
    pub(in crate::octree) end: u32,
    pub(in crate::octree) size: u32,
    pub(in crate::octree) is_leaf: bool,
    pub(in crate::octree) children: [Option<Box<Octant>>; 8],
}

pub struct Octree<'a, P: CloudPoint + Clone> {
    pub(in crate::octree) params: OctreeParams,
    pub(in crate::octree) store: PointStore<'a, P>,
    // successors[i] is the next point index inside the same run; the value stored for
    // the last index of a run is unspecified and must never be read
    pub(in crate::octree) successors: Vec<u32>,
    pub(in crate::octree) root: Option<Box<Octant>>,
    // Root-to-node child slots of the octants retained by the last depth enumeration
    pub(in crate::octree) enumerated_paths: Vec<Vec<u8>>,
}

impl<P: CloudPoint + Clone> Default for Octree<'_, P> {
    fn default() -> Self {
        Self {
            params: OctreeParams::default(),
            store: PointStore::default(),
            successors: Vec::new(),
            root: None,
            enumerated_paths: Vec::new(),
        }
    }
}
