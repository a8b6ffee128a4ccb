use crate::octree::detail::collect_run;
use crate::octree::types::{CloudPoint, Octant, Octree};
use crate::spatial::math::{hash_region, vector::V3c};

/// Best candidate found so far during a nearest neighbor descent.
/// `distance` is the actual distance, not its square; it doubles as the radius of
/// the shrinking search ball.
struct NearestCandidate {
    index: Option<u32>,
    distance: f32,
}

impl<P> Octree<'_, P>
where
    P: CloudPoint + Clone,
{
    ///####################################################################################
    /// Radius neighbor search
    ///####################################################################################

    /// Returns the indices of all points strictly closer to `query` than `radius`.
    /// The order follows the tree traversal and is deterministic for a fixed input,
    /// but it is not sorted by distance.
    pub fn radius_neighbors(&self, query: &P, radius: f32) -> Vec<u32> {
        let mut result_indices = Vec::new();
        if let Some(root) = &self.root {
            let query = query.position();
            self.radius_neighbors_in(root, &query, radius, radius * radius, &mut result_indices);
        }
        result_indices
    }

    /// Same as `radius_neighbors`, additionally returning the squared distance of
    /// every reported neighbor in a parallel vector
    pub fn radius_neighbors_with_distances(&self, query: &P, radius: f32) -> (Vec<u32>, Vec<f32>) {
        let mut result_indices = Vec::new();
        let mut sq_distances = Vec::new();
        if let Some(root) = &self.root {
            let query = query.position();
            self.radius_neighbors_with_distances_in(
                root,
                &query,
                radius,
                radius * radius,
                &mut result_indices,
                &mut sq_distances,
            );
        }
        (result_indices, sq_distances)
    }

    fn radius_neighbors_in(
        &self,
        octant: &Octant,
        query: &V3c<f32>,
        radius: f32,
        sq_radius: f32,
        result_indices: &mut Vec<u32>,
    ) {
        // The ball contains the whole octant, every point of the run is a neighbor
        // without any per-point distance test
        if octant.bounds.inside_ball(query, sq_radius) {
            result_indices.extend(self.run(octant.start, octant.size));
            return;
        }

        if octant.is_leaf {
            for index in self.run(octant.start, octant.size) {
                let diff = self.position(index) - *query;
                if diff.dot(&diff) < sq_radius {
                    result_indices.push(index);
                }
            }
            return;
        }

        for child in octant.children.iter().flatten() {
            if child.bounds.overlaps_ball(query, radius, sq_radius) {
                self.radius_neighbors_in(child, query, radius, sq_radius, result_indices);
            }
        }
    }

    fn radius_neighbors_with_distances_in(
        &self,
        octant: &Octant,
        query: &V3c<f32>,
        radius: f32,
        sq_radius: f32,
        result_indices: &mut Vec<u32>,
        sq_distances: &mut Vec<f32>,
    ) {
        if octant.bounds.inside_ball(query, sq_radius) {
            for index in self.run(octant.start, octant.size) {
                let diff = self.position(index) - *query;
                result_indices.push(index);
                sq_distances.push(diff.dot(&diff));
            }
            return;
        }

        if octant.is_leaf {
            for index in self.run(octant.start, octant.size) {
                let diff = self.position(index) - *query;
                let sq_distance = diff.dot(&diff);
                if sq_distance < sq_radius {
                    result_indices.push(index);
                    sq_distances.push(sq_distance);
                }
            }
            return;
        }

        for child in octant.children.iter().flatten() {
            if child.bounds.overlaps_ball(query, radius, sq_radius) {
                self.radius_neighbors_with_distances_in(
                    child,
                    query,
                    radius,
                    sq_radius,
                    result_indices,
                    sq_distances,
                );
            }
        }
    }

    ///####################################################################################
    /// Nearest neighbor search
    ///####################################################################################

    /// Returns the index of the point closest to `query`, or None for an empty tree.
    /// With `min_distance` set to a nonnegative value only points strictly farther
    /// away than that qualify, which suppresses self-matches for `Some(0.)`; `None`
    /// and negative values enforce no lower bound. Among points at the same distance
    /// the first one in traversal order wins.
    pub fn find_neighbor(&self, query: &P, min_distance: Option<f32>) -> Option<u32> {
        let root = self.root.as_ref()?;
        let query = query.position();
        // A negative comparand lets every nonnegative squared distance qualify
        let sq_min_distance = min_distance.map_or(-1., |d| if d < 0. { d } else { d * d });
        let mut best = NearestCandidate {
            index: None,
            distance: f32::INFINITY,
        };
        self.find_neighbor_in(root, &query, sq_min_distance, &mut best);
        best.index
    }

    /// Returns true when the ball around the best candidate is completely inside
    /// `octant`, so neither siblings nor ancestors can hold a closer point
    fn find_neighbor_in(
        &self,
        octant: &Octant,
        query: &V3c<f32>,
        sq_min_distance: f32,
        best: &mut NearestCandidate,
    ) -> bool {
        if octant.is_leaf {
            let mut sq_max_distance = best.distance * best.distance;
            for index in self.run(octant.start, octant.size) {
                let diff = self.position(index) - *query;
                let sq_distance = diff.dot(&diff);
                if sq_distance > sq_min_distance && sq_distance < sq_max_distance {
                    best.index = Some(index);
                    sq_max_distance = sq_distance;
                }
            }
            best.distance = sq_max_distance.sqrt();
            return octant.bounds.contains_ball(query, best.distance);
        }

        // Descend towards the region the query itself lies in first, it is the most
        // promising and shrinks the ball for the sibling checks below
        let best_region = hash_region(query, &octant.bounds.center) as usize;
        if let Some(child) = &octant.children[best_region] {
            if self.find_neighbor_in(child, query, sq_min_distance, best) {
                return true;
            }
        }

        for (region, child) in octant.children.iter().enumerate() {
            if region == best_region {
                continue;
            }
            if let Some(child) = child {
                if !child
                    .bounds
                    .overlaps_ball(query, best.distance, best.distance * best.distance)
                {
                    continue;
                }
                if self.find_neighbor_in(child, query, sq_min_distance, best) {
                    return true;
                }
            }
        }

        octant.bounds.contains_ball(query, best.distance)
    }

    ///####################################################################################
    /// Depth enumeration + octant-restricted search
    ///####################################################################################

    /// Returns the point indices of every octant at the given tree depth, root children
    /// being depth 1. Octants shallower than `depth` are not represented. None is
    /// returned for depth zero or an empty tree. The enumerated octants are retained
    /// in order, so following `radius_search_limited` calls can name them by position;
    /// any previous retained enumeration is replaced.
    pub fn octants_at_depth(&mut self, depth: u32) -> Option<Vec<Vec<u32>>> {
        self.enumerated_paths.clear();
        if depth < 1 {
            return None;
        }
        let root = self.root.as_ref()?;

        let mut found = Vec::new();
        collect_octants_at_depth(root, depth, &mut Vec::new(), &mut found);

        let successors = &self.successors;
        let mut index_lists: Vec<Vec<u32>> = Vec::new();

        // Runs of distinct octants are disjoint, so each extraction owns its output
        // slot and only reads shared state
        #[cfg(feature = "parallel")]
        {
            index_lists.resize_with(found.len(), Vec::new);
            crossbeam::thread::scope(|scope| {
                for (index_list, (octant, _)) in index_lists.iter_mut().zip(found.iter()) {
                    scope.spawn(move |_| {
                        *index_list = collect_run(successors, octant.start, octant.size);
                    });
                }
            })
            .expect("Run extraction threads not to panic");
        }

        #[cfg(not(feature = "parallel"))]
        for (octant, _) in &found {
            index_lists.push(collect_run(successors, octant.start, octant.size));
        }

        self.enumerated_paths = found.into_iter().map(|(_, path)| path).collect();
        Some(index_lists)
    }

    /// Answers a radius query from a single octant of the last depth enumeration,
    /// named by its position in the enumerated list. None is returned when the octant
    /// index is out of range, or when the ball escapes the octant while another
    /// enumerated octant overlaps it; the caller must then fall back to a full
    /// `radius_neighbors` query.
    pub fn radius_search_limited(
        &self,
        octant_index: usize,
        query: &P,
        radius: f32,
    ) -> Option<Vec<u32>> {
        let octant = self.enumerated_octant(octant_index)?;
        let query = query.position();
        let sq_radius = radius * radius;
        if !self.ball_answerable_locally(octant_index, octant, &query, radius, sq_radius) {
            return None;
        }
        let mut result_indices = Vec::new();
        self.radius_neighbors_in(octant, &query, radius, sq_radius, &mut result_indices);
        Some(result_indices)
    }

    /// Same as `radius_search_limited`, additionally returning squared distances
    pub fn radius_search_limited_with_distances(
        &self,
        octant_index: usize,
        query: &P,
        radius: f32,
    ) -> Option<(Vec<u32>, Vec<f32>)> {
        let octant = self.enumerated_octant(octant_index)?;
        let query = query.position();
        let sq_radius = radius * radius;
        if !self.ball_answerable_locally(octant_index, octant, &query, radius, sq_radius) {
            return None;
        }
        let mut result_indices = Vec::new();
        let mut sq_distances = Vec::new();
        self.radius_neighbors_with_distances_in(
            octant,
            &query,
            radius,
            sq_radius,
            &mut result_indices,
            &mut sq_distances,
        );
        Some((result_indices, sq_distances))
    }

    /// The octant alone can answer the query if the ball never leaves it, or if no
    /// other enumerated octant reaches into the ball
    fn ball_answerable_locally(
        &self,
        octant_index: usize,
        octant: &Octant,
        query: &V3c<f32>,
        radius: f32,
        sq_radius: f32,
    ) -> bool {
        if octant.bounds.contains_ball(query, radius) {
            return true;
        }
        for (other_index, other_path) in self.enumerated_paths.iter().enumerate() {
            if other_index == octant_index {
                continue;
            }
            if let Some(other) = self.resolve_path(other_path) {
                if other.bounds.overlaps_ball(query, radius, sq_radius) {
                    return false;
                }
            }
        }
        true
    }

    fn enumerated_octant(&self, octant_index: usize) -> Option<&Octant> {
        self.resolve_path(self.enumerated_paths.get(octant_index)?)
    }

    fn resolve_path(&self, path: &[u8]) -> Option<&Octant> {
        let mut octant = self.root.as_deref()?;
        for region in path {
            octant = octant.children[*region as usize].as_deref()?;
        }
        Some(octant)
    }
}

fn collect_octants_at_depth<'t>(
    octant: &'t Octant,
    remaining: u32,
    path: &mut Vec<u8>,
    found: &mut Vec<(&'t Octant, Vec<u8>)>,
) {
    if remaining == 0 {
        found.push((octant, path.clone()));
        return;
    }
    for (region, child) in octant.children.iter().enumerate() {
        if let Some(child) = child {
            path.push(region as u8);
            collect_octants_at_depth(child, remaining - 1, path, found);
            path.pop();
        }
    }
}
