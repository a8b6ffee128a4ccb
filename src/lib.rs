// TODO:
// - generalize the pruning predicates over a metric trait; the partition itself never
//   measures distance, so L1/Linf queries could run on the same tree
// - radius_search_limited re-resolves the retained octant path on every call; cache the
//   resolution per enumeration if it ever shows up in profiles

pub mod octree;
pub mod spatial;
