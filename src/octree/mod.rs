//! Sparse voxel octree: an index-addressed node pool and the builder that
//! routes colored points into it

pub mod node_pool_data;
pub mod node_pool_operations;
pub mod sparse_octree_data;
pub mod sparse_octree_operations;

pub use node_pool_data::{NodePoolData, VoxelNode, DEFAULT_NODE_COLOR, NULL_CHILD, ROOT_INDEX};
pub use node_pool_operations::{
    allocate_node, child, create_node_pool, get_node, get_node_mut, is_leaf, node_count, nodes,
    occupancy_mask, reserve_nodes,
};
pub use sparse_octree_data::{OctreeStats, SparseVoxelOctreeData};
pub use sparse_octree_operations::{
    bounds, calculate_octant, create_from_config, create_sparse_voxel_octree, find_leaf,
    get_stats, insert, insert_all, insertion_path, node, node_extent,
};
