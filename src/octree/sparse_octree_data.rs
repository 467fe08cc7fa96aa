//! Sparse Voxel Octree Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in sparse_octree_operations.rs

use super::node_pool_data::NodePoolData;

/// Sparse voxel octree data
#[derive(Debug, Clone)]
pub struct SparseVoxelOctreeData {
    /// Owned node storage, root at index 0
    pub pool: NodePoolData,

    /// Octree configuration, fixed for the lifetime of the tree
    pub size: i32,
    pub max_depth: i32,
}

/// Octree statistics
#[derive(Debug, Clone, PartialEq)]
pub struct OctreeStats {
    pub total_nodes: usize,
    pub leaf_nodes: usize,
    pub node_capacity: usize,
    pub size: i32,
    pub max_depth: i32,
    pub byte_size: usize,
    pub memory_usage_mb: f32,
}
