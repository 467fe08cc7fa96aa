//! Voxel Node Pool Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in node_pool_operations.rs

use bytemuck::{Pod, Zeroable};

/// Sentinel stored in `child_indices` for an absent child
pub const NULL_CHILD: i32 = -1;

/// The root always lives at index 0
pub const ROOT_INDEX: i32 = 0;

/// Opaque white
pub const DEFAULT_NODE_COLOR: [f32; 4] = [1.0; 4];

/// Octree node stored on GPU
///
/// Layout matches the std430 struct read by the ray marcher:
/// `bool isLeaf; int childIndices[8]; vec4 color;` (64 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct VoxelNode {
    /// 0 or 1. GLSL bools occupy 4 bytes
    pub is_leaf: u32,
    /// Child node indices by octant code, `NULL_CHILD` when absent
    pub child_indices: [i32; 8],
    pub _padding: [u32; 3],
    /// RGBA of the latest insertion that passed through this node
    pub color: [f32; 4],
}

impl VoxelNode {
    pub const EMPTY: Self = Self {
        is_leaf: 0,
        child_indices: [NULL_CHILD; 8],
        _padding: [0; 3],
        color: DEFAULT_NODE_COLOR,
    };
}

impl Default for VoxelNode {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Append-only arena of nodes, addressed by index
#[derive(Debug, Clone)]
pub struct NodePoolData {
    /// Contiguous backing storage, allocation order == upload order
    pub nodes: Vec<VoxelNode>,
}
