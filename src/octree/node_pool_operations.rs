//! Voxel Node Pool Operations - Pure DOP Functions
//!
//! Growth only appends, so an index handed out once stays valid for the
//! lifetime of the pool.

use super::node_pool_data::{NodePoolData, VoxelNode, NULL_CHILD, ROOT_INDEX};
use crate::error::{OctreeError, OctreeResult};

/// Highest index a node can have while still fitting in an `i32` child slot
pub const MAX_NODES: usize = i32::MAX as usize;

/// Create a node pool holding only the root node
pub fn create_node_pool(reserve_nodes: usize) -> NodePoolData {
    let mut pool = NodePoolData {
        nodes: Vec::with_capacity(reserve_nodes.max(1)),
    };
    create_root(&mut pool);
    pool
}

/// Append the root. Only valid on an empty pool
fn create_root(pool: &mut NodePoolData) {
    debug_assert!(pool.nodes.is_empty(), "root must be the first node");
    pool.nodes.push(VoxelNode::EMPTY);
}

/// Append a default node and return its index
pub fn allocate_node(pool: &mut NodePoolData) -> OctreeResult<i32> {
    let index = pool.nodes.len();
    if index >= MAX_NODES {
        log::warn!("[NodePool] Cannot allocate node {}: pool exhausted", index);
        return Err(OctreeError::PoolExhausted { requested: index });
    }

    pool.nodes.push(VoxelNode::EMPTY);
    Ok(index as i32)
}

/// Reserve room for `additional` nodes ahead of a bulk build
pub fn reserve_nodes(pool: &mut NodePoolData, additional: usize) {
    pool.nodes.reserve(additional);
}

fn checked_slot(pool: &NodePoolData, index: i32) -> OctreeResult<usize> {
    let len = pool.nodes.len();
    if index < 0 || index as usize >= len {
        log::warn!("[NodePool] Index out of bounds: {} (size {})", index, len);
        return Err(OctreeError::OutOfRange {
            index: index as i64,
            len,
        });
    }
    Ok(index as usize)
}

/// Bounds-checked read access
pub fn get_node(pool: &NodePoolData, index: i32) -> OctreeResult<&VoxelNode> {
    let slot = checked_slot(pool, index)?;
    Ok(&pool.nodes[slot])
}

/// Bounds-checked write access
pub fn get_node_mut(pool: &mut NodePoolData, index: i32) -> OctreeResult<&mut VoxelNode> {
    let slot = checked_slot(pool, index)?;
    Ok(&mut pool.nodes[slot])
}

pub fn root(pool: &NodePoolData) -> &VoxelNode {
    &pool.nodes[ROOT_INDEX as usize]
}

pub fn node_count(pool: &NodePoolData) -> usize {
    pool.nodes.len()
}

/// The flattened node array in allocation order
pub fn nodes(pool: &NodePoolData) -> &[VoxelNode] {
    &pool.nodes
}

/// Check if node is a leaf
pub fn is_leaf(node: &VoxelNode) -> bool {
    node.is_leaf != 0
}

pub fn mark_leaf(node: &mut VoxelNode) {
    node.is_leaf = 1;
}

/// Child index in `octant`, `None` if the slot is empty
pub fn child(node: &VoxelNode, octant: usize) -> Option<i32> {
    match node.child_indices[octant] {
        NULL_CHILD => None,
        index => Some(index),
    }
}

/// Fill an empty child slot. Filled slots are never overwritten
pub fn set_child(node: &mut VoxelNode, octant: usize, index: i32) {
    debug_assert_eq!(node.child_indices[octant], NULL_CHILD);
    node.child_indices[octant] = index;
}

/// Bit i set when octant i holds a child
pub fn occupancy_mask(node: &VoxelNode) -> u8 {
    node.child_indices
        .iter()
        .enumerate()
        .filter(|&(_, &index)| index != NULL_CHILD)
        .fold(0u8, |mask, (octant, _)| mask | (1 << octant))
}
