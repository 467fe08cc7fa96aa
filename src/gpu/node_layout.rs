//! GPU node layout
//!
//! The ray marcher reads the node array as a std430 storage buffer, so the
//! host struct has to match it byte for byte. The assertions below fail the
//! build if the layout drifts.

use crate::octree::node_pool_data::VoxelNode;
use crate::octree::sparse_octree_data::SparseVoxelOctreeData;
use static_assertions::const_assert_eq;
use std::mem::{offset_of, size_of};

/// Bytes per node in the storage buffer
pub const NODE_STRIDE: usize = 64;

pub const IS_LEAF_OFFSET: usize = 0;
pub const CHILD_INDICES_OFFSET: usize = 4;
pub const COLOR_OFFSET: usize = 48;

const_assert_eq!(size_of::<VoxelNode>(), NODE_STRIDE);
const_assert_eq!(offset_of!(VoxelNode, is_leaf), IS_LEAF_OFFSET);
const_assert_eq!(offset_of!(VoxelNode, child_indices), CHILD_INDICES_OFFSET);
const_assert_eq!(offset_of!(VoxelNode, color), COLOR_OFFSET);
const_assert_eq!(COLOR_OFFSET % 16, 0);
const_assert_eq!(NODE_STRIDE % 16, 0);

/// The flattened node array as raw bytes, ready for upload
pub fn node_bytes(data: &SparseVoxelOctreeData) -> &[u8] {
    bytemuck::cast_slice(&data.pool.nodes)
}

/// Size of the flattened node array in bytes
pub fn byte_size(data: &SparseVoxelOctreeData) -> usize {
    data.pool.nodes.len() * NODE_STRIDE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::octree::sparse_octree_operations::{create_sparse_voxel_octree, insert};
    use glam::{Vec3, Vec4};

    fn read_i32(bytes: &[u8], offset: usize) -> i32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[offset..offset + 4]);
        i32::from_ne_bytes(word)
    }

    fn read_f32(bytes: &[u8], offset: usize) -> f32 {
        let mut word = [0u8; 4];
        word.copy_from_slice(&bytes[offset..offset + 4]);
        f32::from_ne_bytes(word)
    }

    #[test]
    fn test_root_only_bytes() {
        let tree = create_sparse_voxel_octree(8, 1).expect("Failed to create octree");
        let bytes = node_bytes(&tree);

        assert_eq!(bytes.len(), NODE_STRIDE);
        assert_eq!(byte_size(&tree), NODE_STRIDE);
        assert_eq!(read_i32(bytes, IS_LEAF_OFFSET), 0);
        for slot in 0..8 {
            assert_eq!(read_i32(bytes, CHILD_INDICES_OFFSET + slot * 4), -1);
        }
        for channel in 0..4 {
            assert_eq!(read_f32(bytes, COLOR_OFFSET + channel * 4), 1.0);
        }
    }

    #[test]
    fn test_encoded_child_and_leaf() {
        let mut tree = create_sparse_voxel_octree(8, 1).expect("Failed to create octree");
        let color = Vec4::new(0.25, 0.5, 0.75, 1.0);
        insert(&mut tree, Vec3::splat(7.0), color).expect("insert");

        let bytes = node_bytes(&tree);
        assert_eq!(bytes.len(), 2 * NODE_STRIDE);

        // Root points at node 1 through octant 7
        assert_eq!(read_i32(bytes, CHILD_INDICES_OFFSET + 7 * 4), 1);

        let leaf = &bytes[NODE_STRIDE..];
        assert_eq!(read_i32(leaf, IS_LEAF_OFFSET), 1);
        assert_eq!(read_f32(leaf, COLOR_OFFSET), 0.25);
        assert_eq!(read_f32(leaf, COLOR_OFFSET + 12), 1.0);
    }
}
