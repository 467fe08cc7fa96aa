//! Sparse Voxel Octree Operations - Pure DOP Functions
//!
//! No methods, no self, just transformations over `SparseVoxelOctreeData`.
//!
//! Octant codes pack the upper/lower half-space test per axis as
//! `(x << 2) | (y << 1) | z`. A point on a centre plane goes to the upper half.

use super::node_pool_data::{VoxelNode, ROOT_INDEX};
use super::node_pool_operations::{
    allocate_node, child, create_node_pool, get_node, get_node_mut, is_leaf, mark_leaf,
    node_count, set_child,
};
use super::sparse_octree_data::{OctreeStats, SparseVoxelOctreeData};
use crate::config::OctreeConfig;
use crate::error::OctreeResult;
use glam::{IVec3, Vec3, Vec4};

/// Create a new sparse voxel octree covering `[0, size)^3`
pub fn create_sparse_voxel_octree(size: i32, max_depth: i32) -> OctreeResult<SparseVoxelOctreeData> {
    create_from_config(&OctreeConfig {
        size,
        max_depth,
        ..Default::default()
    })
}

/// Create a sparse voxel octree from validated configuration
pub fn create_from_config(config: &OctreeConfig) -> OctreeResult<SparseVoxelOctreeData> {
    config.validate()?;

    if config.voxel_size() < 1.0 {
        log::warn!(
            "[SparseVoxelOctree] max_depth {} subdivides size {} below one voxel; deep levels will share a corner",
            config.max_depth,
            config.size
        );
    }

    log::debug!(
        "[SparseVoxelOctree] Created: size={}, max_depth={}, reserved={}",
        config.size,
        config.max_depth,
        config.reserve_nodes
    );

    Ok(SparseVoxelOctreeData {
        pool: create_node_pool(config.reserve_nodes),
        size: config.size,
        max_depth: config.max_depth,
    })
}

/// Edge length of the cube a node at `depth` covers
pub fn node_extent(size: i32, depth: i32) -> f32 {
    size as f32 / (depth as f32).exp2()
}

/// Offset from a node's minimum corner to its centre, truncated to whole voxels
fn centre_offset(size: i32, depth: i32) -> i32 {
    (node_extent(size, depth) / 2.0) as i32
}

/// Calculate which octant a point belongs to relative to a node centre
pub fn calculate_octant(point: IVec3, center: IVec3) -> usize {
    let upper = point.cmpge(center);
    ((upper.x as usize) << 2) | ((upper.y as usize) << 1) | (upper.z as usize)
}

/// Per-axis 0/1 selector for an octant code
pub fn octant_offset(octant: usize) -> IVec3 {
    IVec3::new(
        ((octant >> 2) & 1) as i32,
        ((octant >> 1) & 1) as i32,
        (octant & 1) as i32,
    )
}

/// Insert a colored point, creating nodes down to `max_depth`.
///
/// Every node on the path takes the inserted color. Returns the index of
/// the leaf the point landed in.
pub fn insert(data: &mut SparseVoxelOctreeData, point: Vec3, color: Vec4) -> OctreeResult<i32> {
    let point = point.as_ivec3();
    let color = color.to_array();

    let mut current_node = ROOT_INDEX;
    let mut current_pos = IVec3::ZERO;
    let mut depth = 0;

    loop {
        let node = get_node_mut(&mut data.pool, current_node)?;
        node.color = color;

        if depth >= data.max_depth {
            mark_leaf(node);
            return Ok(current_node);
        }

        let offset = centre_offset(data.size, depth);
        let octant = calculate_octant(point, current_pos + IVec3::splat(offset));

        let next_node = match child(node, octant) {
            Some(index) => index,
            None => {
                let index = allocate_node(&mut data.pool)?;
                set_child(get_node_mut(&mut data.pool, current_node)?, octant, index);
                index
            }
        };

        current_pos += octant_offset(octant) * offset;
        current_node = next_node;
        depth += 1;
    }
}

/// Insert many points sharing one color
pub fn insert_all<I>(data: &mut SparseVoxelOctreeData, points: I, color: Vec4) -> OctreeResult<()>
where
    I: IntoIterator<Item = Vec3>,
{
    for point in points {
        insert(data, point, color)?;
    }
    Ok(())
}

/// Node indices visited when routing `point` from the root, without creating
/// anything. Stops early at the first missing child.
pub fn insertion_path(data: &SparseVoxelOctreeData, point: Vec3) -> OctreeResult<Vec<i32>> {
    let point = point.as_ivec3();
    let mut path = Vec::with_capacity(data.max_depth.max(0) as usize + 1);

    let mut current_node = ROOT_INDEX;
    let mut current_pos = IVec3::ZERO;
    let mut depth = 0;

    loop {
        let node = get_node(&data.pool, current_node)?;
        path.push(current_node);

        if depth >= data.max_depth {
            return Ok(path);
        }

        let offset = centre_offset(data.size, depth);
        let octant = calculate_octant(point, current_pos + IVec3::splat(offset));
        match child(node, octant) {
            Some(index) => current_node = index,
            None => return Ok(path),
        }

        current_pos += octant_offset(octant) * offset;
        depth += 1;
    }
}

/// Leaf reached by routing `point` for exactly `max_depth` steps, if it exists
pub fn find_leaf(data: &SparseVoxelOctreeData, point: Vec3) -> OctreeResult<Option<i32>> {
    let path = insertion_path(data, point)?;
    if path.len() != data.max_depth.max(0) as usize + 1 {
        return Ok(None);
    }

    let last = path[path.len() - 1];
    Ok(is_leaf(get_node(&data.pool, last)?).then_some(last))
}

/// Bounds-checked node lookup
pub fn node(data: &SparseVoxelOctreeData, index: i32) -> OctreeResult<&VoxelNode> {
    get_node(&data.pool, index)
}

/// Axis-aligned box the ray marcher intersects before descending
pub fn bounds(data: &SparseVoxelOctreeData) -> (Vec3, Vec3) {
    (Vec3::ZERO, Vec3::splat(data.size as f32))
}

/// Get octree statistics
pub fn get_stats(data: &SparseVoxelOctreeData) -> OctreeStats {
    let total_nodes = node_count(&data.pool);
    let byte_size = total_nodes * std::mem::size_of::<VoxelNode>();

    OctreeStats {
        total_nodes,
        leaf_nodes: data.pool.nodes.iter().filter(|node| is_leaf(node)).count(),
        node_capacity: data.pool.nodes.capacity(),
        size: data.size,
        max_depth: data.max_depth,
        byte_size,
        memory_usage_mb: byte_size as f32 / (1024.0 * 1024.0),
    }
}
