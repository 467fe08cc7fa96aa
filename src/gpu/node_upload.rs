//! Upload of the flattened node array into a GPU storage buffer

use super::node_layout::{byte_size, node_bytes};
use crate::octree::sparse_octree_data::SparseVoxelOctreeData;
use wgpu::util::DeviceExt;

/// Create a storage buffer holding every node of `data`, in allocation order.
///
/// The host-side octree is left untouched and stays usable.
pub fn create_node_buffer(device: &wgpu::Device, data: &SparseVoxelOctreeData) -> wgpu::Buffer {
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Octree Node Buffer"),
        contents: node_bytes(data),
        usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
    });

    log::info!(
        "[NodeUpload] Node buffer size: {} bytes ({} nodes)",
        byte_size(data),
        data.pool.nodes.len()
    );

    buffer
}

/// Overwrite an existing node buffer, e.g. after rebuilding with the same node count
pub fn write_node_buffer(queue: &wgpu::Queue, buffer: &wgpu::Buffer, data: &SparseVoxelOctreeData) {
    queue.write_buffer(buffer, 0, node_bytes(data));
}

/// Layout entry for binding the node buffer to a compute shader
pub fn node_buffer_layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only: true },
            has_dynamic_offset: false,
            min_binding_size: wgpu::BufferSize::new(super::node_layout::NODE_STRIDE as u64),
        },
        count: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gpu::node_layout::NODE_STRIDE;

    #[test]
    fn test_layout_entry_is_read_only_storage() {
        let entry = node_buffer_layout_entry(1);
        assert_eq!(entry.binding, 1);
        assert_eq!(entry.visibility, wgpu::ShaderStages::COMPUTE);
        assert!(entry.count.is_none());

        match entry.ty {
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only },
                has_dynamic_offset,
                min_binding_size,
            } => {
                assert!(read_only);
                assert!(!has_dynamic_offset);
                assert_eq!(min_binding_size.map(|size| size.get()), Some(NODE_STRIDE as u64));
            }
            other => panic!("unexpected binding type {other:?}"),
        }
    }
}
