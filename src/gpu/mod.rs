//! GPU-facing encoding of the octree

pub mod node_layout;
#[cfg(feature = "gpu")]
pub mod node_upload;

pub use node_layout::{byte_size, node_bytes, NODE_STRIDE};
#[cfg(feature = "gpu")]
pub use node_upload::{create_node_buffer, node_buffer_layout_entry, write_node_buffer};
