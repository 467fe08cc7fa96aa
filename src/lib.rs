// svo-terrain - Sparse voxel octree construction for GPU ray marching
//
// The octree is built once on the host and handed to the GPU as a flat
// array of fixed-size nodes:
// - octree: node pool and insertion (data + operations split)
// - gpu: byte layout of a node and the storage-buffer upload
// - terrain: height fields, color ramps and the column builder
//
// Pure functions over plain data; no global state.

pub mod config;
pub mod error;
pub mod gpu;
pub mod octree;
pub mod terrain;

pub use config::{
    load_build_config, parse_build_config, BuildConfig, HeightFieldKind, OctreeConfig,
    PerlinParams, TerrainConfig, WaveParams,
};
pub use error::{OctreeError, OctreeResult};
pub use gpu::{byte_size, node_bytes, NODE_STRIDE};
pub use octree::{
    create_from_config, create_sparse_voxel_octree, find_leaf, get_stats, insert, OctreeStats,
    SparseVoxelOctreeData, VoxelNode, NULL_CHILD, ROOT_INDEX,
};
pub use terrain::{
    build_terrain_from_config, build_terrain_octree, default_mountain_ramp, interpolate_color,
    ColorStop, HeightField, TerrainBuildReport,
};

// Re-export glam for callers building points and colors
pub use glam;
