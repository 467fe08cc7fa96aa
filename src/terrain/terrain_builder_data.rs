//! Terrain Builder Data - Pure DOP
//!
//! NO METHODS. Just data.

use std::time::Duration;

/// Summary of one terrain octree build
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainBuildReport {
    pub columns: u64,
    pub insertions: u64,
    pub total_nodes: usize,
    pub lowest_surface: f32,
    pub highest_surface: f32,
    pub elapsed: Duration,
}
