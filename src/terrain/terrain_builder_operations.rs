//! Terrain Builder Operations - Pure DOP Functions
//!
//! Samples a height field on the leaf-voxel grid and inserts a short column
//! of colored voxels under each surface point.

use super::color_ramp_data::ColorStop;
use super::color_ramp_operations::{interpolate_color, validate_ramp};
use super::height_field::{create_height_field, HeightField};
use super::terrain_builder_data::TerrainBuildReport;
use crate::config::BuildConfig;
use crate::error::OctreeResult;
use crate::octree::sparse_octree_data::SparseVoxelOctreeData;
use crate::octree::sparse_octree_operations::{create_from_config, get_stats, insert};
use glam::Vec3;
use std::time::Instant;

/// Build a terrain octree with the height field and ramp named in `config`
pub fn build_terrain_from_config(
    config: &BuildConfig,
) -> OctreeResult<(SparseVoxelOctreeData, TerrainBuildReport)> {
    config.validate()?;
    let height_field = create_height_field(&config.terrain);
    build_terrain_octree(config, height_field.as_ref(), &config.terrain.color_stops)
}

/// Build a terrain octree from an explicit height field and color ramp
pub fn build_terrain_octree(
    config: &BuildConfig,
    height_field: &dyn HeightField,
    stops: &[ColorStop],
) -> OctreeResult<(SparseVoxelOctreeData, TerrainBuildReport)> {
    validate_ramp(stops)?;
    let start = Instant::now();
    let mut octree = create_from_config(&config.octree)?;

    let voxel_size = config.octree.voxel_size();
    let voxels_per_axis = config.octree.voxels_per_axis();
    let column_depth = config.terrain.column_depth;

    log::info!(
        "[TerrainBuilder] Building {}x{} columns, voxel_size={}, column_depth={}",
        voxels_per_axis,
        voxels_per_axis,
        voxel_size,
        column_depth
    );

    let mut insertions = 0u64;
    let mut lowest_surface = f32::INFINITY;
    let mut highest_surface = f32::NEG_INFINITY;

    for ix in 0..voxels_per_axis {
        let x = ix as f32 * voxel_size;
        for iz in 0..voxels_per_axis {
            let z = iz as f32 * voxel_size;

            let surface = height_field.height_at(x, z);
            lowest_surface = lowest_surface.min(surface);
            highest_surface = highest_surface.max(surface);

            // One color per column
            let color = interpolate_color(surface, stops);

            for step in 0..column_depth {
                insert(&mut octree, Vec3::new(x, surface - step as f32, z), color)?;
                insertions += 1;
            }
        }
    }

    let stats = get_stats(&octree);
    let report = TerrainBuildReport {
        columns: voxels_per_axis as u64 * voxels_per_axis as u64,
        insertions,
        total_nodes: stats.total_nodes,
        lowest_surface,
        highest_surface,
        elapsed: start.elapsed(),
    };

    log::info!(
        "[TerrainBuilder] Built {} nodes from {} insertions in {:?} ({:.2} MB)",
        report.total_nodes,
        report.insertions,
        report.elapsed,
        stats.memory_usage_mb
    );

    Ok((octree, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeightFieldKind, OctreeConfig, TerrainConfig};
    use crate::error::OctreeError;
    use crate::octree::node_pool_operations::is_leaf;
    use crate::octree::sparse_octree_operations::{find_leaf, node};
    use crate::terrain::color_ramp_operations::default_mountain_ramp;
    use glam::Vec4;

    fn small_config(column_depth: u32) -> BuildConfig {
        BuildConfig {
            octree: OctreeConfig {
                size: 16,
                max_depth: 4,
                reserve_nodes: 256,
            },
            terrain: TerrainConfig {
                column_depth,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_flat_terrain() {
        let config = small_config(1);
        let flat = |_: f32, _: f32| 8.0;
        let (octree, report) =
            build_terrain_octree(&config, &flat, &[]).expect("Failed to build terrain");

        assert_eq!(report.columns, 256);
        assert_eq!(report.insertions, 256);
        assert_eq!(report.lowest_surface, 8.0);
        assert_eq!(report.highest_surface, 8.0);

        let leaf = find_leaf(&octree, Vec3::new(3.0, 8.0, 12.0))
            .expect("lookup")
            .expect("leaf exists");
        assert!(is_leaf(node(&octree, leaf).expect("node")));
        assert_eq!(find_leaf(&octree, Vec3::new(3.0, 0.0, 12.0)), Ok(None));
    }

    #[test]
    fn test_columns_extend_below_surface() {
        let config = small_config(3);
        let flat = |_: f32, _: f32| 10.0;
        let (octree, report) =
            build_terrain_octree(&config, &flat, &[]).expect("Failed to build terrain");

        assert_eq!(report.insertions, 256 * 3);
        for y in [10.0, 9.0, 8.0] {
            assert!(find_leaf(&octree, Vec3::new(5.0, y, 5.0)).expect("lookup").is_some());
        }
        assert_eq!(find_leaf(&octree, Vec3::new(5.0, 7.0, 5.0)), Ok(None));
    }

    #[test]
    fn test_column_colors_follow_ramp() {
        let config = small_config(1);
        let stops = default_mountain_ramp();
        let slope = |x: f32, _: f32| x;
        let (octree, _) =
            build_terrain_octree(&config, &slope, &stops).expect("Failed to build terrain");

        let leaf = find_leaf(&octree, Vec3::new(2.0, 2.0, 0.0))
            .expect("lookup")
            .expect("leaf exists");
        assert_eq!(
            node(&octree, leaf).expect("node").color,
            Vec4::new(0.1, 0.3, 0.1, 1.0).to_array()
        );
    }

    #[test]
    fn test_build_from_config() {
        let mut config = small_config(2);
        config.terrain.generator = HeightFieldKind::Wave;
        let (octree, report) = build_terrain_from_config(&config).expect("Failed to build terrain");

        assert_eq!(report.total_nodes, octree.pool.nodes.len());
        assert!(report.highest_surface <= 40.0);
    }

    #[test]
    fn test_rejects_unsorted_ramp() {
        let config = small_config(1);
        let mut stops = default_mountain_ramp();
        stops.reverse();
        let flat = |_: f32, _: f32| 1.0;
        assert!(matches!(
            build_terrain_octree(&config, &flat, &stops),
            Err(OctreeError::InvalidColorRamp(_))
        ));
    }
}
