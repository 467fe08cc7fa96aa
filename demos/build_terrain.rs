//! Builds a terrain octree and uploads it to the GPU
//!
//! Usage: cargo run --example build_terrain [config.toml]

use anyhow::Context;
use svo_terrain::gpu::{create_node_buffer, node_buffer_layout_entry, write_node_buffer};
use svo_terrain::octree::bounds;
use svo_terrain::{build_terrain_from_config, get_stats, load_build_config, BuildConfig};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_build_config(&path)?,
        None => BuildConfig::default(),
    };

    println!("Sparse Voxel Octree Terrain");
    println!("===========================");
    println!("  Size: {}", config.octree.size);
    println!("  Max depth: {}", config.octree.max_depth);
    println!("  Voxel size: {}", config.octree.voxel_size());
    println!("  Generator: {:?}", config.terrain.generator);

    let (octree, report) =
        build_terrain_from_config(&config).context("building terrain octree")?;
    let stats = get_stats(&octree);
    let (min_bound, max_bound) = bounds(&octree);

    println!("\nBuild:");
    println!("  Columns: {}", report.columns);
    println!("  Insertions: {}", report.insertions);
    println!(
        "  Surface range: {:.1} .. {:.1}",
        report.lowest_surface, report.highest_surface
    );
    println!("  Nodes: {} ({} leaves)", stats.total_nodes, stats.leaf_nodes);
    println!("  Memory: {:.2} MB", stats.memory_usage_mb);
    println!("  Bounds: {:?} .. {:?}", min_bound, max_bound);
    println!("  Elapsed: {:?}", report.elapsed);

    let instance = wgpu::Instance::default();
    let Some(adapter) = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
        power_preference: wgpu::PowerPreference::HighPerformance,
        ..Default::default()
    })) else {
        log::warn!("No GPU adapter available, skipping upload");
        return Ok(());
    };

    let (device, queue) = pollster::block_on(adapter.request_device(
        &wgpu::DeviceDescriptor {
            label: Some("Octree Upload Device"),
            required_features: wgpu::Features::empty(),
            required_limits: adapter.limits(),
        },
        None,
    ))
    .context("requesting GPU device")?;

    let buffer = create_node_buffer(&device, &octree);
    println!("\nUploaded node buffer: {} bytes", buffer.size());

    // Binding 1 matches the ray marcher's node SSBO
    let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Octree Node Layout"),
        entries: &[node_buffer_layout_entry(1)],
    });
    let _bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("Octree Node Bind Group"),
        layout: &layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 1,
            resource: buffer.as_entire_binding(),
        }],
    });

    // Rebuilding with the same config yields the same node count, so the
    // buffer can be refreshed in place
    let (rebuilt, _) = build_terrain_from_config(&config).context("rebuilding terrain octree")?;
    write_node_buffer(&queue, &buffer, &rebuilt);
    queue.submit(None);
    println!("Rewrote node buffer with {} nodes", get_stats(&rebuilt).total_nodes);

    Ok(())
}
