use criterion::{black_box, criterion_group, criterion_main, Criterion};
use svo_terrain::glam::{Vec3, Vec4};
use svo_terrain::{
    build_terrain_from_config, create_sparse_voxel_octree, insert, BuildConfig, HeightFieldKind,
    OctreeConfig,
};

fn bench_insert(c: &mut Criterion) {
    c.bench_function("insert_4096_points_depth_8", |b| {
        b.iter(|| {
            let mut octree = create_sparse_voxel_octree(256, 8).expect("octree");
            for i in 0..4096u32 {
                let point = Vec3::new(
                    (i * 37 % 256) as f32,
                    (i * 11 % 256) as f32,
                    (i * 53 % 256) as f32,
                );
                insert(&mut octree, point, Vec4::ONE).expect("insert");
            }
            black_box(octree)
        })
    });
}

fn bench_terrain(c: &mut Criterion) {
    let mut config = BuildConfig::default();
    config.octree = OctreeConfig {
        size: 256,
        max_depth: 7,
        reserve_nodes: 1 << 16,
    };
    config.terrain.generator = HeightFieldKind::Wave;

    c.bench_function("wave_terrain_128x128", |b| {
        b.iter(|| black_box(build_terrain_from_config(&config).expect("terrain")))
    });
}

criterion_group!(benches, bench_insert, bench_terrain);
criterion_main!(benches);
