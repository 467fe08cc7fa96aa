//! Terrain source for the octree: height fields, color ramps and the
//! column builder

pub mod color_ramp_data;
pub mod color_ramp_operations;
pub mod height_field;
pub mod terrain_builder_data;
pub mod terrain_builder_operations;

pub use color_ramp_data::{ColorStop, FALLBACK_COLOR};
pub use color_ramp_operations::{default_mountain_ramp, interpolate_color, validate_ramp};
pub use height_field::{create_height_field, HeightField, PerlinHeightField, WaveHeightField};
pub use terrain_builder_data::TerrainBuildReport;
pub use terrain_builder_operations::{build_terrain_from_config, build_terrain_octree};
