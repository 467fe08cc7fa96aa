//! Build configuration
//!
//! Loaded from TOML. Every field has a default, so a partial file (or an
//! empty one) is a valid configuration.

use crate::error::{OctreeError, OctreeResult};
use crate::terrain::color_ramp_data::ColorStop;
use crate::terrain::color_ramp_operations::{default_mountain_ramp, validate_ramp};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Depths past this overflow the i32 extent arithmetic
pub const MAX_SUPPORTED_DEPTH: i32 = 30;

/// Octree dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OctreeConfig {
    /// Side length of the cube anchored at the origin
    pub size: i32,
    pub max_depth: i32,
    /// Nodes to reserve up front. Only affects reallocation count
    pub reserve_nodes: usize,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            size: 1550,
            max_depth: 9,
            reserve_nodes: 0,
        }
    }
}

impl OctreeConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> OctreeResult<()> {
        if self.size <= 0 {
            return Err(OctreeError::degenerate(
                "size",
                self.size,
                "octree size must be positive",
            ));
        }

        if self.max_depth <= 0 {
            return Err(OctreeError::degenerate(
                "max_depth",
                self.max_depth,
                "max_depth must be positive",
            ));
        }

        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(OctreeError::degenerate(
                "max_depth",
                self.max_depth,
                "max_depth exceeds supported maximum of 30",
            ));
        }

        Ok(())
    }

    /// Edge length of a leaf voxel
    pub fn voxel_size(&self) -> f32 {
        self.size as f32 / (self.max_depth as f32).exp2()
    }

    /// Number of leaf voxels along one axis
    pub fn voxels_per_axis(&self) -> u32 {
        (self.size as f32 / self.voxel_size()) as u32
    }
}

/// Which height field feeds the terrain builder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeightFieldKind {
    Wave,
    Perlin,
}

/// Parameters of the sine/cosine wave terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveParams {
    pub frequency: f32,
    pub amplitude: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            frequency: 0.05,
            amplitude: 40.0,
        }
    }
}

/// Parameters of the layered Perlin terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerlinParams {
    pub seed: u32,
    pub scale: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub persistence: f32,
    pub lacunarity: f32,
    pub octaves: u32,
}

impl Default for PerlinParams {
    fn default() -> Self {
        Self {
            seed: 20,
            scale: 60.0,
            amplitude: 2.5,
            frequency: 0.005,
            persistence: 0.4,
            lacunarity: 1.0,
            octaves: 6,
        }
    }
}

/// Terrain generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub generator: HeightFieldKind,
    /// Voxels inserted per column, counting down from the surface
    pub column_depth: u32,
    pub wave: WaveParams,
    pub perlin: PerlinParams,
    /// Ascending (height, color) pairs
    pub color_stops: Vec<ColorStop>,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            generator: HeightFieldKind::Perlin,
            column_depth: 4,
            wave: WaveParams::default(),
            perlin: PerlinParams::default(),
            color_stops: default_mountain_ramp(),
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> OctreeResult<()> {
        if self.column_depth == 0 {
            return Err(OctreeError::degenerate(
                "column_depth",
                self.column_depth,
                "columns need at least one voxel",
            ));
        }

        validate_ramp(&self.color_stops)
    }
}

/// Top level configuration file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub octree: OctreeConfig,
    pub terrain: TerrainConfig,
}

impl BuildConfig {
    pub fn validate(&self) -> OctreeResult<()> {
        self.octree.validate()?;
        self.terrain.validate()?;
        log::debug!(
            "[BuildConfig] Validated: size={}, max_depth={}, voxel_size={}",
            self.octree.size,
            self.octree.max_depth,
            self.octree.voxel_size()
        );
        Ok(())
    }
}

/// Parse and validate a TOML configuration
pub fn parse_build_config(source: &str) -> OctreeResult<BuildConfig> {
    let config: BuildConfig = toml::from_str(source)?;
    config.validate()?;
    Ok(config)
}

/// Load and validate a TOML configuration file
pub fn load_build_config(path: impl AsRef<Path>) -> anyhow::Result<BuildConfig> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = parse_build_config(&source)
        .with_context(|| format!("parsing config {}", path.display()))?;

    log::info!("[BuildConfig] Loaded {}", path.display());
    Ok(config)
}
