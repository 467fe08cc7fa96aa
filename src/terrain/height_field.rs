//! Height fields that feed the terrain builder

use crate::config::{HeightFieldKind, PerlinParams, TerrainConfig, WaveParams};
use noise::{NoiseFn, Perlin};

/// Terrain surface height at a world-space column
pub trait HeightField {
    fn height_at(&self, x: f32, z: f32) -> f32;
}

impl<F> HeightField for F
where
    F: Fn(f32, f32) -> f32,
{
    fn height_at(&self, x: f32, z: f32) -> f32 {
        self(x, z)
    }
}

/// Rolling hills from a product of sine and cosine, in `[0, amplitude]`
#[derive(Debug, Clone)]
pub struct WaveHeightField {
    pub params: WaveParams,
}

impl HeightField for WaveHeightField {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let WaveParams {
            frequency,
            amplitude,
        } = self.params;
        ((x * frequency).sin() * (z * frequency).cos() + 1.0) * 0.5 * amplitude
    }
}

/// Seeded Perlin noise summed over octaves
pub struct PerlinHeightField {
    params: PerlinParams,
    perlin: Perlin,
}

impl PerlinHeightField {
    pub fn new(params: PerlinParams) -> Self {
        Self {
            perlin: Perlin::new(params.seed),
            params,
        }
    }
}

impl HeightField for PerlinHeightField {
    fn height_at(&self, x: f32, z: f32) -> f32 {
        let mut amplitude = self.params.amplitude;
        let mut frequency = self.params.frequency;
        let mut total = 0.0;

        for _ in 0..self.params.octaves {
            let sample = self
                .perlin
                .get([(x * frequency) as f64, (z * frequency) as f64]);
            total += sample as f32 * amplitude;
            amplitude *= self.params.persistence;
            frequency *= self.params.lacunarity;
        }

        total * self.params.scale
    }
}

/// Build the height field selected by `config`
pub fn create_height_field(config: &TerrainConfig) -> Box<dyn HeightField> {
    match config.generator {
        HeightFieldKind::Wave => Box::new(WaveHeightField {
            params: config.wave.clone(),
        }),
        HeightFieldKind::Perlin => Box::new(PerlinHeightField::new(config.perlin.clone())),
    }
}
