//! Color Ramp Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in color_ramp_operations.rs

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// A color pinned to an elevation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub height: f32,
    pub color: Vec4,
}

/// Returned for an empty ramp
pub const FALLBACK_COLOR: Vec4 = Vec4::ONE;
