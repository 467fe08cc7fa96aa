//! Color Ramp Operations - Pure DOP Functions
//!
//! Maps a terrain height onto a color by linear interpolation between the
//! two stops that bracket it.

use super::color_ramp_data::{ColorStop, FALLBACK_COLOR};
use crate::error::{OctreeError, OctreeResult};
use glam::Vec4;

/// Lowland green to snow-capped peaks
pub fn default_mountain_ramp() -> Vec<ColorStop> {
    vec![
        ColorStop {
            height: 50.0,
            color: Vec4::new(0.1, 0.3, 0.1, 1.0),
        },
        ColorStop {
            height: 100.0,
            color: Vec4::new(0.1, 0.2, 0.1, 1.0),
        },
        ColorStop {
            height: 200.0,
            color: Vec4::new(0.6, 0.6, 0.6, 1.0),
        },
        ColorStop {
            height: 300.0,
            color: Vec4::ONE,
        },
    ]
}

/// Interpolated color for `height`. `stops` must be sorted ascending.
///
/// Heights outside the ramp clamp to the end colors.
pub fn interpolate_color(height: f32, stops: &[ColorStop]) -> Vec4 {
    let (first, last) = match (stops.first(), stops.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return FALLBACK_COLOR,
    };

    if height <= first.height {
        return first.color;
    }
    if height >= last.height {
        return last.color;
    }

    stops
        .windows(2)
        .find(|pair| height < pair[1].height)
        .map(|pair| {
            let (lower, upper) = (pair[0], pair[1]);
            let t = (height - lower.height) / (upper.height - lower.height);
            lower.color.lerp(upper.color, t)
        })
        .unwrap_or(last.color)
}

/// Check that thresholds are finite and strictly ascending
pub fn validate_ramp(stops: &[ColorStop]) -> OctreeResult<()> {
    if let Some(stop) = stops.iter().find(|stop| !stop.height.is_finite()) {
        return Err(OctreeError::InvalidColorRamp(format!(
            "non-finite height {}",
            stop.height
        )));
    }

    if let Some(pair) = stops.windows(2).find(|pair| pair[0].height >= pair[1].height) {
        return Err(OctreeError::InvalidColorRamp(format!(
            "heights not ascending: {} then {}",
            pair[0].height, pair[1].height
        )));
    }

    Ok(())
}
