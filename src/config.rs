use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{PaintError, PaintResult};
use crate::primitive::Dash;

/// Environment variable the desktop binary reads inline JSON overrides from.
pub const CONFIG_ENV_VAR: &str = "SKETCH_PAINT_CONFIG";

/// Tunable constants of the editor.
///
/// Missing fields fall back to their defaults, so a partial JSON object is a
/// valid override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Half-size of the square window used when hit-testing a pointer press
    pub hit_tolerance: f32,
    /// Chebyshev distance from a bbox corner that turns a press into resize/rotate
    pub corner_proximity: f32,
    pub handle_radius: f32,
    pub normal_outline_width: f32,
    pub selected_outline_width: f32,
    pub selected_dash: Dash,
    pub preview_dash: Dash,
    pub bbox_dash: Dash,
    pub bbox_color: Rgb,
    pub handle_color: Rgb,
    pub handle_highlight: Rgb,
    pub handle_outline: Rgb,
    pub background: Rgb,
    /// Angle applied by the rotate left/right buttons, in degrees
    pub rotate_step_degrees: f32,
    pub paste_offset: f32,
    pub default_polygon_sides: u32,
    pub min_polygon_sides: u32,
    pub brush_sizes: Vec<f32>,
    pub default_brush_size: f32,
    pub eraser_width_factor: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance: 2.0,
            corner_proximity: 8.0,
            handle_radius: 5.0,
            normal_outline_width: 1.0,
            selected_outline_width: 3.0,
            selected_dash: Dash::new(2.0, 2.0),
            preview_dash: Dash::new(4.0, 2.0),
            bbox_dash: Dash::new(3.0, 3.0),
            bbox_color: Rgb::BLUE,
            handle_color: Rgb::BLUE,
            handle_highlight: Rgb::RED,
            handle_outline: Rgb::BLACK,
            background: Rgb::WHITE,
            rotate_step_degrees: 15.0,
            paste_offset: 10.0,
            default_polygon_sides: 5,
            min_polygon_sides: 3,
            brush_sizes: vec![1.0, 2.0, 4.0, 8.0, 10.0],
            default_brush_size: 2.0,
            eraser_width_factor: 4.0,
        }
    }
}

impl EditorConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(json: &str) -> PaintResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| PaintError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(json) => Self::from_json(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring {CONFIG_ENV_VAR}: {err}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    fn validate(&self) -> PaintResult<()> {
        if self.min_polygon_sides < 3 {
            return Err(PaintError::InvalidConfig(format!(
                "min_polygon_sides must be at least 3, got {}",
                self.min_polygon_sides
            )));
        }
        if self.default_polygon_sides < self.min_polygon_sides {
            return Err(PaintError::InvalidConfig(format!(
                "default_polygon_sides {} is below the minimum {}",
                self.default_polygon_sides, self.min_polygon_sides
            )));
        }
        if self.hit_tolerance < 0.0 || self.corner_proximity < 0.0 || self.handle_radius <= 0.0 {
            return Err(PaintError::InvalidConfig(
                "tolerances must be non-negative and the handle radius positive".into(),
            ));
        }
        Ok(())
    }
}
