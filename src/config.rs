//! Editor defaults, optionally overridden from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{
    DEFAULT_ADVANCE_RATIO, DEFAULT_ANCHOR, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FONT,
    DEFAULT_FONT_SIZE,
};
use crate::geom::Point;

pub const ENV_WIDTH: &str = "TEXTCANVAS_WIDTH";
pub const ENV_HEIGHT: &str = "TEXTCANVAS_HEIGHT";
pub const ENV_FONT: &str = "TEXTCANVAS_FONT";
pub const ENV_FONT_SIZE: &str = "TEXTCANVAS_FONT_SIZE";
pub const ENV_ANCHOR_X: &str = "TEXTCANVAS_ANCHOR_X";
pub const ENV_ANCHOR_Y: &str = "TEXTCANVAS_ANCHOR_Y";
pub const ENV_ADVANCE_RATIO: &str = "TEXTCANVAS_ADVANCE_RATIO";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub default_font: String,
    pub default_font_size: u32,
    pub default_anchor: Point,
    /// Glyph advance ratio for headless measurement.
    pub advance_ratio: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            default_font: DEFAULT_FONT.to_owned(),
            default_font_size: DEFAULT_FONT_SIZE,
            default_anchor: DEFAULT_ANCHOR,
            advance_ratio: DEFAULT_ADVANCE_RATIO,
        }
    }
}

impl EditorConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `TEXTCANVAS_WIDTH` / `TEXTCANVAS_HEIGHT`: surface size, default 700×400
    /// - `TEXTCANVAS_FONT`: initial font family, default `Arial`
    /// - `TEXTCANVAS_FONT_SIZE`: initial font size, default 20
    /// - `TEXTCANVAS_ANCHOR_X` / `TEXTCANVAS_ANCHOR_Y`: new-object anchor, default (50, 50)
    /// - `TEXTCANVAS_ADVANCE_RATIO`: headless glyph advance, default 0.6
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a set variable does not parse or
    /// is out of range.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(v) => Some(v),
            Err(_) => None,
        })
    }

    /// Same as [`EditorConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let canvas_width = parse_positive_f64(&lookup, ENV_WIDTH, defaults.canvas_width)?;
        let canvas_height = parse_positive_f64(&lookup, ENV_HEIGHT, defaults.canvas_height)?;
        let default_font = match lookup(ENV_FONT) {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::Invalid { var: ENV_FONT, value: v });
            }
            Some(v) => v.trim().to_owned(),
            None => defaults.default_font,
        };
        let default_font_size = match lookup(ENV_FONT_SIZE) {
            Some(v) => match v.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::Invalid { var: ENV_FONT_SIZE, value: v }),
            },
            None => defaults.default_font_size,
        };
        let default_anchor = Point::new(
            parse_f64(&lookup, ENV_ANCHOR_X, defaults.default_anchor.x)?,
            parse_f64(&lookup, ENV_ANCHOR_Y, defaults.default_anchor.y)?,
        );
        let advance_ratio = parse_positive_f64(&lookup, ENV_ADVANCE_RATIO, defaults.advance_ratio)?;

        Ok(Self { canvas_width, canvas_height, default_font, default_font_size, default_anchor, advance_ratio })
    }
}

fn parse_f64<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

fn parse_positive_f64<F>(lookup: &F, var: &'static str, default: f64) -> Result<f64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let v = parse_f64(lookup, var, default)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(ConfigError::Invalid { var, value: v.to_string() })
    }
}
