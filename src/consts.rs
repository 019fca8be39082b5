//! Shared numeric constants for the canvas crate.

use crate::geom::Point;

// ── Document defaults ───────────────────────────────────────────

/// Anchor assigned to every newly added text object.
pub const DEFAULT_ANCHOR: Point = Point { x: 50.0, y: 50.0 };

/// Font family used before the user picks one.
pub const DEFAULT_FONT: &str = "Arial";

/// Font size in pixels used before the user picks one.
pub const DEFAULT_FONT_SIZE: u32 = 20;

/// Drawing surface size in CSS pixels.
pub const DEFAULT_CANVAS_WIDTH: f64 = 700.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 400.0;

// ── Rendering ───────────────────────────────────────────────────

/// Gap between the text box and the selection frame on every side.
pub const SELECTION_PADDING_PX: f64 = 5.0;

/// Stroke width of the selection frame.
pub const SELECTION_LINE_WIDTH_PX: f64 = 2.0;

/// Stroke width of underline and strikethrough marks.
pub const DECORATION_LINE_WIDTH_PX: f64 = 1.0;

/// Distance below the text box at which the underline is drawn.
pub const UNDERLINE_GAP_PX: f64 = 2.0;

// ── Headless measurement ────────────────────────────────────────

/// Average glyph advance as a fraction of the font size.
pub const DEFAULT_ADVANCE_RATIO: f64 = 0.6;

/// Extra advance applied to bold text by the fixed-advance measurer.
pub const BOLD_WIDEN_FACTOR: f64 = 1.1;
