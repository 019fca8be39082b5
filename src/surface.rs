//! Drawing surfaces: the seam between the engine and whatever paints pixels.
//!
//! Hit-testing and rendering both need the width a string occupies in a given
//! font, and rendering needs a handful of stroke/fill primitives. Both are
//! expressed as traits so the same engine drives the browser canvas
//! ([`web_sys::CanvasRenderingContext2d`]) and the recording [`DisplayList`]
//! used by the headless binary and the tests.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BOLD_WIDEN_FACTOR, DEFAULT_ADVANCE_RATIO};
use crate::doc::FontDescriptor;
use crate::geom::{Point, Rect};

/// Measures rendered text width in pixels.
///
/// Hit-testing and rendering must see the same widths for the same
/// descriptor, otherwise visible boxes and clickable boxes drift apart.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font: &FontDescriptor<'_>) -> f64;
}

/// A 2D surface the render procedure can paint onto.
pub trait Surface: TextMeasure {
    type Error;

    /// Erase everything inside `[0, width] × [0, height]`.
    fn clear(&mut self, width: f64, height: f64);

    /// Paint `text` with its top edge at `at.y` and left edge at `at.x`.
    ///
    /// # Errors
    ///
    /// Surface-specific failure to draw.
    fn fill_text(&mut self, text: &str, font: &FontDescriptor<'_>, at: Point) -> Result<(), Self::Error>;

    fn stroke_rect(&mut self, rect: Rect, line_width: f64);

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64);
}

// =============================================================
// Browser canvas
// =============================================================

const INK: &str = "black";

impl TextMeasure for CanvasRenderingContext2d {
    fn text_width(&self, text: &str, font: &FontDescriptor<'_>) -> f64 {
        self.save();
        self.set_font(&font.to_string());
        let width = match self.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(e) => {
                tracing::warn!(error = ?e, %font, "measure_text failed; treating width as zero");
                0.0
            }
        };
        self.restore();
        width
    }
}

impl Surface for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) {
        self.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_text(&mut self, text: &str, font: &FontDescriptor<'_>, at: Point) -> Result<(), JsValue> {
        self.set_font(&font.to_string());
        self.set_text_baseline("top");
        self.set_fill_style_str(INK);
        CanvasRenderingContext2d::fill_text(self, text, at.x, at.y)
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64) {
        self.set_stroke_style_str(INK);
        self.set_line_width(line_width);
        CanvasRenderingContext2d::stroke_rect(self, rect.x, rect.y, rect.width, rect.height);
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64) {
        self.set_stroke_style_str(INK);
        self.set_line_width(line_width);
        self.begin_path();
        self.move_to(from.x, from.y);
        self.line_to(to.x, to.y);
        self.stroke();
    }
}

// =============================================================
// Headless measurement and recording
// =============================================================

/// Deterministic measurer: every character advances by `size × ratio`.
/// Bold text is widened by [`BOLD_WIDEN_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub ratio: f64,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self { ratio: DEFAULT_ADVANCE_RATIO }
    }
}

impl TextMeasure for FixedAdvance {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font: &FontDescriptor<'_>) -> f64 {
        let advance = f64::from(font.size) * self.ratio;
        let width = text.chars().count() as f64 * advance;
        if font.bold { width * BOLD_WIDEN_FACTOR } else { width }
    }
}

/// One recorded drawing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    FillText { text: String, font: String, x: f64, y: f64 },
    StrokeRect { rect: Rect, line_width: f64 },
    StrokeLine { from: Point, to: Point, line_width: f64 },
}

/// Surface that records drawing calls instead of producing pixels.
///
/// `clear` drops everything recorded so far, so after a render the list
/// holds exactly one frame.
#[derive(Debug, Clone, Default)]
pub struct DisplayList<M> {
    measure: M,
    ops: Vec<DrawOp>,
}

impl<M: TextMeasure> DisplayList<M> {
    #[must_use]
    pub fn new(measure: M) -> Self {
        Self { measure, ops: Vec::new() }
    }

    /// Calls recorded since the last clear.
    #[must_use]
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Take the recorded calls, leaving the list empty.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// The measurer backing this list.
    #[must_use]
    pub fn measure(&self) -> &M {
        &self.measure
    }
}

impl<M: TextMeasure> TextMeasure for DisplayList<M> {
    fn text_width(&self, text: &str, font: &FontDescriptor<'_>) -> f64 {
        self.measure.text_width(text, font)
    }
}

impl<M: TextMeasure> Surface for DisplayList<M> {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn fill_text(&mut self, text: &str, font: &FontDescriptor<'_>, at: Point) -> Result<(), Infallible> {
        self.ops.push(DrawOp::FillText { text: text.to_owned(), font: font.to_string(), x: at.x, y: at.y });
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f64) {
        self.ops.push(DrawOp::StrokeRect { rect, line_width });
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64) {
        self.ops.push(DrawOp::StrokeLine { from, to, line_width });
    }
}
