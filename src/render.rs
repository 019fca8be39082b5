//! Rendering: paints the full document onto a [`Surface`].
//!
//! This module receives a read-only view of the document and produces drawing
//! calls; it does not mutate any application state. Every frame starts from a
//! cleared surface and paints objects in storage order, so later objects cover
//! earlier ones.
//!
//! Drawing failures propagate as the surface's own error type. The top-level
//! caller ([`crate::engine::Engine::render`]) hands the result to the host.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::consts::{DECORATION_LINE_WIDTH_PX, SELECTION_LINE_WIDTH_PX, SELECTION_PADDING_PX, UNDERLINE_GAP_PX};
use crate::doc::{Document, TextObject};
use crate::geom::{Point, Rect};
use crate::surface::Surface;

/// Draw the full scene on a `width` × `height` surface.
///
/// # Errors
///
/// Returns `Err` if the surface fails to paint text.
pub fn draw<S: Surface + ?Sized>(surface: &mut S, doc: &Document, width: f64, height: f64) -> Result<(), S::Error> {
    surface.clear(width, height);
    for obj in doc.objects() {
        draw_text_object(surface, obj)?;
    }
    Ok(())
}

fn draw_text_object<S: Surface + ?Sized>(surface: &mut S, obj: &TextObject) -> Result<(), S::Error> {
    let font = obj.font_descriptor();
    let size = f64::from(obj.font_size);
    let Point { x, y } = obj.position;

    surface.fill_text(&obj.content, &font, obj.position)?;
    let text_w = surface.text_width(&obj.content, &font);

    if obj.is_selected {
        let frame = Rect::new(x, y, text_w, size).inflate(SELECTION_PADDING_PX);
        surface.stroke_rect(frame, SELECTION_LINE_WIDTH_PX);
    }

    if obj.is_underline {
        let line_y = y + size + UNDERLINE_GAP_PX;
        surface.stroke_line(Point::new(x, line_y), Point::new(x + text_w, line_y), DECORATION_LINE_WIDTH_PX);
    }

    if obj.is_strikethrough {
        let line_y = y + size / 2.0;
        surface.stroke_line(Point::new(x, line_y), Point::new(x + text_w, line_y), DECORATION_LINE_WIDTH_PX);
    }

    Ok(())
}
