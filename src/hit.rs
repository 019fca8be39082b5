//! Hit-testing: resolve a pointer position to the text object under it.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Document, TextObject};
use crate::geom::{Point, Rect};
use crate::surface::TextMeasure;

/// Box an object occupies on screen: its measured width by its font size.
#[must_use]
pub fn text_bounds<M: TextMeasure + ?Sized>(obj: &TextObject, measure: &M) -> Rect {
    let width = measure.text_width(&obj.content, &obj.font_descriptor());
    Rect::new(obj.position.x, obj.position.y, width, f64::from(obj.font_size))
}

/// Index of the object under `pt`, if any.
///
/// Objects are scanned in storage order and the *first* match wins, even
/// though later objects paint on top of earlier ones.
// TODO: prefer the last (topmost) match so clicks agree with paint order.
#[must_use]
pub fn hit_test<M: TextMeasure + ?Sized>(pt: Point, doc: &Document, measure: &M) -> Option<usize> {
    doc.objects()
        .iter()
        .position(|obj| text_bounds(obj, measure).contains(pt))
}
