#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::StyleFlag;
use crate::surface::FixedAdvance;

/// Half the font size per character: "Hi" at 20px is 20px wide.
fn measure() -> FixedAdvance {
    FixedAdvance { ratio: 0.5 }
}

fn doc_with(contents: &[&str]) -> Document {
    let mut doc = Document::new();
    for content in contents {
        doc.add_text(content, "Arial", 20).unwrap();
    }
    doc
}

// =============================================================
// text_bounds
// =============================================================

#[test]
fn bounds_span_measured_width_and_font_size() {
    let doc = doc_with(&["Hello"]);
    let r = text_bounds(doc.get(0).unwrap(), &measure());
    assert_eq!(r, Rect::new(50.0, 50.0, 50.0, 20.0));
}

#[test]
fn bounds_use_the_objects_own_style() {
    let mut doc = doc_with(&["Hello"]);
    doc.select_at(Some(0));
    doc.toggle_style(StyleFlag::Bold);
    let bold = text_bounds(doc.get(0).unwrap(), &measure());
    assert!(bold.width > 50.0);
}

#[test]
fn bounds_follow_font_size_changes() {
    let mut doc = doc_with(&["Hi"]);
    doc.select_at(Some(0));
    doc.set_font_size(40).unwrap();
    let r = text_bounds(doc.get(0).unwrap(), &measure());
    assert_eq!(r.width, 40.0);
    assert_eq!(r.height, 40.0);
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn hit_inside_single_object() {
    let doc = doc_with(&["Hi"]);
    assert_eq!(hit_test(Point::new(55.0, 55.0), &doc, &measure()), Some(0));
}

#[test]
fn hit_on_box_edges_is_inclusive() {
    let doc = doc_with(&["Hi"]);
    let m = measure();
    assert_eq!(hit_test(Point::new(50.0, 50.0), &doc, &m), Some(0));
    assert_eq!(hit_test(Point::new(70.0, 70.0), &doc, &m), Some(0));
}

#[test]
fn miss_outside_every_object() {
    let doc = doc_with(&["Hi"]);
    let m = measure();
    assert_eq!(hit_test(Point::new(10.0, 10.0), &doc, &m), None);
    assert_eq!(hit_test(Point::new(70.5, 60.0), &doc, &m), None);
    assert_eq!(hit_test(Point::new(60.0, 70.5), &doc, &m), None);
}

#[test]
fn miss_on_empty_document() {
    let doc = Document::new();
    assert_eq!(hit_test(Point::new(50.0, 50.0), &doc, &measure()), None);
}

#[test]
fn overlapping_objects_resolve_to_first_in_storage_order() {
    // Both objects sit at the default anchor; the second paints on top.
    let doc = doc_with(&["under", "over"]);
    assert_eq!(hit_test(Point::new(52.0, 52.0), &doc, &measure()), Some(0));
}

#[test]
fn later_object_hit_where_earlier_does_not_reach() {
    let doc = doc_with(&["ab", "abcdefgh"]);
    // "ab" spans 50..70, "abcdefgh" spans 50..130.
    assert_eq!(hit_test(Point::new(100.0, 60.0), &doc, &measure()), Some(1));
}

#[test]
fn hit_follows_moved_object() {
    let mut doc = doc_with(&["Hi"]);
    doc.select_at(Some(0));
    doc.move_selected(Point::new(200.0, 200.0));
    let m = measure();
    assert_eq!(hit_test(Point::new(55.0, 55.0), &doc, &m), None);
    assert_eq!(hit_test(Point::new(205.0, 205.0), &doc, &m), Some(0));
}

#[test]
fn hit_test_is_deterministic() {
    let doc = doc_with(&["one", "two", "three"]);
    let m = measure();
    for (x, y) in [(51.0, 51.0), (120.0, 60.0), (0.0, 0.0), (64.0, 69.0)] {
        let first = hit_test(Point::new(x, y), &doc, &m);
        for _ in 0..5 {
            assert_eq!(hit_test(Point::new(x, y), &doc, &m), first);
        }
    }
}
