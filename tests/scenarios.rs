//! End-to-end editing sessions driven through the public engine API, the way
//! a host page wires its controls and pointer events.
#![allow(clippy::float_cmp)]

use textcanvas::doc::StyleFlag;
use textcanvas::engine::{Action, EngineCore};
use textcanvas::geom::Point;
use textcanvas::script;
use textcanvas::surface::{DisplayList, DrawOp, FixedAdvance};

fn measure() -> FixedAdvance {
    FixedAdvance { ratio: 0.5 }
}

fn assert_single_selection(core: &EngineCore) {
    let flagged: Vec<usize> = core
        .doc
        .objects()
        .iter()
        .enumerate()
        .filter(|(_, o)| o.is_selected)
        .map(|(i, _)| i)
        .collect();
    match core.selection() {
        Some(i) => assert_eq!(flagged, [i]),
        None => assert!(flagged.is_empty()),
    }
}

#[test]
fn add_places_plain_object_at_default_anchor() {
    let mut core = EngineCore::new();
    core.add_text("Hello").unwrap();

    assert_eq!(core.doc.len(), 1);
    let obj = core.object(0).unwrap();
    assert_eq!(obj.position, Point::new(50.0, 50.0));
    assert_eq!(obj.font_family, "Arial");
    assert_eq!(obj.font_size, 20);
    assert!(!obj.is_bold && !obj.is_italic && !obj.is_underline && !obj.is_strikethrough);
    assert!(!obj.is_selected);
}

#[test]
fn click_selects_then_drag_moves_then_release_keeps_selection() {
    let mut core = EngineCore::new();
    core.add_text("Hi").unwrap();

    core.on_pointer_down(Point::new(55.0, 55.0), &measure());
    assert_eq!(core.selection(), Some(0));
    assert_eq!(core.active_font(), "Arial");
    assert_eq!(core.active_font_size(), 20);

    core.on_pointer_move(Point::new(100.0, 120.0));
    assert_eq!(core.object(0).unwrap().position, Point::new(95.0, 115.0));

    core.on_pointer_up();
    assert!(!core.is_dragging());
    assert_eq!(core.selection(), Some(0));
    assert_eq!(core.object(0).unwrap().position, Point::new(95.0, 115.0));
    assert_single_selection(&core);
}

#[test]
fn click_on_empty_space_clears_selection() {
    let mut core = EngineCore::new();
    core.add_text("Hi").unwrap();
    core.on_pointer_down(Point::new(55.0, 55.0), &measure());
    core.on_pointer_up();

    let actions = core.on_pointer_down(Point::new(650.0, 380.0), &measure());
    assert!(actions.contains(&Action::SelectionChanged(None)));
    assert!(core.selection().is_none());
    assert_single_selection(&core);
}

#[test]
fn resize_selected_then_add_inherits_size() {
    let mut core = EngineCore::new();
    core.add_text("Hi").unwrap();
    core.select(Some(0));
    core.set_font_size(24).unwrap();

    assert_eq!(core.object(0).unwrap().font_size, 24);
    assert_eq!(core.active_font_size(), 24);

    core.add_text("next").unwrap();
    assert_eq!(core.object(1).unwrap().font_size, 24);
}

#[test]
fn blank_add_leaves_document_unchanged() {
    let mut core = EngineCore::new();
    core.add_text("keep").unwrap();
    assert!(core.add_text("   ").is_err());
    assert_eq!(core.doc.len(), 1);
}

#[test]
fn styled_selected_object_renders_all_marks() {
    let mut core = EngineCore::new();
    core.add_text("Hello").unwrap();
    core.on_pointer_down(Point::new(60.0, 60.0), &measure());
    core.on_pointer_up();
    for flag in [StyleFlag::Italic, StyleFlag::Underline, StyleFlag::Strikethrough] {
        core.toggle_style(flag);
    }

    let mut list = DisplayList::new(measure());
    let Ok(()) = core.render(&mut list);
    let ops = list.ops();
    assert_eq!(ops.len(), 5);
    assert_eq!(
        ops[1],
        DrawOp::FillText { text: "Hello".into(), font: "italic 20px Arial".into(), x: 50.0, y: 50.0 }
    );
    assert!(matches!(ops[2], DrawOp::StrokeRect { .. }));
    assert!(matches!(ops[3], DrawOp::StrokeLine { .. }));
    assert!(matches!(ops[4], DrawOp::StrokeLine { .. }));
}

#[test]
fn scripted_session_matches_direct_calls() {
    let source = r#"
# two objects, restyle the second, then drag it
{"op":"add","text":"first"}
{"op":"font","family":"Verdana"}
{"op":"add","text":"second"}
{"op":"select","index":1}
{"op":"toggle","style":"bold"}
{"op":"size","value":"not a size"}
{"op":"size","value":"30"}
{"op":"up"}
"#;
    let mut core = EngineCore::new();
    let mut rejected = 0;
    for cmd in script::parse(source).unwrap() {
        if cmd.apply(&mut core, &measure()).is_err() {
            rejected += 1;
        }
    }

    assert_eq!(rejected, 1);
    assert_eq!(core.doc.len(), 2);
    let second = core.object(1).unwrap();
    assert_eq!(second.font_family, "Verdana");
    assert_eq!(second.font_size, 30);
    assert!(second.is_bold);
    assert_eq!(core.object(0).unwrap().font_family, "Arial");
    assert_single_selection(&core);
}
