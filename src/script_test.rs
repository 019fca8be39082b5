#![allow(clippy::float_cmp)]

use super::*;
use crate::surface::FixedAdvance;

fn measure() -> FixedAdvance {
    FixedAdvance { ratio: 0.5 }
}

// =============================================================
// parse
// =============================================================

#[test]
fn parse_every_command_kind() {
    let source = r#"
{"op":"add","text":"Hello"}
{"op":"down","x":55,"y":55.5}
{"op":"move","x":100,"y":120}
{"op":"up"}
{"op":"select","index":null}
{"op":"select","index":2}
{"op":"toggle","style":"underline"}
{"op":"font","family":"Verdana"}
{"op":"size","value":"24"}
"#;
    let commands = parse(source).unwrap();
    assert_eq!(
        commands,
        [
            Command::Add { text: "Hello".into() },
            Command::Down { x: 55.0, y: 55.5 },
            Command::Move { x: 100.0, y: 120.0 },
            Command::Up,
            Command::Select { index: None },
            Command::Select { index: Some(2) },
            Command::Toggle { style: StyleFlag::Underline },
            Command::Font { family: "Verdana".into() },
            Command::Size { value: "24".into() },
        ]
    );
}

#[test]
fn parse_skips_blank_and_comment_lines() {
    let commands = parse("# setup\n\n   \n{\"op\":\"up\"}\n").unwrap();
    assert_eq!(commands, [Command::Up]);
}

#[test]
fn parse_reports_line_of_bad_command() {
    let err = parse("{\"op\":\"up\"}\n# comment\n{\"op\":\"jump\"}\n").unwrap_err();
    let ScriptError::Parse { line, .. } = err;
    assert_eq!(line, 3);
}

#[test]
fn parse_rejects_unknown_style() {
    assert!(parse(r#"{"op":"toggle","style":"shadow"}"#).is_err());
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_replays_drag_scenario() {
    let source = r#"
{"op":"add","text":"Hi"}
{"op":"down","x":55,"y":55}
{"op":"move","x":100,"y":120}
{"op":"up"}
"#;
    let mut core = EngineCore::new();
    for cmd in parse(source).unwrap() {
        cmd.apply(&mut core, &measure()).unwrap();
    }
    let obj = core.object(0).unwrap();
    assert_eq!(obj.position, Point::new(95.0, 115.0));
    assert!(obj.is_selected);
    assert!(!core.is_dragging());
}

#[test]
fn apply_surfaces_rejected_edits() {
    let mut core = EngineCore::new();
    let err = Command::Add { text: "  ".into() }.apply(&mut core, &measure()).unwrap_err();
    assert_eq!(err, EditError::EmptyText);
    let err = Command::Size { value: "big".into() }.apply(&mut core, &measure()).unwrap_err();
    assert_eq!(err, EditError::FontSizeNotNumeric("big".into()));
    assert!(core.doc.is_empty());
    assert_eq!(core.active_font_size(), 20);
}

#[test]
fn apply_font_then_add_uses_new_font() {
    let mut core = EngineCore::new();
    Command::Font { family: "Times New Roman".into() }.apply(&mut core, &measure()).unwrap();
    Command::Add { text: "x".into() }.apply(&mut core, &measure()).unwrap();
    assert_eq!(core.object(0).unwrap().font_family, "Times New Roman");
}
