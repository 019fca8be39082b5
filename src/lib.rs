//! Editing engine for a canvas of independently styled text objects.
//!
//! The crate compiles natively and to WebAssembly. It owns the editing
//! lifecycle of the canvas: the document of placed text objects, translating
//! raw pointer events into document mutations, hit-testing objects, and
//! painting the scene. Hosts (the browser page or the headless `textcanvas`
//! binary) wire their controls and pointer events to the engine and repaint
//! whenever an [`engine::Action::RenderNeeded`] comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level browser engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Text objects, the owned document, and edit errors |
//! | [`geom`] | Points and rectangles in canvas pixel space |
//! | [`input`] | The drag gesture state machine |
//! | [`hit`] | Hit-testing pointer positions against text objects |
//! | [`render`] | Scene rendering onto any [`surface::Surface`] |
//! | [`surface`] | Measurement and drawing seams, plus a recording surface |
//! | [`config`] | Editor defaults, overridable from the environment |
//! | [`script`] | Replayable command scripts for headless hosts |
//! | [`consts`] | Shared numeric constants (padding, stroke widths, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod script;
pub mod surface;
