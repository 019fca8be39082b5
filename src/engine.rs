use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EditorConfig;
use crate::doc::{Document, EditError, StyleFlag, TextObject, TextObjectId};
use crate::geom::Point;
use crate::hit;
use crate::input::{DragSession, InputState};
use crate::render;
use crate::surface::{Surface, TextMeasure};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input and control handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new object was appended to the document.
    ObjectAdded(TextObjectId),
    /// The selection moved to another object, or was cleared.
    SelectionChanged(Option<TextObjectId>),
    /// The active font or size changed; controls should redisplay them.
    ActiveStyleChanged { font: String, size: u32 },
    /// Document state changed and the scene must be repainted.
    RenderNeeded,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies. Pointer handlers that hit-test take the measurer as an
/// argument so the browser and headless hosts share one code path.
pub struct EngineCore {
    pub doc: Document,
    pub input: InputState,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine whose document and surface size follow `config`.
    #[must_use]
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            doc: Document::with_defaults(&config.default_font, config.default_font_size, config.default_anchor),
            input: InputState::Idle,
            viewport_width: config.canvas_width,
            viewport_height: config.canvas_height,
        }
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt`: select and start dragging the first object
    /// under it, or clear the selection on a miss.
    pub fn on_pointer_down<M: TextMeasure + ?Sized>(&mut self, pt: Point, measure: &M) -> Vec<Action> {
        let before = self.snapshot();

        match hit::hit_test(pt, &self.doc, measure) {
            Some(index) => {
                self.doc.select_at(Some(index));
                let anchor = self.doc.get(index).map_or(pt, |obj| obj.position);
                let session = DragSession::new(index, pt, anchor);
                tracing::debug!(index, x = pt.x, y = pt.y, "drag started");
                self.input = InputState::Dragging(session);
            }
            None => {
                tracing::debug!(x = pt.x, y = pt.y, "pointer down missed; clearing selection");
                self.doc.select_at(None);
                self.input = InputState::Idle;
            }
        }

        self.diff(&before)
    }

    /// Pointer moved to `pt`. Only meaningful while dragging.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::Dragging(session) = self.input else {
            return Vec::new();
        };
        // A control may have changed the selection mid-drag.
        if self.doc.selected_index() != Some(session.target) {
            return Vec::new();
        }
        if self.doc.move_selected(session.anchor_for(pt)) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Pointer released: end any drag. The selection stays where it is.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if let InputState::Dragging(session) = std::mem::take(&mut self.input) {
            tracing::debug!(index = session.target, "drag ended");
        }
        Vec::new()
    }

    // --- Controls ---

    /// Add `content` using the active font and size.
    ///
    /// # Errors
    ///
    /// Returns `EmptyText` for blank content; nothing is added.
    pub fn add_text(&mut self, content: &str) -> Result<Vec<Action>, EditError> {
        let font = self.doc.active_font().to_owned();
        let size = self.doc.active_font_size();
        let id = self.doc.add_text(content, &font, size).inspect_err(|e| {
            tracing::warn!(error = %e, "add text rejected");
        })?;
        Ok(vec![Action::ObjectAdded(id), Action::RenderNeeded])
    }

    /// Select the object at `index`, or clear the selection.
    pub fn select(&mut self, index: Option<usize>) -> Vec<Action> {
        let before = self.snapshot();
        self.doc.select_at(index);
        self.diff(&before)
    }

    /// Toggle one style flag on the selected object.
    pub fn toggle_style(&mut self, flag: StyleFlag) -> Vec<Action> {
        if self.doc.toggle_style(flag) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Change the active font family (and the selected object's).
    pub fn set_font(&mut self, family: &str) -> Vec<Action> {
        let before = self.snapshot();
        self.doc.set_font(family);
        self.diff(&before)
    }

    /// Change the active font size (and the selected object's).
    ///
    /// # Errors
    ///
    /// Returns `FontSizeNotPositive` for zero; state is unchanged.
    pub fn set_font_size(&mut self, size: u32) -> Result<Vec<Action>, EditError> {
        let before = self.snapshot();
        self.doc.set_font_size(size).inspect_err(|e| {
            tracing::warn!(error = %e, "font size rejected");
        })?;
        Ok(self.diff(&before))
    }

    /// Change the font size from raw control input.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for non-numeric or non-positive text;
    /// state is unchanged.
    pub fn set_font_size_input(&mut self, raw: &str) -> Result<Vec<Action>, EditError> {
        let before = self.snapshot();
        self.doc.set_font_size_input(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "font size rejected");
        })?;
        Ok(self.diff(&before))
    }

    // --- Render ---

    /// Paint the current document onto `surface`.
    ///
    /// # Errors
    ///
    /// Propagates the surface's drawing errors.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.doc, self.viewport_width, self.viewport_height)
    }

    // --- Queries ---

    /// Index of the selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.doc.selected_index()
    }

    /// Look up an object by index.
    #[must_use]
    pub fn object(&self, index: usize) -> Option<&TextObject> {
        self.doc.get(index)
    }

    #[must_use]
    pub fn active_font(&self) -> &str {
        self.doc.active_font()
    }

    #[must_use]
    pub fn active_font_size(&self) -> u32 {
        self.doc.active_font_size()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    // --- Change tracking ---

    fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            selected: self.doc.selected().map(|obj| obj.id),
            font: self.doc.active_font().to_owned(),
            size: self.doc.active_font_size(),
            selected_style: self.doc.selected().map(|obj| (obj.font_family.clone(), obj.font_size)),
        }
    }

    /// Actions describing what changed since `before`.
    fn diff(&self, before: &StateSnapshot) -> Vec<Action> {
        let after = self.snapshot();
        let mut actions = Vec::new();
        if after.selected != before.selected {
            actions.push(Action::SelectionChanged(after.selected));
        }
        if after.font != before.font || after.size != before.size {
            actions.push(Action::ActiveStyleChanged { font: after.font.clone(), size: after.size });
        }
        if after.selected != before.selected || after.selected_style != before.selected_style {
            actions.push(Action::RenderNeeded);
        }
        actions
    }
}

/// The parts of engine state whose changes are reported as actions.
#[derive(Debug, PartialEq)]
struct StateSnapshot {
    selected: Option<TextObjectId>,
    font: String,
    size: u32,
    selected_style: Option<(String, u32)>,
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot provide a 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        Self::with_config(canvas, &EditorConfig::default())
    }

    /// Create an engine with explicit editor defaults. The surface size is
    /// taken from the canvas element, not from `config`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element cannot provide a 2D context.
    pub fn with_config(canvas: HtmlCanvasElement, config: &EditorConfig) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let mut core = EngineCore::with_config(config);
        core.viewport_width = f64::from(canvas.width());
        core.viewport_height = f64::from(canvas.height());
        Ok(Self { canvas, ctx, core })
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_down(pt, &self.ctx)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    // --- Delegated controls ---

    /// # Errors
    ///
    /// See [`EngineCore::add_text`].
    pub fn add_text(&mut self, content: &str) -> Result<Vec<Action>, EditError> {
        self.core.add_text(content)
    }

    pub fn select(&mut self, index: Option<usize>) -> Vec<Action> {
        self.core.select(index)
    }

    pub fn toggle_style(&mut self, flag: StyleFlag) -> Vec<Action> {
        self.core.toggle_style(flag)
    }

    pub fn set_font(&mut self, family: &str) -> Vec<Action> {
        self.core.set_font(family)
    }

    /// # Errors
    ///
    /// See [`EngineCore::set_font_size_input`].
    pub fn set_font_size_input(&mut self, raw: &str) -> Result<Vec<Action>, EditError> {
        self.core.set_font_size_input(raw)
    }

    // --- Render ---

    /// Draw the current state to the canvas, tracking element resizes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        self.core.viewport_width = f64::from(self.canvas.width());
        self.core.viewport_height = f64::from(self.canvas.height());
        self.core.render(&mut self.ctx)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.core.selection()
    }

    #[must_use]
    pub fn object(&self, index: usize) -> Option<&TextObject> {
        self.core.object(index)
    }

    #[must_use]
    pub fn active_font(&self) -> &str {
        self.core.active_font()
    }

    #[must_use]
    pub fn active_font_size(&self) -> u32 {
        self.core.active_font_size()
    }
}
