//! Input model: the drag gesture tracked between pointer-down and pointer-up.
//!
//! `InputState` is the active gesture. A drag starts only when pointer-down
//! lands on an object; it carries the grab offset so the object keeps its
//! position relative to the pointer instead of jumping under it. The
//! transitions themselves live in [`crate::engine::EngineCore`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;

/// An in-progress move of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Storage index of the object being dragged.
    pub target: usize,
    /// Pointer-down position minus the object's anchor at drag start.
    pub grab_offset: Point,
}

impl DragSession {
    /// Start a drag of the object anchored at `anchor`, grabbed at `pointer`.
    #[must_use]
    pub fn new(target: usize, pointer: Point, anchor: Point) -> Self {
        Self { target, grab_offset: pointer - anchor }
    }

    /// Anchor that keeps the grab offset when the pointer is at `pointer`.
    #[must_use]
    pub fn anchor_for(&self, pointer: Point) -> Point {
        pointer - self.grab_offset
    }
}

/// Gesture state between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// An object is following the pointer.
    Dragging(DragSession),
}

impl InputState {
    /// The active drag session, if any.
    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}
