//! Document model: text objects, their styling, and the owned document.
//!
//! This module defines what is on the canvas (`TextObject`), how an object's
//! style turns into a font for measuring and painting (`FontDescriptor`), and
//! the single owner of all editable state (`Document`). The document also
//! carries the active font and size shared between the style controls and the
//! current selection.
//!
//! Mutations flow into this layer from the input engine (selection, drag) and
//! from the control surface (add, restyle). Each mutation reports whether
//! state changed; the renderer reads objects back in storage order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_ANCHOR, DEFAULT_FONT, DEFAULT_FONT_SIZE};
use crate::geom::Point;

/// Unique identifier for a text object.
pub type TextObjectId = Uuid;

// =============================================================
// Errors
// =============================================================

/// Rejected edit. State is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("text content is empty")]
    EmptyText,
    #[error("font size is not a number: {0:?}")]
    FontSizeNotNumeric(String),
    #[error("font size must be positive, got {0}")]
    FontSizeNotPositive(i64),
    #[error("font size too large: {0}")]
    FontSizeTooLarge(i64),
}

impl EditError {
    /// Stable machine-readable code. Every edit error is an invalid input.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyText | Self::FontSizeNotNumeric(_) | Self::FontSizeNotPositive(_) | Self::FontSizeTooLarge(_) => {
                "E_INVALID_INPUT"
            }
        }
    }
}

// =============================================================
// Styling
// =============================================================

/// One of the independent boolean style flags on a text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
}

/// Font used to measure and paint a text object.
///
/// `Display` renders the CSS `font` shorthand, e.g. `italic bold 20px Arial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontDescriptor<'a> {
    pub family: &'a str,
    pub size: u32,
    pub bold: bool,
    pub italic: bool,
}

impl fmt::Display for FontDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.italic {
            f.write_str("italic ")?;
        }
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

// =============================================================
// Text objects
// =============================================================

/// One placed piece of text.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextObject {
    /// Stable identity, unaffected by the object's position in the document.
    pub id: TextObjectId,
    /// The text itself; never blank.
    pub content: String,
    /// Top-left anchor in canvas pixels.
    pub position: Point,
    pub font_family: String,
    /// Font size in pixels; always positive.
    pub font_size: u32,
    pub is_bold: bool,
    pub is_italic: bool,
    pub is_underline: bool,
    pub is_strikethrough: bool,
    /// Mirrors the document's selection. At most one object has this set.
    pub is_selected: bool,
}

impl TextObject {
    /// The font this object is measured and painted with.
    #[must_use]
    pub fn font_descriptor(&self) -> FontDescriptor<'_> {
        FontDescriptor {
            family: &self.font_family,
            size: self.font_size,
            bold: self.is_bold,
            italic: self.is_italic,
        }
    }

    /// Current value of one style flag.
    #[must_use]
    pub fn style(&self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.is_bold,
            StyleFlag::Italic => self.is_italic,
            StyleFlag::Underline => self.is_underline,
            StyleFlag::Strikethrough => self.is_strikethrough,
        }
    }

    fn style_mut(&mut self, flag: StyleFlag) -> &mut bool {
        match flag {
            StyleFlag::Bold => &mut self.is_bold,
            StyleFlag::Italic => &mut self.is_italic,
            StyleFlag::Underline => &mut self.is_underline,
            StyleFlag::Strikethrough => &mut self.is_strikethrough,
        }
    }
}

// =============================================================
// Document
// =============================================================

/// The editable state of one canvas.
///
/// Objects are kept in insertion order, which is also paint order. All writes
/// go through the methods below so the single-selection invariant holds:
/// when `selected` is `Some(i)`, `objects[i]` is the only object with
/// `is_selected` set.
#[derive(Debug, Clone)]
pub struct Document {
    objects: Vec<TextObject>,
    selected: Option<usize>,
    active_font: String,
    active_font_size: u32,
    default_anchor: Point,
}

impl Document {
    /// Create an empty document with the stock defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_ANCHOR)
    }

    /// Create an empty document with the given active font, size, and anchor
    /// for new objects. A zero size falls back to the stock default.
    #[must_use]
    pub fn with_defaults(font: &str, size: u32, anchor: Point) -> Self {
        Self {
            objects: Vec::new(),
            selected: None,
            active_font: font.to_owned(),
            active_font_size: if size == 0 { DEFAULT_FONT_SIZE } else { size },
            default_anchor: anchor,
        }
    }

    // --- Mutations ---

    /// Append a new unselected, unstyled object at the default anchor.
    ///
    /// # Errors
    ///
    /// Returns `EmptyText` if `content` is blank and `FontSizeNotPositive`
    /// if `size` is zero.
    pub fn add_text(&mut self, content: &str, font: &str, size: u32) -> Result<TextObjectId, EditError> {
        if content.trim().is_empty() {
            return Err(EditError::EmptyText);
        }
        if size == 0 {
            return Err(EditError::FontSizeNotPositive(0));
        }
        let obj = TextObject {
            id: Uuid::new_v4(),
            content: content.to_owned(),
            position: self.default_anchor,
            font_family: font.to_owned(),
            font_size: size,
            is_bold: false,
            is_italic: false,
            is_underline: false,
            is_strikethrough: false,
            is_selected: false,
        };
        let id = obj.id;
        self.objects.push(obj);
        Ok(id)
    }

    /// Move the selection to `index`, or clear it with `None`.
    ///
    /// Selecting an object copies its font and size into the active state.
    /// An index past the end is ignored. Returns whether anything changed.
    pub fn select_at(&mut self, index: Option<usize>) -> bool {
        if let Some(i) = index {
            if i >= self.objects.len() {
                return false;
            }
        }

        let mut changed = self.selected != index;
        if let Some(prev) = self.selected.take() {
            if let Some(obj) = self.objects.get_mut(prev) {
                obj.is_selected = false;
            }
        }

        if let Some(obj) = index.and_then(|i| self.objects.get_mut(i)) {
            obj.is_selected = true;
            if self.active_font != obj.font_family || self.active_font_size != obj.font_size {
                self.active_font.clone_from(&obj.font_family);
                self.active_font_size = obj.font_size;
                changed = true;
            }
        }
        self.selected = index;
        changed
    }

    /// Overwrite the selected object's anchor. No-op without a selection.
    pub fn move_selected(&mut self, position: Point) -> bool {
        let Some(obj) = self.selected_mut() else {
            return false;
        };
        if obj.position == position {
            return false;
        }
        obj.position = position;
        true
    }

    /// Flip one style flag on the selected object. No-op without a selection.
    pub fn toggle_style(&mut self, flag: StyleFlag) -> bool {
        let Some(obj) = self.selected_mut() else {
            return false;
        };
        let value = obj.style_mut(flag);
        *value = !*value;
        true
    }

    /// Set the active font family and apply it to the selected object.
    pub fn set_font(&mut self, family: &str) -> bool {
        let mut changed = self.active_font != family;
        family.clone_into(&mut self.active_font);
        if let Some(obj) = self.selected_mut() {
            if obj.font_family != family {
                family.clone_into(&mut obj.font_family);
                changed = true;
            }
        }
        changed
    }

    /// Set the active font size and apply it to the selected object.
    ///
    /// # Errors
    ///
    /// Returns `FontSizeNotPositive` for zero; state is left unchanged.
    pub fn set_font_size(&mut self, size: u32) -> Result<bool, EditError> {
        if size == 0 {
            return Err(EditError::FontSizeNotPositive(0));
        }
        let mut changed = self.active_font_size != size;
        self.active_font_size = size;
        if let Some(obj) = self.selected_mut() {
            if obj.font_size != size {
                obj.font_size = size;
                changed = true;
            }
        }
        Ok(changed)
    }

    /// Parse a font size typed or picked in a control, then apply it.
    ///
    /// # Errors
    ///
    /// Returns `FontSizeNotNumeric`, `FontSizeNotPositive`, or
    /// `FontSizeTooLarge`; state is left unchanged.
    pub fn set_font_size_input(&mut self, raw: &str) -> Result<bool, EditError> {
        let size = parse_font_size(raw)?;
        self.set_font_size(size)
    }

    // --- Queries ---

    /// All objects in storage (paint) order.
    #[must_use]
    pub fn objects(&self) -> &[TextObject] {
        &self.objects
    }

    /// Return a reference to an object by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TextObject> {
        self.objects.get(index)
    }

    /// Current storage index of the object with the given id.
    #[must_use]
    pub fn index_of(&self, id: &TextObjectId) -> Option<usize> {
        self.objects.iter().position(|obj| obj.id == *id)
    }

    /// Index of the selected object, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected object, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&TextObject> {
        self.selected.and_then(|i| self.objects.get(i))
    }

    /// Font family applied to the next new object.
    #[must_use]
    pub fn active_font(&self) -> &str {
        &self.active_font
    }

    /// Font size applied to the next new object.
    #[must_use]
    pub fn active_font_size(&self) -> u32 {
        self.active_font_size
    }

    /// Number of objects in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the document contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn selected_mut(&mut self) -> Option<&mut TextObject> {
        self.selected.and_then(|i| self.objects.get_mut(i))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a positive font size from control input. Surrounding whitespace is
/// ignored; anything else that is not an integer is rejected.
///
/// # Errors
///
/// See [`Document::set_font_size_input`].
pub fn parse_font_size(raw: &str) -> Result<u32, EditError> {
    let trimmed = raw.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| EditError::FontSizeNotNumeric(trimmed.to_owned()))?;
    if value <= 0 {
        return Err(EditError::FontSizeNotPositive(value));
    }
    u32::try_from(value).map_err(|_| EditError::FontSizeTooLarge(value))
}
