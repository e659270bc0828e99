//! Document access used by the localizer
//!
//! The localizer never walks a real DOM directly. It asks a [`Document`] for
//! the elements carrying the key attribute and only ever reads that attribute
//! and rewrites text, so tests and non-browser hosts can substitute
//! [`MemoryDocument`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// An element handle the localizer can inspect and rewrite.
///
/// Handles behave like DOM node references: cloning shares the element and
/// `set_text` is visible through every handle.
pub trait TaggedElement {
    fn attribute(&self, name: &str) -> Option<String>;

    fn text(&self) -> String;

    /// Replaces the element's visible text.
    fn set_text(&self, text: &str);
}

/// Query seam over the current document.
pub trait Document {
    type Element: TaggedElement;

    /// Every element bearing `attribute`, in document order.
    fn tagged_elements(&self, attribute: &str) -> Vec<Self::Element>;
}

/// Backing data of a [`MemoryElement`].
#[derive(Debug, Default)]
struct ElementState {
    /// Attribute name → value
    attributes: HashMap<String, String>,
    /// Text content
    text: String,
}

/// Shared handle to an in-memory element.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    /// Shared state; clones see each other's writes
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let element = Self::default();
        element.state.borrow_mut().text = text.into();
        element
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.borrow_mut().attributes.insert(name.into(), value.into());
        self
    }
}

impl TaggedElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.borrow().attributes.get(name).cloned()
    }

    fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.state.borrow_mut().text);
    }
}

/// Ordered collection of [`MemoryElement`]s standing in for a page.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    /// Elements in document order
    elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `element` and returns a handle to it.
    pub fn push(&mut self, element: MemoryElement) -> MemoryElement {
        self.elements.push(element.clone());
        element
    }

    /// Text of every element, in document order.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.elements.iter().map(TaggedElement::text).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn tagged_elements(&self, attribute: &str) -> Vec<MemoryElement> {
        self.elements
            .iter()
            .filter(|element| element.state.borrow().attributes.contains_key(attribute))
            .cloned()
            .collect()
    }
}
