//! Block selector maps.
//!
//! A [`BlockSelectorMap`] tells the renderer which CSS selector stands for a
//! block type's rendered markup, and which sub-selectors stand for its named
//! elements.

use serde::{Deserialize, Serialize};

use crate::tree::{lenient, Entries};

/// Selector of the root scope.
pub const ROOT_SELECTOR: &str = ":root";

/// Built-in selectors for elements styled at the root scope.
pub const ELEMENT_SELECTORS: &[(&str, &str)] = &[
    ("link", "a"),
    ("h1", "h1"),
    ("h2", "h2"),
    ("h3", "h3"),
    ("h4", "h4"),
    ("h5", "h5"),
    ("h6", "h6"),
];

/// Looks up the built-in selector for a root-level element.
///
/// ```rust
/// use themecss::element_selector;
///
/// assert_eq!(element_selector("link"), Some("a"));
/// assert_eq!(element_selector("button"), None);
/// ```
pub fn element_selector(name: &str) -> Option<&'static str> {
    ELEMENT_SELECTORS
        .iter()
        .find(|(element, _)| *element == name)
        .map(|(_, selector)| *selector)
}

/// Selectors for one block type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockSelector {
    pub selector: String,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub elements: Option<Entries<String>>,
}

impl BlockSelector {
    /// Creates a block selector with no element selectors.
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            elements: None,
        }
    }

    /// Creates a block selector whose elements are derived from the built-in
    /// element list, scoped under each comma-separated part of `selector`.
    ///
    /// ```rust
    /// use themecss::BlockSelector;
    ///
    /// let list = BlockSelector::with_default_elements("ol, ul");
    /// assert_eq!(list.element("link"), Some("ol a,ul a"));
    /// ```
    pub fn with_default_elements(selector: impl Into<String>) -> Self {
        let selector = selector.into();
        let elements = ELEMENT_SELECTORS
            .iter()
            .map(|(name, element)| (*name, descendant(&selector, element)))
            .collect();
        Self {
            selector,
            elements: Some(elements),
        }
    }

    /// Adds an element selector, returning the updated selector for chaining.
    pub fn add_element(mut self, name: &str, selector: impl Into<String>) -> Self {
        self.elements
            .get_or_insert_with(Entries::new)
            .insert(name, selector.into());
        self
    }

    /// Returns the selector registered for `name`, if any. An empty
    /// selector counts as unregistered.
    pub fn element(&self, name: &str) -> Option<&str> {
        self.elements
            .as_ref()
            .and_then(|elements| elements.get(name))
            .map(String::as_str)
            .filter(|selector| !selector.is_empty())
    }

    /// Returns `true` if the block's own selector is usable.
    pub fn has_selector(&self) -> bool {
        !self.selector.is_empty()
    }
}

/// Mapping from block identifier to its selectors.
///
/// # Example
///
/// ```rust
/// use themecss::{BlockSelector, BlockSelectorMap};
///
/// let selectors = BlockSelectorMap::new()
///     .add("core/heading", BlockSelector::new("h1,h2,h3,h4,h5,h6").add_element("h1", "h1"))
///     .add("core/paragraph", BlockSelector::new("p"));
///
/// assert_eq!(selectors.selector("core/paragraph"), Some("p"));
/// assert_eq!(selectors.element_selector("core/heading", "h1"), Some("h1"));
/// assert_eq!(selectors.element_selector("core/paragraph", "link"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockSelectorMap {
    blocks: Entries<BlockSelector>,
}

impl BlockSelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a block, returning the updated map for chaining.
    pub fn add(mut self, block: &str, selector: BlockSelector) -> Self {
        self.blocks.insert(block, selector);
        self
    }

    pub fn insert(&mut self, block: &str, selector: BlockSelector) {
        self.blocks.insert(block, selector);
    }

    pub fn get(&self, block: &str) -> Option<&BlockSelector> {
        self.blocks.get(block)
    }

    /// Returns the block's own selector, or `None` when it is missing or
    /// empty.
    pub fn selector(&self, block: &str) -> Option<&str> {
        self.get(block)
            .filter(|entry| entry.has_selector())
            .map(|entry| entry.selector.as_str())
    }

    /// Returns the selector of one of the block's elements.
    pub fn element_selector(&self, block: &str, element: &str) -> Option<&str> {
        self.get(block).and_then(|entry| entry.element(element))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BlockSelector)> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Joins `child` under every comma-separated part of `parent`.
fn descendant(parent: &str, child: &str) -> String {
    parent
        .split(',')
        .map(|part| format!("{} {}", part.trim(), child))
        .collect::<Vec<_>>()
        .join(",")
}

/// Compounds `class` onto every comma-separated part of `selector`.
pub(crate) fn compound(selector: &str, class: &str) -> String {
    selector
        .split(',')
        .map(|part| format!("{}{}", part.trim(), class))
        .collect::<Vec<_>>()
        .join(",")
}
