//! Node extraction: flattening the tree into selector-scoped records.
//!
//! Node order is significant. Rules with equal specificity resolve by source
//! order, so the traversal is fixed: root, root elements, then each block
//! followed by that block's elements.

use serde::Serialize;

use crate::selectors::{element_selector, BlockSelectorMap, ROOT_SELECTOR};
use crate::tree::{Settings, StyleProperties, StyleTree};

/// Style properties bound to the selector they apply to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleNode {
    pub selector: String,
    pub styles: StyleProperties,
}

/// Settings bound to the selector whose scope they configure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsNode {
    pub selector: String,
    pub presets: Settings,
}

/// Extracts one [`StyleNode`] per rule target of the tree.
///
/// The root node always comes first, even when it has no properties. Blocks
/// missing from `selectors` (or mapped to an empty selector) are skipped
/// along with their elements, as are elements that have no selector.
///
/// # Example
///
/// ```rust
/// use themecss::{extract_style_nodes, BlockSelectorMap, StyleTree};
///
/// let tree: StyleTree = serde_json::from_str(
///     r#"{ "styles": { "elements": { "link": { "color": { "text": "blue" } } } } }"#,
/// ).unwrap();
///
/// let nodes = extract_style_nodes(&tree, &BlockSelectorMap::new());
/// let selectors: Vec<&str> = nodes.iter().map(|n| n.selector.as_str()).collect();
/// assert_eq!(selectors, vec![":root", "a"]);
/// ```
pub fn extract_style_nodes(tree: &StyleTree, selectors: &BlockSelectorMap) -> Vec<StyleNode> {
    let styles = &tree.styles;
    let mut nodes = vec![StyleNode {
        selector: ROOT_SELECTOR.to_string(),
        styles: styles.properties.clone(),
    }];

    for (name, properties) in styles.elements.iter() {
        match element_selector(name) {
            Some(selector) => nodes.push(StyleNode {
                selector: selector.to_string(),
                styles: properties.clone(),
            }),
            None => tracing::debug!(element = name, "no built-in selector for root element"),
        }
    }

    for (block, block_styles) in styles.blocks.iter() {
        let Some(entry) = selectors.get(block).filter(|entry| entry.has_selector()) else {
            tracing::debug!(block, "block has no selector, skipping its styles");
            continue;
        };

        nodes.push(StyleNode {
            selector: entry.selector.clone(),
            styles: block_styles.properties.clone(),
        });

        for (name, properties) in block_styles.elements.iter() {
            match entry.element(name) {
                Some(selector) => nodes.push(StyleNode {
                    selector: selector.to_string(),
                    styles: properties.clone(),
                }),
                None => tracing::debug!(block, element = name, "block element has no selector"),
            }
        }
    }

    tracing::trace!(count = nodes.len(), "extracted style nodes");
    nodes
}

/// Extracts one [`SettingsNode`] per scope that declares settings.
///
/// The root node carries every root-level setting and always comes first;
/// each block present in `selectors` with settings follows in tree order.
pub fn extract_settings_nodes(tree: &StyleTree, selectors: &BlockSelectorMap) -> Vec<SettingsNode> {
    let settings = &tree.settings;
    let mut nodes = vec![SettingsNode {
        selector: ROOT_SELECTOR.to_string(),
        presets: settings.settings.clone(),
    }];

    for (block, block_settings) in settings.blocks.iter() {
        match selectors.selector(block) {
            Some(selector) => nodes.push(SettingsNode {
                selector: selector.to_string(),
                presets: block_settings.clone(),
            }),
            None => tracing::debug!(block, "block has no selector, skipping its settings"),
        }
    }

    tracing::trace!(count = nodes.len(), "extracted settings nodes");
    nodes
}
