//! The global styles tree.
//!
//! This module provides the input model:
//!
//! - [`StyleTree`]: theme-wide and per-block styles plus settings
//! - [`StyleProperties`]: the property groups of one scope
//! - [`Settings`]: presets and custom values of one scope
//! - [`Entries`]: the insertion-ordered map used for blocks and elements
//!
//! Every branch is optional. Branches of the wrong shape are dropped while
//! deserializing, so a partially broken theme still renders what it can.

mod entries;
pub(crate) mod lenient;
mod settings;
mod style;

use serde::{Deserialize, Serialize};

pub use entries::Entries;
pub use settings::{
    ColorPreset, ColorSettings, FontFamilyPreset, FontSizePreset, GradientPreset, Preset,
    PresetKind, Settings, TypographySettings,
};
pub use style::{
    BorderStyles, BoxSides, BoxValue, ColorStyles, SpacingStyles, StyleProperties, StyleValue,
    TypographyStyles,
};

/// A global styles tree: `{ styles?, settings? }`.
///
/// # Example
///
/// ```rust
/// use themecss::StyleTree;
///
/// let tree: StyleTree = serde_json::from_str(r#"{
///     "styles": {
///         "color": { "text": "red" },
///         "elements": { "link": { "color": { "text": "blue" } } }
///     }
/// }"#).unwrap();
///
/// assert!(tree.styles.elements.contains_key("link"));
/// assert!(tree.settings.blocks.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleTree {
    #[serde(default, deserialize_with = "lenient::value")]
    pub styles: TreeStyles,
    #[serde(default, deserialize_with = "lenient::value")]
    pub settings: TreeSettings,
}

/// The `styles` branch: root properties, global elements, and blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeStyles {
    #[serde(flatten)]
    pub properties: StyleProperties,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Entries::is_empty"
    )]
    pub elements: Entries<StyleProperties>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Entries::is_empty"
    )]
    pub blocks: Entries<BlockStyles>,
}

/// The styles of one block type: its own properties plus its elements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyles {
    #[serde(flatten)]
    pub properties: StyleProperties,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Entries::is_empty"
    )]
    pub elements: Entries<StyleProperties>,
}

/// The `settings` branch: root settings plus per-block overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeSettings {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Entries::is_empty"
    )]
    pub blocks: Entries<Settings>,
}

impl StyleTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from any serde value, tolerating malformed branches.
    ///
    /// A value that is not a mapping yields an empty tree.
    pub fn from_value(value: serde_json::Value) -> Self {
        lenient::convert(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tree_empty_input() {
        let tree: StyleTree = serde_json::from_value(json!({})).unwrap();
        assert_eq!(tree, StyleTree::default());
    }

    #[test]
    fn test_tree_splits_elements_and_blocks_from_properties() {
        let tree: StyleTree = serde_json::from_value(json!({
            "styles": {
                "color": { "text": "red" },
                "elements": { "link": { "color": { "text": "yellow" } } },
                "blocks": {
                    "core/heading": {
                        "color": { "text": "blue" },
                        "elements": { "h1": { "typography": { "fontSize": "42px" } } }
                    }
                }
            }
        }))
        .unwrap();

        assert!(tree.styles.properties.extra.is_empty());
        assert_eq!(tree.styles.elements.len(), 1);
        let heading = tree.styles.blocks.get("core/heading").unwrap();
        assert!(heading.properties.color.is_some());
        assert!(heading.properties.extra.is_empty());
        assert!(heading.elements.contains_key("h1"));
    }

    #[test]
    fn test_tree_settings_blocks() {
        let tree: StyleTree = serde_json::from_value(json!({
            "settings": {
                "color": { "palette": [ { "slug": "red", "color": "#f00" } ] },
                "blocks": {
                    "core/paragraph": { "typography": { "fontSizes": [] } }
                }
            }
        }))
        .unwrap();

        assert_eq!(tree.settings.settings.palette().len(), 1);
        assert!(tree.settings.settings.extra.is_empty());
        assert!(tree.settings.blocks.contains_key("core/paragraph"));
    }

    #[test]
    fn test_tree_malformed_branches_degrade() {
        let tree = StyleTree::from_value(json!({
            "styles": { "blocks": "not a map", "color": { "text": "red" } },
            "settings": 7
        }));
        assert!(tree.styles.blocks.is_empty());
        assert!(tree.styles.properties.color.is_some());
        assert_eq!(tree.settings, TreeSettings::default());
    }

    #[test]
    fn test_tree_from_non_mapping() {
        assert_eq!(StyleTree::from_value(json!([1, 2])), StyleTree::default());
    }
}
