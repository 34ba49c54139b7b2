//! Rendering style trees to CSS text.
//!
//! Two texts come out of a tree:
//!
//! - [`render_custom_properties`]: preset and custom values as CSS variables
//!   scoped to each settings selector
//! - [`render_styles`]: one rule per style node, followed by preset utility
//!   classes
//!
//! Both are pure: the same tree and selector map always produce the same
//! bytes. Rules are concatenated without whitespace.

mod css;
mod custom;
mod options;
mod properties;

pub use css::{Declaration, Ruleset};
pub use custom::settings_declarations;
pub use options::{PresetClasses, RenderOptions};
pub use properties::{style_declarations, StyleProperty};

use serde::Serialize;

use crate::nodes::{extract_settings_nodes, extract_style_nodes, SettingsNode};
use crate::selectors::{compound, BlockSelectorMap, ROOT_SELECTOR};
use crate::tree::{PresetKind, StyleTree};

/// Renders the CSS custom properties of every settings scope.
///
/// Scopes without declarations are left out.
///
/// # Example
///
/// ```rust
/// use themecss::{render_custom_properties, BlockSelectorMap, StyleTree};
///
/// let tree: StyleTree = serde_json::from_str(r##"{
///     "settings": {
///         "color": { "palette": [ { "slug": "white", "color": "#fff" } ] },
///         "custom": { "gap": "1rem" }
///     }
/// }"##).unwrap();
///
/// assert_eq!(
///     render_custom_properties(&tree, &BlockSelectorMap::new()),
///     ":root{--wp--preset--color--white: #fff;--wp--custom--gap: 1rem;}"
/// );
/// ```
pub fn render_custom_properties(tree: &StyleTree, selectors: &BlockSelectorMap) -> String {
    let mut css = String::new();
    for node in extract_settings_nodes(tree, selectors) {
        Ruleset::new(node.selector, settings_declarations(&node.presets)).write_to(&mut css);
    }
    css
}

/// Renders style rules with the default [`RenderOptions`].
///
/// Each style node with at least one mapped property becomes a rule; the
/// root palette then adds `!important` color, background-color and
/// border-color classes per entry.
///
/// # Example
///
/// ```rust
/// use themecss::{render_styles, BlockSelectorMap, StyleTree};
///
/// let tree: StyleTree = serde_json::from_str(r##"{
///     "styles": { "color": { "background": "red" } },
///     "settings": { "color": { "palette": [ { "slug": "ink", "color": "#111" } ] } }
/// }"##).unwrap();
///
/// assert_eq!(
///     render_styles(&tree, &BlockSelectorMap::new()),
///     ":root{background-color: red;}\
///      .has-ink-color{color: #111 !important;}\
///      .has-ink-background-color{background-color: #111 !important;}\
///      .has-ink-border-color{border-color: #111 !important;}"
/// );
/// ```
pub fn render_styles(tree: &StyleTree, selectors: &BlockSelectorMap) -> String {
    render_styles_with(tree, selectors, &RenderOptions::default())
}

/// Renders style rules, choosing preset utility classes from `options`.
pub fn render_styles_with(
    tree: &StyleTree,
    selectors: &BlockSelectorMap,
    options: &RenderOptions,
) -> String {
    let mut css = String::new();
    for node in extract_style_nodes(tree, selectors) {
        Ruleset::new(node.selector, style_declarations(&node.styles)).write_to(&mut css);
    }

    match options.preset_classes {
        PresetClasses::RootPalette => {
            for preset in tree.settings.settings.palette() {
                let color = preset.color.to_string();
                for (suffix, property) in PresetKind::Color.classes() {
                    utility_class("", &preset.slug, suffix, property, &color).write_to(&mut css);
                }
            }
        }
        PresetClasses::All => {
            for node in extract_settings_nodes(tree, selectors) {
                write_scope_classes(&node, &mut css);
            }
        }
        PresetClasses::None => {}
    }
    css
}

fn write_scope_classes(node: &SettingsNode, css: &mut String) {
    let scope = if node.selector == ROOT_SELECTOR {
        ""
    } else {
        node.selector.as_str()
    };
    for preset in node.presets.presets() {
        for (suffix, property) in preset.kind.classes() {
            utility_class(scope, preset.slug, suffix, property, &preset.value).write_to(css);
        }
    }
}

fn utility_class(scope: &str, slug: &str, suffix: &str, property: &str, value: &str) -> Ruleset {
    let class = format!(".has-{}-{}", slug, suffix);
    let selector = if scope.is_empty() {
        class
    } else {
        compound(scope, &class)
    };
    Ruleset::new(selector, vec![Declaration::new(property, value).important()])
}

/// The two style texts an editor injects for a global styles tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GlobalStylesheet {
    pub custom_properties: String,
    pub styles: String,
}

impl GlobalStylesheet {
    /// Both texts, custom properties first.
    pub fn to_css(&self) -> String {
        format!("{}{}", self.custom_properties, self.styles)
    }
}

/// Renders custom properties and style rules in one call.
pub fn render_global_styles(
    tree: &StyleTree,
    selectors: &BlockSelectorMap,
    options: &RenderOptions,
) -> GlobalStylesheet {
    GlobalStylesheet {
        custom_properties: render_custom_properties(tree, selectors),
        styles: render_styles_with(tree, selectors, options),
    }
}
