//! # themecss - Global styles to CSS
//!
//! `themecss` turns a *global styles tree* (theme-wide and per-block style
//! properties plus settings such as color palettes and font sizes) into the
//! CSS an editor canvas needs.
//!
//! ## Concepts
//!
//! - [`StyleTree`]: the input, `{ styles, settings }`, usually read from a theme
//!   file with serde
//! - [`BlockSelectorMap`]: which CSS selector stands for each block type, and
//!   for its named elements
//! - [`StyleNode`] / [`SettingsNode`]: the tree flattened into selector-scoped
//!   records, in cascade order
//! - [`render_custom_properties`] / [`render_styles`]: the CSS text
//!
//! ## Quick Start
//!
//! ```rust
//! use themecss::{render_custom_properties, render_styles, BlockSelector, BlockSelectorMap, StyleTree};
//!
//! let tree: StyleTree = serde_json::from_str(r#"{
//!     "styles": {
//!         "blocks": { "core/quote": { "typography": { "fontStyle": "italic" } } }
//!     },
//!     "settings": {
//!         "typography": { "fontSizes": [ { "slug": "large", "size": "2rem" } ] }
//!     }
//! }"#).unwrap();
//!
//! let selectors = BlockSelectorMap::new()
//!     .add("core/quote", BlockSelector::new("blockquote"));
//!
//! assert_eq!(
//!     render_custom_properties(&tree, &selectors),
//!     ":root{--wp--preset--font-size--large: 2rem;}"
//! );
//! assert_eq!(render_styles(&tree, &selectors), "blockquote{font-style: italic;}");
//! ```
//!
//! ## Forgiving input
//!
//! Rendering never fails. Absent branches render nothing, and branches of the
//! wrong shape are dropped while deserializing (with a `tracing` warning), so a
//! partially broken theme still produces the rules it can. Use
//! [`check_stylesheet`] to read the output back when upstream data is suspect.

mod check;
mod load;
mod nodes;
mod render;
mod selectors;
mod tree;
mod util;

pub use check::{check_stylesheet, StylesheetError, StylesheetSummary};
pub use load::{load_options, load_selectors, load_tree, InputFormat, LoadError};
pub use nodes::{extract_settings_nodes, extract_style_nodes, SettingsNode, StyleNode};
pub use render::{
    render_custom_properties, render_global_styles, render_styles, render_styles_with,
    settings_declarations, style_declarations, Declaration, GlobalStylesheet, PresetClasses,
    RenderOptions, Ruleset, StyleProperty,
};
pub use selectors::{
    element_selector, BlockSelector, BlockSelectorMap, ELEMENT_SELECTORS, ROOT_SELECTOR,
};
pub use tree::{
    BlockStyles, BorderStyles, BoxSides, BoxValue, ColorPreset, ColorSettings, ColorStyles,
    Entries, FontFamilyPreset, FontSizePreset, GradientPreset, Preset, PresetKind, Settings,
    SpacingStyles, StyleProperties, StyleTree, StyleValue, TreeSettings, TreeStyles,
    TypographySettings, TypographyStyles,
};
pub use util::{compile_style_value, kebab_case};
