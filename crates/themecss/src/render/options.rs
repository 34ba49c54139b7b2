//! Render configuration.

use serde::{Deserialize, Serialize};

/// Which preset utility classes `render_styles_with` appends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetClasses {
    /// `.has-{slug}-color`, `-background-color` and `-border-color` for each
    /// root palette entry.
    #[default]
    RootPalette,
    /// Classes for every preset kind, in every settings scope. Block scopes
    /// compound the class onto the block selector.
    All,
    /// No utility classes.
    None,
}

/// Options for rendering style rules.
///
/// # Example
///
/// ```rust
/// use themecss::{PresetClasses, RenderOptions};
///
/// let options: RenderOptions = serde_yaml::from_str("preset-classes: all").unwrap();
/// assert_eq!(options.preset_classes, PresetClasses::All);
/// assert_eq!(RenderOptions::default().preset_classes, PresetClasses::RootPalette);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RenderOptions {
    pub preset_classes: PresetClasses,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preset class mode, returning the updated options for chaining.
    pub fn preset_classes(mut self, mode: PresetClasses) -> Self {
        self.preset_classes = mode;
        self
    }
}
