//! Settings: presets and custom values.
//!
//! Presets are named, sluggable values offered to users as choices (palette
//! colors, font sizes, ...). Each preset kind is listed in [`PresetKind`] with
//! the CSS names it renders to.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use super::style::StyleValue;

/// The settings of one scope (root or block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<ColorSettings>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub typography: Option<TypographySettings>,
    /// Free-form nested values rendered as `--wp--custom--*` properties.
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom: Option<Map<String, Value>>,
    /// Categories with no CSS mapping, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Settings {
    /// Collects every preset of this scope, in [`PresetKind::ALL`] order.
    pub fn presets(&self) -> Vec<Preset<'_>> {
        let color = self.color.as_ref();
        let typography = self.typography.as_ref();

        let palette = color
            .and_then(|c| c.palette.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|p| Preset::new(PresetKind::Color, &p.slug, p.color.to_string()));
        let gradients = color
            .and_then(|c| c.gradients.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|p| Preset::new(PresetKind::Gradient, &p.slug, p.gradient.to_string()));
        let font_sizes = typography
            .and_then(|t| t.font_sizes.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|p| Preset::new(PresetKind::FontSize, &p.slug, p.size.to_string()));
        let font_families = typography
            .and_then(|t| t.font_families.as_deref())
            .unwrap_or_default()
            .iter()
            .map(|p| Preset::new(PresetKind::FontFamily, &p.slug, p.font_family.to_string()));

        palette
            .chain(gradients)
            .chain(font_sizes)
            .chain(font_families)
            .collect()
    }

    /// Returns the color palette, or an empty slice.
    pub fn palette(&self) -> &[ColorPreset] {
        self.color
            .as_ref()
            .and_then(|c| c.palette.as_deref())
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.typography.is_none()
            && self.custom.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSettings {
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub palette: Option<Vec<ColorPreset>>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub gradients: Option<Vec<GradientPreset>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_sizes: Option<Vec<FontSizePreset>>,
    #[serde(
        default,
        deserialize_with = "lenient::list",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_families: Option<Vec<FontFamilyPreset>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub slug: String,
    pub color: StyleValue,
}

impl ColorPreset {
    pub fn new(slug: impl Into<String>, color: impl Into<StyleValue>) -> Self {
        Self {
            name: None,
            slug: slug.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub slug: String,
    pub gradient: StyleValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSizePreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub slug: String,
    pub size: StyleValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontFamilyPreset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub slug: String,
    pub font_family: StyleValue,
}

/// The kinds of preset a settings scope can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    Color,
    Gradient,
    FontSize,
    FontFamily,
}

impl PresetKind {
    /// All kinds, in rendering order.
    pub const ALL: [PresetKind; 4] = [
        PresetKind::Color,
        PresetKind::Gradient,
        PresetKind::FontSize,
        PresetKind::FontFamily,
    ];

    /// The infix used in `--wp--preset--{infix}--{slug}`.
    pub fn css_var_infix(self) -> &'static str {
        match self {
            PresetKind::Color => "color",
            PresetKind::Gradient => "gradient",
            PresetKind::FontSize => "font-size",
            PresetKind::FontFamily => "font-family",
        }
    }

    /// Utility classes generated per preset, as `(class suffix, CSS property)`.
    ///
    /// | Kind | Classes |
    /// |------|---------|
    /// | Color | `.has-{slug}-color`, `.has-{slug}-background-color`, `.has-{slug}-border-color` |
    /// | Gradient | `.has-{slug}-gradient-background` |
    /// | FontSize | `.has-{slug}-font-size` |
    /// | FontFamily | none |
    pub fn classes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PresetKind::Color => &[
                ("color", "color"),
                ("background-color", "background-color"),
                ("border-color", "border-color"),
            ],
            PresetKind::Gradient => &[("gradient-background", "background")],
            PresetKind::FontSize => &[("font-size", "font-size")],
            PresetKind::FontFamily => &[],
        }
    }
}

/// A preset flattened to what rendering needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset<'a> {
    pub kind: PresetKind,
    pub slug: &'a str,
    pub value: String,
}

impl<'a> Preset<'a> {
    fn new(kind: PresetKind, slug: &'a str, value: String) -> Self {
        Self { kind, slug, value }
    }
}
