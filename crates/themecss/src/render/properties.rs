//! Mapping from style property groups to CSS declarations.

use super::css::Declaration;
use crate::tree::{BoxValue, StyleProperties, StyleValue};
use crate::util::compile_style_value;

/// A CSS property the renderer knows how to read from [`StyleProperties`].
///
/// The variant order in [`StyleProperty::ALL`] is the order declarations are
/// emitted within a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Background,
    BackgroundColor,
    BorderColor,
    BorderRadius,
    BorderStyle,
    BorderWidth,
    Color,
    FontFamily,
    FontSize,
    FontStyle,
    FontWeight,
    LineHeight,
    Margin,
    Padding,
    TextDecoration,
    TextTransform,
    LetterSpacing,
}

/// Where a property's value lives in the tree.
enum Source<'a> {
    Value(&'a StyleValue),
    Box(&'a BoxValue),
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 17] = [
        StyleProperty::Background,
        StyleProperty::BackgroundColor,
        StyleProperty::BorderColor,
        StyleProperty::BorderRadius,
        StyleProperty::BorderStyle,
        StyleProperty::BorderWidth,
        StyleProperty::Color,
        StyleProperty::FontFamily,
        StyleProperty::FontSize,
        StyleProperty::FontStyle,
        StyleProperty::FontWeight,
        StyleProperty::LineHeight,
        StyleProperty::Margin,
        StyleProperty::Padding,
        StyleProperty::TextDecoration,
        StyleProperty::TextTransform,
        StyleProperty::LetterSpacing,
    ];

    pub fn css_name(self) -> &'static str {
        match self {
            StyleProperty::Background => "background",
            StyleProperty::BackgroundColor => "background-color",
            StyleProperty::BorderColor => "border-color",
            StyleProperty::BorderRadius => "border-radius",
            StyleProperty::BorderStyle => "border-style",
            StyleProperty::BorderWidth => "border-width",
            StyleProperty::Color => "color",
            StyleProperty::FontFamily => "font-family",
            StyleProperty::FontSize => "font-size",
            StyleProperty::FontStyle => "font-style",
            StyleProperty::FontWeight => "font-weight",
            StyleProperty::LineHeight => "line-height",
            StyleProperty::Margin => "margin",
            StyleProperty::Padding => "padding",
            StyleProperty::TextDecoration => "text-decoration",
            StyleProperty::TextTransform => "text-transform",
            StyleProperty::LetterSpacing => "letter-spacing",
        }
    }

    fn source(self, props: &StyleProperties) -> Option<Source<'_>> {
        let color = props.color.as_ref();
        let typography = props.typography.as_ref();
        let border = props.border.as_ref();
        let spacing = props.spacing.as_ref();

        let value = match self {
            StyleProperty::Background => color.and_then(|c| c.gradient.as_ref()),
            StyleProperty::BackgroundColor => color.and_then(|c| c.background.as_ref()),
            StyleProperty::BorderColor => border.and_then(|b| b.color.as_ref()),
            StyleProperty::BorderRadius => border.and_then(|b| b.radius.as_ref()),
            StyleProperty::BorderStyle => border.and_then(|b| b.style.as_ref()),
            StyleProperty::BorderWidth => border.and_then(|b| b.width.as_ref()),
            StyleProperty::Color => color.and_then(|c| c.text.as_ref()),
            StyleProperty::FontFamily => typography.and_then(|t| t.font_family.as_ref()),
            StyleProperty::FontSize => typography.and_then(|t| t.font_size.as_ref()),
            StyleProperty::FontStyle => typography.and_then(|t| t.font_style.as_ref()),
            StyleProperty::FontWeight => typography.and_then(|t| t.font_weight.as_ref()),
            StyleProperty::LineHeight => typography.and_then(|t| t.line_height.as_ref()),
            StyleProperty::TextDecoration => typography.and_then(|t| t.text_decoration.as_ref()),
            StyleProperty::TextTransform => typography.and_then(|t| t.text_transform.as_ref()),
            StyleProperty::LetterSpacing => typography.and_then(|t| t.letter_spacing.as_ref()),
            StyleProperty::Margin => {
                return spacing.and_then(|s| s.margin.as_ref()).map(Source::Box);
            }
            StyleProperty::Padding => {
                return spacing.and_then(|s| s.padding.as_ref()).map(Source::Box);
            }
        };
        value.map(Source::Value)
    }

    /// Appends this property's declarations for `props` to `out`.
    fn push_declarations(self, props: &StyleProperties, out: &mut Vec<Declaration>) {
        match self.source(props) {
            Some(Source::Value(value)) => push_value(self.css_name(), value, out),
            Some(Source::Box(BoxValue::Uniform(value))) => push_value(self.css_name(), value, out),
            Some(Source::Box(BoxValue::Sides(sides))) => {
                for (side, value) in sides.iter() {
                    push_value(&format!("{}-{}", self.css_name(), side), value, out);
                }
            }
            None => {}
        }
    }
}

fn push_value(property: &str, value: &StyleValue, out: &mut Vec<Declaration>) {
    if value.is_present() {
        out.push(Declaration::new(
            property,
            compile_style_value(&value.to_string()),
        ));
    }
}

/// Builds the declarations for one scope's properties, in table order.
///
/// Groups and keys without a mapping are ignored.
pub fn style_declarations(props: &StyleProperties) -> Vec<Declaration> {
    let mut out = Vec::new();
    for property in StyleProperty::ALL {
        property.push_declarations(props, &mut out);
    }
    out
}
