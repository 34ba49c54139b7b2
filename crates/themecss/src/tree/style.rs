//! Style property groups.
//!
//! Properties are grouped the way theme files write them (`color.text`,
//! `typography.fontSize`, ...). Known groups are typed so the mapping to CSS
//! property names in [`crate::render`] stays exhaustive; anything else lands
//! in [`StyleProperties::extra`] and is carried along without being rendered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;
use crate::util::format_number;

/// A single style value as written in a theme file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl StyleValue {
    /// Returns `false` for values that produce no declaration: empty text and
    /// `false`.
    pub fn is_present(&self) -> bool {
        match self {
            StyleValue::Text(text) => !text.is_empty(),
            StyleValue::Number(_) => true,
            StyleValue::Flag(flag) => *flag,
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Number(number) => f.write_str(&format_number(number)),
            StyleValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<i64> for StyleValue {
    fn from(number: i64) -> Self {
        StyleValue::Number(number.into())
    }
}

/// The property groups of one style scope (root, element, or block).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleProperties {
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<ColorStyles>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub typography: Option<TypographyStyles>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub spacing: Option<SpacingStyles>,
    #[serde(
        default,
        deserialize_with = "lenient::value",
        skip_serializing_if = "Option::is_none"
    )]
    pub border: Option<BorderStyles>,
    /// Groups with no CSS mapping, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleProperties {
    /// Returns `true` if no group is set, known or unknown.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.typography.is_none()
            && self.spacing.is_none()
            && self.border.is_none()
            && self.extra.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<StyleValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_decoration: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<StyleValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<BoxValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<BoxValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A box-model value: either one shorthand value or per-side values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoxValue {
    Uniform(StyleValue),
    Sides(BoxSides),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxSides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<StyleValue>,
}

impl BoxSides {
    /// Iterates set sides in `top, right, bottom, left` order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ]
        .into_iter()
        .filter_map(|(side, value)| value.as_ref().map(|v| (side, v)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<StyleValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_style_properties_typed_groups() {
        let props: StyleProperties = serde_json::from_value(json!({
            "color": { "text": "red", "background": "blue" },
            "typography": { "fontSize": "42px", "lineHeight": 1.5 }
        }))
        .unwrap();

        let color = props.color.unwrap();
        assert_eq!(color.text, Some(StyleValue::from("red")));
        assert_eq!(color.background, Some(StyleValue::from("blue")));
        let typography = props.typography.unwrap();
        assert_eq!(typography.font_size, Some(StyleValue::from("42px")));
        assert_eq!(typography.line_height.unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_style_properties_unknown_group_passthrough() {
        let props: StyleProperties = serde_json::from_value(json!({
            "shadow": { "depth": 3 }
        }))
        .unwrap();
        assert!(props.color.is_none());
        assert_eq!(props.extra.get("shadow"), Some(&json!({ "depth": 3 })));
        assert!(!props.is_empty());
    }

    #[test]
    fn test_style_properties_malformed_group_dropped() {
        let props: StyleProperties = serde_json::from_value(json!({
            "color": "red",
            "typography": { "fontSize": "10px" }
        }))
        .unwrap();
        assert!(props.color.is_none());
        assert!(props.typography.is_some());
    }

    #[test]
    fn test_box_value_forms() {
        let uniform: BoxValue = serde_json::from_value(json!("1em")).unwrap();
        assert_eq!(uniform, BoxValue::Uniform(StyleValue::from("1em")));

        let sides: BoxValue = serde_json::from_value(json!({ "top": "1px", "left": "2px" })).unwrap();
        match sides {
            BoxValue::Sides(sides) => {
                let set: Vec<_> = sides.iter().map(|(side, v)| (side, v.to_string())).collect();
                assert_eq!(set, vec![("top", "1px".to_string()), ("left", "2px".to_string())]);
            }
            other => panic!("expected sides, got {:?}", other),
        }
    }

    #[test]
    fn test_style_value_whole_float_display() {
        let props: StyleProperties = serde_json::from_value(json!({
            "typography": { "lineHeight": 2.0, "fontWeight": 700 }
        }))
        .unwrap();
        let typography = props.typography.unwrap();
        assert_eq!(typography.line_height.unwrap().to_string(), "2");
        assert_eq!(typography.font_weight.unwrap().to_string(), "700");
    }

    #[test]
    fn test_style_value_presence() {
        assert!(StyleValue::from("x").is_present());
        assert!(!StyleValue::from("").is_present());
        assert!(StyleValue::from(0_i64).is_present());
        assert!(!StyleValue::Flag(false).is_present());
    }

    #[test]
    fn test_style_properties_roundtrip_keeps_camel_case() {
        let input = json!({ "typography": { "fontSize": "12px" } });
        let props: StyleProperties = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&props).unwrap(), input);
    }
}
