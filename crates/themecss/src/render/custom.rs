//! Custom property declarations for presets and `custom` settings.

use serde_json::{Map, Value};

use super::css::Declaration;
use crate::tree::Settings;
use crate::util::{format_number, kebab_case};

const PRESET_PREFIX: &str = "--wp--preset--";
const CUSTOM_PREFIX: &str = "--wp--custom--";
const PATH_SEPARATOR: &str = "--";

/// Builds the custom property declarations of one settings scope.
///
/// Presets come first (`--wp--preset--{infix}--{slug}`), then the flattened
/// `custom` tree (`--wp--custom--{path}`).
pub fn settings_declarations(settings: &Settings) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = settings
        .presets()
        .into_iter()
        .map(|preset| {
            Declaration::new(
                format!(
                    "{}{}--{}",
                    PRESET_PREFIX,
                    preset.kind.css_var_infix(),
                    preset.slug
                ),
                preset.value,
            )
        })
        .collect();

    if let Some(custom) = &settings.custom {
        flatten_custom(custom, CUSTOM_PREFIX, &mut out);
    }
    out
}

fn flatten_custom(map: &Map<String, Value>, prefix: &str, out: &mut Vec<Declaration>) {
    for (key, value) in map {
        flatten_value(&format!("{}{}", prefix, kebab_case(key)), value, out);
    }
}

fn flatten_value(name: &str, value: &Value, out: &mut Vec<Declaration>) {
    match value {
        Value::Object(map) => flatten_custom(map, &format!("{}{}", name, PATH_SEPARATOR), out),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(&format!("{}{}{}", name, PATH_SEPARATOR, index), item, out);
            }
        }
        Value::Null => tracing::debug!(property = name, "skipping null custom value"),
        Value::String(text) => out.push(Declaration::new(name, text.as_str())),
        Value::Number(number) => out.push(Declaration::new(name, format_number(number))),
        Value::Bool(flag) => out.push(Declaration::new(name, flag.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: Value) -> Vec<String> {
        let settings: Settings = serde_json::from_value(value).unwrap();
        settings_declarations(&settings)
            .iter()
            .map(|d| d.to_string())
            .collect()
    }

    #[test]
    fn test_palette_and_custom() {
        assert_eq!(
            render(json!({
                "color": {
                    "palette": [
                        { "name": "White", "slug": "white", "color": "white" },
                        { "name": "Black", "slug": "black", "color": "black" }
                    ]
                },
                "custom": {
                    "font-primary": "value",
                    "line-height": { "body": 1.7, "heading": 1.3 }
                }
            })),
            vec![
                "--wp--preset--color--white: white",
                "--wp--preset--color--black: black",
                "--wp--custom--font-primary: value",
                "--wp--custom--line-height--body: 1.7",
                "--wp--custom--line-height--heading: 1.3",
            ]
        );
    }

    #[test]
    fn test_font_sizes_use_font_size_infix() {
        assert_eq!(
            render(json!({
                "typography": {
                    "fontSizes": [ { "slug": "small", "size": "12px" } ],
                    "fontFamilies": [ { "slug": "mono", "fontFamily": "monospace" } ]
                }
            })),
            vec![
                "--wp--preset--font-size--small: 12px",
                "--wp--preset--font-family--mono: monospace"
            ]
        );
    }

    #[test]
    fn test_custom_keys_kebab_cased() {
        assert_eq!(
            render(json!({ "custom": { "spacingScale": { "baseUnit": "4px" } } })),
            vec!["--wp--custom--spacing-scale--base-unit: 4px"]
        );
    }

    #[test]
    fn test_custom_arrays_and_scalars() {
        assert_eq!(
            render(json!({ "custom": { "stack": ["a", "b"], "flag": true, "gone": null } })),
            vec![
                "--wp--custom--stack--0: a",
                "--wp--custom--stack--1: b",
                "--wp--custom--flag: true"
            ]
        );
    }

    #[test]
    fn test_custom_whole_floats_print_as_integers() {
        assert_eq!(
            render(json!({ "custom": { "lh": 1.0, "big": 1e2, "ratio": 1.25 } })),
            vec![
                "--wp--custom--lh: 1",
                "--wp--custom--big: 100",
                "--wp--custom--ratio: 1.25"
            ]
        );
    }

    #[test]
    fn test_empty_settings() {
        assert!(render(json!({})).is_empty());
    }
}
