//! String helpers shared by the renderers.

const VARIABLE_PREFIX: &str = "var:";

/// Converts an identifier to lower kebab-case.
///
/// Words break at non-alphanumeric characters, at lower-to-upper case
/// changes, before the last capital of an acronym run (`XMLHttp` gives
/// `xml-http`), and between letters and digits.
///
/// # Example
///
/// ```rust
/// use themecss::kebab_case;
///
/// assert_eq!(kebab_case("lineHeight"), "line-height");
/// assert_eq!(kebab_case("font-primary"), "font-primary");
/// assert_eq!(kebab_case("core/button"), "core-button");
/// assert_eq!(kebab_case("h1"), "h-1");
/// ```
pub fn kebab_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if let Some(&prev) = i.checked_sub(1).and_then(|j| chars.get(j)) {
            let next = chars.get(i + 1).copied();
            let boundary = prev.is_alphanumeric()
                && ((prev.is_lowercase() && c.is_uppercase())
                    || (prev.is_alphabetic() && c.is_numeric())
                    || (prev.is_numeric() && c.is_alphabetic())
                    || (prev.is_uppercase()
                        && c.is_uppercase()
                        && next.is_some_and(char::is_lowercase)));
            if boundary {
                flush(&mut current, &mut words);
            }
        }
        current.push(c);
    }
    flush(&mut current, &mut words);

    words.join("-")
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(current.to_lowercase());
        current.clear();
    }
}

/// Compiles a style value, expanding preset references.
///
/// Values written as `var:preset|color|primary` become
/// `var(--wp--preset--color--primary)`; anything else is returned unchanged.
///
/// ```rust
/// use themecss::compile_style_value;
///
/// assert_eq!(compile_style_value("var:preset|color|primary"), "var(--wp--preset--color--primary)");
/// assert_eq!(compile_style_value("12px"), "12px");
/// ```
pub fn compile_style_value(value: &str) -> String {
    match value.strip_prefix(VARIABLE_PREFIX) {
        Some(path) => format!("var(--wp--{})", path.split('|').collect::<Vec<_>>().join("--")),
        None => value.to_string(),
    }
}

/// Formats a number the way it reads in CSS: whole floats lose their
/// fractional part (`1.0` gives `1`, `1e2` gives `100`).
pub(crate) fn format_number(number: &serde_json::Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => {
            if float == 0.0 {
                "0".to_string()
            } else {
                float.to_string()
            }
        }
        _ => number.to_string(),
    }
}
