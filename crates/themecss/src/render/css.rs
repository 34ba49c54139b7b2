//! CSS text primitives.

use std::fmt;

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }

    /// Marks the declaration `!important`.
    pub fn important(mut self) -> Self {
        self.important = true;
        self
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

/// A selector with its declarations, printed without whitespace:
/// `selector{a: 1;b: 2;}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl Ruleset {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Appends this ruleset to `out` unless it has no declarations.
    pub(crate) fn write_to(&self, out: &mut String) {
        if !self.is_empty() {
            out.push_str(&self.to_string());
        }
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{", self.selector)?;
        for declaration in &self.declarations {
            write!(f, "{};", declaration)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_display() {
        assert_eq!(Declaration::new("color", "red").to_string(), "color: red");
        assert_eq!(
            Declaration::new("color", "red").important().to_string(),
            "color: red !important"
        );
    }

    #[test]
    fn test_ruleset_display() {
        let rules = Ruleset::new(
            ":root",
            vec![
                Declaration::new("color", "red"),
                Declaration::new("font-size", "12px"),
            ],
        );
        assert_eq!(rules.to_string(), ":root{color: red;font-size: 12px;}");
    }

    #[test]
    fn test_empty_ruleset_not_written() {
        let mut out = String::new();
        Ruleset::new("p", Vec::new()).write_to(&mut out);
        assert!(out.is_empty());
    }
}
