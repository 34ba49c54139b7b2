//! Structural checks for rendered stylesheets.
//!
//! The renderers never fail, so the only way to notice upstream data that
//! breaks the output (a selector with a stray brace, a slug with a space) is to
//! read the CSS back. [`check_stylesheet`] tokenizes the text with `cssparser`
//! and counts what it finds.

use cssparser::{ParseError, Parser, ParserInput, SourceLocation, Token};

/// Counts from a stylesheet that passed [`check_stylesheet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StylesheetSummary {
    pub rules: usize,
    pub declarations: usize,
}

impl std::fmt::Display for StylesheetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rules, {} declarations",
            self.rules, self.declarations
        )
    }
}

/// Error returned when a stylesheet is structurally broken.
///
/// Lines and columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylesheetError {
    #[error("unexpected '}}' at line {line}, column {column}")]
    UnexpectedClose { line: u32, column: u32 },
    #[error("rule block without a selector at line {line}, column {column}")]
    MissingSelector { line: u32, column: u32 },
    #[error("selector at line {line}, column {column} has no rule block")]
    DanglingSelector { line: u32, column: u32 },
}

enum Step {
    Block,
    Close,
    EndOfStatement,
    Prelude,
}

/// Tokenizes `css` and counts its top-level rules and their declarations.
///
/// # Example
///
/// ```rust
/// use themecss::check_stylesheet;
///
/// let summary = check_stylesheet(":root{color: red;}a{color: blue;font-size: 1em;}").unwrap();
/// assert_eq!(summary.rules, 2);
/// assert_eq!(summary.declarations, 3);
///
/// assert!(check_stylesheet("a{color: red;}}").is_err());
/// ```
pub fn check_stylesheet(css: &str) -> Result<StylesheetSummary, StylesheetError> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut summary = StylesheetSummary::default();
    let mut prelude: Option<SourceLocation> = None;

    loop {
        parser.skip_whitespace();
        let location = parser.current_source_location();
        let step = match parser.next() {
            Ok(Token::CurlyBracketBlock) => Step::Block,
            Ok(Token::CloseCurlyBracket) => Step::Close,
            Ok(Token::Semicolon) => Step::EndOfStatement,
            Ok(_) => Step::Prelude,
            Err(_) => break,
        };

        match step {
            Step::Block => {
                if prelude.take().is_none() {
                    return Err(StylesheetError::MissingSelector {
                        line: location.line + 1,
                        column: location.column,
                    });
                }
                let declarations: Result<usize, ParseError<'_, ()>> =
                    parser.parse_nested_block(|block| Ok(count_declarations(block)));
                summary.rules += 1;
                summary.declarations += declarations.unwrap_or_default();
            }
            Step::Close => {
                return Err(StylesheetError::UnexpectedClose {
                    line: location.line + 1,
                    column: location.column,
                });
            }
            Step::EndOfStatement => prelude = None,
            Step::Prelude => {
                prelude.get_or_insert(location);
            }
        }
    }

    if let Some(location) = prelude {
        return Err(StylesheetError::DanglingSelector {
            line: location.line + 1,
            column: location.column,
        });
    }
    Ok(summary)
}

fn count_declarations(block: &mut Parser<'_, '_>) -> usize {
    let mut count = 0;
    let mut pending = false;
    while let Ok(token) = block.next() {
        if matches!(token, Token::Semicolon) {
            if pending {
                count += 1;
            }
            pending = false;
        } else {
            pending = true;
        }
    }
    count + usize::from(pending)
}
