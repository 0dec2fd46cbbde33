//! Tokenizer for track descriptions.
//!
//! The grammar is a flat stream of single-character tokens:
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `t`, `b`, `l`, `r` + amount | move up, down, left, right |
//! | `(` | save the cursor as a new anchor |
//! | `)` | restore the cursor to the innermost anchor and drop it |
//! | `\|` | restore the cursor to the innermost anchor, keep it |
//! | `_` | mark the waypoint under the cursor as a destination |
//! | `#` ... end of line | comment |
//!
//! An amount is either a positive decimal literal (`[0-9.]+`) or `*`.
//!
//! # Example
//!
//! ```
//! use track_parse::token::{tokenize, Amount, TokenKind};
//! use track_types::Heading;
//!
//! let tokens = tokenize("r2.5 (t*)").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(
//!     tokens[0].kind,
//!     TokenKind::Move { heading: Heading::Right, amount: Amount::Literal(2.5) }
//! );
//! assert_eq!(tokens[1].kind, TokenKind::Open);
//! ```

use track_types::{Heading, TrackError};

/// Travel distance of a move token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    /// An explicit positive distance.
    Literal(f64),
    /// Travel until the first corridor in the way (`*`).
    Wildcard,
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// `<dir><amount>`
    Move {
        /// Direction of travel.
        heading: Heading,
        /// Distance to travel.
        amount: Amount,
    },
    /// `(`
    Open,
    /// `)`
    Close,
    /// `|`
    Branch,
    /// `_`
    Mark,
}

/// A token with the byte offset it starts at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// What the token means.
    pub kind: TokenKind,
    /// Byte offset in the source text.
    pub offset: usize,
}

/// Splits a track description into tokens.
///
/// # Errors
///
/// Returns [`TrackError::Syntax`] for unknown characters, a direction without
/// an amount, malformed decimal literals, zero distances and distances too
/// large to represent.
pub fn tokenize(text: &str) -> Result<Vec<Token>, TrackError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '#' => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
                continue;
            }
            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            '|' => TokenKind::Branch,
            '_' => TokenKind::Mark,
            _ => match Heading::from_token(c) {
                Some(heading) => {
                    let start = offset + c.len_utf8();
                    let amount = if chars.next_if(|&(_, c)| c == '*').is_some() {
                        Amount::Wildcard
                    } else {
                        let mut end = start;
                        while let Some((i, d)) =
                            chars.next_if(|&(_, d)| d.is_ascii_digit() || d == '.')
                        {
                            end = i + d.len_utf8();
                        }
                        Amount::Literal(parse_literal(&text[start..end], offset)?)
                    };
                    TokenKind::Move { heading, amount }
                }
                None => {
                    return Err(TrackError::syntax(offset, format!("unknown token {c:?}")));
                }
            },
        };
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}

/// Parses the digits following a direction token.
fn parse_literal(digits: &str, offset: usize) -> Result<f64, TrackError> {
    if digits.is_empty() {
        return Err(TrackError::syntax(offset, "missing distance after direction"));
    }
    let value: f64 = digits
        .parse()
        .map_err(|_| TrackError::syntax(offset, format!("malformed distance {digits:?}")))?;
    if value <= 0.0 {
        return Err(TrackError::syntax(offset, "distance must be positive"));
    }
    if !value.is_finite() {
        return Err(TrackError::syntax(offset, "distance out of range"));
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    fn mv(heading: Heading, d: f64) -> TokenKind {
        TokenKind::Move {
            heading,
            amount: Amount::Literal(d),
        }
    }

    #[test]
    fn test_all_token_kinds() {
        assert_eq!(
            kinds("t1b2l3r4(|)_"),
            vec![
                mv(Heading::Up, 1.0),
                mv(Heading::Down, 2.0),
                mv(Heading::Left, 3.0),
                mv(Heading::Right, 4.0),
                TokenKind::Open,
                TokenKind::Branch,
                TokenKind::Close,
                TokenKind::Mark,
            ]
        );
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(
            kinds("l*"),
            vec![TokenKind::Move {
                heading: Heading::Left,
                amount: Amount::Wildcard
            }]
        );
    }

    #[test]
    fn test_decimal_and_multi_digit() {
        assert_eq!(kinds("r12.25"), vec![mv(Heading::Right, 12.25)]);
        assert_eq!(kinds("r.5"), vec![mv(Heading::Right, 0.5)]);
    }

    #[test]
    fn test_whitespace_and_comments() {
        let text = "r1 # first leg\n  t2\t# second\n_";
        assert_eq!(
            kinds(text),
            vec![mv(Heading::Right, 1.0), mv(Heading::Up, 2.0), TokenKind::Mark]
        );
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("  r10 (").unwrap();
        assert_eq!(tokens[0].offset, 2);
        assert_eq!(tokens[1].offset, 6);
    }

    #[test]
    fn test_unknown_token() {
        let err = tokenize("r1x").unwrap_err();
        assert_eq!(err, TrackError::syntax(2, "unknown token 'x'"));
    }

    #[test]
    fn test_missing_amount() {
        assert!(tokenize("r").unwrap_err().is_syntax());
        assert!(tokenize("r(t1)").unwrap_err().is_syntax());
    }

    #[test]
    fn test_malformed_amount() {
        assert!(tokenize("r1.2.3").unwrap_err().is_syntax());
        assert!(tokenize("r.").unwrap_err().is_syntax());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(tokenize("r0").unwrap_err().is_syntax());
        assert!(tokenize("t0.000").unwrap_err().is_syntax());
    }

    #[test]
    fn test_overflowing_amount_rejected() {
        let text = format!("t1 r{}", "9".repeat(400));
        let err = tokenize(&text).unwrap_err();
        assert_eq!(err, TrackError::syntax(3, "distance out of range"));
    }

    #[test]
    fn test_negative_distance_rejected() {
        let err = tokenize("r-1").unwrap_err();
        assert!(matches!(err, TrackError::Syntax { offset: 0, .. }));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("# only a comment").unwrap().is_empty());
    }
}
