// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Parsing of the labeled text form produced by the `Display` impls
//! (`"P=1.000000 Y=2.000000 R=3.000000"`, `"X=1.000 Y=2.000 Z=3.000"`, ...).

use thiserror::Error;

/// Error returned when parsing the text form of a math type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A required `LABEL=value` field is absent.
    #[error("missing field `{label}`")]
    MissingField {
        /// Label that was expected, including the `=`.
        label: &'static str,
    },
    /// A field (or bare matrix element) does not hold a valid float.
    #[error("field `{label}` holds an invalid number: `{text}`")]
    InvalidNumber {
        /// Label of the offending field, or `"[]"` for matrix elements.
        label: &'static str,
        /// Text that failed to parse.
        text: String,
    },
    /// A positional form held the wrong number of values.
    #[error("expected {expected} values, found {found}")]
    WrongArity {
        /// Number of values the type needs.
        expected: usize,
        /// Number of values present.
        found: usize,
    },
}

fn parse_number(label: &'static str, text: &str) -> Result<f32, ParseError> {
    text.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
        label,
        text: text.to_owned(),
    })
}

/// Reads one float per label from whitespace-separated `LABEL=value` tokens.
///
/// Labels match ASCII case-insensitively and may appear in any order; extra
/// tokens are ignored. A trailing `,` on a value is tolerated.
pub(crate) fn parse_labeled<const N: usize>(
    src: &str,
    labels: [&'static str; N],
) -> Result<[f32; N], ParseError> {
    let mut out = [0.0_f32; N];
    for (slot, label) in out.iter_mut().zip(labels) {
        let value = src
            .split_whitespace()
            .find_map(|token| {
                let head = token.get(..label.len())?;
                head.eq_ignore_ascii_case(label)
                    .then(|| &token[label.len()..])
            })
            .ok_or(ParseError::MissingField { label })?;
        *slot = parse_number(label, value.trim_end_matches(','))?;
    }
    Ok(out)
}

/// Reads `[a b c d] [e f g h] ...` into `N` floats, brackets optional.
pub(crate) fn parse_bracketed<const N: usize>(src: &str) -> Result<[f32; N], ParseError> {
    let tokens: Vec<&str> = src
        .split(|c: char| c.is_whitespace() || c == '[' || c == ']')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != N {
        return Err(ParseError::WrongArity {
            expected: N,
            found: tokens.len(),
        });
    }
    let mut out = [0.0_f32; N];
    for (slot, token) in out.iter_mut().zip(tokens) {
        *slot = parse_number("[]", token)?;
    }
    Ok(out)
}
