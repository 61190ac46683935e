//! Numeric field parsing for line-oriented geometry text.
//!
//! Directive payloads are lists of floats separated by whitespace (OBJ) or
//! commas. Splitting uses a delimiter predicate and drops empty fields, so
//! runs of separators behave like a single one.

use thiserror::Error;

/// Failure to turn a text fragment into a numeric vector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A field did not parse as a float. Names the field, its position
    /// within the fragment, and the original text.
    #[error("field {position} [{field}] of [{text}] is not a number")]
    BadFloat {
        /// The original text fragment.
        text: String,
        /// The offending field.
        field: String,
        /// Zero-based field position.
        position: usize,
    },
    /// The fragment held the wrong number of fields for a fixed-arity
    /// vector.
    #[error("[{text}] has {count} fields, expected {expected}")]
    BadArity {
        /// The original text fragment.
        text: String,
        /// Fields found.
        count: usize,
        /// Fields required.
        expected: usize,
    },
}

/// Parse a delimited list of floats, with the field count determined by the
/// input.
pub fn parse_float_list(
    text: &str,
    delimiter: impl Fn(char) -> bool,
) -> Result<Vec<f32>, ParseError> {
    let mut result = Vec::new();
    for (position, field) in text.split(delimiter).filter(|f| !f.is_empty()).enumerate() {
        let value: f32 = field.trim().parse().map_err(|_| ParseError::BadFloat {
            text: text.to_string(),
            field: field.to_string(),
            position,
        })?;
        result.push(value);
    }
    Ok(result)
}

/// Parse a delimited list of floats that must hold exactly `size` fields.
pub fn parse_float_vector(
    text: &str,
    size: usize,
    delimiter: impl Fn(char) -> bool,
) -> Result<Vec<f32>, ParseError> {
    let result = parse_float_list(text, delimiter)?;
    if result.len() != size {
        return Err(ParseError::BadArity {
            text: text.to_string(),
            count: result.len(),
            expected: size,
        });
    }
    Ok(result)
}

/// Parse a whitespace-separated float list.
pub fn parse_floats_space(text: &str) -> Result<Vec<f32>, ParseError> {
    parse_float_list(text, char::is_whitespace)
}

/// Parse a whitespace-separated 3-component vector.
pub fn parse_vector3_space(text: &str) -> Result<Vec<f32>, ParseError> {
    parse_float_vector(text, 3, char::is_whitespace)
}

/// Parse a comma-separated 3-component vector.
pub fn parse_vector3_comma(text: &str) -> Result<Vec<f32>, ParseError> {
    parse_float_vector(text, 3, |c| c == ',')
}
