//! The closed set of error messages the engine can produce.

use thiserror::Error;

/// What went wrong, without the position.
///
/// Message text is part of the format's compatibility surface: tooling
/// matches on these strings, so new variants may be added but existing
/// wording must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Header
    #[error("Missing version marker")]
    MissingVersionMarker,
    // The digits as written, so versions beyond u32 still report faithfully
    #[error("Unsupported version {0}")]
    UnsupportedVersion(String),

    // Grammar mismatches. `expected` is a description ("identifier",
    // "unpick item", "'.'"), `found` is the offending token's source text.
    #[error("Expected {expected} before '{found}' token")]
    Expected { expected: String, found: String },
    #[error("Unexpected character '{0}'")]
    UnexpectedChar(char),

    // Group and method attribute validation
    #[error("Duplicate @{0} attribute")]
    DuplicateAttribute(&'static str),
    #[error("Unknown attribute '@{0}'")]
    UnknownAttribute(String),
    #[error("Cannot use @flags on a default group")]
    FlagsOnDefaultGroup,
    #[error("Cannot use @flags on a group of type {0}")]
    FlagsOnDataType(&'static str),
    #[error("Specified parameter {0} twice")]
    DuplicateParameter(u32),
    #[error("Specified return group twice")]
    DuplicateReturnGroup,
    #[error("Invalid constant type for {0} group")]
    ConstantTypeMismatch(&'static str),
    #[error("target_annotation requires version 4")]
    TargetAnnotationVersion,

    // Numeric literals
    #[error("Integer out of bounds")]
    IntegerOutOfBounds,
    #[error("Long out of bounds")]
    LongOutOfBounds,
    #[error("Float out of bounds")]
    FloatOutOfBounds,
    #[error("Double out of bounds")]
    DoubleOutOfBounds,
    #[error("Missing digits in {0} literal")]
    MissingDigits(&'static str),
    #[error("Missing whole part of floating point literal")]
    MissingWholePart,
    #[error("Missing fractional part of floating point literal")]
    MissingFracPart,
    #[error("Missing exponent of floating point literal")]
    MissingExponent,

    // Char and string literals
    #[error("No character in char literal")]
    EmptyCharLiteral,
    #[error("Multiple characters in char literal")]
    MultiCharLiteral,
    #[error("Unexpected end of string")]
    UnterminatedString,
    #[error("Invalid escape sequence '\\{0}'")]
    InvalidEscape(char),
    #[error("Invalid unicode escape")]
    InvalidUnicodeEscape,

    // Descriptors
    #[error("Illegal character in descriptor: {0}")]
    IllegalDescriptorChar(char),
    #[error("Unexpected end of descriptor")]
    UnexpectedEndOfDescriptor,
}
