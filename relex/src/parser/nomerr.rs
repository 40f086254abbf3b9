//! A small `nom` error type that can carry one of our own [`ParseError`]
//! variants through the combinator machinery, so that a malformed
//! character class (bad range, class too long) produces a precise error
//! instead of a generic "parser failed here".

use crate::error::ParseError;
use nom::error::{ErrorKind, ParseError as NomParseError};

#[derive(Debug, Clone)]
pub struct PErr<'a> {
    pub input: &'a [u8],
    pub cause: Option<ParseError>,
}

impl<'a> PErr<'a> {
    pub fn failure(input: &'a [u8], cause: ParseError) -> nom::Err<Self> {
        nom::Err::Failure(PErr {
            input,
            cause: Some(cause),
        })
    }
}

impl<'a> NomParseError<&'a [u8]> for PErr<'a> {
    fn from_error_kind(input: &'a [u8], _kind: ErrorKind) -> Self {
        PErr { input, cause: None }
    }

    fn append(_input: &'a [u8], _kind: ErrorKind, other: Self) -> Self {
        other
    }
}
