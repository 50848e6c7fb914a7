//! Shared chumsky parser utilities for delimited value lists
//!
//! Array, list, and tree inputs are all written as a flat list of tokens
//! separated by commas, semicolons, or whitespace.

use chumsky::prelude::*;

/// Characters that separate tokens in flat input
pub const DELIMITERS: &str = ",; \t\r\n";

/// Parse any run of delimiters, including none.
pub fn delimiters<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(DELIMITERS).repeated().ignored()
}

/// Parse a single token: one or more non-delimiter characters.
pub fn token<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    none_of(DELIMITERS).repeated().at_least(1).to_slice()
}

/// Parse a whole delimited list into its raw tokens.
///
/// Leading, trailing, and repeated delimiters are allowed, so `" 1,,2 ;"`
/// yields `["1", "2"]`.
pub fn token_list<'src>() -> impl Parser<'src, &'src str, Vec<&'src str>> {
    delimiters()
        .ignore_then(token().then_ignore(delimiters()).repeated().collect())
        .then_ignore(end())
}

/// Split raw input into tokens
pub fn tokenize(input: &str) -> Vec<&str> {
    token_list().parse(input).into_result().unwrap_or_default()
}
