//! Stringprops natural-language query layer.
//!
//! This crate turns free-form phrases like "palindromes longer than 10
//! characters" into a sparse [`StringFilters`] record. It is a best-effort
//! lexical extractor over a fixed set of patterns, not an NLP model:
//! unrecognized phrasing silently contributes no constraint.
//!
//! ## How extraction works
//!
//! [`parse_query`] runs an ordered list of independent rules over a
//! lowercased, trimmed copy of the query. Each rule may write one filter
//! field; a later rule that targets the same field overwrites the earlier
//! value. That overwrite order is the precedence contract: "two word
//! palindrome with 5 words" yields a word count of 5 because the numeric
//! rule runs after the literal-phrase rule.
//!
//! ## Failure mode
//!
//! Exactly one: after all rules have run, a populated `min_length` greater
//! than a populated `max_length` is a [`ParseError`]. Everything else,
//! including a query matching nothing at all, is an `Ok` result — the caller
//! decides whether an empty filter set is itself an error.

mod error;
mod filters;
mod parser;

pub use crate::error::ParseError;
pub use crate::filters::StringFilters;
pub use crate::parser::parse_query;
