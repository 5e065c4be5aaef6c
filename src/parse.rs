//! Parse vector literals such as `(1, 2.5, -3)`.
//!
//! A literal is a parenthesized, comma-separated list of numbers; `()` is the
//! empty vector. Lists of literals may be separated by commas or whitespace.

use miette::NamedSource;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::ParseError;
use crate::vector::Vector;

#[derive(Parser)]
#[grammar = "vector.pest"]
struct VectorParser;

const SOURCE_NAME: &str = "<input>";

/// Parse a single vector literal.
pub fn parse_vector(source: &str) -> Result<Vector, ParseError> {
    let pairs = VectorParser::parse(Rule::vector_literal, source)
        .map_err(|e| syntax_error(source, e))?;

    let mut vectors = collect_vectors(source, pairs)?;
    match vectors.pop() {
        Some(v) if vectors.is_empty() => Ok(v),
        _ => Err(ParseError::Syntax {
            message: "expected exactly one vector".to_string(),
            src: NamedSource::new(SOURCE_NAME, source.to_string()),
            span: (0, source.len()).into(),
        }),
    }
}

/// Parse any number of vector literals, e.g. `(1, 2) (3, 4), (5, 6)`.
pub fn parse_vectors(source: &str) -> Result<Vec<Vector>, ParseError> {
    let pairs = VectorParser::parse(Rule::vector_list, source)
        .map_err(|e| syntax_error(source, e))?;
    collect_vectors(source, pairs)
}

fn collect_vectors(
    source: &str,
    pairs: pest::iterators::Pairs<'_, Rule>,
) -> Result<Vec<Vector>, ParseError> {
    pairs
        .filter(|pair| pair.as_rule() == Rule::vector)
        .map(|pair| build_vector(source, pair))
        .collect()
}

fn build_vector(source: &str, pair: Pair<'_, Rule>) -> Result<Vector, ParseError> {
    // vector -> components? -> number*
    pair.into_inner()
        .flat_map(|components| components.into_inner())
        .map(|number| parse_number(source, number))
        .collect::<Result<Vec<f64>, _>>()
        .map(Vector::new)
}

fn parse_number(source: &str, pair: Pair<'_, Rule>) -> Result<f64, ParseError> {
    let span = pair.as_span();
    let label = (span.start(), span.end() - span.start());
    match pair.as_str().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(ParseError::InvalidNumber {
            src: NamedSource::new(SOURCE_NAME, source.to_string()),
            span: label.into(),
        }),
        Err(e) => Err(ParseError::Syntax {
            message: e.to_string(),
            src: NamedSource::new(SOURCE_NAME, source.to_string()),
            span: label.into(),
        }),
    }
}

fn syntax_error(source: &str, err: pest::error::Error<Rule>) -> ParseError {
    let span = match err.location {
        InputLocation::Pos(pos) => (pos, 0),
        InputLocation::Span((start, end)) => (start, end - start),
    };
    ParseError::Syntax {
        message: err.variant.message().into_owned(),
        src: NamedSource::new(SOURCE_NAME, source.to_string()),
        span: span.into(),
    }
}
