use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

use crate::{
    error::{ParseError, ParseErrorKind},
    street::{Building, Element, ElementKind, EmptyLot, Park, Street},
};

/// What to do with a token whose kind is not `b`, `p` or `e`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum UnknownTokens {
    #[default]
    Reject,
    Ignore,
}

pub fn parse_street(line: &str, unknown_tokens: UnknownTokens) -> Result<Street, ParseError> {
    let mut elements = Vec::new();
    for token in line.split_whitespace() {
        match token.parse::<Element>() {
            Ok(element) => {
                debug!("Parsed {} from `{token}`", element.kind());
                elements.push(element);
            },
            Err(ParseError { kind: ParseErrorKind::UnknownKind(_), .. }) if unknown_tokens == UnknownTokens::Ignore => {
                warn!("Ignoring token of unknown kind: {token}");
            },
            Err(e) => return Err(e),
        }
    }
    Ok(Street::new(elements))
}

impl FromStr for Element {
    type Err = ParseError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let tag = chars.next().ok_or_else(|| ParseError::new(token, ParseErrorKind::MissingSeparator))?;
        let kind = ElementKind::from_tag(tag).ok_or_else(|| ParseError::new(token, ParseErrorKind::UnknownKind(tag)))?;
        if chars.next() != Some('_') {
            return Err(ParseError::new(token, ParseErrorKind::MissingSeparator));
        }

        let params: Vec<&str> = chars.as_str().split(',').collect();
        parse_params(kind, &params).map_err(|kind| ParseError::new(token, kind))
    }
}

fn parse_params(kind: ElementKind, params: &[&str]) -> Result<Element, ParseErrorKind> {
    let element = match (kind, params) {
        (ElementKind::Building, [width, height, brick]) => Building::new(
            number("building width", width)?,
            number("building height", height)?,
            glyph("brick", brick)?,
        )?
        .into(),
        (ElementKind::Park, [width, foliage]) => Park::new(number("park width", width)?, glyph("foliage", foliage)?)?.into(),
        (ElementKind::EmptyLot, [width, trash]) => EmptyLot::new(number("lot width", width)?, trash)?.into(),
        (element, params) => {
            return Err(ParseErrorKind::ParameterCount { element, expected: arity(element), found: params.len() })
        },
    };
    Ok(element)
}

fn arity(kind: ElementKind) -> usize {
    match kind {
        ElementKind::Building => 3,
        ElementKind::Park | ElementKind::EmptyLot => 2,
    }
}

fn number(field: &'static str, value: &str) -> Result<usize, ParseErrorKind> {
    value.parse().map_err(|_| ParseErrorKind::InvalidNumber { field, value: value.to_string() })
}

fn glyph(field: &'static str, value: &str) -> Result<char, ParseErrorKind> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseErrorKind::InvalidGlyph { field, value: value.to_string() }),
    }
}
