//! Parsing of raw `coords` attribute strings.
//!
//! A coords attribute is a comma-separated list of integers; consecutive
//! values pair up into [`Coord`]s in declaration order. Two contracts are
//! offered:
//!
//! - [`coords`]: lenient. Whitespace is stripped, non-numeric pairs and a
//!   trailing unpaired value are dropped, and the degraded sequence is
//!   returned without error. This matches the host collaborator contract
//!   where a malformed declaration renders nothing rather than faulting.
//! - [`coords_strict`]: rejects non-numeric values and odd counts with a
//!   diagnosable error, for callers that want malformed declarations
//!   surfaced instead of silently degraded.

use log::debug;

use super::Coord;
use crate::error::MaplightError;

/// Parses a coords attribute leniently, dropping whatever does not form a
/// complete integer pair.
///
/// An empty or entirely malformed attribute yields an empty sequence.
pub fn coords(raw: &str) -> Vec<Coord> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Vec::new();
    }

    let values: Vec<Option<i32>> = cleaned
        .split(',')
        .map(|token| token.parse::<i32>().ok())
        .collect();

    let mut parsed = Vec::with_capacity(values.len() / 2);
    for pair in values.chunks(2) {
        match pair {
            [Some(x), Some(y)] => parsed.push(Coord::new(*x, *y)),
            _ => debug!("dropping incomplete coordinate pair in coords attribute '{raw}'"),
        }
    }
    parsed
}

/// Parses a coords attribute strictly.
///
/// Every value must be an integer and the count must be even. An empty
/// attribute is accepted as an empty sequence (the area simply draws
/// nothing).
pub fn coords_strict(raw: &str) -> Result<Vec<Coord>, MaplightError> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<&str> = cleaned.split(',').collect();
    if tokens.len() % 2 != 0 {
        return Err(MaplightError::CoordsParse {
            value: raw.to_string(),
            message: format!("expected an even value count, found {}", tokens.len()),
        });
    }

    let mut parsed = Vec::with_capacity(tokens.len() / 2);
    for pair in tokens.chunks(2) {
        let x = parse_value(pair[0], raw)?;
        let y = parse_value(pair[1], raw)?;
        parsed.push(Coord::new(x, y));
    }
    Ok(parsed)
}

fn parse_value(token: &str, raw: &str) -> Result<i32, MaplightError> {
    token.parse::<i32>().map_err(|_| MaplightError::CoordsParse {
        value: raw.to_string(),
        message: format!("invalid value '{token}'; expected integer"),
    })
}

/// Fuzz-only entrypoint for coords attribute parsing.
///
/// Runs both the lenient and strict parsers so the fuzzer exercises the
/// full parsing surface. The result is intentionally discarded.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_coords(raw: &str) {
    let _ = coords(raw);
    let _ = coords_strict(raw);
}
