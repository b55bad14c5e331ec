//! Validation of raw user input before it reaches the store.
//!
//! The presentation layer hands over whatever the user typed. These functions
//! turn it into typed values or an [`Error::InvalidInput`] whose message can be
//! shown as-is.

use crate::error::{Error, Result};
use crate::types::Position;

/// Validate a location name.
///
/// Leading and trailing whitespace is trimmed; the result must be non-empty.
pub fn validate_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(Error::invalid("location name cannot be empty"));
    }
    Ok(name.to_string())
}

/// Parse a coordinate value for the given axis label (`"x"` or `"y"`).
pub fn parse_coordinate(raw: &str, axis: &str) -> Result<f64> {
    parse_number(raw)
        .ok_or_else(|| Error::invalid(format!("{axis} coordinate must be a number, got '{raw}'")))
}

/// Parse an `x` / `y` pair into a position.
pub fn parse_position(raw_x: &str, raw_y: &str) -> Result<Position> {
    Ok(Position::new(
        parse_coordinate(raw_x, "x")?,
        parse_coordinate(raw_y, "y")?,
    ))
}

/// Parse a point written as `X,Y`.
pub fn parse_point(raw: &str) -> Result<Position> {
    let Some((x, y)) = raw.split_once(',') else {
        return Err(Error::invalid(format!(
            "point must be written as X,Y, got '{raw}'"
        )));
    };
    parse_position(x, y)
}

/// Parse a road weight.
pub fn parse_weight(raw: &str) -> Result<f64> {
    let weight = parse_number(raw)
        .ok_or_else(|| Error::invalid(format!("weight must be a number, got '{raw}'")))?;
    validate_weight(weight)
}

/// Check an already-numeric weight.
///
/// Shortest paths are only meaningful for non-negative weights, so negative
/// values are rejected here rather than in the store.
pub fn validate_weight(weight: f64) -> Result<f64> {
    if !weight.is_finite() {
        return Err(Error::invalid(format!("weight must be finite, got {weight}")));
    }
    if weight < 0.0 {
        return Err(Error::invalid(format!(
            "weight cannot be negative, got {weight}"
        )));
    }
    Ok(weight)
}

/// Check that both coordinates of a position are finite.
pub fn validate_position(position: Position) -> Result<Position> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(position)
    } else {
        Err(Error::invalid(format!(
            "coordinates must be finite, got {position}"
        )))
    }
}

/// Parse a finite number, ignoring surrounding whitespace.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
