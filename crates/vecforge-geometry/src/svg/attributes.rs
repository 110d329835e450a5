//! Attribute value parsing: transform lists, point lists, lengths and
//! `style` declarations.

use super::path_data::tokenize;
use crate::transform::Transform;
use tracing::debug;
use vecforge_core::{GeometryError, Point};

fn invalid(attribute: &str, value: &str) -> GeometryError {
    GeometryError::InvalidAttribute {
        element: String::new(),
        attribute: attribute.to_string(),
        value: value.to_string(),
    }
}

/// Parses a number list such as `"10 20,30-5"`.
fn parse_numbers(value: &str) -> Option<Vec<f64>> {
    tokenize(value)
        .iter()
        .map(|t| t.parse::<f64>().ok().filter(|v| v.is_finite()))
        .collect()
}

/// Parses a length, ignoring a trailing `px` unit.
pub fn parse_length(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_suffix("px").unwrap_or(value).trim_end();
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a `polygon` / `polyline` point list.
///
/// A trailing unpaired coordinate is dropped.
pub fn parse_points(value: &str) -> Result<Vec<Point>, GeometryError> {
    let numbers = parse_numbers(value).ok_or_else(|| invalid("points", value))?;
    if numbers.len() % 2 != 0 {
        debug!("Dropping unpaired coordinate in point list {:?}", value);
    }
    Ok(numbers
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect())
}

/// Parses a `transform` attribute into a single matrix.
///
/// Supports `matrix`, `translate`, `scale`, `rotate` (with optional
/// center), `skewX` and `skewY`. The list is read left to right and each
/// entry is appended, so the rightmost transform is applied to points
/// first.
pub fn parse_transform(value: &str) -> Result<Transform, GeometryError> {
    let mut transform = Transform::IDENTITY;
    let mut rest = value.trim();

    while !rest.is_empty() {
        let open = rest.find('(').ok_or_else(|| invalid("transform", value))?;
        let close = rest.find(')').ok_or_else(|| invalid("transform", value))?;
        if close < open {
            return Err(invalid("transform", value));
        }
        let name = rest[..open].trim();
        let args = parse_numbers(&rest[open + 1..close]).ok_or_else(|| invalid("transform", value))?;
        let t = transform_function(name, &args).ok_or_else(|| invalid("transform", value))?;
        transform = transform.append(&t);

        rest = rest[close + 1..].trim_start_matches(|c: char| c == ',' || c.is_whitespace());
    }
    Ok(transform)
}

fn transform_function(name: &str, args: &[f64]) -> Option<Transform> {
    let t = match (name, args) {
        ("matrix", &[a, b, c, d, e, f]) => Transform::from_affine(a, b, c, d, e, f),
        ("translate", &[tx]) => Transform::translation(tx, 0.0),
        ("translate", &[tx, ty]) => Transform::translation(tx, ty),
        ("scale", &[s]) => Transform::scaling(s, s),
        ("scale", &[sx, sy]) => Transform::scaling(sx, sy),
        ("rotate", &[angle]) => Transform::rotation(angle),
        ("rotate", &[angle, cx, cy]) => Transform::IDENTITY
            .translate(cx, cy)
            .rotate(angle)
            .translate(-cx, -cy),
        ("skewX", &[angle]) => Transform::from_affine(1.0, 0.0, angle.to_radians().tan(), 1.0, 0.0, 0.0),
        ("skewY", &[angle]) => Transform::from_affine(1.0, angle.to_radians().tan(), 0.0, 1.0, 0.0, 0.0),
        _ => {
            debug!("Unsupported transform {}({:?})", name, args);
            return None;
        }
    };
    Some(t)
}

/// Splits a `style` attribute into `(property, value)` declarations.
pub fn parse_style(value: &str) -> Vec<(String, String)> {
    value
        .split(';')
        .filter_map(|decl| {
            let (property, value) = decl.split_once(':')?;
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                return None;
            }
            Some((property.to_string(), value.to_string()))
        })
        .collect()
}
