//! SVG path data (`d` attribute) parsing.

use super::arc::arc_to_curves;
use crate::bezier::quad_to_cubic;
use crate::element::PathElement;
use crate::path::Path;
use tracing::{debug, trace};
use vecforge_core::{GeometryError, Point};

/// Parses SVG path data into an unpainted [`Path`].
///
/// Supports `M L H V C S Q T A Z` in absolute and relative form, implicit
/// command repetition, and the compact number forms found in exported
/// files (`10-5`, `1.5.5`, arc flags written as `013`).
pub fn parse_path_data(data: &str) -> Result<Path, GeometryError> {
    let elements = PathDataParser::new(data).parse()?;
    trace!("Parsed {} path elements", elements.len());
    Ok(Path::from_elements(elements))
}

/// Splits path data into command letters and number strings.
///
/// Splits on commas and whitespace, before a sign unless it follows an
/// exponent marker, and before a second decimal point in the same number.
pub(crate) fn tokenize(data: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current_token = String::new();

    for ch in data.chars() {
        match ch {
            'M' | 'm' | 'L' | 'l' | 'H' | 'h' | 'V' | 'v' | 'C' | 'c' | 'S' | 's' | 'Q' | 'q'
            | 'T' | 't' | 'A' | 'a' | 'Z' | 'z' => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
                tokens.push(ch.to_string());
            }
            c if c == ',' || c.is_whitespace() => {
                if !current_token.is_empty() {
                    tokens.push(std::mem::take(&mut current_token));
                }
            }
            '-' | '+' => {
                // Keep the sign of an exponent.
                if current_token.is_empty()
                    || matches!(current_token.chars().last(), Some('e' | 'E'))
                {
                    current_token.push(ch);
                } else {
                    tokens.push(std::mem::take(&mut current_token));
                    current_token.push(ch);
                }
            }
            '.' => {
                if current_token.contains('.') && !current_token.contains(['e', 'E']) {
                    tokens.push(std::mem::take(&mut current_token));
                }
                current_token.push(ch);
            }
            _ => current_token.push(ch),
        }
    }

    if !current_token.is_empty() {
        tokens.push(current_token);
    }

    tokens
}

fn is_command_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

struct PathDataParser {
    tokens: Vec<String>,
    pos: usize,
    current: Point,
    start: Point,
    control: Point,
    previous_command: Option<char>,
    elements: Vec<PathElement>,
}

impl PathDataParser {
    fn new(data: &str) -> Self {
        Self {
            tokens: tokenize(data),
            pos: 0,
            current: Point::ZERO,
            start: Point::ZERO,
            control: Point::ZERO,
            previous_command: None,
            elements: Vec::new(),
        }
    }

    fn is_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn is_command_or_end(&self) -> bool {
        self.tokens
            .get(self.pos)
            .map_or(true, |t| is_command_token(t))
    }

    fn scalar(&mut self) -> Result<f64, GeometryError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Err(GeometryError::malformed(
                self.pos,
                "",
                "unexpected end of path data",
            ));
        };
        let value = token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GeometryError::malformed(self.pos, token.as_str(), "expected a number"))?;
        self.pos += 1;
        Ok(value)
    }

    /// Reads an arc flag. A flag may be glued to the next number (`013`),
    /// in which case the rest of the token is left for the next read.
    fn flag(&mut self) -> Result<bool, GeometryError> {
        let Some(token) = self.tokens.get(self.pos) else {
            return Err(GeometryError::malformed(
                self.pos,
                "",
                "unexpected end of path data",
            ));
        };
        let flag = match token.chars().next() {
            Some('0') => false,
            Some('1') => true,
            _ => {
                return Err(GeometryError::malformed(
                    self.pos,
                    token.as_str(),
                    "expected an arc flag",
                ))
            }
        };
        if token.len() > 1 {
            let rest = token[1..].to_string();
            self.tokens[self.pos] = rest;
        } else {
            self.pos += 1;
        }
        Ok(flag)
    }

    fn point(&mut self, relative: bool) -> Result<Point, GeometryError> {
        let x = self.scalar()?;
        let y = self.scalar()?;
        Ok(if relative {
            Point::new(self.current.x + x, self.current.y + y)
        } else {
            Point::new(x, y)
        })
    }

    /// The first control point of a smooth curve.
    fn reflected_control(&self) -> Point {
        match self.previous_command {
            Some('C' | 'S' | 'Q' | 'T') => self.control.reflect_through(self.current),
            _ => self.current,
        }
    }

    fn require_arguments(&self, position: usize, command: char) -> Result<(), GeometryError> {
        if self.is_command_or_end() {
            return Err(GeometryError::malformed(
                position,
                command.to_string(),
                "missing arguments",
            ));
        }
        Ok(())
    }

    fn parse(mut self) -> Result<Vec<PathElement>, GeometryError> {
        while !self.is_end() {
            let position = self.pos;
            let token = &self.tokens[position];
            if !is_command_token(token) {
                return Err(GeometryError::malformed(
                    position,
                    token.as_str(),
                    "expected a command",
                ));
            }
            let Some(command) = token.chars().next() else {
                break;
            };
            self.pos += 1;
            let relative = command.is_ascii_lowercase();

            match command.to_ascii_uppercase() {
                'M' => {
                    let p = self.point(relative)?;
                    self.elements.push(PathElement::MoveTo { point: p });
                    self.current = p;
                    self.start = p;
                    self.previous_command = Some('M');
                    // Extra pairs are implicit line-tos.
                    while !self.is_command_or_end() {
                        let p = self.point(relative)?;
                        self.elements.push(PathElement::LineTo { point: p });
                        self.current = p;
                        self.previous_command = Some('L');
                    }
                }
                'L' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let p = self.point(relative)?;
                        self.elements.push(PathElement::LineTo { point: p });
                        self.current = p;
                        self.previous_command = Some('L');
                    }
                }
                'H' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let x = self.scalar()?;
                        let x = if relative { self.current.x + x } else { x };
                        self.current = Point::new(x, self.current.y);
                        self.elements.push(PathElement::LineTo {
                            point: self.current,
                        });
                        self.previous_command = Some('H');
                    }
                }
                'V' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let y = self.scalar()?;
                        let y = if relative { self.current.y + y } else { y };
                        self.current = Point::new(self.current.x, y);
                        self.elements.push(PathElement::LineTo {
                            point: self.current,
                        });
                        self.previous_command = Some('V');
                    }
                }
                'C' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let ctrl1 = self.point(relative)?;
                        let ctrl2 = self.point(relative)?;
                        let point = self.point(relative)?;
                        self.elements.push(PathElement::CurveTo {
                            ctrl1,
                            ctrl2,
                            point,
                        });
                        self.control = ctrl2;
                        self.current = point;
                        self.previous_command = Some('C');
                    }
                }
                'S' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let ctrl1 = self.reflected_control();
                        let ctrl2 = self.point(relative)?;
                        let point = self.point(relative)?;
                        self.elements.push(PathElement::CurveTo {
                            ctrl1,
                            ctrl2,
                            point,
                        });
                        self.control = ctrl2;
                        self.current = point;
                        self.previous_command = Some('S');
                    }
                }
                'Q' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let from = self.current;
                        let q = self.point(relative)?;
                        let point = self.point(relative)?;
                        let (ctrl1, ctrl2) = quad_to_cubic(from, q, point);
                        self.elements.push(PathElement::CurveTo {
                            ctrl1,
                            ctrl2,
                            point,
                        });
                        self.control = q;
                        self.current = point;
                        self.previous_command = Some('Q');
                    }
                }
                'T' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let from = self.current;
                        let q = self.reflected_control();
                        let point = self.point(relative)?;
                        let (ctrl1, ctrl2) = quad_to_cubic(from, q, point);
                        self.elements.push(PathElement::CurveTo {
                            ctrl1,
                            ctrl2,
                            point,
                        });
                        self.control = q;
                        self.current = point;
                        self.previous_command = Some('T');
                    }
                }
                'A' => {
                    self.require_arguments(position, command)?;
                    while !self.is_command_or_end() {
                        let rx = self.scalar()?;
                        let ry = self.scalar()?;
                        let rotation = self.scalar()?;
                        let large_arc = self.flag()?;
                        let sweep = self.flag()?;
                        let point = self.point(relative)?;
                        if point == self.current {
                            debug!("Skipping arc with identical endpoints at {}", point);
                        } else {
                            self.elements.extend(arc_to_curves(
                                self.current,
                                point,
                                rx,
                                ry,
                                rotation,
                                large_arc,
                                sweep,
                            ));
                        }
                        self.current = point;
                        self.previous_command = Some('A');
                    }
                }
                'Z' => {
                    self.elements.push(PathElement::Close);
                    self.current = self.start;
                    self.previous_command = Some('Z');
                }
                _ => {
                    return Err(GeometryError::malformed(
                        position,
                        command.to_string(),
                        "unknown command",
                    ))
                }
            }
        }
        Ok(self.elements)
    }
}
