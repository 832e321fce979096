//! Readers for the plain-text obstacle, robot and query files.
//!
//! - obstacle file: one obstacle per line, whitespace-separated `x,y` vertices
//! - robot file: `x,y r` (start point and clearance radius)
//! - query file: `x,y` (destination)

use std::path::Path;

use crate::error::{InputError, Result};
use crate::geometry::Polygon;
use crate::math::Point2;

/// Start point and clearance radius of the robot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Robot {
    pub position: Point2,
    pub radius: f64,
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        InputError::FileAccess {
            path: path.to_path_buf(),
            source,
        }
        .into()
    })
}

fn malformed(line: usize, reason: impl Into<String>) -> InputError {
    InputError::Malformed {
        line,
        reason: reason.into(),
    }
}

fn parse_number(token: &str, line: usize) -> Result<f64> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| malformed(line, format!("`{token}` is not a number")))?;
    if !value.is_finite() {
        return Err(malformed(line, format!("`{token}` is not finite")).into());
    }
    Ok(value)
}

fn parse_point_token(token: &str, line: usize) -> Result<Point2> {
    let Some((x, y)) = token.split_once(',') else {
        return Err(malformed(line, format!("expected `x,y`, got `{token}`")).into());
    };
    Ok(Point2::new(parse_number(x, line)?, parse_number(y, line)?))
}

/// Returns the first non-blank line with its 1-based number.
fn first_line(text: &str) -> Result<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .find(|(_, l)| !l.is_empty())
        .ok_or_else(|| malformed(1, "file is empty").into())
}

/// Parses obstacle text: one polygon per non-blank line.
///
/// # Errors
///
/// Returns `InputError::Malformed` for an unparsable token and a geometry
/// error for a degenerate polygon. Both abort the whole read.
pub fn parse_obstacles(text: &str) -> Result<Vec<Polygon>> {
    let mut obstacles = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }
        let vertices = line
            .split_whitespace()
            .map(|token| parse_point_token(token, line_no))
            .collect::<Result<Vec<_>>>()?;
        let polygon = Polygon::new(vertices)
            .map_err(|e| malformed(line_no, format!("invalid obstacle: {e}")))?;
        obstacles.push(polygon);
    }
    Ok(obstacles)
}

/// Parses robot text: `x,y r` on the first non-blank line.
///
/// # Errors
///
/// Returns `InputError::Malformed` if the line does not have that shape or
/// the radius is negative.
pub fn parse_robot(text: &str) -> Result<Robot> {
    let (line_no, line) = first_line(text)?;
    let mut tokens = line.split_whitespace();
    let (Some(point), Some(radius), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed(line_no, "expected `x,y r`").into());
    };
    let position = parse_point_token(point, line_no)?;
    let radius = parse_number(radius, line_no)?;
    if radius < 0.0 {
        return Err(malformed(line_no, format!("radius {radius} is negative")).into());
    }
    Ok(Robot { position, radius })
}

/// Parses a single `x,y` point on the first non-blank line.
///
/// # Errors
///
/// Returns `InputError::Malformed` if the line is not a single point.
pub fn parse_point(text: &str) -> Result<Point2> {
    let (line_no, line) = first_line(text)?;
    let mut tokens = line.split_whitespace();
    let (Some(point), None) = (tokens.next(), tokens.next()) else {
        return Err(malformed(line_no, "expected `x,y`").into());
    };
    parse_point_token(point, line_no)
}

/// Reads and parses an obstacle file.
///
/// # Errors
///
/// `InputError::FileAccess` if the file cannot be read; otherwise see
/// [`parse_obstacles`].
pub fn read_obstacles<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>> {
    parse_obstacles(&read_file(path.as_ref())?)
}

/// Reads and parses a robot file.
///
/// # Errors
///
/// `InputError::FileAccess` if the file cannot be read; otherwise see
/// [`parse_robot`].
pub fn read_robot<P: AsRef<Path>>(path: P) -> Result<Robot> {
    parse_robot(&read_file(path.as_ref())?)
}

/// Reads and parses a query file.
///
/// # Errors
///
/// `InputError::FileAccess` if the file cannot be read; otherwise see
/// [`parse_point`].
pub fn read_query<P: AsRef<Path>>(path: P) -> Result<Point2> {
    parse_point(&read_file(path.as_ref())?)
}
