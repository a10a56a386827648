use crate::error::ResolveError;
use conductor_common::protocol::Point;

/// Parse `"x, y"` into a [`Point`].
///
/// Only the first two components are read; anything after the second comma is
/// ignored.
pub fn parse_point(raw: &str) -> Result<Point, ResolveError> {
    let mut components = raw.split(',').map(str::trim);
    let mut next_coordinate = || {
        components
            .next()
            .and_then(|c| c.parse::<i32>().ok())
            .ok_or_else(|| ResolveError::MalformedPoint(raw.to_string()))
    };

    let x = next_coordinate()?;
    let y = next_coordinate()?;
    Ok(Point::new(x, y))
}
