use anyhow::{Result, ensure};
use mazesight_core::Point;

/// Canvas whose centered square shows the unit drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            "canvas must have a positive size, got {width}x{height}"
        );
        Ok(Self { width, height })
    }

    /// Side of the square the unit drawing is scaled to.
    pub fn side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Pixel offset `(x, y)` of the square's top-left corner.
    pub fn offset(&self) -> (f64, f64) {
        let side = self.side();
        ((self.width - side) / 2.0, (self.height - side) / 2.0)
    }

    pub fn to_normalized(&self, px: f64, py: f64) -> Point {
        let side = self.side();
        let (ox, oy) = self.offset();
        Point::new((py - oy) / side, (px - ox) / side)
    }
}

/// Parses `A,B` into a pair of numbers.
pub fn parse_pair(value: &str) -> Result<(f64, f64), String> {
    let (a, b) = value
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated numbers, got `{value}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|err| format!("`{part}`: {err}"))
    };
    Ok((parse(a)?, parse(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_canvas_centers_horizontally() {
        let viewport = Viewport::new(1000.0, 600.0).unwrap();

        assert_eq!(viewport.side(), 600.0);
        assert_eq!(viewport.offset(), (200.0, 0.0));
        assert_eq!(viewport.to_normalized(200.0, 0.0), Point::new(0.0, 0.0));
        assert_eq!(viewport.to_normalized(500.0, 150.0), Point::new(0.25, 0.5));
    }

    #[test]
    fn tall_canvas_centers_vertically() {
        let viewport = Viewport::new(400.0, 800.0).unwrap();

        assert_eq!(viewport.offset(), (0.0, 200.0));
        assert_eq!(viewport.to_normalized(400.0, 600.0), Point::new(1.0, 1.0));
        // margins left of or above the square map outside the unit range
        assert!(viewport.to_normalized(10.0, 100.0).y < 0.0);
    }

    #[test]
    fn degenerate_canvas_is_rejected() {
        assert!(Viewport::new(0.0, 100.0).is_err());
        assert!(Viewport::new(100.0, f64::NAN).is_err());
    }

    #[test]
    fn pairs_parse_with_spaces() {
        assert_eq!(parse_pair("0.5, 0.25"), Ok((0.5, 0.25)));
        assert!(parse_pair("0.5").is_err());
        assert!(parse_pair("a,1").is_err());
    }
}
