// src/render/geometry.rs
// =============================================================================
// How big is the area we draw into?
//
// The renderer only needs two numbers (columns and rows), so it asks for
// them through the small `DisplayGeometry` trait:
// - TerminalGeometry asks the real terminal behind stdout
// - FixedGeometry always answers with the same size (tests, piped output)
// =============================================================================

use std::fmt;
use std::str::FromStr;

use console::Term;
use thiserror::Error;

use crate::error::TerminalError;

/// Size of the display in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: u16,
    pub height: u16,
}

impl Geometry {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected COLUMNSxROWS (e.g. 120x40), got '{0}'")]
pub struct ParseGeometryError(String);

impl FromStr for Geometry {
    type Err = ParseGeometryError;

    /// Parses "120x40" (columns x rows).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseGeometryError(s.to_string());

        let (width, height) = s.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
        let width = width.trim().parse().map_err(|_| invalid())?;
        let height = height.trim().parse().map_err(|_| invalid())?;

        Ok(Self { width, height })
    }
}

/// Something that can describe the current display geometry.
pub trait DisplayGeometry {
    fn geometry(&self) -> Result<Geometry, TerminalError>;
}

/// The terminal attached to standard output.
pub struct TerminalGeometry {
    term: Term,
}

impl TerminalGeometry {
    pub fn stdout() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl DisplayGeometry for TerminalGeometry {
    fn geometry(&self) -> Result<Geometry, TerminalError> {
        // console reports (rows, columns); None when stdout is not a terminal
        let (rows, columns) = self.term.size_checked().ok_or(TerminalError)?;
        Ok(Geometry::new(columns, rows))
    }
}

/// A display that always has the same size.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeometry(pub Geometry);

impl DisplayGeometry for FixedGeometry {
    fn geometry(&self) -> Result<Geometry, TerminalError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geometry() {
        assert_eq!("120x40".parse(), Ok(Geometry::new(120, 40)));
        assert_eq!(" 80X24 ".parse(), Ok(Geometry::new(80, 24)));
        assert_eq!("1x1".parse(), Ok(Geometry::new(1, 1)));
    }

    #[test]
    fn test_parse_geometry_rejects_garbage() {
        for bad in ["", "120", "x40", "120x", "-1x40", "120x40x2", "wide x tall", "70000x10"] {
            assert!(bad.parse::<Geometry>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn test_geometry_display_round_trips() {
        let geometry = Geometry::new(132, 43);
        assert_eq!(geometry.to_string().parse(), Ok(geometry));
    }

    #[test]
    fn test_fixed_geometry() {
        let fixed = FixedGeometry(Geometry::new(100, 30));
        assert_eq!(fixed.geometry().unwrap(), Geometry::new(100, 30));
    }
}
