use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A cabinet placed against a wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    /// `"0"` when unplaced, otherwise `"<wallNumber>_<section>"`.
    pub wall: String,
    /// Distance along the wall from its inside-corner origin.
    pub x: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    #[serde(default)]
    pub elev: f64,
    /// Extra rotation in degrees on top of the wall's own angle.
    #[serde(default)]
    pub rot: f64,
    /// Stored fields the kernel does not interpret. Carried through every edit.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    /// Creates an unrotated product on the floor.
    #[must_use]
    pub fn new(name: &str, wall: &str, x: f64, width: f64, depth: f64, height: f64) -> Self {
        Self {
            name: name.to_owned(),
            wall: wall.to_owned(),
            x,
            width,
            depth,
            height,
            elev: 0.0,
            rot: 0.0,
            attributes: BTreeMap::new(),
        }
    }

    /// Parsed wall reference, or `None` when the product is unplaced.
    #[must_use]
    pub fn wall_ref(&self) -> Option<WallRef> {
        WallRef::parse(&self.wall)
    }
}

/// A parsed `"<wallNumber>_<section>"` reference.
///
/// Everything after the leading integer is kept verbatim in `suffix`, so a
/// renumbered reference differs from the old one only in its number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallRef {
    pub wall_number: u32,
    pub suffix: String,
}

impl WallRef {
    /// Parses the leading integer of a reference.
    ///
    /// Returns `None` for `"0"`, for strings without a leading integer, and
    /// for numbers that overflow `u32`.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        let digits = reference
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(reference.len());
        let wall_number: u32 = reference[..digits].parse().ok()?;
        if wall_number == 0 {
            return None;
        }
        Some(Self {
            wall_number,
            suffix: reference[digits..].to_owned(),
        })
    }

    /// Same reference pointing at a different wall number.
    #[must_use]
    pub fn renumbered(&self, wall_number: u32) -> Self {
        Self {
            wall_number,
            suffix: self.suffix.clone(),
        }
    }
}

impl fmt::Display for WallRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.wall_number, self.suffix)
    }
}
