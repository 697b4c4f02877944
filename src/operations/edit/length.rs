use crate::config::KernelConfig;
use crate::error::{EditError, Result};
use crate::math::angle::{angle_of_deg, endpoint, normalize_deg};
use crate::math::Point2;
use crate::model::wall_index;
use crate::model::{Room, Wall};

use super::snap::snap_to_right_angle;
use super::RoomEdit;

/// Changes a wall's length and re-aims its successor so the chain still
/// reaches the wall after it.
#[derive(Debug, Clone)]
pub struct UpdateWallLength {
    wall_number: u32,
    new_length: f64,
    config: KernelConfig,
}

impl UpdateWallLength {
    /// Creates a new `UpdateWallLength` edit with the default config.
    #[must_use]
    pub fn new(wall_number: u32, new_length: f64) -> Self {
        Self {
            wall_number,
            new_length,
            config: KernelConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }
}

impl RoomEdit for UpdateWallLength {
    fn name(&self) -> &'static str {
        "update_wall_length"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        let walls = resize(&room.walls, self.wall_number, self.new_length, &self.config)?;
        Ok(Room {
            walls,
            ..room.clone()
        })
    }
}

/// Resizes a wall, returning `walls` unchanged if the edit is rejected.
#[must_use]
pub fn update_wall_length(walls: &[Wall], wall_number: u32, new_length: f64) -> Vec<Wall> {
    let config = KernelConfig::default();
    resize(walls, wall_number, new_length, &config).unwrap_or_else(|err| {
        tracing::debug!(%err, "update_wall_length rejected");
        walls.to_vec()
    })
}

/// Only the edited wall and its immediate successor change. The successor
/// keeps ending on the stored start of the wall after it; its angle snaps to
/// a right angle when the snapped wall misses that point by less than
/// `snap_max_error`.
fn resize(
    walls: &[Wall],
    wall_number: u32,
    new_length: f64,
    config: &KernelConfig,
) -> std::result::Result<Vec<Wall>, EditError> {
    if !new_length.is_finite() {
        return Err(EditError::InvalidValue {
            field: "length",
            value: new_length,
        });
    }
    if new_length < config.min_wall_length {
        return Err(EditError::TooShort {
            wall: wall_number,
            length: new_length,
            min: config.min_wall_length,
        });
    }
    let i = wall_index(walls, wall_number).ok_or(EditError::WallNotFound(wall_number))?;

    let mut out = walls.to_vec();
    out[i].length = new_length;

    let n = out.len();
    if n < 3 {
        return Ok(out);
    }
    let next = (i + 1) % n;
    let after = (i + 2) % n;

    let new_start = out[i].end();
    let (angle_deg, length) = aim(&new_start, &walls[after].start, config);
    if length < config.min_wall_length {
        return Err(EditError::TooShort {
            wall: walls[next].wall_number,
            length,
            min: config.min_wall_length,
        });
    }
    let successor = &mut out[next];
    successor.start = new_start;
    successor.angle_deg = angle_deg;
    successor.length = length;
    Ok(out)
}

/// Angle and length of a wall from `start` to `target`.
///
/// The angle snaps to a right angle only if the snapped wall, at the same
/// length, ends within `snap_max_error` of `target`.
fn aim(start: &Point2, target: &Point2, config: &KernelConfig) -> (f64, f64) {
    let delta = target - start;
    let length = delta.norm();
    let raw = angle_of_deg(&delta);
    if let Some(snapped) = snap_to_right_angle(raw, config.snap_threshold_deg) {
        let miss = (endpoint(start, snapped, length) - target).norm();
        if miss < config.snap_max_error {
            return (normalize_deg(snapped), length);
        }
    }
    (normalize_deg(raw), length)
}
