use crate::error::{EditError, Result};
use crate::model::wall_index;
use crate::model::{Room, Wall};

use super::RoomEdit;

/// Sets one wall's height. Neighbours are not touched.
#[derive(Debug, Clone)]
pub struct UpdateWallHeight {
    wall_number: u32,
    new_height: f64,
}

impl UpdateWallHeight {
    /// Creates a new `UpdateWallHeight` edit.
    #[must_use]
    pub fn new(wall_number: u32, new_height: f64) -> Self {
        Self {
            wall_number,
            new_height,
        }
    }
}

impl RoomEdit for UpdateWallHeight {
    fn name(&self) -> &'static str {
        "update_wall_height"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        let walls = set_height(&room.walls, self.wall_number, self.new_height)?;
        Ok(Room {
            walls,
            ..room.clone()
        })
    }
}

/// Sets a wall's height, returning `walls` unchanged if the edit is rejected.
#[must_use]
pub fn update_wall_height(walls: &[Wall], wall_number: u32, new_height: f64) -> Vec<Wall> {
    set_height(walls, wall_number, new_height).unwrap_or_else(|err| {
        tracing::debug!(%err, "update_wall_height rejected");
        walls.to_vec()
    })
}

fn set_height(
    walls: &[Wall],
    wall_number: u32,
    new_height: f64,
) -> std::result::Result<Vec<Wall>, EditError> {
    if !new_height.is_finite() || new_height <= 0.0 {
        return Err(EditError::InvalidValue {
            field: "height",
            value: new_height,
        });
    }
    let i = wall_index(walls, wall_number).ok_or(EditError::WallNotFound(wall_number))?;
    let mut out = walls.to_vec();
    out[i].height = new_height;
    Ok(out)
}
