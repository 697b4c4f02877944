use std::collections::HashMap;

use crate::config::KernelConfig;
use crate::error::{EditError, Result};
use crate::math::angle::endpoint;
use crate::model::{Corner, Product, Room, Wall, WallJoint};

use super::joints::rebuild_joints;
use super::RoomEdit;

/// Splits a wall into two equal halves at its midpoint.
///
/// All walls are renumbered `1..=n` in chain order. Product references follow
/// the renumbering; products on the split wall move to whichever half holds
/// their `x`. Joints are rebuilt, keeping the flags of every old corner.
#[derive(Debug, Clone)]
pub struct SplitWall {
    wall_number: u32,
    config: KernelConfig,
}

impl SplitWall {
    /// Creates a new `SplitWall` edit with the default config.
    #[must_use]
    pub fn new(wall_number: u32) -> Self {
        Self {
            wall_number,
            config: KernelConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }
}

impl RoomEdit for SplitWall {
    fn name(&self) -> &'static str {
        "split_wall"
    }

    fn try_apply(&self, room: &Room) -> Result<Room> {
        Ok(split(room, self.wall_number, &self.config)?)
    }
}

/// Splits a wall, returning the collections unchanged if the edit is rejected.
#[must_use]
pub fn split_wall_at_center(
    walls: &[Wall],
    joints: &[WallJoint],
    products: &[Product],
    wall_number: u32,
) -> Room {
    let room = Room::new(walls.to_vec(), joints.to_vec(), products.to_vec());
    SplitWall::new(wall_number).apply(&room)
}

fn split(
    room: &Room,
    wall_number: u32,
    config: &KernelConfig,
) -> std::result::Result<Room, EditError> {
    let k = room
        .wall_index(wall_number)
        .ok_or(EditError::WallNotFound(wall_number))?;
    let original = &room.walls[k];
    let half = original.length * 0.5;
    if half < config.min_wall_length {
        return Err(EditError::TooShort {
            wall: wall_number,
            length: half,
            min: config.min_wall_length,
        });
    }

    let mut first = original.clone();
    first.length = half;
    let mut second = original.clone();
    second.start = endpoint(&original.start, original.angle_deg, half);
    second.length = original.length - half;

    let mut walls = Vec::with_capacity(room.walls.len() + 1);
    walls.extend_from_slice(&room.walls[..k]);
    walls.push(first);
    walls.push(second);
    walls.extend_from_slice(&room.walls[k + 1..]);

    // Old number -> new number for every wall except the split one.
    let mut renumber: HashMap<u32, u32> = HashMap::new();
    for (old_index, wall) in room.walls.iter().enumerate() {
        if old_index == k {
            continue;
        }
        let new_index = if old_index < k { old_index } else { old_index + 1 };
        renumber.insert(wall.wall_number, position_number(new_index));
    }
    let first_number = position_number(k);
    let second_number = position_number(k + 1);
    for (i, wall) in walls.iter_mut().enumerate() {
        wall.wall_number = position_number(i);
    }

    let products = room
        .products
        .iter()
        .map(|product| {
            let Some(wall_ref) = product.wall_ref() else {
                return product.clone();
            };
            let mut moved = product.clone();
            if wall_ref.wall_number == wall_number {
                if product.x < half {
                    moved.wall = wall_ref.renumbered(first_number).to_string();
                } else {
                    moved.wall = wall_ref.renumbered(second_number).to_string();
                    moved.x = product.x - half;
                }
            } else if let Some(&new_number) = renumber.get(&wall_ref.wall_number) {
                moved.wall = wall_ref.renumbered(new_number).to_string();
            }
            moved
        })
        .collect();

    // Carry the old joints over to the new numbering so their flags survive.
    let map_corner = |number: u32, corner: Corner| -> Option<u32> {
        if number == wall_number {
            Some(match corner {
                Corner::Start => first_number,
                Corner::End => second_number,
            })
        } else {
            renumber.get(&number).copied()
        }
    };
    let old_joints: Vec<WallJoint> = room
        .joints
        .iter()
        .filter_map(|j| {
            Some(WallJoint {
                wall1: map_corner(j.wall1, j.corner1)?,
                wall2: map_corner(j.wall2, j.corner2)?,
                ..j.clone()
            })
        })
        .collect();
    let joints = rebuild_joints(&walls, Some(&old_joints));

    tracing::debug!(wall = wall_number, walls = walls.len(), "split wall at center");
    Ok(Room {
        walls,
        joints,
        products,
    })
}

/// 1-based wall number for a chain position.
fn position_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
