use crate::config::KernelConfig;
use crate::math::polygon_2d::leftmost_bottom_index;
use crate::math::Point2;
use crate::model::Wall;

/// Result of checking that a wall chain returns to its first start point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainClosure {
    pub closed: bool,
    /// Distance from the last wall's computed end to the first wall's start.
    pub gap: f64,
}

/// Checks chain closure with the default tolerance.
#[must_use]
pub fn verify_chain_closure(walls: &[Wall]) -> ChainClosure {
    verify_chain_closure_with(walls, &KernelConfig::default())
}

/// Checks chain closure against `config.closure_tolerance`.
///
/// An empty chain is open with an infinite gap.
#[must_use]
pub fn verify_chain_closure_with(walls: &[Wall], config: &KernelConfig) -> ChainClosure {
    let (Some(first), Some(last)) = (walls.first(), walls.last()) else {
        return ChainClosure {
            closed: false,
            gap: f64::INFINITY,
        };
    };
    let gap = (last.end() - first.start).norm();
    ChainClosure {
        closed: gap < config.closure_tolerance,
        gap,
    }
}

/// Wall numbers in chain order, starting from the wall whose start point is
/// leftmost (ties broken by lowest y).
///
/// Only the reporting order changes; the walls themselves are untouched.
#[must_use]
pub fn normalized_wall_order(walls: &[Wall]) -> Vec<u32> {
    let starts: Vec<Point2> = walls.iter().map(|w| w.start).collect();
    let Some(first) = leftmost_bottom_index(&starts) else {
        return Vec::new();
    };
    walls[first..]
        .iter()
        .chain(&walls[..first])
        .map(|w| w.wall_number)
        .collect()
}
