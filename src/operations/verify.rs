use std::collections::HashSet;

use crate::config::KernelConfig;
use crate::geometry::{
    compute_wall_geometries, room_winding, verify_chain_closure_with, ChainClosure, Winding,
};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::model::{Corner, Room};

/// A problem found in a room's wall loop.
#[derive(Debug, Clone, PartialEq)]
pub enum ChainIssue {
    TooFewWalls(usize),
    Open { gap: f64 },
    NonPositiveLength { wall: u32 },
    DegenerateNormal { wall: u32 },
    DuplicateWallNumber(u32),
    JointCountMismatch { walls: usize, joints: usize },
    /// Joint `index` does not join wall `index`'s end to the next wall's start.
    JointOutOfSequence { index: usize },
    UnknownProductWall { product: usize, wall: u32 },
}

/// Diagnostic summary of a room's wall loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainReport {
    pub closure: ChainClosure,
    /// `None` when there are too few walls to form a polygon.
    pub winding: Option<Winding>,
    pub signed_area: f64,
    pub issues: Vec<ChainIssue>,
}

impl ChainReport {
    /// `true` if no issue was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Checks closure, winding, normals, numbering and joint sequence of a room.
#[derive(Debug, Clone, Default)]
pub struct VerifyChain {
    config: KernelConfig,
}

impl VerifyChain {
    /// Creates a new `VerifyChain` check with the default config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: KernelConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs every check. Never fails; problems are listed in the report.
    #[must_use]
    pub fn execute(&self, room: &Room) -> ChainReport {
        let walls = &room.walls;
        let n = walls.len();
        let mut issues = Vec::new();

        if n < 3 {
            issues.push(ChainIssue::TooFewWalls(n));
        }

        let closure = verify_chain_closure_with(walls, &self.config);
        if n > 0 && !closure.closed {
            issues.push(ChainIssue::Open { gap: closure.gap });
        }

        let mut seen = HashSet::new();
        for wall in walls {
            if !seen.insert(wall.wall_number) {
                issues.push(ChainIssue::DuplicateWallNumber(wall.wall_number));
            }
            if wall.length.is_nan() || wall.length <= 0.0 {
                issues.push(ChainIssue::NonPositiveLength {
                    wall: wall.wall_number,
                });
            }
        }

        for geo in compute_wall_geometries(walls) {
            let norm = geo.normal.norm();
            if !norm.is_finite() || (norm - 1.0).abs() > 1e-6 {
                issues.push(ChainIssue::DegenerateNormal {
                    wall: geo.wall_number,
                });
            }
        }

        if room.joints.len() == n {
            for (index, joint) in room.joints.iter().enumerate() {
                let ending = walls[index].wall_number;
                let starting = walls[(index + 1) % n].wall_number;
                if !(joint.touches(ending, Corner::End) && joint.touches(starting, Corner::Start)) {
                    issues.push(ChainIssue::JointOutOfSequence { index });
                }
            }
        } else {
            issues.push(ChainIssue::JointCountMismatch {
                walls: n,
                joints: room.joints.len(),
            });
        }

        for (product, p) in room.products.iter().enumerate() {
            if let Some(r) = p.wall_ref() {
                if !seen.contains(&r.wall_number) {
                    issues.push(ChainIssue::UnknownProductWall {
                        product,
                        wall: r.wall_number,
                    });
                }
            }
        }

        let starts: Vec<Point2> = walls.iter().map(|w| w.start).collect();
        let report = ChainReport {
            closure,
            winding: (n >= 3).then(|| room_winding(walls)),
            signed_area: signed_area_2d(&starts),
            issues,
        };
        for issue in &report.issues {
            tracing::debug!(?issue, "wall chain issue");
        }
        report
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Product, WallJoint};

    #[test]
    fn rectangular_room_is_valid() {
        let room = Room::rectangular(3000.0, 2000.0, 2400.0, 100.0).unwrap();
        let report = VerifyChain::new().execute(&room);
        assert!(report.is_valid(), "{:?}", report.issues);
        assert_eq!(report.winding, Some(Winding::CounterClockwise));
        assert!((report.signed_area - 6_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn empty_room() {
        let report = VerifyChain::new().execute(&Room::default());
        assert_eq!(report.issues, vec![ChainIssue::TooFewWalls(0)]);
        assert!(report.winding.is_none());
        assert!(!report.closure.closed);
    }

    #[test]
    fn detects_gap_duplicates_and_bad_joints() {
        let mut room = Room::rectangular(3000.0, 2000.0, 2400.0, 100.0).unwrap();
        room.walls[3].length -= 20.0;
        room.walls[2].wall_number = 2;
        room.joints[0] = WallJoint::chained(4, 1, true);
        room.products.push(Product::new("ghost", "9_1", 0.0, 600.0, 580.0, 720.0));

        let report = VerifyChain::new().execute(&room);
        assert!(!report.is_valid());
        assert!(report
            .issues
            .iter()
            .any(|i| matches!(i, ChainIssue::Open { gap } if (*gap - 20.0).abs() < 1e-6)));
        assert!(report.issues.contains(&ChainIssue::DuplicateWallNumber(2)));
        assert!(report.issues.contains(&ChainIssue::JointOutOfSequence { index: 0 }));
        let unknown = ChainIssue::UnknownProductWall {
            product: 0,
            wall: 9,
        };
        assert!(report.issues.contains(&unknown));
    }

    #[test]
    fn joint_count_mismatch() {
        let mut room = Room::rectangular(3000.0, 2000.0, 2400.0, 100.0).unwrap();
        room.joints.pop();
        let report = VerifyChain::new().execute(&room);
        let mismatch = ChainIssue::JointCountMismatch {
            walls: 4,
            joints: 3,
        };
        assert_eq!(report.issues, vec![mismatch]);
    }

    #[test]
    fn looser_tolerance_accepts_small_gap() {
        let mut room = Room::rectangular(3000.0, 2000.0, 2400.0, 100.0).unwrap();
        room.walls[3].length -= 0.5;
        let strict = VerifyChain::new().execute(&room);
        assert!(!strict.is_valid());
        let loose = VerifyChain::new()
            .with_config(KernelConfig {
                closure_tolerance: 1.0,
                ..KernelConfig::default()
            })
            .execute(&room);
        assert!(loose.is_valid());
    }
}
