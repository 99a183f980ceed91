use crate::config::SpatialIndexKind;
use crate::error::CollisionResult;
use common::shapes::Rectangle;
use quadtree::{validate_region, Entry, QuadTree};

/// Type-agnostic candidate finder over per-tick entry indices.
pub(crate) enum BroadPhase {
    /// No partitioning: every query yields every indexed entry.
    Exhaustive {
        region: Rectangle,
        entries: Vec<Entry<u32>>,
    },
    QuadTree(QuadTree<u32>),
}

impl BroadPhase {
    pub(crate) fn new(
        kind: SpatialIndexKind,
        region: Rectangle,
        config: quadtree::Config,
    ) -> CollisionResult<Self> {
        Ok(match kind {
            SpatialIndexKind::None => {
                validate_region(&region)?;
                BroadPhase::Exhaustive {
                    region,
                    entries: Vec::new(),
                }
            }
            SpatialIndexKind::QuadTree => {
                BroadPhase::QuadTree(QuadTree::new_with_config(region, config)?)
            }
        })
    }

    pub(crate) fn kind(&self) -> SpatialIndexKind {
        match self {
            BroadPhase::Exhaustive { .. } => SpatialIndexKind::None,
            BroadPhase::QuadTree(_) => SpatialIndexKind::QuadTree,
        }
    }

    pub(crate) fn region(&self) -> Rectangle {
        match self {
            BroadPhase::Exhaustive { region, .. } => *region,
            BroadPhase::QuadTree(tree) => tree.region(),
        }
    }

    pub(crate) fn set_region(&mut self, bounds: Rectangle) -> CollisionResult<()> {
        match self {
            BroadPhase::Exhaustive { region, entries } => {
                validate_region(&bounds)?;
                *region = bounds;
                entries.clear();
            }
            BroadPhase::QuadTree(tree) => tree.set_region(bounds)?,
        }
        Ok(())
    }

    /// Same drop rules for both strategies: degenerate bounds and bounds
    /// outside the region are not indexed.
    pub(crate) fn insert(&mut self, value: u32, bounds: &Rectangle) -> bool {
        match self {
            BroadPhase::Exhaustive { region, entries } => {
                if bounds.is_degenerate() || !region.intersects(bounds) {
                    return false;
                }
                entries.push(Entry {
                    value,
                    bounds: *bounds,
                });
                true
            }
            BroadPhase::QuadTree(tree) => tree.insert(value, bounds),
        }
    }

    pub(crate) fn clear(&mut self) {
        match self {
            BroadPhase::Exhaustive { entries, .. } => entries.clear(),
            BroadPhase::QuadTree(tree) => tree.clear(),
        }
    }

    pub(crate) fn query(&self, area: &Rectangle, out: &mut Vec<u32>) {
        match self {
            BroadPhase::Exhaustive { entries, .. } => {
                out.extend(entries.iter().map(|entry| entry.value))
            }
            BroadPhase::QuadTree(tree) => tree.query(area, out),
        }
    }
}
