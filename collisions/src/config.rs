use common::shapes::Rectangle;

/// Broad-phase strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpatialIndexKind {
    /// Every indexed object is a candidate for every query.
    None,
    #[default]
    QuadTree,
}

#[derive(Debug, Clone)]
pub struct CollisionConfig {
    /// Valid collision types are `1..max_collision_types`.
    pub max_collision_types: usize,
    /// Contacts a single source may initiate per tick in exhaustive mode.
    pub max_simultaneous_collisions: usize,
    /// Stop scanning a source after its first confirmed contact.
    pub optimized: bool,
    pub region_bounds: Rectangle,
    pub spatial_index: SpatialIndexKind,
    /// Contact records allocated up front.
    pub contact_pool_size: usize,
    pub quadtree: quadtree::Config,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        CollisionConfig {
            max_collision_types: 32,
            max_simultaneous_collisions: 8,
            optimized: false,
            region_bounds: Rectangle::new(0.0, 0.0, 8192.0, 8192.0),
            spatial_index: SpatialIndexKind::QuadTree,
            contact_pool_size: 256,
            quadtree: quadtree::Config::default(),
        }
    }
}
