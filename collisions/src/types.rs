/// Small category tag. `0` never collides.
pub type CollisionType = u32;

/// Opaque tag handed back with every notification of a rule.
pub type ResponseTag = u32;

/// Exact overlap test to run once the broad phase has paired two objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestMethod {
    #[default]
    BoundingBox,
    BoundingSphere,
    PerPixel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionTypeRule {
    pub source: CollisionType,
    pub destination: CollisionType,
    pub method: TestMethod,
    pub response: ResponseTag,
}
