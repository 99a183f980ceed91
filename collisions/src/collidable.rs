use crate::contact_pool::ContactId;
use crate::narrow_phase;
use crate::types::{CollisionType, ResponseTag, TestMethod};
use common::shapes::Obb;
use std::fmt::Debug;
use std::hash::Hash;

/// An object the scene lets take part in collision detection.
pub trait Collidable {
    /// World-space bounds for this tick.
    fn collision_bounds(&self) -> Obb;

    fn collision_type(&self) -> CollisionType;

    /// Exact test against `other`, run at most once per pair per tick.
    fn collide(&self, other: &Self, method: TestMethod) -> bool {
        narrow_phase::test(method, &self.collision_bounds(), &other.collision_bounds())
    }

    /// Record a contact confirmed this tick. Resolve it with
    /// [`crate::CollisionManager::contact`].
    fn add_collision(&mut self, contact: ContactId);

    /// Forget last tick's contacts.
    fn clear_collisions(&mut self);
}

/// Source of the objects active this tick.
pub trait Scene {
    type Handle: Copy + Eq + Hash + Debug;
    type Object: Collidable;

    fn enabled_objects(&self, out: &mut Vec<Self::Handle>);

    fn object(&self, handle: Self::Handle) -> Option<&Self::Object>;

    fn object_mut(&mut self, handle: Self::Handle) -> Option<&mut Self::Object>;
}

/// Every element is enabled; handles are indices.
impl<O: Collidable> Scene for Vec<O> {
    type Handle = usize;
    type Object = O;

    fn enabled_objects(&self, out: &mut Vec<usize>) {
        out.extend(0..self.len());
    }

    fn object(&self, handle: usize) -> Option<&O> {
        self.get(handle)
    }

    fn object_mut(&mut self, handle: usize) -> Option<&mut O> {
        self.get_mut(handle)
    }
}

/// One confirmed contact between `source` and `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionEvent<H> {
    pub source: H,
    pub target: H,
    pub response: ResponseTag,
    pub source_contact: ContactId,
    pub target_contact: ContactId,
}

pub trait EventSink<H> {
    fn enqueue(&mut self, event: CollisionEvent<H>);
}

impl<H> EventSink<H> for Vec<CollisionEvent<H>> {
    fn enqueue(&mut self, event: CollisionEvent<H>) {
        self.push(event);
    }
}
