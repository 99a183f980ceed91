mod broad_phase;
pub mod collidable;
pub mod config;
pub mod contact_pool;
pub mod error;
pub mod manager;
pub mod narrow_phase;
pub mod type_matrix;
pub mod types;

pub use collidable::{Collidable, CollisionEvent, EventSink, Scene};
pub use config::{CollisionConfig, SpatialIndexKind};
pub use contact_pool::{ContactId, ContactPool, ContactRecord};
pub use error::{CollisionError, CollisionResult};
pub use manager::{CollisionManager, TickStats};
pub use type_matrix::TypeMatrix;
pub use types::{CollisionType, CollisionTypeRule, ResponseTag, TestMethod};
