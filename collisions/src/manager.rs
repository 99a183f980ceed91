use crate::broad_phase::BroadPhase;
use crate::collidable::{Collidable, CollisionEvent, EventSink, Scene};
use crate::config::{CollisionConfig, SpatialIndexKind};
use crate::contact_pool::{ContactId, ContactPool, ContactRecord};
use crate::error::CollisionResult;
use crate::type_matrix::TypeMatrix;
use crate::types::{CollisionType, ResponseTag, TestMethod};
use common::shapes::{Rectangle, Shape};
use fxhash::FxHashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Counters for one detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Enabled objects reported by the scene.
    pub objects: usize,
    /// Objects inserted into the broad phase.
    pub indexed: usize,
    /// Typed objects left out: degenerate bounds or outside the region.
    pub dropped: usize,
    /// Broad-phase hits summed over all sources.
    pub candidates: usize,
    /// Narrow-phase tests run.
    pub tests: usize,
    /// Confirmed contacts, one event each.
    pub contacts: usize,
    /// Contact records allocated because the pool ran dry.
    pub fresh_records: usize,
}

struct TickEntry<H> {
    handle: H,
    collision_type: CollisionType,
    bounds: Rectangle,
    indexed: bool,
}

struct PendingContact {
    source: u32,
    target: u32,
    response: ResponseTag,
}

/// Per-tick collision detection between typed scene objects.
///
/// Each [`update`](CollisionManager::update) collects the enabled objects,
/// rebuilds the broad phase, tests every candidate pair allowed by the
/// [`TypeMatrix`] at most once, and reports confirmed contacts to both
/// objects and to an [`EventSink`]. Nothing is moved or resolved.
pub struct CollisionManager<H> {
    config: CollisionConfig,
    matrix: TypeMatrix,
    broad_phase: BroadPhase,
    pool: ContactPool<H>,

    // Scratch, reset every tick.
    handles: Vec<H>,
    seen: FxHashSet<H>,
    entries: Vec<TickEntry<H>>,
    buckets: Vec<Vec<u32>>,
    candidates: Vec<u32>,
    visited: FxHashSet<(u32, u32)>,
    pending: Vec<PendingContact>,

    last_stats: TickStats,
}

impl<H: Copy + Eq + Hash + Debug> CollisionManager<H> {
    pub fn new() -> CollisionResult<Self> {
        Self::new_with_config(CollisionConfig::default())
    }

    pub fn new_with_config(mut config: CollisionConfig) -> CollisionResult<Self> {
        config.max_simultaneous_collisions = config.max_simultaneous_collisions.max(1);
        config.quadtree.validate()?;
        let broad_phase = BroadPhase::new(
            config.spatial_index,
            config.region_bounds,
            config.quadtree.clone(),
        )?;
        Ok(Self {
            matrix: TypeMatrix::new(config.max_collision_types),
            broad_phase,
            pool: ContactPool::new(config.contact_pool_size),
            handles: Vec::new(),
            seen: FxHashSet::default(),
            entries: Vec::new(),
            buckets: vec![Vec::new(); config.max_collision_types],
            candidates: Vec::new(),
            visited: FxHashSet::default(),
            pending: Vec::new(),
            last_stats: TickStats::default(),
            config,
        })
    }

    /// Test objects of type `source` against objects of type `destination`.
    /// Returns `Ok(false)` if that pair of types already has a rule.
    pub fn set_collisions(
        &mut self,
        source: CollisionType,
        destination: CollisionType,
        method: TestMethod,
        response: ResponseTag,
    ) -> CollisionResult<bool> {
        self.matrix
            .set_collisions(source, destination, method, response)
    }

    pub fn clear_collisions(&mut self) {
        self.matrix.clear();
    }

    pub fn set_optimized(&mut self, optimized: bool) {
        self.config.optimized = optimized;
    }

    pub fn is_optimized(&self) -> bool {
        self.config.optimized
    }

    /// Values below one are raised to one.
    pub fn set_max_simultaneous_collisions(&mut self, max: usize) {
        if max == 0 {
            log::warn!("max simultaneous collisions must be at least 1, using 1");
        }
        self.config.max_simultaneous_collisions = max.max(1);
    }

    pub fn max_simultaneous_collisions(&self) -> usize {
        self.config.max_simultaneous_collisions
    }

    /// Objects not touching `bounds` are ignored by later ticks.
    pub fn set_region_bounds(&mut self, bounds: Rectangle) -> CollisionResult<()> {
        self.broad_phase.set_region(bounds)?;
        self.config.region_bounds = bounds;
        log::debug!("collision region set to {:?}", bounds);
        Ok(())
    }

    pub fn region_bounds(&self) -> Rectangle {
        self.broad_phase.region()
    }

    pub fn set_spatial_index(&mut self, kind: SpatialIndexKind) -> CollisionResult<()> {
        if self.broad_phase.kind() == kind {
            return Ok(());
        }
        self.broad_phase = BroadPhase::new(
            kind,
            self.config.region_bounds,
            self.config.quadtree.clone(),
        )?;
        self.config.spatial_index = kind;
        Ok(())
    }

    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    pub fn type_matrix(&self) -> &TypeMatrix {
        &self.matrix
    }

    pub fn contact_pool(&self) -> &ContactPool<H> {
        &self.pool
    }

    /// Resolve a contact handed to an object this tick. Handles from earlier
    /// ticks resolve to `None`.
    pub fn contact(&self, id: ContactId) -> Option<&ContactRecord<H>> {
        self.pool.get(id)
    }

    pub fn last_stats(&self) -> TickStats {
        self.last_stats
    }

    /// Run one detection pass over the enabled objects of `scene`.
    pub fn update<S, E>(&mut self, scene: &mut S, sink: &mut E) -> TickStats
    where
        S: Scene<Handle = H>,
        E: EventSink<H>,
    {
        let mut stats = TickStats::default();
        let fresh_before = self.pool.fresh_allocations();

        self.collect(scene, &mut stats);
        self.index(&mut stats);
        self.scan(scene, &mut stats);
        self.drain(scene, sink, &mut stats);

        stats.fresh_records = self.pool.fresh_allocations() - fresh_before;
        log::debug!(
            "collision tick: {} objects, {} indexed, {} dropped, {} candidates, {} tests, {} contacts, {} fresh records",
            stats.objects,
            stats.indexed,
            stats.dropped,
            stats.candidates,
            stats.tests,
            stats.contacts,
            stats.fresh_records
        );
        self.last_stats = stats;
        stats
    }

    /// Release last tick's contacts and bucket typed objects by type.
    fn collect<S>(&mut self, scene: &mut S, stats: &mut TickStats)
    where
        S: Scene<Handle = H>,
    {
        self.pool.release_all();
        self.entries.clear();
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.visited.clear();
        self.pending.clear();

        self.handles.clear();
        self.seen.clear();
        scene.enabled_objects(&mut self.handles);

        let max_types = self.buckets.len();
        for &handle in &self.handles {
            // A handle listed twice is still one object.
            if !self.seen.insert(handle) {
                continue;
            }
            stats.objects += 1;
            let Some(object) = scene.object_mut(handle) else {
                continue;
            };
            object.clear_collisions();

            let collision_type = object.collision_type();
            if collision_type == 0 {
                continue;
            }
            let Some(bucket) = self.buckets.get_mut(collision_type as usize) else {
                log::warn!(
                    "object {:?} has collision type {} outside 1..{}, skipped",
                    handle,
                    collision_type,
                    max_types
                );
                continue;
            };

            let bounds = object.collision_bounds();
            if bounds.is_degenerate() {
                log::trace!("object {:?} has degenerate bounds {:?}", handle, bounds);
                stats.dropped += 1;
                continue;
            }

            // The circle's box encloses the oriented box too, so neither test
            // method is pruned by the broad phase.
            bucket.push(self.entries.len() as u32);
            self.entries.push(TickEntry {
                handle,
                collision_type,
                bounds: bounds.bounding_circle().bounding_box(),
                indexed: false,
            });
        }
    }

    fn index(&mut self, stats: &mut TickStats) {
        self.broad_phase.clear();
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.indexed = self.broad_phase.insert(i as u32, &entry.bounds);
            if entry.indexed {
                stats.indexed += 1;
            } else {
                log::trace!("object {:?} is outside the collision region", entry.handle);
                stats.dropped += 1;
            }
        }
    }

    /// Find confirmed contacts. Every unordered pair is tested at most once.
    fn scan<S>(&mut self, scene: &S, stats: &mut TickStats)
    where
        S: Scene<Handle = H>,
    {
        let optimized = self.config.optimized;
        let cap = self.config.max_simultaneous_collisions;

        for (collision_type, bucket) in self.buckets.iter().enumerate() {
            let rules = self.matrix.rules_for(collision_type as CollisionType);
            if rules.is_empty() {
                continue;
            }

            for &source in bucket {
                let source_entry = &self.entries[source as usize];
                if !source_entry.indexed {
                    continue;
                }
                let Some(source_object) = scene.object(source_entry.handle) else {
                    continue;
                };

                self.candidates.clear();
                self.broad_phase
                    .query(&source_entry.bounds, &mut self.candidates);
                stats.candidates += self.candidates.len();

                let mut confirmed = 0usize;
                'rules: for rule in rules {
                    for &target in &self.candidates {
                        if target == source {
                            continue;
                        }
                        let target_entry = &self.entries[target as usize];
                        if target_entry.collision_type != rule.destination {
                            continue;
                        }
                        let pair = if source < target {
                            (source, target)
                        } else {
                            (target, source)
                        };
                        if !self.visited.insert(pair) {
                            continue;
                        }
                        let Some(target_object) = scene.object(target_entry.handle) else {
                            continue;
                        };

                        stats.tests += 1;
                        if !source_object.collide(target_object, rule.method) {
                            continue;
                        }

                        self.pending.push(PendingContact {
                            source,
                            target,
                            response: rule.response,
                        });
                        confirmed += 1;
                        // Remaining candidates of this source are not tested.
                        if optimized || confirmed >= cap {
                            break 'rules;
                        }
                    }
                }
            }
        }
    }

    /// Hand out contact records and notify the sink.
    fn drain<S, E>(&mut self, scene: &mut S, sink: &mut E, stats: &mut TickStats)
    where
        S: Scene<Handle = H>,
        E: EventSink<H>,
    {
        for contact in &self.pending {
            let source = self.entries[contact.source as usize].handle;
            let target = self.entries[contact.target as usize].handle;

            let source_contact = self.pool.acquire(ContactRecord {
                other: target,
                response: contact.response,
            });
            let target_contact = self.pool.acquire(ContactRecord {
                other: source,
                response: contact.response,
            });
            if let Some(object) = scene.object_mut(source) {
                object.add_collision(source_contact);
            }
            if let Some(object) = scene.object_mut(target) {
                object.add_collision(target_contact);
            }

            sink.enqueue(CollisionEvent {
                source,
                target,
                response: contact.response,
                source_contact,
                target_contact,
            });
            stats.contacts += 1;
        }
    }
}
