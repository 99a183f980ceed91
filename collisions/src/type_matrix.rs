use crate::error::{CollisionError, CollisionResult};
use crate::types::{CollisionType, CollisionTypeRule, ResponseTag, TestMethod};

/// Which collision types are tested against which, and how.
///
/// Rules are indexed by source type. At most one rule exists per
/// `(source, destination)` pair.
pub struct TypeMatrix {
    rules: Vec<Vec<CollisionTypeRule>>,
    len: usize,
}

impl TypeMatrix {
    pub fn new(max_collision_types: usize) -> Self {
        Self {
            rules: vec![Vec::new(); max_collision_types],
            len: 0,
        }
    }

    pub fn max_collision_types(&self) -> usize {
        self.rules.len()
    }

    /// Add a rule. Returns `Ok(false)` when a rule for `(source, destination)`
    /// already exists; the existing rule is kept as is.
    pub fn set_collisions(
        &mut self,
        source: CollisionType,
        destination: CollisionType,
        method: TestMethod,
        response: ResponseTag,
    ) -> CollisionResult<bool> {
        self.check_type(source)?;
        self.check_type(destination)?;

        let rules = &mut self.rules[source as usize];
        if rules.iter().any(|rule| rule.destination == destination) {
            return Ok(false);
        }
        rules.push(CollisionTypeRule {
            source,
            destination,
            method,
            response,
        });
        self.len += 1;
        Ok(true)
    }

    pub fn clear(&mut self) {
        for rules in &mut self.rules {
            rules.clear();
        }
        self.len = 0;
    }

    pub fn rules_for(&self, source: CollisionType) -> &[CollisionTypeRule] {
        self.rules
            .get(source as usize)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollisionTypeRule> {
        self.rules.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn check_type(&self, collision_type: CollisionType) -> CollisionResult<()> {
        if collision_type == 0 || collision_type as usize >= self.rules.len() {
            log::error!(
                "collision type {} outside configured range 1..{}",
                collision_type,
                self.rules.len()
            );
            return Err(CollisionError::TypeOutOfRange {
                collision_type,
                max: self.rules.len(),
            });
        }
        Ok(())
    }
}
