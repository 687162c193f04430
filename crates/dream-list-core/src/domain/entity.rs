//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for stored entities with ids.

/// Core trait for entities stored in a list
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Ord + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Next id for a list: one past the largest existing id, or 1 when empty.
/// `None` once the largest id is `u64::MAX`.
pub fn next_id<T: Entity<Id = u64>>(list: &[T]) -> Option<u64> {
    match list.iter().map(Entity::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}
