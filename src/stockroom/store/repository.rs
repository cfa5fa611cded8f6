use crate::error::{Result, StockroomError};
use crate::model::{Entity, EntityId, Stocked};
use log::{debug, warn};
use std::collections::BTreeMap;

/// In-memory store holding at most one entity per id.
///
/// Enumeration is ordered by ascending id.
#[derive(Debug, Clone)]
pub struct Repository<T> {
    items: BTreeMap<EntityId, T>,
}

impl<T> Default for Repository<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<T: Entity + Clone> Repository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entity. Fails with `DuplicateKey` if the id is taken.
    pub fn add(&mut self, item: T) -> Result<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            warn!("event=repo_add module=store status=duplicate id={}", id);
            return Err(StockroomError::DuplicateKey(id));
        }
        self.items.insert(id, item);
        debug!(
            "event=repo_add module=store status=ok id={} count={}",
            id,
            self.items.len()
        );
        Ok(())
    }

    /// Returns a copy of the stored entity.
    pub fn get_by_id(&self, id: EntityId) -> Result<T> {
        self.items
            .get(&id)
            .cloned()
            .ok_or(StockroomError::NotFound(id))
    }

    /// Delete an entity, handing it back to the caller.
    pub fn remove(&mut self, id: EntityId) -> Result<T> {
        match self.items.remove(&id) {
            Some(item) => {
                debug!(
                    "event=repo_remove module=store status=ok id={} count={}",
                    id,
                    self.items.len()
                );
                Ok(item)
            }
            None => {
                warn!("event=repo_remove module=store status=not_found id={}", id);
                Err(StockroomError::NotFound(id))
            }
        }
    }

    /// Snapshot of every entity, ordered by id.
    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Stocked + Clone> Repository<T> {
    /// Overwrite the stored quantity of `id`.
    ///
    /// The value is checked before the id, so a negative quantity is reported
    /// as `InvalidValue` even for an unknown id.
    pub fn update_quantity(&mut self, id: EntityId, new_quantity: i32) -> Result<()> {
        if new_quantity < 0 {
            warn!(
                "event=repo_update_quantity module=store status=invalid id={} quantity={}",
                id, new_quantity
            );
            return Err(StockroomError::InvalidValue(
                "Quantity cannot be negative.".to_string(),
            ));
        }
        let item = self
            .items
            .get_mut(&id)
            .ok_or(StockroomError::NotFound(id))?;
        item.set_quantity(new_quantity);
        debug!(
            "event=repo_update_quantity module=store status=ok id={} quantity={}",
            id, new_quantity
        );
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{ElectronicItem, GroceryItem};
    use chrono::{Duration, Utc};

    pub struct RepositoryFixture<T> {
        pub repo: Repository<T>,
    }

    impl<T: Entity + Clone> Default for RepositoryFixture<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T: Entity + Clone> RepositoryFixture<T> {
        pub fn new() -> Self {
            Self {
                repo: Repository::new(),
            }
        }

        pub fn with_item(mut self, item: T) -> Self {
            self.repo.add(item).unwrap();
            self
        }
    }

    impl RepositoryFixture<ElectronicItem> {
        pub fn with_electronic(self, id: EntityId, name: &str, quantity: i32) -> Self {
            self.with_item(ElectronicItem::new(id, name, quantity, "Acme", 12).unwrap())
        }
    }

    impl RepositoryFixture<GroceryItem> {
        pub fn with_grocery(self, id: EntityId, name: &str, quantity: i32) -> Self {
            let expiry = Utc::now() + Duration::days(7);
            self.with_item(GroceryItem::new(id, name, quantity, expiry).unwrap())
        }
    }
}
