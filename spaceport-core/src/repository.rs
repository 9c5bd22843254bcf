//! Storage abstraction for ship records.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::Ship;
use crate::error::{Result, ShipError};
use crate::filter::{PageRequest, ShipFilter};
use crate::validate::NewShip;

/// Persistence operations the catalog needs from a backing store.
#[cfg_attr(test, mockall::automock)]
pub trait ShipRepository {
    /// Look up one ship by identifier.
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>>;

    /// Load the requested page of ships matching the filter, sorted ascending.
    fn find_page(&self, filter: &ShipFilter, page: &PageRequest) -> Result<Vec<Ship>>;

    /// Load every ship matching the filter.
    fn find_all(&self, filter: &ShipFilter) -> Result<Vec<Ship>>;

    /// Persist a validated draft under a fresh identifier.
    fn insert(&self, ship: NewShip) -> Result<Ship>;

    /// Overwrite the stored record with the same identifier.
    fn update(&self, ship: &Ship) -> Result<Ship>;

    /// Remove one ship by identifier.
    fn delete(&self, id: i64) -> Result<()>;
}

#[derive(Debug, Default)]
struct Records {
    by_id: BTreeMap<i64, Ship>,
    next_id: i64,
}

/// Process-local store backed by a [`BTreeMap`].
///
/// Identifiers are assigned sequentially from 1 and never reused, matching
/// a serial database column.
#[derive(Debug, Default)]
pub struct InMemoryShipRepository {
    inner: RwLock<Records>,
}

impl InMemoryShipRepository {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Records>> {
        self.inner
            .read()
            .map_err(|_| ShipError::Store("ship records lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Records>> {
        self.inner
            .write()
            .map_err(|_| ShipError::Store("ship records lock poisoned".to_string()))
    }
}

impl ShipRepository for InMemoryShipRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        Ok(self.read()?.by_id.get(&id).cloned())
    }

    fn find_page(&self, filter: &ShipFilter, page: &PageRequest) -> Result<Vec<Ship>> {
        let mut ships = self.find_all(filter)?;
        ships.sort_by(|a, b| page.order.compare(a, b));
        Ok(ships
            .into_iter()
            .skip(page.number as usize * page.size as usize)
            .take(page.size as usize)
            .collect())
    }

    fn find_all(&self, filter: &ShipFilter) -> Result<Vec<Ship>> {
        Ok(self
            .read()?
            .by_id
            .values()
            .filter(|ship| filter.matches(ship))
            .cloned()
            .collect())
    }

    fn insert(&self, ship: NewShip) -> Result<Ship> {
        let mut records = self.write()?;
        records.next_id += 1;
        let stored = ship.into_ship(records.next_id);
        records.by_id.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn update(&self, ship: &Ship) -> Result<Ship> {
        let mut records = self.write()?;
        if !records.by_id.contains_key(&ship.id) {
            return Err(ShipError::NotFound);
        }
        records.by_id.insert(ship.id, ship.clone());
        Ok(ship.clone())
    }

    fn delete(&self, id: i64) -> Result<()> {
        if self.write()?.by_id.remove(&id).is_none() {
            return Err(ShipError::NotFound);
        }
        Ok(())
    }
}
