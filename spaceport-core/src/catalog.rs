//! Catalog service coordinating validation, rating, and storage.

use std::sync::Arc;

use crate::domain::{Ship, ShipDraft};
use crate::error::{Result, ShipError};
use crate::filter::{PageRequest, ShipFilter};
use crate::repository::{InMemoryShipRepository, ShipRepository};
use crate::validate::{NewShip, parse_ship_id};

/// Entry point for every catalog operation.
///
/// Owns a shared handle to the backing store and applies the validation
/// and rating rules before anything is persisted.
#[derive(Clone)]
pub struct ShipCatalog {
    repository: Arc<dyn ShipRepository + Send + Sync>,
}

impl ShipCatalog {
    /// Build a catalog over the given store.
    pub fn new(repository: Arc<dyn ShipRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Build a catalog over a process-local store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryShipRepository::new()))
    }

    /// One page of matching ships, sorted ascending by the page's key.
    pub fn list(&self, filter: &ShipFilter, page: &PageRequest) -> Result<Vec<Ship>> {
        self.repository.find_page(filter, page)
    }

    /// How many ships match the filter, ignoring paging.
    pub fn count(&self, filter: &ShipFilter) -> Result<usize> {
        Ok(self.repository.find_all(filter)?.len())
    }

    /// Validate a draft and persist it under a fresh identifier.
    pub fn create(&self, draft: ShipDraft) -> Result<Ship> {
        self.repository.insert(NewShip::try_from(draft)?)
    }

    /// Resolve a raw path identifier to a stored ship.
    pub fn fetch(&self, raw_id: &str) -> Result<Ship> {
        let id = parse_ship_id(raw_id)?;
        self.repository.find_by_id(id)?.ok_or(ShipError::NotFound)
    }

    /// Merge the draft's present fields over the stored record, re-validate,
    /// re-derive the rating, and persist the result.
    pub fn update(&self, raw_id: &str, draft: ShipDraft) -> Result<Ship> {
        let current = self.fetch(raw_id)?;
        let merged = NewShip::try_from(draft.onto(&current))?;
        self.repository.update(&merged.into_ship(current.id))
    }

    /// Delete the ship the raw path identifier resolves to.
    pub fn remove(&self, raw_id: &str) -> Result<()> {
        let ship = self.fetch(raw_id)?;
        self.repository.delete(ship.id)
    }
}
