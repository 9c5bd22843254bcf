//! Composable filter predicates, sort keys, and paging.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Ship, ShipType};

/// Optional filter criteria over the ship catalog.
///
/// Each present field contributes one predicate fragment; an absent field
/// is neutral. All fragments conjoin, and listing and counting share the
/// combined predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    /// Case-sensitive substring of the name.
    pub name: Option<String>,
    /// Case-sensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact ship category.
    pub ship_type: Option<ShipType>,
    /// Inclusive lower bound on the production instant, epoch milliseconds.
    pub after: Option<i64>,
    /// Inclusive upper bound on the production instant, epoch milliseconds.
    pub before: Option<i64>,
    /// Exact usage flag.
    pub is_used: Option<bool>,
    /// Inclusive lower bound on speed.
    pub min_speed: Option<f64>,
    /// Inclusive upper bound on speed.
    pub max_speed: Option<f64>,
    /// Inclusive lower bound on crew size.
    pub min_crew_size: Option<i32>,
    /// Inclusive upper bound on crew size.
    pub max_crew_size: Option<i32>,
    /// Inclusive lower bound on rating.
    pub min_rating: Option<f64>,
    /// Inclusive upper bound on rating.
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Whether a ship satisfies every present fragment.
    pub fn matches(&self, ship: &Ship) -> bool {
        self.name_matches(ship)
            && self.planet_matches(ship)
            && self.type_matches(ship)
            && self.date_matches(ship)
            && self.usage_matches(ship)
            && self.speed_matches(ship)
            && self.crew_matches(ship)
            && self.rating_matches(ship)
    }

    fn name_matches(&self, ship: &Ship) -> bool {
        self.name
            .as_deref()
            .map_or(true, |name| ship.name.contains(name))
    }

    fn planet_matches(&self, ship: &Ship) -> bool {
        self.planet
            .as_deref()
            .map_or(true, |planet| ship.planet.contains(planet))
    }

    fn type_matches(&self, ship: &Ship) -> bool {
        self.ship_type
            .map_or(true, |ship_type| ship.ship_type == ship_type)
    }

    fn date_matches(&self, ship: &Ship) -> bool {
        self.after.map_or(true, |after| ship.prod_date >= after)
            && self.before.map_or(true, |before| ship.prod_date <= before)
    }

    fn usage_matches(&self, ship: &Ship) -> bool {
        self.is_used.map_or(true, |is_used| ship.is_used == is_used)
    }

    fn speed_matches(&self, ship: &Ship) -> bool {
        self.min_speed.map_or(true, |min| ship.speed >= min)
            && self.max_speed.map_or(true, |max| ship.speed <= max)
    }

    fn crew_matches(&self, ship: &Ship) -> bool {
        self.min_crew_size.map_or(true, |min| ship.crew_size >= min)
            && self.max_crew_size.map_or(true, |max| ship.crew_size <= max)
    }

    fn rating_matches(&self, ship: &Ship) -> bool {
        self.min_rating.map_or(true, |min| ship.rating >= min)
            && self.max_rating.map_or(true, |max| ship.rating <= max)
    }
}

/// Sort key for catalog listings. Listings sort ascending only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    /// By identifier.
    #[default]
    Id,
    /// By name.
    Name,
    /// By speed.
    Speed,
    /// By production instant.
    Date,
    /// By crew size.
    CrewSize,
    /// By rating.
    Rating,
}

impl ShipOrder {
    /// Ascending comparison of two ships under this key.
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::Name => a.name.cmp(&b.name),
            Self::Speed => a.speed.total_cmp(&b.speed),
            Self::Date => a.prod_date.cmp(&b.prod_date),
            Self::CrewSize => a.crew_size.cmp(&b.crew_size),
            Self::Rating => a.rating.total_cmp(&b.rating),
        }
    }
}

/// One page of results to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub number: u32,
    /// Maximum records per page.
    pub size: u32,
    /// Ascending sort key.
    pub order: ShipOrder,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            number: 0,
            size: 3,
            order: ShipOrder::Id,
        }
    }
}
