//! Domain entities for the ship catalog.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ShipType {
    /// Cargo and passenger hauler.
    Transport,
    /// Combat vessel.
    Military,
    /// Trading vessel.
    Merchant,
}

impl ShipType {
    /// Stable token used in storage and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "TRANSPORT",
            Self::Military => "MILITARY",
            Self::Merchant => "MERCHANT",
        }
    }

    /// Parse a stored token back into a ship type.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "TRANSPORT" => Some(Self::Transport),
            "MILITARY" => Some(Self::Military),
            "MERCHANT" => Some(Self::Merchant),
            _ => None,
        }
    }
}

/// A persisted ship record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    /// Identifier assigned on creation, immutable and unique.
    pub id: i64,
    /// Ship name, 1-50 characters.
    pub name: String,
    /// Home planet, 1-50 characters.
    pub planet: String,
    /// Ship category.
    pub ship_type: ShipType,
    /// Production instant as epoch milliseconds.
    pub prod_date: i64,
    /// Cruise speed, 0.01-0.99.
    pub speed: f64,
    /// Crew size, 1-9999.
    pub crew_size: i32,
    /// Whether the ship has seen prior service.
    pub is_used: bool,
    /// Derived score, recomputed on every create and update.
    pub rating: f64,
}

/// Caller-supplied ship fields for create and update requests.
///
/// Every field is optional: creation validates that the required ones are
/// present, update overlays the present ones onto the stored record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    /// Ship name, 1-50 characters.
    pub name: Option<String>,
    /// Home planet, 1-50 characters.
    pub planet: Option<String>,
    /// Ship category.
    pub ship_type: Option<ShipType>,
    /// Production instant as epoch milliseconds.
    pub prod_date: Option<i64>,
    /// Cruise speed, 0.01-0.99.
    pub speed: Option<f64>,
    /// Crew size, 1-9999.
    pub crew_size: Option<i32>,
    /// Whether the ship has seen prior service. Defaults to false on create.
    pub is_used: Option<bool>,
}

impl ShipDraft {
    /// Overlay this draft onto a stored record, keeping the stored value
    /// wherever the draft leaves a field unset.
    pub fn onto(self, current: &Ship) -> Self {
        Self {
            name: self.name.or_else(|| Some(current.name.clone())),
            planet: self.planet.or_else(|| Some(current.planet.clone())),
            ship_type: self.ship_type.or(Some(current.ship_type)),
            prod_date: self.prod_date.or(Some(current.prod_date)),
            speed: self.speed.or(Some(current.speed)),
            crew_size: self.crew_size.or(Some(current.crew_size)),
            is_used: self.is_used.or(Some(current.is_used)),
        }
    }
}
