//! Database models for the Spaceport server.

use chrono::{DateTime, NaiveDateTime};
use diesel::prelude::*;

use spaceport_core::{NewShip, Ship, ShipError, ShipType};

use crate::schema::ships;

#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = ships)]
/// Ship database record.
pub struct ShipRow {
    /// Surrogate identifier.
    pub id: i64,
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Category wire token.
    pub ship_type: String,
    /// Production instant, zone-less UTC.
    pub prod_date: NaiveDateTime,
    /// Maximum speed.
    pub speed: f64,
    /// Crew headcount.
    pub crew_size: i32,
    /// Whether the ship is second-hand.
    pub is_used: bool,
    /// Derived rating.
    pub rating: f64,
}

#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = ships)]
/// Insertable ship record, also used as a full-row changeset.
pub struct NewShipRow {
    /// Ship name.
    pub name: String,
    /// Home planet.
    pub planet: String,
    /// Category wire token.
    pub ship_type: String,
    /// Production instant, zone-less UTC.
    pub prod_date: NaiveDateTime,
    /// Maximum speed.
    pub speed: f64,
    /// Crew headcount.
    pub crew_size: i32,
    /// Whether the ship is second-hand.
    pub is_used: bool,
    /// Derived rating.
    pub rating: f64,
}

impl TryFrom<ShipRow> for Ship {
    type Error = ShipError;

    fn try_from(row: ShipRow) -> Result<Self, Self::Error> {
        let ship_type = ShipType::parse(&row.ship_type).ok_or_else(|| {
            ShipError::Store(format!("unknown ship type token: {}", row.ship_type))
        })?;
        Ok(Self {
            id: row.id,
            name: row.name,
            planet: row.planet,
            ship_type,
            prod_date: millis_from_naive(row.prod_date),
            speed: row.speed,
            crew_size: row.crew_size,
            is_used: row.is_used,
            rating: row.rating,
        })
    }
}

impl TryFrom<NewShip> for NewShipRow {
    type Error = ShipError;

    fn try_from(ship: NewShip) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ship.name,
            planet: ship.planet,
            ship_type: ship.ship_type.as_str().to_string(),
            prod_date: naive_from_millis(ship.prod_date)?,
            speed: ship.speed,
            crew_size: ship.crew_size,
            is_used: ship.is_used,
            rating: ship.rating,
        })
    }
}

impl TryFrom<&Ship> for NewShipRow {
    type Error = ShipError;

    fn try_from(ship: &Ship) -> Result<Self, Self::Error> {
        Ok(Self {
            name: ship.name.clone(),
            planet: ship.planet.clone(),
            ship_type: ship.ship_type.as_str().to_string(),
            prod_date: naive_from_millis(ship.prod_date)?,
            speed: ship.speed,
            crew_size: ship.crew_size,
            is_used: ship.is_used,
            rating: ship.rating,
        })
    }
}

/// Convert an epoch-millisecond instant to the zone-less column value.
pub fn naive_from_millis(millis: i64) -> Result<NaiveDateTime, ShipError> {
    DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.naive_utc())
        .ok_or_else(|| ShipError::Store(format!("timestamp out of range: {millis}")))
}

/// Read a zone-less column value back as epoch milliseconds.
pub fn millis_from_naive(naive: NaiveDateTime) -> i64 {
    naive.and_utc().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::{ShipRow, millis_from_naive, naive_from_millis};
    use spaceport_core::{Ship, ShipError, ShipType};

    #[test]
    fn millis_round_trip_through_the_column_type() {
        let millis = 32_503_680_000_000;
        let naive = naive_from_millis(millis).expect("in range");
        assert_eq!(millis_from_naive(naive), millis);
    }

    #[test]
    fn row_with_known_token_becomes_a_ship() {
        let row = ShipRow {
            id: 7,
            name: "Intrepid".to_string(),
            planet: "Earth".to_string(),
            ship_type: "MILITARY".to_string(),
            prod_date: naive_from_millis(32_503_680_000_000).expect("in range"),
            speed: 0.5,
            crew_size: 100,
            is_used: false,
            rating: 2.0,
        };
        let ship = Ship::try_from(row).expect("convert");
        assert_eq!(ship.ship_type, ShipType::Military);
        assert_eq!(ship.prod_date, 32_503_680_000_000);
    }

    #[test]
    fn row_with_unknown_token_is_a_store_error() {
        let row = ShipRow {
            id: 7,
            name: "Intrepid".to_string(),
            planet: "Earth".to_string(),
            ship_type: "YACHT".to_string(),
            prod_date: naive_from_millis(32_503_680_000_000).expect("in range"),
            speed: 0.5,
            crew_size: 100,
            is_used: false,
            rating: 2.0,
        };
        assert_eq!(
            Ship::try_from(row),
            Err(ShipError::Store(
                "unknown ship type token: YACHT".to_string()
            ))
        );
    }
}
