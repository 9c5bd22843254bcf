//! PostgreSQL-backed ship storage.

use chrono::{DateTime, NaiveDateTime};
use diesel::pg::{Pg, PgConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use spaceport_core::{
    NewShip, PageRequest, Result, Ship, ShipError, ShipFilter, ShipOrder, ShipRepository,
};

use crate::db::DbPool;
use crate::models::{NewShipRow, ShipRow};
use crate::schema::ships;

/// Ship repository backed by the shared PostgreSQL pool.
#[derive(Clone)]
pub struct PgShipStore {
    pool: DbPool,
}

impl PgShipStore {
    /// Build a store over the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<PooledConnection<ConnectionManager<PgConnection>>> {
        self.pool
            .get()
            .map_err(|err| ShipError::Store(format!("database connection unavailable: {err}")))
    }

    fn filtered(filter: &ShipFilter) -> ships::BoxedQuery<'static, Pg> {
        let mut query = ships::table.into_boxed();
        if let Some(name) = &filter.name {
            query = query.filter(ships::name.like(format!("%{name}%")));
        }
        if let Some(planet) = &filter.planet {
            query = query.filter(ships::planet.like(format!("%{planet}%")));
        }
        if let Some(ship_type) = filter.ship_type {
            query = query.filter(ships::ship_type.eq(ship_type.as_str()));
        }
        if let Some(after) = filter.after {
            query = query.filter(ships::prod_date.ge(bound_from_millis(after)));
        }
        if let Some(before) = filter.before {
            query = query.filter(ships::prod_date.le(bound_from_millis(before)));
        }
        if let Some(is_used) = filter.is_used {
            query = query.filter(ships::is_used.eq(is_used));
        }
        if let Some(min_speed) = filter.min_speed {
            query = query.filter(ships::speed.ge(min_speed));
        }
        if let Some(max_speed) = filter.max_speed {
            query = query.filter(ships::speed.le(max_speed));
        }
        if let Some(min_crew_size) = filter.min_crew_size {
            query = query.filter(ships::crew_size.ge(min_crew_size));
        }
        if let Some(max_crew_size) = filter.max_crew_size {
            query = query.filter(ships::crew_size.le(max_crew_size));
        }
        if let Some(min_rating) = filter.min_rating {
            query = query.filter(ships::rating.ge(min_rating));
        }
        if let Some(max_rating) = filter.max_rating {
            query = query.filter(ships::rating.le(max_rating));
        }
        query
    }
}

/// Bound value for the timestamp column.
///
/// Instants chrono cannot represent clamp to the column type's extremes, so
/// an absurd bound matches everything or nothing instead of failing.
fn bound_from_millis(millis: i64) -> NaiveDateTime {
    DateTime::from_timestamp_millis(millis)
        .map(|instant| instant.naive_utc())
        .unwrap_or(if millis < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}

impl ShipRepository for PgShipStore {
    fn find_by_id(&self, id: i64) -> Result<Option<Ship>> {
        let mut conn = self.conn()?;
        let row = ships::table
            .find(id)
            .first::<ShipRow>(&mut conn)
            .optional()
            .map_err(|err| ShipError::Store(err.to_string()))?;
        row.map(Ship::try_from).transpose()
    }

    fn find_page(&self, filter: &ShipFilter, page: &PageRequest) -> Result<Vec<Ship>> {
        let mut conn = self.conn()?;
        let query = Self::filtered(filter);
        let query = match page.order {
            ShipOrder::Id => query.order(ships::id.asc()),
            ShipOrder::Name => query.order(ships::name.asc()),
            ShipOrder::Speed => query.order(ships::speed.asc()),
            ShipOrder::Date => query.order(ships::prod_date.asc()),
            ShipOrder::CrewSize => query.order(ships::crew_size.asc()),
            ShipOrder::Rating => query.order(ships::rating.asc()),
        };
        let rows = query
            .limit(i64::from(page.size))
            .offset(i64::from(page.number) * i64::from(page.size))
            .load::<ShipRow>(&mut conn)
            .map_err(|err| ShipError::Store(err.to_string()))?;
        rows.into_iter().map(Ship::try_from).collect()
    }

    fn find_all(&self, filter: &ShipFilter) -> Result<Vec<Ship>> {
        let mut conn = self.conn()?;
        let rows = Self::filtered(filter)
            .load::<ShipRow>(&mut conn)
            .map_err(|err| ShipError::Store(err.to_string()))?;
        rows.into_iter().map(Ship::try_from).collect()
    }

    fn insert(&self, ship: NewShip) -> Result<Ship> {
        let mut conn = self.conn()?;
        let row = NewShipRow::try_from(ship)?;
        let stored = diesel::insert_into(ships::table)
            .values(&row)
            .get_result::<ShipRow>(&mut conn)
            .map_err(|err| ShipError::Store(err.to_string()))?;
        Ship::try_from(stored)
    }

    fn update(&self, ship: &Ship) -> Result<Ship> {
        let mut conn = self.conn()?;
        let row = NewShipRow::try_from(ship)?;
        let stored = diesel::update(ships::table.find(ship.id))
            .set(&row)
            .get_result::<ShipRow>(&mut conn)
            .optional()
            .map_err(|err| ShipError::Store(err.to_string()))?
            .ok_or(ShipError::NotFound)?;
        Ship::try_from(stored)
    }

    fn delete(&self, id: i64) -> Result<()> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(ships::table.find(id))
            .execute(&mut conn)
            .map_err(|err| ShipError::Store(err.to_string()))?;
        if deleted == 0 {
            return Err(ShipError::NotFound);
        }
        Ok(())
    }
}
